use combo_cli::{ingest, ingest_with_timeout, Pipeline, Source};
use combo_core::{Record, StreamDecodeError};
use combo_rank::{top_n, FrequencyTable, TopN};
use combo_stream::StreamDecoder;
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

/// Serves `data`, then fails every read.
struct FailingReader {
    data: Vec<u8>,
    pos: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Never ends; one order per read, with a delay.
struct SlowReader;

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        thread::sleep(Duration::from_millis(10));
        let order = br#"{"toppings":["slow"]}"#;
        let n = order.len().min(buf.len());
        buf[..n].copy_from_slice(&order[..n]);
        Ok(n)
    }
}

#[test]
fn test_io_failure_keeps_prefix_counts() {
    let reader = FailingReader {
        data: br#"{"toppings":["a"]} {"toppings":["A"]} {"toppings":["b"]} "#.to_vec(),
        pos: 0,
    };
    let mut decoder = StreamDecoder::new(reader);
    let mut table = FrequencyTable::new();
    let err = ingest(&mut decoder, &mut table).unwrap_err();

    assert!(matches!(err, StreamDecodeError::Io(_)));
    assert_eq!(table.total(), 3);
    assert_eq!(table.count_of("A"), 2);
    assert_eq!(table.count_of("B"), 1);
    assert_eq!(decoder.stats().records, 3);
}

#[test]
fn test_syntax_failure_keeps_prefix_counts() {
    let mut decoder = StreamDecoder::new(r#"{"toppings":["a"]} {"toppings": oops}"#.as_bytes());
    let mut table = FrequencyTable::new();
    assert!(matches!(
        ingest(&mut decoder, &mut table),
        Err(StreamDecodeError::Syntax { .. })
    ));
    assert_eq!(table.total(), 1);
}

#[tokio::test]
async fn test_pipeline_runs_file_source() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"{{"toppings":["Mushroom","Onion"]}}{{"toppings":["onion","mushroom"]}}{{"toppings":["Mushroom"]}}"#
    )
    .unwrap();

    let pipeline = Pipeline::new(Source::File(f.path().to_path_buf()), TopN::new(2));
    let outcome = pipeline.run().await.unwrap();

    assert!(outcome.report.is_complete());
    assert_eq!(outcome.report.stats.records, 3);
    let ranked: Vec<(String, u64)> = outcome
        .ranking
        .iter()
        .map(|e| (e.key.to_string(), e.count))
        .collect();
    assert_eq!(
        ranked,
        vec![("MUSHROOM,ONION".into(), 2), ("MUSHROOM".into(), 1)]
    );
    assert_eq!(outcome.ranking.as_slice()[0].representative, Record::new(["Mushroom", "Onion"]));
}

#[tokio::test]
async fn test_pipeline_missing_file_reports_error() {
    let pipeline = Pipeline::new(Source::File("/nonexistent/orders.json".into()), TopN::default());
    let outcome = pipeline.run().await.unwrap();
    assert!(matches!(outcome.report.error, Some(StreamDecodeError::Io(_))));
    assert!(outcome.ranking.is_empty());
}

#[tokio::test]
async fn test_timeout_cancels_with_partial_counts() {
    let report = ingest_with_timeout(|| Ok(SlowReader), Some(Duration::from_millis(150)))
        .await
        .unwrap();

    assert!(matches!(report.error, Some(StreamDecodeError::Cancelled)));
    assert!(report.stats.records > 0);
    assert_eq!(report.table.total(), report.stats.records);
    assert_eq!(report.table.len(), 1);
    assert_eq!(top_n(&report.table, TopN::new(5)).len(), 1);
}

#[tokio::test]
async fn test_no_timeout_runs_to_end() {
    let report = ingest_with_timeout(
        || Ok(io::Cursor::new(br#"{"toppings":["x"]} [] {"toppings":["x"]}"#.to_vec())),
        None,
    )
    .await
    .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.table.count_of("X"), 2);
    assert_eq!(report.stats.skipped, 1);
}
