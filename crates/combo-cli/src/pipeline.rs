//! Ingest-and-rank driver.

use crate::source::Source;
use anyhow::anyhow;
use combo_core::{ComboConfig, ComboError, Result, StreamDecodeError};
use combo_rank::{top_n, FrequencyTable, RankedResult, TopN};
use combo_stream::{CancelFlag, DecodeStats, StreamDecoder};
use std::io::Read;
use std::time::Duration;

/// Feed every record from `decoder` into `table`.
///
/// On failure the table keeps the counts of every record decoded before it.
pub fn ingest<R: Read>(
    decoder: &mut StreamDecoder<R>,
    table: &mut FrequencyTable,
) -> std::result::Result<(), StreamDecodeError> {
    for record in decoder {
        table.insert_or_increment(record?);
    }
    Ok(())
}

/// Counts gathered by one pass, plus the error that ended it early, if any.
#[derive(Debug)]
pub struct IngestReport {
    pub table: FrequencyTable,
    pub stats: DecodeStats,
    pub error: Option<StreamDecodeError>,
}

impl IngestReport {
    fn failed(error: StreamDecodeError) -> Self {
        Self {
            table: FrequencyTable::new(),
            stats: DecodeStats::default(),
            error: Some(error),
        }
    }

    /// True when the whole stream was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn rank(&self, n: TopN) -> RankedResult {
        top_n(&self.table, n)
    }
}

fn ingest_blocking<R, F>(open: F, cancel: CancelFlag) -> IngestReport
where
    R: Read,
    F: FnOnce() -> std::result::Result<R, StreamDecodeError>,
{
    let reader = match open() {
        Ok(reader) => reader,
        Err(err) => return IngestReport::failed(err),
    };
    let mut decoder = StreamDecoder::new(reader).with_cancel(cancel);
    let mut table = FrequencyTable::new();
    let error = ingest(&mut decoder, &mut table).err();
    IngestReport {
        table,
        stats: decoder.stats(),
        error,
    }
}

/// Run one decode pass on a blocking worker, optionally bounded by `timeout`.
///
/// When the deadline passes the pass is cancelled at the next value boundary
/// and the report carries the prefix counts with [`StreamDecodeError::Cancelled`].
pub async fn ingest_with_timeout<R, F>(open: F, timeout: Option<Duration>) -> Result<IngestReport>
where
    R: Read + 'static,
    F: FnOnce() -> std::result::Result<R, StreamDecodeError> + Send + 'static,
{
    let cancel = CancelFlag::new();
    let worker_cancel = cancel.clone();
    let mut worker = tokio::task::spawn_blocking(move || ingest_blocking(open, worker_cancel));

    let joined = match timeout {
        None => worker.await,
        Some(limit) => match tokio::time::timeout(limit, &mut worker).await {
            Ok(joined) => joined,
            Err(_) => {
                tracing::warn!(?limit, "ingest timed out, cancelling");
                cancel.cancel();
                worker.await
            }
        },
    };
    joined.map_err(|e| ComboError::Other(anyhow!("ingest worker failed: {e}")))
}

/// Result of a full run: the ranking and the report it was computed from.
#[derive(Debug)]
pub struct RunOutcome {
    pub ranking: RankedResult,
    pub report: IngestReport,
}

/// A configured ingest-and-rank run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub source: Source,
    pub top_n: TopN,
    pub timeout: Option<Duration>,
}

impl Pipeline {
    pub fn new(source: Source, top_n: TopN) -> Self {
        Self {
            source,
            top_n,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates `config` before anything is opened.
    pub fn from_config(config: &ComboConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source: Source::parse(&config.source),
            top_n: TopN::try_from(config.top_n)?,
            timeout: config.timeout(),
        })
    }

    /// Read the whole source, then rank. A failed pass still ranks the prefix
    /// it read; check [`IngestReport::error`].
    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!(source = %self.source, top_n = self.top_n.get(), "starting run");
        let source = self.source.clone();
        let timeout = self.timeout;
        let report = ingest_with_timeout(move || source.open(timeout), timeout).await?;
        let ranking = report.rank(self.top_n);

        match &report.error {
            None => tracing::info!(
                records = report.stats.records,
                distinct = report.table.len(),
                skipped = report.stats.skipped + report.stats.malformed,
                "run complete"
            ),
            Some(err) => tracing::warn!(
                error = %err,
                records = report.stats.records,
                distinct = report.table.len(),
                "run ended early, ranking covers a prefix of the stream"
            ),
        }
        Ok(RunOutcome { ranking, report })
    }
}
