//! Lazy, single-pass decoding of concatenated JSON values.

use crate::cancel::CancelFlag;
use crate::top_level::{SkipReason, TopLevel};
use combo_core::{Record, StreamDecodeError};
use serde_json::de::IoRead;
use serde_json::value::RawValue;
use serde_json::{Deserializer, StreamDeserializer};
use std::io::{BufReader, Read};
use std::iter::FusedIterator;

/// Counters describing one pass over the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Records yielded.
    pub records: u64,
    /// Top-level values that were not objects.
    pub skipped: u64,
    /// Objects dropped because `toppings` had the wrong shape.
    pub malformed: u64,
    /// Bytes consumed up to the end of the last complete value.
    pub bytes: usize,
}

impl DecodeStats {
    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MalformedItems => self.malformed += 1,
            _ => self.skipped += 1,
        }
    }
}

/// Iterator over the records of a concatenated-JSON byte stream.
///
/// Yields `Ok(record)` for every top-level object. The first I/O failure,
/// syntax error, truncated value or cancellation is yielded once as `Err`,
/// after which the iterator is exhausted.
pub struct StreamDecoder<R: Read> {
    values: StreamDeserializer<'static, IoRead<BufReader<R>>, Box<RawValue>>,
    stats: DecodeStats,
    cancel: Option<CancelFlag>,
    finished: bool,
}

impl<R: Read> StreamDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            values: Deserializer::from_reader(BufReader::new(reader)).into_iter(),
            stats: DecodeStats::default(),
            cancel: None,
            finished: false,
        }
    }

    /// Stop at the next value boundary once `flag` is raised.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// True once the end of the stream or an error has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }

    fn fail(&mut self, err: StreamDecodeError) -> Option<Result<Record, StreamDecodeError>> {
        self.finished = true;
        tracing::warn!(error = %err, records = self.stats.records, "stream decode stopped");
        Some(Err(err))
    }
}

impl<R: Read> Iterator for StreamDecoder<R> {
    type Item = Result<Record, StreamDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if self.cancelled() {
                return self.fail(StreamDecodeError::Cancelled);
            }
            let value = self.values.next();
            self.stats.bytes = self.values.byte_offset();
            match value {
                None => {
                    self.finished = true;
                    tracing::debug!(stats = ?self.stats, "end of stream");
                }
                Some(Ok(raw)) => match TopLevel::classify(&raw) {
                    TopLevel::Order(record) => {
                        self.stats.records += 1;
                        return Some(Ok(record));
                    }
                    TopLevel::Skipped(reason) => {
                        self.stats.record_skip(reason);
                        tracing::debug!(?reason, offset = self.stats.bytes, "skipping top-level value");
                    }
                },
                Some(Err(err)) => return self.fail(StreamDecodeError::from_json(err)),
            }
        }
        None
    }
}

impl<R: Read> FusedIterator for StreamDecoder<R> {}
