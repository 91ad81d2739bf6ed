//! Streaming decoder for back-to-back JSON order objects.
//!
//! The input is not one JSON document: it is any number of top-level values
//! written one after another, optionally separated by whitespace. Objects are
//! decoded into [`Record`](combo_core::Record)s; every other top-level value is
//! skipped.

pub mod cancel;
pub mod decoder;
pub mod top_level;

pub use cancel::CancelFlag;
pub use decoder::{DecodeStats, StreamDecoder};
pub use top_level::SkipReason;
