//! Core types for combo-counter: order records, canonical keys, errors and
//! configuration shared by the decoder, the ranker and the CLI.

pub mod canonical;
pub mod config;
pub mod error;
pub mod record;

pub use canonical::{canonicalize, CanonicalKey, DELIMITER};
pub use config::{ComboConfig, OutputFormat};
pub use error::{ComboError, Result, StreamDecodeError};
pub use record::Record;
