//! combo: rank the most frequently ordered item combinations.
//!
//! Wires a byte source into the stream decoder, counts canonical keys in a
//! frequency table and renders the top-N ranking.

pub mod app;
pub mod cli;
pub mod pipeline;
pub mod render;
pub mod source;

pub use app::{execute, Status};
pub use cli::Cli;
pub use pipeline::{ingest, ingest_with_timeout, IngestReport, Pipeline, RunOutcome};
pub use render::render;
pub use source::Source;
