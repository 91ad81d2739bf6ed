//! Exact frequency counting of canonical item lists and top-N ranking.

pub mod ranker;
pub mod table;

pub use ranker::{top_n, RankedEntry, RankedResult, TopN};
pub use table::{FrequencyEntry, FrequencyTable};
