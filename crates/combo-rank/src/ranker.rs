//! Top-N selection over a frequency table.

use crate::table::{FrequencyEntry, FrequencyTable};
use combo_core::{CanonicalKey, ComboError, Record};
use serde::Serialize;
use std::cmp::Reverse;

/// Number of entries to rank. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopN(usize);

impl TopN {
    pub const DEFAULT: TopN = TopN(20);

    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for TopN {
    type Error = ComboError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map(TopN)
            .map_err(|_| ComboError::InvalidArgument(format!("top-N must be non-negative, got {n}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    pub key: CanonicalKey,
    pub representative: Record,
    pub count: u64,
}

/// Entries ordered by count descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }
}

impl IntoIterator for RankedResult {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The `n` most frequent entries, count descending.
///
/// Equal counts keep the order in which their keys were first inserted into
/// the table, so the same input always ranks the same way. Fewer than `n`
/// distinct keys yields all of them.
pub fn top_n(table: &FrequencyTable, n: TopN) -> RankedResult {
    let n = n.get();
    if n == 0 || table.is_empty() {
        return RankedResult::default();
    }

    // (count desc, insertion asc) is a total order, so unstable selection is deterministic.
    let mut order: Vec<(usize, &FrequencyEntry)> = table.iter().enumerate().collect();
    let rank_key = |&(slot, entry): &(usize, &FrequencyEntry)| (Reverse(entry.count()), slot);
    if n < order.len() {
        order.select_nth_unstable_by_key(n - 1, rank_key);
        order.truncate(n);
    }
    order.sort_unstable_by_key(rank_key);

    let entries: Vec<RankedEntry> = order
        .into_iter()
        .enumerate()
        .map(|(i, (_, entry))| RankedEntry {
            rank: i + 1,
            key: entry.key().clone(),
            representative: entry.representative().clone(),
            count: entry.count(),
        })
        .collect();
    tracing::debug!(requested = n, distinct = table.len(), returned = entries.len(), "ranked");
    RankedResult { entries }
}
