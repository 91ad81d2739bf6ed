//! Canonical key -> (first record seen, occurrence count).

use combo_core::{CanonicalKey, Record};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    key: CanonicalKey,
    representative: Record,
    count: u64,
}

impl FrequencyEntry {
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// The first record observed with this key.
    pub fn representative(&self) -> &Record {
        &self.representative
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Exact occurrence counts per canonical key.
///
/// Entries are kept in first-insertion order; memory grows with the number of
/// distinct keys, not with the number of records seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<CanonicalKey, usize>,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `record` under its canonical key and return the updated count.
    /// The first record for a key becomes its representative; later ones are dropped.
    pub fn insert_or_increment(&mut self, record: Record) -> u64 {
        let key = record.canonical_key();
        if let Some(&slot) = self.index.get(&key) {
            let entry = &mut self.entries[slot];
            entry.count += 1;
            return entry.count;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(FrequencyEntry {
            key,
            representative: record,
            count: 1,
        });
        1
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, key: &str) -> Option<&FrequencyEntry> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn count_of(&self, key: &str) -> u64 {
        self.get(key).map_or(0, FrequencyEntry::count)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }
}

impl Extend<Record> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.insert_or_increment(record);
        }
    }
}

impl FromIterator<Record> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut table = Self::new();
        table.extend(records);
        table
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
