//! Order-independent identity for an item list.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between normalized items. Items containing it are not escaped.
pub const DELIMITER: char = ',';

/// Upper-cased, byte-order sorted, comma-joined item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized items in key order. The empty key has no parts.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        let key = self.0.as_str();
        key.split(DELIMITER).filter(move |_| !key.is_empty())
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Derived `Hash` on the single field matches `str`'s hash, so map lookups by `&str` work.
impl Borrow<str> for CanonicalKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize an item list. Absent is the empty list; duplicates are kept.
pub fn canonicalize<S: AsRef<str>>(items: Option<&[S]>) -> CanonicalKey {
    let items = items.unwrap_or_default();
    let mut upper: Vec<String> = items.iter().map(|s| upper_simple(s.as_ref())).collect();
    // Ordinal order: `str`'s `Ord` compares bytes.
    upper.sort_unstable();

    let mut key = String::with_capacity(upper.iter().map(|s| s.len() + 1).sum());
    for (i, item) in upper.iter().enumerate() {
        if i > 0 {
            key.push(DELIMITER);
        }
        key.push_str(item);
    }
    CanonicalKey(key)
}

/// Per-char uppercase that never changes the char count: a char whose
/// uppercase form is more than one char (`ß`, `ﬁ`) is kept as is.
fn upper_simple(item: &str) -> String {
    item.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
