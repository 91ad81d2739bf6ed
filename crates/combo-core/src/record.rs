//! A single decoded order.

use crate::canonical::{canonicalize, CanonicalKey};
use serde::{Deserialize, Serialize};

/// One order read from the stream. `items` holds the `toppings` array exactly
/// as received; `None` when the field was missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "toppings", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl Record {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: Some(items.into_iter().map(Into::into).collect()),
        }
    }

    /// A record without a `toppings` field.
    pub fn absent() -> Self {
        Self { items: None }
    }

    /// Items as a slice; empty when absent.
    pub fn items(&self) -> &[String] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        canonicalize(self.items.as_deref())
    }
}
