//! Classification of a single top-level JSON value.
//!
//! Values arrive as [`RawValue`]s, which serde_json only scans lexically, so
//! a number outside `f64` range is still just a number to skip. Only objects
//! are parsed further.

use combo_core::Record;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

/// Why a top-level value produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Null,
    Bool,
    Number,
    String,
    Array,
    /// An object whose `toppings` is neither `null` nor an array of strings.
    MalformedItems,
}

#[derive(Debug)]
pub(crate) enum TopLevel {
    Order(Record),
    Skipped(SkipReason),
}

impl TopLevel {
    pub(crate) fn classify(raw: &RawValue) -> Self {
        let text = raw.get().trim_start();
        let reason = match text.as_bytes().first() {
            Some(b'{') => {
                // The text is already valid JSON; a failure here is a value-level
                // problem such as an out-of-range number inside `toppings`.
                return match serde_json::from_str::<OrderObject>(text) {
                    Ok(OrderObject(Some(record))) => TopLevel::Order(record),
                    Ok(OrderObject(None)) | Err(_) => TopLevel::Skipped(SkipReason::MalformedItems),
                };
            }
            Some(b'[') => SkipReason::Array,
            Some(b'"') => SkipReason::String,
            Some(b't' | b'f') => SkipReason::Bool,
            Some(b'n') => SkipReason::Null,
            _ => SkipReason::Number,
        };
        TopLevel::Skipped(reason)
    }
}

/// A top-level object; `None` when its `toppings` field is malformed.
struct OrderObject(Option<Record>);

impl<'de> Deserialize<'de> for OrderObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderVisitor)
    }
}

struct OrderVisitor;

impl<'de> Visitor<'de> for OrderVisitor {
    type Value = OrderObject;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an order object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OrderObject, A::Error> {
        let mut toppings = Toppings::Absent;
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                // Last occurrence wins.
                Field::Toppings => toppings = Toppings::from(map.next_value::<Value>()?),
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(OrderObject(match toppings {
            Toppings::Absent => Some(Record::absent()),
            Toppings::Items(items) => Some(Record { items: Some(items) }),
            Toppings::Malformed => None,
        }))
    }
}

enum Toppings {
    Absent,
    Items(Vec<String>),
    Malformed,
}

impl From<Value> for Toppings {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Toppings::Absent,
            Value::Array(values) => values
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(Toppings::Malformed, Toppings::Items),
            _ => Toppings::Malformed,
        }
    }
}

/// Object keys: only `toppings` is recognized.
enum Field {
    Toppings,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object key")
            }

            fn visit_str<E: de::Error>(self, key: &str) -> Result<Field, E> {
                Ok(if key == "toppings" { Field::Toppings } else { Field::Other })
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}
