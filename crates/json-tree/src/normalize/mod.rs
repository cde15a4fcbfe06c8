//! Normalization of decoded host values into [`Value`] trees.
//!
//! `serde_json` produces the untyped tree; this module only reshapes it. The
//! conversion is total: every input yields a [`Value`], and the one fallback
//! for shapes the model does not represent lives in the single `match` below.

use serde_json::Value as Raw;

use crate::value::Value;

/// Normalizes a decoded host value into a [`Value`] tree.
///
/// Arrays normalize elementwise in order; objects member-wise in the host
/// map's iteration order, which with `preserve_order` is the decoded document
/// order. Strings and numbers move their payload across unchanged. Everything
/// else, including explicit null and booleans (the model has no boolean
/// variant and performs no numeric coercion), becomes [`Value::Null`].
///
/// The input is consumed; the result shares no storage with it.
pub fn parse(raw: Raw) -> Value {
    match raw {
        Raw::Array(elements) => Value::Array(elements.into_iter().map(parse).collect()),
        Raw::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(key, member)| (key, parse(member)))
                .collect(),
        ),
        Raw::String(text) => Value::String(text),
        Raw::Number(number) => Value::Number(number),
        _ => Value::Null,
    }
}

impl From<Raw> for Value {
    fn from(raw: Raw) -> Self {
        parse(raw)
    }
}
