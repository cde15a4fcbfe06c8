//! The typed JSON value tree and lookup over it.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Number;

/// An immutable JSON value, normalized from a decoded host tree.
///
/// The type is a closed sum with exactly five cases; consumers match all five.
/// Object members keep their insertion order, which makes the [`fmt::Debug`]
/// form deterministic, while object equality ignores member order entirely.
/// Two values are equal only when their variants match and their payloads are
/// recursively equal; there is no cross-variant coercion, so `Number(0)` is
/// never equal to `Null`.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// String-keyed members. Keys are unique by construction.
    Object(IndexMap<String, Value>),
    /// Ordered elements. Order is significant and preserved.
    Array(Vec<Value>),
    /// A text scalar.
    String(String),
    /// A numeric scalar, exactly as the host decoder supplied it.
    Number(Number),
    /// The absence-of-value marker.
    #[default]
    Null,
}

impl Value {
    /// Looks up `key` in an object.
    ///
    /// Returns `Some` only when `self` is an [`Value::Object`] containing
    /// `key`. Indexing any other variant is not an error; it yields nothing.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Looks up a path of keys, one [`Value::get`] per segment.
    ///
    /// Short-circuits to `None` on the first absent segment, including when
    /// an intermediate value is not an object. The empty path returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_tree::parse;
    /// use serde_json::json;
    ///
    /// let doc = parse(json!({"user": {"name": "Ada"}}));
    /// assert!(doc.find(&["user", "name"]).is_some());
    /// assert!(doc.find(&["user", "email"]).is_none());
    /// ```
    pub fn find<K: AsRef<str>>(&self, path: &[K]) -> Option<&Value> {
        path.iter()
            .try_fold(self, |value, key| value.get(key.as_ref()))
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the members if this is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }
}

/// Diagnostic rendering: the variant name around the payload's own rendering,
/// `String(Ada)`, `Number(7)`, `Null`. Not JSON text and not round-trippable.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(members) => write!(f, "Object({members:?})"),
            Value::Array(elements) => write!(f, "Array({elements:?})"),
            Value::String(text) => write!(f, "String({text})"),
            Value::Number(number) => write!(f, "Number({number})"),
            Value::Null => f.write_str("Null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(members: Vec<(&str, Value)>) -> Value {
        Value::Object(
            members
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }

    #[test]
    fn get_hits_object_members_only() {
        let doc = object(vec![("name", Value::String("Ada".to_owned()))]);
        assert_eq!(doc.get("name"), Some(&Value::String("Ada".to_owned())));
        assert_eq!(doc.get("email"), None);
    }

    #[test]
    fn get_on_every_non_object_variant_is_absent() {
        let non_objects = [
            Value::Array(vec![Value::Null]),
            Value::String("name".to_owned()),
            Value::Number(Number::from(0)),
            Value::Null,
        ];
        for value in &non_objects {
            assert_eq!(value.get("name"), None);
        }
    }

    #[test]
    fn find_with_empty_path_is_identity() {
        let doc = object(vec![("a", Value::Null)]);
        assert_eq!(doc.find::<&str>(&[]), Some(&doc));
    }

    #[test]
    fn find_short_circuits_on_first_absent_segment() {
        let doc = object(vec![(
            "a",
            object(vec![("b", Value::Number(Number::from(1)))]),
        )]);
        assert_eq!(doc.find(&["a", "b"]), Some(&Value::Number(Number::from(1))));
        assert_eq!(doc.find(&["a", "c"]), None);
        assert_eq!(doc.find(&["a", "b", "deeper"]), None);
    }

    #[test]
    fn object_equality_ignores_member_order() {
        let forward = object(vec![
            ("a", Value::Number(Number::from(1))),
            ("b", Value::Number(Number::from(2))),
        ]);
        let backward = object(vec![
            ("b", Value::Number(Number::from(2))),
            ("a", Value::Number(Number::from(1))),
        ]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn array_equality_is_order_sensitive() {
        let one_two = Value::Array(vec![
            Value::Number(Number::from(1)),
            Value::Number(Number::from(2)),
        ]);
        let two_one = Value::Array(vec![
            Value::Number(Number::from(2)),
            Value::Number(Number::from(1)),
        ]);
        assert_ne!(one_two, two_one);
    }

    #[test]
    fn variants_never_compare_equal_across_tags() {
        assert_ne!(Value::Number(Number::from(0)), Value::Null);
        assert_ne!(Value::String("1".to_owned()), Value::Number(Number::from(1)));
        assert_ne!(Value::Array(vec![]), Value::Object(IndexMap::new()));
    }

    #[test]
    fn debug_names_the_variant_around_the_payload() {
        assert_eq!(format!("{:?}", Value::Null), "Null");
        assert_eq!(
            format!("{:?}", Value::String("Ada".to_owned())),
            "String(Ada)"
        );
        assert_eq!(format!("{:?}", Value::Number(Number::from(7))), "Number(7)");
        let tags = Value::Array(vec![
            Value::String("x".to_owned()),
            Value::String("y".to_owned()),
        ]);
        assert_eq!(format!("{tags:?}"), "Array([String(x), String(y)])");
        let doc = object(vec![("name", Value::String("Ada".to_owned()))]);
        assert_eq!(format!("{doc:?}"), r#"Object({"name": String(Ada)})"#);
    }

    #[test]
    fn debug_follows_insertion_order() {
        let doc = object(vec![
            ("b", Value::Number(Number::from(1))),
            ("a", Value::Number(Number::from(2))),
        ]);
        assert_eq!(format!("{doc:?}"), r#"Object({"b": Number(1), "a": Number(2)})"#);
    }
}
