//! Recursive visitor over [`Value`] trees.

use crate::value::Value;

/// Calls `callback` on `value` and then on every nested value.
///
/// The root is visited first, then array elements in order and object member
/// values in insertion order. Scalars have no children.
pub fn walk<F>(value: &Value, callback: &mut F)
where
    F: FnMut(&Value),
{
    callback(value);
    match value {
        Value::Object(members) => {
            for member in members.values() {
                walk(member, callback);
            }
        }
        Value::Array(elements) => {
            for element in elements {
                walk(element, callback);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Null => {}
    }
}
