//! RFC 6901 style pointer strings for [`json_tree::Value`] trees.
//!
//! A pointer is either empty (addressing the whole document) or a
//! `/`-separated list of object keys with the `~0`/`~1` escapes. Resolution
//! walks object members only; an absent member is a normal outcome, not an
//! error. The only error is a malformed pointer string.

use json_tree::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must be empty or start with '/'")]
    NotAbsolute,
}

/// Undoes the RFC 6901 escapes in one pointer token.
pub fn unescape_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_owned();
    }
    token.replace("~1", "/").replace("~0", "~")
}

/// Applies the RFC 6901 escapes to one pointer token.
pub fn escape_token(token: &str) -> String {
    if !token.contains('~') && !token.contains('/') {
        return token.to_owned();
    }
    token.replace('~', "~0").replace('/', "~1")
}

/// Splits a pointer string into unescaped tokens.
///
/// `""` addresses the whole document and yields no tokens; `"/"` yields a
/// single empty token, the member named `""`.
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(PointerError::NotAbsolute);
    };
    Ok(rest.split('/').map(unescape_token).collect())
}

/// Joins tokens back into a pointer string, escaping each one.
pub fn format_pointer(tokens: &[String]) -> String {
    let mut pointer = String::new();
    for token in tokens {
        pointer.push('/');
        pointer.push_str(&escape_token(token));
    }
    pointer
}

/// Resolves `pointer` against `value`.
///
/// Absence of any addressed member, or an intermediate value that is not an
/// object, is reported as `Ok(None)`.
///
/// # Examples
///
/// ```
/// use json_tree::parse;
/// use serde_json::json;
///
/// let doc = parse(json!({"user": {"name": "Ada"}}));
/// assert!(json_tree_pointer::get(&doc, "/user/name").unwrap().is_some());
/// assert!(json_tree_pointer::get(&doc, "/user/email").unwrap().is_none());
/// ```
pub fn get<'a>(value: &'a Value, pointer: &str) -> Result<Option<&'a Value>, PointerError> {
    let tokens = parse_pointer(pointer)?;
    Ok(value.find(&tokens))
}
