//! json-tree: an immutable, strongly-typed JSON value tree.
//!
//! `serde_json` owns the text grammar and decodes into its untyped
//! [`serde_json::Value`]; this crate normalizes that tree into the closed
//! [`Value`] model and layers key and path lookup on top of it. Normalization
//! is total: shapes the model does not represent collapse to [`Value::Null`]
//! instead of erroring.
//!
//! ```
//! use json_tree::{parse, Value};
//! use serde_json::json;
//!
//! let doc = parse(json!({"name": "Ada", "tags": ["x", "y"], "meta": null}));
//! assert_eq!(doc.find(&["name"]), Some(&Value::String("Ada".to_owned())));
//! assert_eq!(format!("{:?}", doc.find(&["meta"]).unwrap()), "Null");
//! ```

pub mod normalize;
pub mod value;
pub mod walk;

pub use normalize::parse;
pub use value::Value;
pub use walk::walk;
