//! # dynjson
//!
//! A dynamically-typed JSON codec: parse JSON text into a [`JsonValue`]
//! tree, manipulate it without a schema or a statically-typed target model,
//! and serialize it back to compact JSON text.
//!
//! The value model is one variant type that behaves as an **ordered map**
//! (objects preserve insertion order and are addressable both by key and by
//! position), an **indexable sequence** (arrays), or a scalar/string
//! payload. A fresh value has no shape and takes one on its first structural
//! mutation.
//!
//! ## Architecture
//!
//! - [`value`] - The [`JsonValue`] model: kinds, promotion, dual map/list
//!   addressing, typed scalar getters/setters with textual coercion
//! - [`parser`] - Tokenizer and recursive-descent parser with
//!   position-carrying errors
//! - [`writer`] - Serializer emitting compact JSON, escaping rules matching
//!   the parser
//!
//! ## Example
//!
//! ```
//! use dynjson::{parse, stringify, JsonValue};
//!
//! let mut doc = parse(r#"{"name":"Ada","tags":["a","b"]}"#).unwrap();
//! doc.insert("age", 36i64).unwrap();
//! doc.get_mut("tags").unwrap().push("c").unwrap();
//!
//! assert_eq!(
//!     stringify(&doc),
//!     r#"{"name":"Ada","tags":["a","b","c"],"age":36}"#
//! );
//!
//! // Objects are order-addressable too: position 0 is the first insertion.
//! assert_eq!(doc.get_index(0).unwrap(), &JsonValue::from("Ada"));
//! ```

pub mod parser;
pub mod value;
pub mod writer;

// Re-export commonly used items
pub use indexmap::IndexMap;
pub use parser::{parse, ParseError};
pub use value::{JsonKind, JsonValue, Scalar, ValueError};
pub use writer::{stringify, stringify_with, WriteOptions};
