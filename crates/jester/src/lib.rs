//! Schema-less access to JSON documents.
//!
//! `jester` wraps a decoded JSON tree in a [`Data`] handle that can be
//! navigated by path, read through typed accessors and mutated in place,
//! without declaring record types for the document first.
//!
//! - [`Data::get`] walks a path of field names and indices. Misses yield a
//!   `null` handle instead of an error.
//! - [`Data::set`], [`Data::delete`] and [`Data::set_path`] mutate the tree.
//!   `set_path` creates missing intermediate objects and grows lists.
//! - Strict accessors ([`Data::int`], [`Data::string`], ...) return
//!   [`Error::TypeMismatch`] on the wrong kind; their `_or`/`_or_default`
//!   variants never fail.
//! - [`Data::len`] and [`Data::iter`] size and walk containers.
//! - [`codec`] turns bytes into a tree and back. Numbers stay in their
//!   original text until read, so large integers keep full precision.
//!
//! # Example
//!
//! ```
//! use jester::{codec, path};
//!
//! let mut doc = codec::from_str(r#"{"a":{"b":1},"tags":["x",null]}"#).unwrap();
//!
//! assert_eq!(doc.get(path!["a", "b"]).int().unwrap(), 1);
//! assert_eq!(doc.get(path!["a", "missing"]).int_or(7), 7);
//! assert_eq!(doc.get(["tags"]).string_array().unwrap(), ["x", ""]);
//!
//! doc.set_path(path!["c", "d"], "e");
//! doc.get(["a"]).set("b", 2);
//! doc.delete("tags");
//! assert_eq!(doc.to_string(), r#"{"a":{"b":2},"c":{"d":"e"}}"#);
//! ```
//!
//! Handles share container storage through `Rc`/`RefCell`, so they are
//! neither `Send` nor `Sync`. To hand a document to another thread, encode
//! it first.

pub mod codec;
mod coerce;
mod data;
pub mod error;
mod iter;
pub mod key;
mod navigate;
pub mod value;

pub use data::Data;
pub use error::{Error, Result};
pub use iter::Iter;
pub use key::Key;
pub use value::{Kind, List, Map, Object, Value};
