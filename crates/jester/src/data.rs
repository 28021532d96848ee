//! The [`Data`] handle and its conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Kind, Value};
use crate::Error;

/// A handle onto a [`Value`].
///
/// Handles returned by navigation share container storage with the tree
/// they came from, so writes through either side are visible to both.
/// The tree is freed when the last handle referencing it is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data {
    pub(crate) data: Value,
}

impl Data {
    /// Wraps `raw` without copying its containers.
    pub fn new(raw: impl Into<Value>) -> Self {
        Data { data: raw.into() }
    }

    /// A handle around a fresh, empty object.
    pub fn empty() -> Self {
        Data::new(Value::object())
    }

    /// The underlying value, as-is.
    pub fn raw(&self) -> &Value {
        &self.data
    }

    /// Unwraps the handle into its underlying value.
    pub fn into_raw(self) -> Value {
        self.data
    }

    /// The kind of the wrapped value.
    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    /// Whether the handle wraps `Null`, e.g. after a missed [`Data::get`].
    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

impl From<Value> for Data {
    fn from(data: Value) -> Self {
        Data { data }
    }
}

impl From<Data> for Value {
    fn from(d: Data) -> Self {
        d.data
    }
}

impl Serialize for Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Data {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Data::from)
    }
}

/// Compact JSON.
impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

impl FromStr for Data {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_object() {
        let d = Data::empty();
        assert_eq!(d.kind(), Kind::Object);
        assert!(!d.is_null());
        assert!(Data::default().is_null());
    }

    #[test]
    fn test_new_does_not_copy() {
        let raw = Value::array();
        let d = Data::new(raw.clone());
        assert!(d.raw().ptr_eq(&raw));
    }

    #[test]
    fn test_display_and_parse() {
        let d: Data = r#"{"a":[1,"b",null]}"#.parse().unwrap();
        assert_eq!(d.to_string(), r#"{"a":[1,"b",null]}"#);
    }

    #[test]
    fn test_parse_error_is_passed_through() {
        let err = "{".parse::<Data>().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
