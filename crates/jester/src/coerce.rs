//! Typed views of a [`Data`] handle.
//!
//! Every target has a strict accessor returning [`Result`] and two defaulting
//! variants: `*_or(default)` and `*_or_default()`. Strict accessors fail only
//! with [`Error::TypeMismatch`].
//!
//! Numeric targets accept any [`Value::Number`]. The deferred text is parsed
//! as the requested type first; when that fails the other integer type is
//! tried and its bit pattern reinterpreted, and last the number is read as a
//! float and truncated toward zero (saturating at the target's bounds).

use serde_json::Number;

use crate::value::{List, Object, Value};
use crate::{Data, Error, Result};

fn number_as_i64(n: &Number) -> Option<i64> {
    n.as_i64()
        .or_else(|| n.as_u64().map(|u| u as i64))
        .or_else(|| n.as_f64().map(|f| f as i64))
}

fn number_as_u64(n: &Number) -> Option<u64> {
    n.as_u64()
        .or_else(|| n.as_i64().map(|i| i as u64))
        .or_else(|| n.as_f64().map(|f| f as u64))
}

impl Data {
    /// The value as a boolean.
    pub fn bool(&self) -> Result<bool> {
        match &self.data {
            Value::Bool(b) => Ok(*b),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The value as an owned string.
    pub fn string(&self) -> Result<String> {
        match &self.data {
            Value::String(s) => Ok(s.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The value as a byte string. Only explicitly built bytes qualify;
    /// JSON text never decodes to bytes.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        match &self.data {
            Value::Bytes(b) => Ok(b.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// Platform-width integer; [`Data::int64`] narrowed with `as`.
    pub fn int(&self) -> Result<isize> {
        self.int64().map(|i| i as isize)
    }

    /// The number as a signed 64-bit integer.
    pub fn int64(&self) -> Result<i64> {
        match &self.data {
            Value::Number(n) => number_as_i64(n).ok_or(Error::TypeMismatch),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The number as an unsigned 64-bit integer.
    pub fn uint64(&self) -> Result<u64> {
        match &self.data {
            Value::Number(n) => number_as_u64(n).ok_or(Error::TypeMismatch),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The number as a 64-bit float.
    pub fn float64(&self) -> Result<f64> {
        match &self.data {
            Value::Number(n) => n.as_f64().ok_or(Error::TypeMismatch),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The list's elements as strings.
    ///
    /// All or nothing: `null` elements become `""`, and any other non-string
    /// element fails the whole conversion.
    ///
    /// ```
    /// use jester::codec;
    ///
    /// let doc = codec::from_str(r#"{"ok":["a",null,"c"],"bad":["a",1]}"#).unwrap();
    /// assert_eq!(doc.get(["ok"]).string_array().unwrap(), ["a", "", "c"]);
    /// assert!(doc.get(["bad"]).string_array().is_err());
    /// ```
    pub fn string_array(&self) -> Result<Vec<String>> {
        let list = self.array()?;
        let items = list.borrow();
        let strings: Result<Vec<String>> = items
            .iter()
            .map(|item| match item {
                Value::Null => Ok(String::new()),
                Value::String(s) => Ok(s.clone()),
                _ => Err(Error::TypeMismatch),
            })
            .collect();
        strings
    }

    /// The list storage itself, shared with this handle.
    pub fn array(&self) -> Result<List> {
        match &self.data {
            Value::Array(list) => Ok(list.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// The object storage itself, shared with this handle.
    pub fn object(&self) -> Result<Object> {
        match &self.data {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }
}

macro_rules! defaulting {
    ($($strict:ident => $or:ident, $or_default:ident: $ty:ty;)+) => {
        impl Data {
            $(
                #[doc = concat!("[`Data::", stringify!($strict), "`], or `default` when that fails.")]
                pub fn $or(&self, default: $ty) -> $ty {
                    self.$strict().unwrap_or(default)
                }

                #[doc = concat!("[`Data::", stringify!($strict), "`], or the zero value when that fails.")]
                pub fn $or_default(&self) -> $ty {
                    self.$strict().unwrap_or_default()
                }
            )+
        }
    };
}

defaulting! {
    bool => bool_or, bool_or_default: bool;
    string => string_or, string_or_default: String;
    bytes => bytes_or, bytes_or_default: Vec<u8>;
    int => int_or, int_or_default: isize;
    int64 => int64_or, int64_or_default: i64;
    uint64 => uint64_or, uint64_or_default: u64;
    float64 => float64_or, float64_or_default: f64;
    string_array => string_array_or, string_array_or_default: Vec<String>;
    array => array_or, array_or_default: List;
    object => object_or, object_or_default: Object;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec, path};

    fn sample() -> Data {
        codec::from_str(
            r#"{
                "int": 10,
                "neg": -7,
                "float": 5.150,
                "big": 18446744073709551615,
                "huge": 123456789012345678901234567890,
                "string": "simplejson",
                "bool": true,
                "null": null,
                "strings": ["asdf", "ghjk"],
                "mixed": [1, "2", 3],
                "obj": {"a": 1}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_scalars() {
        let d = sample();
        assert_eq!(d.get(["int"]).int().unwrap(), 10);
        assert_eq!(d.get(["float"]).float64().unwrap(), 5.15);
        assert_eq!(d.get(["string"]).string().unwrap(), "simplejson");
        assert!(d.get(["bool"]).bool().unwrap());
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        let d = sample();
        assert_eq!(d.get(["float"]).int64().unwrap(), 5);
        assert_eq!(Data::new(-2.9).int64().unwrap(), -2);
        assert_eq!(Data::new(2.9).uint64().unwrap(), 2);
    }

    #[test]
    fn test_integer_precision_is_kept() {
        let d = sample();
        assert_eq!(d.get(["big"]).uint64().unwrap(), u64::MAX);
        assert_eq!(d.get(["big"]).int64().unwrap(), -1);
        assert_eq!(d.get(["neg"]).uint64().unwrap(), (-7i64) as u64);
        assert!(d.get(["huge"]).float64().unwrap() > 1.0e29);
    }

    #[test]
    fn test_int_matches_int64_narrowed() {
        let d = sample();
        for key in ["int", "neg", "float", "big"] {
            let v = d.get([key]);
            assert_eq!(v.int().unwrap(), v.int64().unwrap() as isize);
        }
    }

    #[test]
    fn test_kind_mismatches() {
        let d = sample();
        assert!(d.get(["string"]).int().unwrap_err().is_type_mismatch());
        assert!(d.get(["int"]).string().is_err());
        assert!(d.get(["int"]).bool().is_err());
        assert!(d.get(["null"]).float64().is_err());
        assert!(d.get(["string"]).bytes().is_err());
        assert!(d.get(["obj"]).array().is_err());
        assert!(d.get(["strings"]).object().is_err());
    }

    #[test]
    fn test_bytes_only_from_construction() {
        assert_eq!(Data::new(Value::bytes(*b"abc")).bytes().unwrap(), b"abc");
        assert!(Data::new("abc").bytes().is_err());
    }

    #[test]
    fn test_string_array_all_or_nothing() {
        let d = sample();
        assert_eq!(d.get(["strings"]).string_array().unwrap(), ["asdf", "ghjk"]);
        assert!(d.get(["mixed"]).string_array().is_err());
        assert!(d.get(["string"]).string_array().is_err());
    }

    #[test]
    fn test_defaults() {
        let d = sample();
        assert_eq!(d.get(["int"]).int_or(5150), 10);
        assert_eq!(d.get(["missing"]).int_or(5150), 5150);
        assert_eq!(d.get(["missing"]).int_or_default(), 0);
        assert_eq!(d.get(["missing"]).string_or("fyea".into()), "fyea");
        assert_eq!(d.get(["missing"]).string_or_default(), "");
        assert!(!d.get(["missing"]).bool_or_default());
        assert!(d.get(["missing"]).bool_or(true));
        assert_eq!(d.get(["missing"]).float64_or(99.0), 99.0);
        assert_eq!(d.get(["missing"]).uint64_or_default(), 0);
        assert!(d.get(["missing"]).bytes_or_default().is_empty());
        assert_eq!(
            d.get(["mixed"]).string_array_or(vec!["1".into()]),
            ["1"]
        );
        assert!(d.get(["missing"]).array_or_default().borrow().is_empty());
        assert!(d.get(["missing"]).object_or_default().borrow().is_empty());
    }

    #[test]
    fn test_array_and_object_share_storage() {
        let d = sample();
        d.get(["obj"]).object().unwrap().borrow_mut().insert("b".into(), Value::from(2));
        assert_eq!(d.get(path!["obj", "b"]).int().unwrap(), 2);
        d.get(["strings"]).array().unwrap().borrow_mut().push(Value::from("zxcv"));
        assert_eq!(d.get(["strings"]).string_array().unwrap().len(), 3);
    }
}
