//! Path keys.

use std::borrow::Cow;
use std::fmt;

/// One step of a path: an object field or a list index.
///
/// Objects are never indexed numerically; an [`Key::Index`] applied to an
/// object is looked up as its decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Index(i64),
}

impl Key {
    /// The field name this key addresses in an object.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) => Cow::Borrowed(s),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The list position this key addresses, if it can address one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => usize::try_from(*i).ok(),
            Key::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

macro_rules! from_index {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(i: $ty) -> Self {
                    Key::Index(i64::from(i))
                }
            }
        )*
    };
}

from_index!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Key {
    fn from(i: isize) -> Self {
        Key::Index(i as i64)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

/// Builds a `Vec<Key>` from a mix of field names and indices.
///
/// ```
/// use jester::{path, Key};
///
/// let p = path!["users", 1, "name"];
/// assert_eq!(p, vec![Key::from("users"), Key::Index(1), Key::from("name")]);
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::Key>::new()
    };
    ($($key:expr),+ $(,)?) => {
        ::std::vec![$($crate::Key::from($key)),+]
    };
}
