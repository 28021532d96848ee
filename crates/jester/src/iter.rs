//! Size and element iteration.

use std::iter::FusedIterator;

use crate::value::{List, Value};
use crate::Data;

/// One-shot iterator over the elements of a list, yielding a handle per
/// element.
///
/// The length is fixed when the iterator is created: elements appended
/// afterwards are not visited, so iteration always ends. Elements are read
/// from the shared storage as the iterator advances, and a list that shrinks
/// ends it early. Once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct Iter {
    list: Option<List>,
    pos: usize,
    end: usize,
}

impl Iterator for Iter {
    type Item = Data;

    fn next(&mut self) -> Option<Data> {
        let list = self.list.as_ref()?;
        let item = if self.pos < self.end {
            list.borrow().get(self.pos).cloned()
        } else {
            None
        };
        match item {
            Some(value) => {
                self.pos += 1;
                Some(Data::new(value))
            }
            None => {
                self.list = None;
                None
            }
        }
    }
}

impl FusedIterator for Iter {}

impl Data {
    /// Number of entries: keys of an object, elements of a list, characters
    /// of a string, bytes of a byte string. Zero for everything else.
    ///
    /// ```
    /// use jester::codec;
    ///
    /// assert_eq!(codec::from_str(r#"{"a":1,"b":2,"c":3}"#).unwrap().len(), 3);
    /// assert_eq!(codec::from_str("[1,2,3,4,5]").unwrap().len(), 5);
    /// assert_eq!(codec::from_str("true").unwrap().len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        match &self.data {
            Value::Object(map) => map.borrow().len(),
            Value::Array(list) => list.borrow().len(),
            Value::String(s) => s.chars().count(),
            Value::Bytes(b) => b.len(),
            Value::Null | Value::Bool(_) | Value::Number(_) => 0,
        }
    }

    /// Whether [`Data::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh iterator over a list's elements, in order.
    ///
    /// Any other kind yields nothing.
    pub fn iter(&self) -> Iter {
        let (list, end) = match &self.data {
            Value::Array(list) => (Some(list.clone()), list.borrow().len()),
            _ => (None, 0),
        };
        Iter { list, pos: 0, end }
    }
}

impl IntoIterator for &Data {
    type Item = Data;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
