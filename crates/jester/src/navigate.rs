//! Path reads and writes on [`Data`].
//!
//! None of these operations fail. Reads that miss yield a `Null` handle and
//! writes that cannot land are silent no-ops, so calls chain without
//! per-step checks.

use crate::key::Key;
use crate::value::Value;
use crate::Data;

impl Data {
    /// Walks `path` from this handle and returns a handle to what it finds.
    ///
    /// Any miss (absent field, out-of-range index, wrong container kind)
    /// stops the walk and returns a `Null` handle. An empty path returns a
    /// clone of this handle.
    ///
    /// ```
    /// use jester::{codec, path};
    ///
    /// let doc = codec::from_str(r#"{"users":[{"name":"Amy"},{"name":"Bob"}]}"#).unwrap();
    /// assert_eq!(doc.get(path!["users", 1, "name"]).string().unwrap(), "Bob");
    /// assert!(doc.get(path!["users", 5, "name"]).is_null());
    /// ```
    pub fn get<P>(&self, path: P) -> Data
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let mut current = self.data.clone();
        for key in path {
            current = lookup(&current, &key.into());
            if current.is_null() {
                break;
            }
        }
        Data::new(current)
    }

    /// Inserts `key -> value` if this handle holds an object.
    ///
    /// On any other kind this does nothing. Check [`Data::kind`] first if the
    /// write must land.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        if let Value::Object(map) = &self.data {
            map.borrow_mut().insert(key.into(), value);
        }
    }

    /// Removes `key` if this handle holds an object; no-op otherwise.
    pub fn delete(&self, key: &str) {
        if let Value::Object(map) = &self.data {
            map.borrow_mut().shift_remove(key);
        }
    }

    /// Writes `value` at `path`, creating missing containers on the way.
    ///
    /// - An empty path replaces the whole value held by this handle.
    /// - A missing or null intermediate becomes `{}`. An index under a list
    ///   grows the list with `null` padding first; an index under an object
    ///   is used as its decimal string.
    /// - A scalar in the way is overwritten with `{}`, whatever the kind of
    ///   the key that reached it.
    /// - The last key is assigned directly: a field via [`Data::set`], an
    ///   index into a list (grown as needed), or an index as a string field.
    ///
    /// If the walk reaches a container that cannot take the key (a field
    /// name under a list, a negative index under a list, or an index too
    /// large to allocate), nothing is written.
    ///
    /// ```
    /// use jester::{path, Data};
    ///
    /// let mut doc = Data::empty();
    /// doc.set_path(path!["x", "y"], "z");
    /// assert_eq!(doc.to_string(), r#"{"x":{"y":"z"}}"#);
    /// ```
    pub fn set_path<P>(&mut self, path: P, value: impl Into<Value>)
    where
        P: IntoIterator,
        P::Item: Into<Key>,
    {
        let path: Vec<Key> = path.into_iter().map(Into::into).collect();
        let value = value.into();

        let Some((last, branch)) = path.split_last() else {
            self.data = value;
            return;
        };

        let mut current = self.data.clone();
        for key in branch {
            match descend(&current, key) {
                Some(next) => current = next,
                None => return,
            }
        }
        assign(&current, last, value);
    }
}

fn lookup(current: &Value, key: &Key) -> Value {
    match current {
        Value::Object(map) => map
            .borrow()
            .get(&*key.as_field())
            .cloned()
            .unwrap_or_default(),
        Value::Array(list) => key
            .as_index()
            .and_then(|idx| list.borrow().get(idx).cloned())
            .unwrap_or_default(),
        _ => Value::Null,
    }
}

/// Returns the container stored under `key`, installing `{}` when the slot
/// is missing, null or a scalar.
fn descend(current: &Value, key: &Key) -> Option<Value> {
    match current {
        Value::Object(map) => {
            let mut map = map.borrow_mut();
            let slot = map.entry(key.as_field().into_owned()).or_default();
            if !slot.is_container() {
                *slot = Value::object();
            }
            Some(slot.clone())
        }
        Value::Array(list) => {
            let idx = key.as_index()?;
            let mut list = list.borrow_mut();
            if !grow(&mut list, idx) {
                return None;
            }
            let slot = &mut list[idx];
            if !slot.is_container() {
                *slot = Value::object();
            }
            Some(slot.clone())
        }
        _ => None,
    }
}

fn assign(current: &Value, key: &Key, value: Value) {
    match current {
        Value::Object(map) => {
            map.borrow_mut().insert(key.as_field().into_owned(), value);
        }
        Value::Array(list) => {
            if let Some(idx) = key.as_index() {
                let mut list = list.borrow_mut();
                if grow(&mut list, idx) {
                    list[idx] = value;
                }
            }
        }
        _ => {}
    }
}

/// Pads `list` with nulls until `idx` is in bounds. Returns `false`, leaving
/// the list untouched, when the storage cannot be allocated.
fn grow(list: &mut Vec<Value>, idx: usize) -> bool {
    if list.len() > idx {
        return true;
    }
    let Some(wanted) = idx.checked_add(1) else {
        return false;
    };
    if list.try_reserve(wanted - list.len()).is_err() {
        return false;
    }
    list.resize(wanted, Value::Null);
    true
}
