//! JSON text in and out of a [`Data`] tree.
//!
//! A thin layer over `serde_json`. Numbers are decoded in deferred form, so
//! integers wider than an `f64` mantissa survive a decode/encode cycle.
//!
//! Decoding reads the first document of the input and ignores whatever
//! follows it, so a stream of concatenated or newline-delimited documents
//! yields its first entry without waiting for the stream to end.

use std::io;

use serde::Deserialize;
use serde_json::de::{IoRead, Read, SliceRead, StrRead};
use serde_json::Deserializer;

use crate::{Data, Result};

fn first_document<'de, R: Read<'de>>(read: R) -> Result<Data> {
    let mut de = Deserializer::new(read);
    Ok(Data::deserialize(&mut de)?)
}

/// Decodes the first document in `bytes`.
pub fn from_slice(bytes: &[u8]) -> Result<Data> {
    first_document(SliceRead::new(bytes))
}

/// Decodes the first document in `s`.
pub fn from_str(s: &str) -> Result<Data> {
    first_document(StrRead::new(s))
}

/// Decodes the first document from `reader`, leaving the rest unread.
///
/// An empty stream is an end-of-file error.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Data> {
    first_document(IoRead::new(reader))
}

/// Encodes `data` as compact JSON bytes.
pub fn to_vec(data: &Data) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(data)?)
}

/// Encodes `data` as compact JSON text.
pub fn to_string(data: &Data) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

/// Encodes `data` as indented JSON text.
pub fn to_string_pretty(data: &Data) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Writes `data` to `writer` as compact JSON.
pub fn to_writer<W: io::Write>(writer: W, data: &Data) -> Result<()> {
    Ok(serde_json::to_writer(writer, data)?)
}
