//! # Structured Values
//!
//! [`Value`] is the in-memory form of one wire value. The decoder consumes it and the encoder
//! produces it. Conversions to and from the protobuf wire messages live in `value::proto`,
//! and a JSON bridge used for fixtures and diagnostics lives in `value::json`.
use prost_types::Timestamp;
use std::collections::BTreeMap;

mod json;
mod proto;

pub use proto::fields_from_proto;
pub(crate) use proto::fields_into_proto;

/// A tagged union of every value kind the database stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Bytes(Blob),
    Timestamp(Timestamp),
    GeoPoint(GeoPoint),
    Reference(DocumentReference),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Name of the variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Double(_) => "Double",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Timestamp(_) => "Timestamp",
            Value::GeoPoint(_) => "GeoPoint",
            Value::Reference(_) => "Reference",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Map(fields)
    }
}

/// A latitude/longitude pair, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An opaque byte string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A reference to a document, held as its full resource name
/// (`projects/{p}/databases/{d}/documents/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentReference {
    name: String,
}

impl DocumentReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The full resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last segment of the document path.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// The path of the document relative to the database root (e.g. `users/alice`).
    ///
    /// Names that don't contain a `documents/` segment are returned unchanged.
    pub fn path(&self) -> &str {
        match self.name.find("/documents/") {
            Some(position) => &self.name[position + "/documents/".len()..],
            None => self.name.strip_prefix("documents/").unwrap_or(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_reference_parts() {
        let reference =
            DocumentReference::new("projects/p/databases/(default)/documents/users/alice");

        assert_eq!(reference.id(), "alice");
        assert_eq!(reference.path(), "users/alice");
    }

    #[test]
    fn test_document_reference_without_database_prefix() {
        let reference = DocumentReference::new("rooms/blue");

        assert_eq!(reference.id(), "blue");
        assert_eq!(reference.path(), "rooms/blue");
    }
}
