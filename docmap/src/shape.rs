//! # Declared Types
//!
//! A [`TypeShape`] is the declared type of a property, generic arguments included. It is what
//! descriptors record and what error messages name.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Boolean,
    Int8,
    Int16,
    UInt8,
    UInt16,
    Char,
    Int32,
    Int64,
    Float,
    Double,
    Decimal,
    String,
    Bytes,
    Timestamp,
    GeoPoint,
    Reference,
    /// The universal form, decoded as a [`crate::Value`].
    Any,
    Optional(Box<TypeShape>),
    List(Box<TypeShape>),
    Set(Box<TypeShape>),
    Array(Box<TypeShape>, usize),
    Map(Box<TypeShape>, Box<TypeShape>),
    Document(String),
    Enum(String),
    /// A generic parameter left without a concrete type.
    Unbound,
}

impl TypeShape {
    /// Strips one level of `Optional`.
    pub fn unwrap_optional(&self) -> &TypeShape {
        match self {
            TypeShape::Optional(inner) => inner,
            other => other,
        }
    }

    pub fn contains_unbound(&self) -> bool {
        match self {
            TypeShape::Unbound => true,
            TypeShape::Optional(inner)
            | TypeShape::List(inner)
            | TypeShape::Set(inner)
            | TypeShape::Array(inner, _) => inner.contains_unbound(),
            TypeShape::Map(key, value) => key.contains_unbound() || value.contains_unbound(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Boolean => f.write_str("bool"),
            TypeShape::Int8 => f.write_str("i8"),
            TypeShape::Int16 => f.write_str("i16"),
            TypeShape::UInt8 => f.write_str("u8"),
            TypeShape::UInt16 => f.write_str("u16"),
            TypeShape::Char => f.write_str("char"),
            TypeShape::Int32 => f.write_str("i32"),
            TypeShape::Int64 => f.write_str("i64"),
            TypeShape::Float => f.write_str("f32"),
            TypeShape::Double => f.write_str("f64"),
            TypeShape::Decimal => f.write_str("BigDecimal"),
            TypeShape::String => f.write_str("String"),
            TypeShape::Bytes => f.write_str("Blob"),
            TypeShape::Timestamp => f.write_str("Timestamp"),
            TypeShape::GeoPoint => f.write_str("GeoPoint"),
            TypeShape::Reference => f.write_str("DocumentReference"),
            TypeShape::Any => f.write_str("Value"),
            TypeShape::Optional(inner) => write!(f, "Option<{inner}>"),
            TypeShape::List(inner) => write!(f, "Vec<{inner}>"),
            TypeShape::Set(inner) => write!(f, "Set<{inner}>"),
            TypeShape::Array(inner, len) => write!(f, "[{inner}; {len}]"),
            TypeShape::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            TypeShape::Document(name) | TypeShape::Enum(name) => f.write_str(name),
            TypeShape::Unbound => f.write_str("Unbound"),
        }
    }
}

/// Strips module paths from every path inside a `std::any::type_name` string.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            out.push_str(last_segment(&token));
            token.clear();
            out.push(c);
        }
    }
    out.push_str(last_segment(&token));

    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
