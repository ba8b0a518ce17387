//! # Docmap
//!
//! `docmap` converts between plain Rust types and the structured values stored by a managed
//! document database. It sits between application code and the transport layer: it consumes
//! and produces [`Value`] trees (or their protobuf wire form) and never talks to the network
//! itself.
//!
//! ## Key Components
//!
//! * **[`Mapper`]:** The main entry point. It decodes field maps into typed values, encodes
//!   typed values back, and owns the cache of type descriptors.
//! * **[`Document`]:** Implemented by user types to register their properties through a
//!   [`DescriptorBuilder`]: wire names, read/write access, document id and server timestamp
//!   markers, and the policy for unknown fields.
//! * **[`FieldType`]:** Implemented by every type that can be a property value. Scalars,
//!   `Option`, lists and string-keyed maps are covered out of the box, and [`string_enum!`]
//!   covers unit enums.
//!
//! ## Conversion rules
//!
//! Numbers are coerced between wire integers and doubles within range, truncating fractions
//! into integer properties. Narrow integers, `char`, fixed-size arrays and sets are refused in
//! both directions. Every failure is a [`MappingError`] whose message names the class, the rule
//! and the dotted path of the field (e.g. `found in field 'second.values[1]'`).
//!
//! ## Feature Flags (Internal use only)
//!
//! * `gen-proto`: Enables the binary that regenerates the committed wire types.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost`, `prost-types` and `bigdecimal` to ensure that consumers use
//! compatible versions of the types that appear in its API.
mod cache;
mod coerce;
mod context;
mod descriptor;
mod error;
mod field;
mod macros;
mod mapper;
mod options;
mod path;
pub mod proto;
mod shape;
mod transform;
mod value;

pub use cache::DescriptorCache;
pub use context::{DecodeContext, EncodeContext};
pub use descriptor::{
    DescriptorBuilder, Marker, PropertyBuilder, PropertyDescriptor, TypeDescriptor,
};
pub use error::{MappingError, Result};
pub use field::{Document, FieldType, Unbound};
pub use mapper::Mapper;
pub use options::{DEFAULT_MAX_DEPTH, MapperOptions};
pub use path::{FieldPath, PathSegment};
pub use shape::TypeShape;
pub use transform::{DocumentData, FieldTransform, TransformKind};
pub use value::{Blob, DocumentReference, GeoPoint, Value, fields_from_proto};

// Re-exports
pub use bigdecimal;
pub use prost;
pub use prost_types;
