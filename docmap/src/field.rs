//! # Field Types
//!
//! [`FieldType`] is implemented by every Rust type that can appear as a property value. It
//! knows its declared [`TypeShape`] and how to convert itself from and to a [`Value`].
//!
//! User defined structs implement [`Document`] instead and get [`FieldType`] for free: their
//! values go through the cached descriptor of the type.
//!
//! Some types are implemented only to be rejected with a helpful message (narrow integers,
//! `char`, fixed-size arrays and sets), so that the failure names the offending field instead of
//! surfacing as a trait bound error far from the model.
use crate::context::{DecodeContext, EncodeContext};
use crate::descriptor::DescriptorBuilder;
use crate::error::Result;
use crate::shape::{TypeShape, short_type_name};
use crate::value::{DocumentReference, Value};

mod container;
mod scalar;

pub use scalar::Unbound;

pub trait FieldType: Sized + 'static {
    /// The declared type, as recorded in descriptors and error messages.
    fn shape() -> TypeShape;

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self>;

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value>;

    /// Builds a value out of the identity of the document being decoded.
    ///
    /// Only types that can hold a document id return `Some`.
    fn from_document_id(_reference: &DocumentReference) -> Option<Self> {
        None
    }
}

/// A user type mapped property by property.
///
/// ```
/// use docmap::{DescriptorBuilder, Document, Mapper};
///
/// #[derive(Default)]
/// struct City {
///     name: String,
///     population: i64,
/// }
///
/// impl Document for City {
///     fn describe(builder: &mut DescriptorBuilder<Self>) {
///         builder.default_constructor();
///         builder.field("name", |c| &c.name, |c| &mut c.name);
///         builder
///             .field("population", |c| &c.population, |c| &mut c.population)
///             .rename("pop");
///     }
/// }
///
/// let mapper = Mapper::new();
/// let encoded = mapper.encode(&City { name: "Oslo".into(), population: 700_000 }).unwrap();
///
/// assert_eq!(
///     encoded.to_json(),
///     serde_json::json!({ "name": "Oslo", "pop": 700_000 })
/// );
/// ```
pub trait Document: Sized + 'static {
    /// Registers the properties of the type.
    fn describe(builder: &mut DescriptorBuilder<Self>);

    /// The name used for the type in descriptors and error messages.
    fn type_name() -> String {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T: Document> FieldType for T {
    fn shape() -> TypeShape {
        TypeShape::Document(T::type_name())
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::Map(fields) => cx.cache().mapping::<T>()?.decode(fields, cx),
            other => Err(cx.error(format!(
                "Can't convert object of type {} to type {}",
                other.type_name(),
                T::type_name()
            ))),
        }
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        cx.cache().mapping::<T>()?.encode(self, cx)
    }
}
