//! # Type Descriptors
//!
//! A [`TypeDescriptor`] is the cached description of how a [`Document`] type maps to wire
//! fields. Descriptors are built once per type from the registrations made in
//! [`Document::describe`] and validated at that point, so conversions never re-check them.
//!
//! Next to the public descriptor lives the internal `Mapping`, which owns the accessor closures
//! used to read and write the properties of actual values.
use crate::context::{DecodeContext, EncodeContext};
use crate::error::Result;
use crate::field::Document;
use crate::path::PathSegment;
use crate::shape::TypeShape;
use crate::value::{DocumentReference, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

mod builder;

pub use builder::{DescriptorBuilder, PropertyBuilder};

/// Special handling attached to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Filled from the identity of the decoded document, never written to the wire.
    DocumentId,
    /// Encoded as a request for the server to store its own time.
    ServerTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    wire_name: String,
    shape: TypeShape,
    readable: bool,
    writable: bool,
    marker: Option<Marker>,
}

impl PropertyDescriptor {
    /// The member name the property was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field name used on the wire.
    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    pub fn is_readable(&self) -> bool {
        self.readable
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    properties: Vec<PropertyDescriptor>,
    by_wire_name: HashMap<String, usize>,
    document_id: Option<usize>,
    throw_on_unknown: bool,
    ignore_unknown: bool,
    has_constructor: bool,
    type_params: Vec<(String, TypeShape)>,
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in registration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Looks a property up by its exact wire name.
    pub fn property(&self, wire_name: &str) -> Option<&PropertyDescriptor> {
        self.position(wire_name).map(|index| &self.properties[index])
    }

    pub fn document_id_property(&self) -> Option<&PropertyDescriptor> {
        self.document_id.map(|index| &self.properties[index])
    }

    pub fn throws_on_unknown_properties(&self) -> bool {
        self.throw_on_unknown
    }

    pub fn ignores_unknown_properties(&self) -> bool {
        self.ignore_unknown
    }

    pub fn has_constructor(&self) -> bool {
        self.has_constructor
    }

    /// The generic parameters the type registered, with the types they are bound to.
    pub fn type_params(&self) -> &[(String, TypeShape)] {
        &self.type_params
    }

    fn position(&self, wire_name: &str) -> Option<usize> {
        self.by_wire_name.get(wire_name).copied()
    }

    fn has_case_insensitive_match(&self, wire_name: &str) -> bool {
        let lowered = wire_name.to_lowercase();
        self.properties
            .iter()
            .any(|property| {
                property.wire_name != wire_name && property.wire_name.to_lowercase() == lowered
            })
    }
}

/// Where a property write takes its value from.
pub(crate) enum Source<'v> {
    Wire(&'v Value),
    DocumentId(&'v DocumentReference),
}

pub(crate) type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;
pub(crate) type Reader<T> = Box<dyn Fn(&T, &mut EncodeContext<'_>) -> Result<Value> + Send + Sync>;
pub(crate) type Writer<T> =
    Box<dyn Fn(&mut T, Source<'_>, &mut DecodeContext<'_>) -> Result<()> + Send + Sync>;

pub(crate) struct Accessor<T> {
    read: Option<Reader<T>>,
    write: Option<Writer<T>>,
}

/// A descriptor together with the closures that access the properties it describes.
pub(crate) struct Mapping<T> {
    descriptor: Arc<TypeDescriptor>,
    constructor: Option<Constructor<T>>,
    accessors: Vec<Accessor<T>>,
}

impl<T: Document> Mapping<T> {
    pub(crate) fn build() -> Result<Self> {
        let mut builder = DescriptorBuilder::new();
        T::describe(&mut builder);
        builder.build()
    }
}

impl<T> Mapping<T> {
    pub(crate) fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    pub(crate) fn decode(
        &self,
        fields: &BTreeMap<String, Value>,
        cx: &mut DecodeContext<'_>,
    ) -> Result<T> {
        let descriptor = &self.descriptor;

        let constructor = self.constructor.as_ref().ok_or_else(|| {
            cx.error(format!(
                "Class {} does not define a no-argument constructor",
                descriptor.name
            ))
        })?;
        let mut instance = constructor();

        let document_id = descriptor.document_id_property().map(|p| p.wire_name.as_str());

        for (key, value) in fields {
            if document_id == Some(key.as_str()) {
                let origin = match cx.document() {
                    Some(document) => format!("from document {}", document.path()),
                    None => "in the document data".to_string(),
                };
                return Err(cx.error(format!(
                    "'{key}' was found {origin}, cannot apply document id marker on this property for class {}",
                    descriptor.name
                )));
            }

            let write = descriptor
                .position(key)
                .and_then(|index| self.accessors[index].write.as_ref());

            match write {
                Some(write) => cx.descend(PathSegment::Field(key.clone()), |cx| {
                    write(&mut instance, Source::Wire(value), cx)
                })?,
                None => self.unknown_property(key, cx)?,
            }
        }

        if let (Some(index), Some(document)) = (descriptor.document_id, cx.document()) {
            if let Some(write) = &self.accessors[index].write {
                write(&mut instance, Source::DocumentId(document), cx)?;
            }
        }

        Ok(instance)
    }

    fn unknown_property(&self, key: &str, cx: &DecodeContext<'_>) -> Result<()> {
        let descriptor = &self.descriptor;

        let mut message = format!("No setter/field for {key} found on class {}", descriptor.name);
        if descriptor.has_case_insensitive_match(key) {
            message.push_str(" (fields/setters are case sensitive!)");
        }

        if descriptor.throw_on_unknown {
            return Err(cx.error(message));
        }

        if !descriptor.ignore_unknown && cx.options().warn_on_unknown_properties {
            tracing::warn!(
                class = %descriptor.name,
                property = %key,
                path = %cx.path(),
                "{message}"
            );
        }

        Ok(())
    }

    pub(crate) fn encode(&self, instance: &T, cx: &mut EncodeContext<'_>) -> Result<Value> {
        let mut fields = BTreeMap::new();

        for (property, accessor) in self.descriptor.properties.iter().zip(&self.accessors) {
            let Some(read) = &accessor.read else {
                continue;
            };
            let segment = PathSegment::Field(property.wire_name.clone());

            match property.marker {
                Some(Marker::DocumentId) => {}
                Some(Marker::ServerTimestamp) => {
                    cx.descend(segment, |cx| cx.server_timestamp())?;
                }
                None => {
                    let value = cx.descend(segment, |cx| read(instance, cx))?;
                    fields.insert(property.wire_name.clone(), value);
                }
            }
        }

        Ok(Value::Map(fields))
    }
}
