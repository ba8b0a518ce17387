use super::{
    Accessor, Constructor, Mapping, Marker, PropertyDescriptor, Reader, Source, TypeDescriptor,
    Writer,
};
use crate::context::{DecodeContext, EncodeContext};
use crate::error::{MappingError, Result};
use crate::field::{Document, FieldType};
use crate::shape::TypeShape;
use std::collections::HashMap;
use std::sync::Arc;

struct PendingProperty<T> {
    name: String,
    alias: Option<String>,
    marker: Option<Marker>,
    read: Option<(TypeShape, Reader<T>)>,
    write: Option<(TypeShape, Writer<T>)>,
}

/// Collects the registrations a [`Document`] makes in [`Document::describe`].
///
/// Registration calls never fail on their own. Problems are remembered and reported when the
/// descriptor is built, the first time the type is used.
pub struct DescriptorBuilder<T> {
    constructor: Option<Constructor<T>>,
    throw_on_unknown: bool,
    ignore_unknown: bool,
    type_params: Vec<(String, TypeShape)>,
    properties: Vec<PendingProperty<T>>,
    errors: Vec<String>,
}

fn resolve<V: FieldType>(source: Source<'_>, cx: &mut DecodeContext<'_>) -> Result<Option<V>> {
    match source {
        Source::Wire(value) => V::decode(value, cx).map(Some),
        Source::DocumentId(reference) => Ok(V::from_document_id(reference)),
    }
}

fn unbound_generic(class: &str) -> MappingError {
    MappingError::new(format!(
        "Class {class} has generic type parameters, please decode into a fully parameterized type or use Value instead"
    ))
}

impl<T: Document> DescriptorBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            constructor: None,
            throw_on_unknown: false,
            ignore_unknown: false,
            type_params: Vec::new(),
            properties: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Sets the factory used to create the instance that decoded properties are written into.
    ///
    /// Types without one can still be encoded, decoding them fails.
    pub fn constructor(&mut self, constructor: impl Fn() -> T + Send + Sync + 'static) -> &mut Self {
        self.constructor = Some(Box::new(constructor));
        self
    }

    pub fn default_constructor(&mut self) -> &mut Self
    where
        T: Default,
    {
        self.constructor(T::default)
    }

    /// Makes decoding fail when the wire value carries a field no property matches.
    pub fn throw_on_extra_properties(&mut self) -> &mut Self {
        self.throw_on_unknown = true;
        self
    }

    /// Silences the warning logged when the wire value carries a field no property matches.
    pub fn ignore_extra_properties(&mut self) -> &mut Self {
        self.ignore_unknown = true;
        self
    }

    /// Records the type a generic parameter of `T` is bound to.
    pub fn type_param<P: FieldType>(&mut self, name: &str) -> &mut Self {
        self.type_params.push((name.to_string(), P::shape()));
        self
    }

    /// Registers a member that is both read and written in place.
    pub fn field<V, G, M>(&mut self, name: &str, get: G, get_mut: M) -> PropertyBuilder<'_, T>
    where
        V: FieldType,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        let read: Reader<T> =
            Box::new(move |target: &T, cx: &mut EncodeContext<'_>| get(target).encode(cx));
        let write: Writer<T> = Box::new(
            move |target: &mut T, source: Source<'_>, cx: &mut DecodeContext<'_>| {
                if let Some(value) = resolve::<V>(source, cx)? {
                    *get_mut(target) = value;
                }
                Ok(())
            },
        );

        self.register(name, Some((V::shape(), read)), Some((V::shape(), write)))
    }

    /// Registers a computed, read-only property.
    pub fn getter<V, G>(&mut self, name: &str, get: G) -> PropertyBuilder<'_, T>
    where
        V: FieldType,
        G: Fn(&T) -> V + Send + Sync + 'static,
    {
        let read: Reader<T> =
            Box::new(move |target: &T, cx: &mut EncodeContext<'_>| get(target).encode(cx));

        self.register(name, Some((V::shape(), read)), None)
    }

    /// Registers a write-only property.
    ///
    /// A getter and a setter registered under the same name form one read/write property.
    pub fn setter<V, S>(&mut self, name: &str, set: S) -> PropertyBuilder<'_, T>
    where
        V: FieldType,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let write: Writer<T> = Box::new(
            move |target: &mut T, source: Source<'_>, cx: &mut DecodeContext<'_>| {
                if let Some(value) = resolve::<V>(source, cx)? {
                    set(target, value);
                }
                Ok(())
            },
        );

        self.register(name, None, Some((V::shape(), write)))
    }

    fn register(
        &mut self,
        name: &str,
        read: Option<(TypeShape, Reader<T>)>,
        write: Option<(TypeShape, Writer<T>)>,
    ) -> PropertyBuilder<'_, T> {
        let index = match self.properties.iter().position(|p| p.name == name) {
            Some(index) => {
                let existing = &self.properties[index];
                let duplicated = (read.is_some() && existing.read.is_some())
                    || (write.is_some() && existing.write.is_some());

                if duplicated {
                    self.errors.push(format!(
                        "Property '{name}' is registered more than once on class {}",
                        T::type_name()
                    ));
                }

                let existing = &mut self.properties[index];
                if read.is_some() {
                    existing.read = read;
                }
                if write.is_some() {
                    existing.write = write;
                }
                index
            }
            None => {
                self.properties.push(PendingProperty {
                    name: name.to_string(),
                    alias: None,
                    marker: None,
                    read,
                    write,
                });
                self.properties.len() - 1
            }
        };

        PropertyBuilder {
            builder: self,
            index,
        }
    }

    pub(crate) fn build(self) -> Result<Mapping<T>> {
        let class = T::type_name();

        if let Some(error) = self.errors.into_iter().next() {
            return Err(MappingError::new(error));
        }

        if self
            .type_params
            .iter()
            .any(|(_, shape)| shape.contains_unbound())
        {
            return Err(unbound_generic(&class));
        }

        if self.properties.is_empty() {
            return Err(MappingError::new(format!(
                "No properties to serialize found on class {class}"
            )));
        }

        let mut properties = Vec::with_capacity(self.properties.len());
        let mut accessors = Vec::with_capacity(self.properties.len());
        let mut by_wire_name = HashMap::new();
        let mut document_id = None;

        for pending in self.properties {
            let index = properties.len();
            let name = pending.name;

            let shape = match (&pending.read, &pending.write) {
                (Some((read, _)), Some((write, _))) if read != write => {
                    return Err(MappingError::new(format!(
                        "Getter and setter of property '{name}' on class {class} have conflicting types {read} and {write}"
                    )));
                }
                (Some((shape, _)), _) | (None, Some((shape, _))) => shape.clone(),
                (None, None) => continue,
            };

            if shape.contains_unbound() {
                return Err(unbound_generic(&class));
            }

            let readable = pending.read.is_some();
            let writable = pending.write.is_some();
            let wire_name = pending.alias.unwrap_or_else(|| name.clone());

            if by_wire_name.insert(wire_name.clone(), index).is_some() {
                return Err(MappingError::new(format!(
                    "Found conflicting properties with name '{wire_name}' on class {class}"
                )));
            }

            match pending.marker {
                Some(Marker::DocumentId) => {
                    if document_id.replace(index).is_some() {
                        return Err(MappingError::new(format!(
                            "Found more than one property marked as document id on class {class}"
                        )));
                    }
                    if !matches!(
                        shape.unwrap_optional(),
                        TypeShape::String | TypeShape::Reference
                    ) {
                        return Err(MappingError::new(format!(
                            "Property '{name}' on class {class} is marked as document id but is of type {shape} instead of String or DocumentReference"
                        )));
                    }
                    if !writable {
                        return Err(MappingError::new(format!(
                            "Property '{name}' on class {class} is marked as document id but can't be written"
                        )));
                    }
                }
                Some(Marker::ServerTimestamp) => {
                    if shape.unwrap_optional() != &TypeShape::Timestamp {
                        return Err(MappingError::new(format!(
                            "Property '{name}' on class {class} is marked as server timestamp but is of type {shape} instead of Timestamp or SystemTime"
                        )));
                    }
                    if !readable {
                        return Err(MappingError::new(format!(
                            "Property '{name}' on class {class} is marked as server timestamp but can't be read"
                        )));
                    }
                }
                None => {}
            }

            properties.push(PropertyDescriptor {
                name,
                wire_name,
                shape,
                readable,
                writable,
                marker: pending.marker,
            });
            accessors.push(Accessor {
                read: pending.read.map(|(_, read)| read),
                write: pending.write.map(|(_, write)| write),
            });
        }

        let descriptor = TypeDescriptor {
            name: class,
            properties,
            by_wire_name,
            document_id,
            throw_on_unknown: self.throw_on_unknown,
            ignore_unknown: self.ignore_unknown,
            has_constructor: self.constructor.is_some(),
            type_params: self.type_params,
        };

        Ok(Mapping {
            descriptor: Arc::new(descriptor),
            constructor: self.constructor,
            accessors,
        })
    }
}

/// Adjusts the property just registered.
pub struct PropertyBuilder<'b, T> {
    builder: &'b mut DescriptorBuilder<T>,
    index: usize,
}

impl<T: Document> PropertyBuilder<'_, T> {
    /// Uses `alias` as the wire name. The member name is no longer matched.
    pub fn rename(self, alias: &str) -> Self {
        let property = &mut self.builder.properties[self.index];

        match &property.alias {
            Some(existing) if existing != alias => {
                let error = format!(
                    "Property '{}' on class {} is renamed to both '{existing}' and '{alias}'",
                    property.name,
                    T::type_name()
                );
                self.builder.errors.push(error);
            }
            _ => property.alias = Some(alias.to_string()),
        }

        self
    }

    /// Fills the property from the identity of the decoded document.
    pub fn document_id(self) -> Self {
        self.mark(Marker::DocumentId)
    }

    /// Asks the server to store its own time in the property whenever the type is written.
    pub fn server_timestamp(self) -> Self {
        self.mark(Marker::ServerTimestamp)
    }

    fn mark(self, marker: Marker) -> Self {
        let property = &mut self.builder.properties[self.index];

        match property.marker {
            Some(existing) if existing != marker => {
                let error = format!(
                    "Property '{}' on class {} can't be both a document id and a server timestamp",
                    property.name,
                    T::type_name()
                );
                self.builder.errors.push(error);
            }
            _ => property.marker = Some(marker),
        }

        self
    }
}
