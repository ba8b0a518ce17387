//! # Mapper
//!
//! [`Mapper`] is the entry point for every conversion. It owns the descriptor cache, so types
//! are described once per mapper, and the [`MapperOptions`] that every call runs with.
use crate::cache::DescriptorCache;
use crate::context::{DecodeContext, EncodeContext};
use crate::descriptor::TypeDescriptor;
use crate::error::{MappingError, Result};
use crate::field::{Document, FieldType};
use crate::options::MapperOptions;
use crate::path::FieldPath;
use crate::proto::google::firestore::v1 as wire;
use crate::transform::DocumentData;
use crate::value::{self, DocumentReference, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Mapper {
    cache: DescriptorCache,
    options: MapperOptions,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            cache: DescriptorCache::new(),
            options,
        }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    /// Returns the validated descriptor of `T`.
    ///
    /// Repeated calls return the cached descriptor.
    pub fn describe<T: Document>(&self) -> Result<Arc<TypeDescriptor>> {
        self.cache.describe::<T>()
    }

    /// Decodes the fields of a document into `T`.
    ///
    /// # Arguments
    ///
    /// * `fields` - The field map as read from the wire.
    /// * `document` - The document the fields belong to. Properties marked as document id are
    ///   filled from it.
    pub fn decode<T: Document>(
        &self,
        fields: &BTreeMap<String, Value>,
        document: Option<&DocumentReference>,
    ) -> Result<T> {
        let mut cx = DecodeContext::new(&self.cache, &self.options, document);
        self.cache.mapping::<T>()?.decode(fields, &mut cx)
    }

    /// Decodes any value into any supported type, maps, lists and scalars included.
    pub fn decode_value<T: FieldType>(
        &self,
        value: &Value,
        document: Option<&DocumentReference>,
    ) -> Result<T> {
        let mut cx = DecodeContext::new(&self.cache, &self.options, document);
        T::decode(value, &mut cx)
    }

    /// Decodes a wire document, using its name as the document identity.
    pub fn decode_document<T: Document>(&self, document: &wire::Document) -> Result<T> {
        let fields = value::fields_from_proto(document.fields.clone())?;
        let reference =
            (!document.name.is_empty()).then(|| DocumentReference::new(document.name.clone()));

        self.decode(&fields, reference.as_ref())
    }

    /// Encodes a value. Server timestamp markers are dropped from the result.
    pub fn encode<T: FieldType>(&self, value: &T) -> Result<Value> {
        let mut cx = EncodeContext::new(&self.cache, &self.options);
        value.encode(&mut cx)
    }

    /// Encodes a value as the content of a document write.
    ///
    /// The value must encode to a map. Server timestamp markers are returned as field
    /// transforms next to the plain fields.
    pub fn encode_document<T: FieldType>(&self, value: &T) -> Result<DocumentData> {
        let mut cx = EncodeContext::new(&self.cache, &self.options);

        match value.encode(&mut cx)? {
            Value::Map(fields) => Ok(DocumentData {
                fields,
                transforms: cx.into_transforms(),
            }),
            other => Err(MappingError::serialize(
                &FieldPath::new(),
                format!(
                    "Document data must be a map or a document type, but it was of type {} ({})",
                    T::shape(),
                    other.type_name()
                ),
            )),
        }
    }
}
