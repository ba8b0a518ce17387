//! # Document Writes
//!
//! The result of encoding a whole document: its plain fields plus the side channel of
//! server-side transforms that markers requested.
use crate::path::FieldPath;
use crate::proto::google::firestore::v1 as wire;
use crate::value::Value;
use std::collections::BTreeMap;
use wire::document_transform::field_transform::{ServerValue, TransformType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Set the field to the time the server processes the write.
    ServerTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTransform {
    pub path: FieldPath,
    pub kind: TransformKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentData {
    pub fields: BTreeMap<String, Value>,
    pub transforms: Vec<FieldTransform>,
}

impl DocumentData {
    /// Builds the wire messages for writing this data to the document called `name`.
    ///
    /// # Returns
    ///
    /// The document carrying the plain fields and, when any marker asked for one, the
    /// transform to apply on top of it.
    pub fn into_proto(
        self,
        name: impl Into<String>,
    ) -> (wire::Document, Option<wire::DocumentTransform>) {
        let name = name.into();

        let transform = (!self.transforms.is_empty()).then(|| wire::DocumentTransform {
            document: name.clone(),
            field_transforms: self
                .transforms
                .iter()
                .map(|transform| wire::document_transform::FieldTransform {
                    field_path: transform.path.canonical_string(),
                    transform_type: Some(match transform.kind {
                        TransformKind::ServerTimestamp => {
                            TransformType::SetToServerValue(ServerValue::RequestTime as i32)
                        }
                    }),
                })
                .collect(),
        });

        let document = wire::Document {
            name,
            fields: crate::value::fields_into_proto(self.fields),
            create_time: None,
            update_time: None,
        };

        (document, transform)
    }
}
