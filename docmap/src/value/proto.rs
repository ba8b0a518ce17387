use super::{Blob, DocumentReference, GeoPoint, Value};
use crate::error::{MappingError, Result};
use crate::proto::google::firestore::v1 as wire;
use crate::proto::google::r#type::LatLng;
use prost_types::NullValue;
use std::collections::{BTreeMap, HashMap};
use wire::value::ValueType;

impl From<Value> for wire::Value {
    fn from(value: Value) -> Self {
        let value_type = match value {
            Value::Null => ValueType::NullValue(NullValue::NullValue as i32),
            Value::Boolean(b) => ValueType::BooleanValue(b),
            Value::Integer(i) => ValueType::IntegerValue(i),
            Value::Double(d) => ValueType::DoubleValue(d),
            Value::String(s) => ValueType::StringValue(s),
            Value::Bytes(Blob(bytes)) => ValueType::BytesValue(bytes),
            Value::Timestamp(ts) => ValueType::TimestampValue(ts),
            Value::GeoPoint(GeoPoint {
                latitude,
                longitude,
            }) => ValueType::GeoPointValue(LatLng {
                latitude,
                longitude,
            }),
            Value::Reference(reference) => ValueType::ReferenceValue(reference.name),
            Value::Array(values) => ValueType::ArrayValue(wire::ArrayValue {
                values: values.into_iter().map(wire::Value::from).collect(),
            }),
            Value::Map(fields) => ValueType::MapValue(wire::MapValue {
                fields: fields_into_proto(fields),
            }),
        };

        wire::Value {
            value_type: Some(value_type),
        }
    }
}

impl TryFrom<wire::Value> for Value {
    type Error = MappingError;

    fn try_from(value: wire::Value) -> Result<Self> {
        let value_type = value
            .value_type
            .ok_or_else(|| MappingError::new("Unknown Value Type"))?;

        Ok(match value_type {
            ValueType::NullValue(_) => Value::Null,
            ValueType::BooleanValue(b) => Value::Boolean(b),
            ValueType::IntegerValue(i) => Value::Integer(i),
            ValueType::DoubleValue(d) => Value::Double(d),
            ValueType::TimestampValue(ts) => Value::Timestamp(ts),
            ValueType::StringValue(s) => Value::String(s),
            ValueType::BytesValue(bytes) => Value::Bytes(Blob(bytes)),
            ValueType::ReferenceValue(name) => Value::Reference(DocumentReference::new(name)),
            ValueType::GeoPointValue(LatLng {
                latitude,
                longitude,
            }) => Value::GeoPoint(GeoPoint::new(latitude, longitude)),
            ValueType::ArrayValue(array) => Value::Array(
                array
                    .values
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_>>()?,
            ),
            ValueType::MapValue(map) => Value::Map(fields_from_proto(map.fields)?),
        })
    }
}

/// Converts the field map of a wire document or map value.
pub fn fields_from_proto(
    fields: HashMap<String, wire::Value>,
) -> Result<BTreeMap<String, Value>> {
    fields
        .into_iter()
        .map(|(key, value)| Ok((key, Value::try_from(value)?)))
        .collect()
}

pub(crate) fn fields_into_proto(fields: BTreeMap<String, Value>) -> HashMap<String, wire::Value> {
    fields
        .into_iter()
        .map(|(key, value)| (key, wire::Value::from(value)))
        .collect()
}
