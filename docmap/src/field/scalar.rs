use super::FieldType;
use crate::coerce;
use crate::context::{DecodeContext, EncodeContext};
use crate::error::Result;
use crate::shape::TypeShape;
use crate::value::{Blob, DocumentReference, GeoPoint, Value};
use bigdecimal::BigDecimal;
use prost_types::Timestamp;
use std::time::SystemTime;

impl FieldType for bool {
    fn shape() -> TypeShape {
        TypeShape::Boolean
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_bool(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Boolean(*self))
    }
}

impl FieldType for i32 {
    fn shape() -> TypeShape {
        TypeShape::Int32
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_i32(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Integer(i64::from(*self)))
    }
}

impl FieldType for i64 {
    fn shape() -> TypeShape {
        TypeShape::Int64
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_i64(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Integer(*self))
    }
}

impl FieldType for f64 {
    fn shape() -> TypeShape {
        TypeShape::Double
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_f64(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Double(*self))
    }
}

impl FieldType for f32 {
    fn shape() -> TypeShape {
        TypeShape::Float
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_f64(value)
            .map(|d| d as f32)
            .map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Double(f64::from(*self)))
    }
}

impl FieldType for BigDecimal {
    fn shape() -> TypeShape {
        TypeShape::Decimal
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_decimal(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl FieldType for String {
    fn shape() -> TypeShape {
        TypeShape::String
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        coerce::to_string(value).map_err(|reason| cx.error(reason))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn from_document_id(reference: &DocumentReference) -> Option<Self> {
        Some(reference.id().to_string())
    }
}

impl FieldType for Timestamp {
    fn shape() -> TypeShape {
        TypeShape::Timestamp
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::Timestamp(ts) => Ok(*ts),
            other => Err(cx.error(coerce::mismatch(other, "Timestamp"))),
        }
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Timestamp(*self))
    }
}

impl FieldType for SystemTime {
    fn shape() -> TypeShape {
        TypeShape::Timestamp
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        let ts = <Timestamp as FieldType>::decode(value, cx)?;
        SystemTime::try_from(ts)
            .map_err(|e| cx.error(format!("Timestamp {ts} can't be represented as SystemTime: {e}")))
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Timestamp(Timestamp::from(*self)))
    }
}

impl FieldType for GeoPoint {
    fn shape() -> TypeShape {
        TypeShape::GeoPoint
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::GeoPoint(point) => Ok(*point),
            other => Err(cx.error(coerce::mismatch(other, "GeoPoint"))),
        }
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::GeoPoint(*self))
    }
}

impl FieldType for Blob {
    fn shape() -> TypeShape {
        TypeShape::Bytes
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::Bytes(blob) => Ok(blob.clone()),
            other => Err(cx.error(coerce::mismatch(other, "Blob"))),
        }
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Bytes(self.clone()))
    }
}

impl FieldType for DocumentReference {
    fn shape() -> TypeShape {
        TypeShape::Reference
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::Reference(reference) => Ok(reference.clone()),
            other => Err(cx.error(coerce::mismatch(other, "DocumentReference"))),
        }
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(Value::Reference(self.clone()))
    }

    fn from_document_id(reference: &DocumentReference) -> Option<Self> {
        Some(reference.clone())
    }
}

impl FieldType for Value {
    fn shape() -> TypeShape {
        TypeShape::Any
    }

    fn decode(value: &Value, _cx: &mut DecodeContext<'_>) -> Result<Self> {
        Ok(value.clone())
    }

    fn encode(&self, _cx: &mut EncodeContext<'_>) -> Result<Value> {
        Ok(self.clone())
    }
}

macro_rules! reject_narrow_integer {
    ($($ty:ty => $shape:ident),+ $(,)?) => {
        $(
            impl FieldType for $ty {
                fn shape() -> TypeShape {
                    TypeShape::$shape
                }

                fn decode(_value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
                    Err(cx.error(format!(
                        "Deserializing values to {} is not supported, please use i32 or i64 instead",
                        stringify!($ty)
                    )))
                }

                fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
                    Err(cx.error(format!(
                        "Numbers of type {} are not supported, please use an i32, i64, f32, f64 or BigDecimal",
                        stringify!($ty)
                    )))
                }
            }
        )+
    };
}

reject_narrow_integer!(i8 => Int8, i16 => Int16, u8 => UInt8, u16 => UInt16);

impl FieldType for char {
    fn shape() -> TypeShape {
        TypeShape::Char
    }

    fn decode(_value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        Err(cx.error("Deserializing to chars is not supported"))
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        Err(cx.error("Characters are not supported, please use Strings"))
    }
}

/// Stands in for a generic parameter that was never given a concrete type.
///
/// Descriptors refuse to build when a type parameter or a property is bound to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbound;

impl FieldType for Unbound {
    fn shape() -> TypeShape {
        TypeShape::Unbound
    }

    fn decode(_value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        Err(cx.error(
            "Can't decode into an unbound type parameter, please use a fully parameterized type or Value instead",
        ))
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        Err(cx.error("Can't encode an unbound type parameter"))
    }
}
