use super::FieldType;
use crate::context::{DecodeContext, EncodeContext};
use crate::error::Result;
use crate::path::PathSegment;
use crate::shape::TypeShape;
use crate::value::{DocumentReference, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

impl<T: FieldType> FieldType for Option<T> {
    fn shape() -> TypeShape {
        TypeShape::Optional(Box::new(T::shape()))
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::decode(value, cx).map(Some),
        }
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        match self {
            Some(value) => value.encode(cx),
            None => Ok(Value::Null),
        }
    }

    fn from_document_id(reference: &DocumentReference) -> Option<Self> {
        T::from_document_id(reference).map(Some)
    }
}

fn decode_elements<T, C>(value: &Value, cx: &mut DecodeContext<'_>) -> Result<C>
where
    T: FieldType,
    C: FromIterator<T>,
{
    match value {
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(index, element)| {
                cx.descend(PathSegment::Index(index), |cx| T::decode(element, cx))
            })
            .collect(),
        other => Err(cx.error(format!(
            "Expected a List, but got a {}",
            other.type_name()
        ))),
    }
}

fn encode_elements<'e, T>(
    elements: impl Iterator<Item = &'e T>,
    cx: &mut EncodeContext<'_>,
) -> Result<Value>
where
    T: FieldType,
{
    elements
        .enumerate()
        .map(|(index, element)| cx.descend(PathSegment::Index(index), |cx| element.encode(cx)))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

impl<T: FieldType> FieldType for Vec<T> {
    fn shape() -> TypeShape {
        TypeShape::List(Box::new(T::shape()))
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        decode_elements(value, cx)
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        encode_elements(self.iter(), cx)
    }
}

impl<T: FieldType> FieldType for VecDeque<T> {
    fn shape() -> TypeShape {
        TypeShape::List(Box::new(T::shape()))
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        decode_elements(value, cx)
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        encode_elements(self.iter(), cx)
    }
}

fn non_string_keys<K: FieldType>() -> Option<String> {
    let key = K::shape();
    (key != TypeShape::String).then(|| {
        format!("Only maps with string keys are supported, but found map with key type {key}")
    })
}

fn decode_entries<K, V, C>(value: &Value, cx: &mut DecodeContext<'_>) -> Result<C>
where
    K: FieldType,
    V: FieldType,
    C: FromIterator<(K, V)>,
{
    if let Some(reason) = non_string_keys::<K>() {
        return Err(cx.error(reason));
    }

    match value {
        Value::Map(fields) => fields
            .iter()
            .map(|(key, element)| {
                let key_value = K::decode(&Value::String(key.clone()), cx)?;
                let element =
                    cx.descend(PathSegment::Field(key.clone()), |cx| V::decode(element, cx))?;
                Ok((key_value, element))
            })
            .collect(),
        other => Err(cx.error(format!(
            "Expected a Map while deserializing to a Map, but got a {}",
            other.type_name()
        ))),
    }
}

fn encode_entries<'e, K, V>(
    entries: impl Iterator<Item = (&'e K, &'e V)>,
    cx: &mut EncodeContext<'_>,
) -> Result<Value>
where
    K: FieldType,
    V: FieldType,
{
    if let Some(reason) = non_string_keys::<K>() {
        return Err(cx.error(reason));
    }

    let mut fields = BTreeMap::new();
    for (key, element) in entries {
        let key = match key.encode(cx)? {
            Value::String(key) => key,
            other => {
                return Err(cx.error(format!(
                    "Map keys must encode to strings, but got a {}",
                    other.type_name()
                )));
            }
        };
        let element = cx.descend(PathSegment::Field(key.clone()), |cx| element.encode(cx))?;
        fields.insert(key, element);
    }

    Ok(Value::Map(fields))
}

impl<K, V> FieldType for HashMap<K, V>
where
    K: FieldType + Eq + Hash,
    V: FieldType,
{
    fn shape() -> TypeShape {
        TypeShape::Map(Box::new(K::shape()), Box::new(V::shape()))
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        decode_entries(value, cx)
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        encode_entries(self.iter(), cx)
    }
}

impl<K, V> FieldType for BTreeMap<K, V>
where
    K: FieldType + Ord,
    V: FieldType,
{
    fn shape() -> TypeShape {
        TypeShape::Map(Box::new(K::shape()), Box::new(V::shape()))
    }

    fn decode(value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        decode_entries(value, cx)
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        encode_entries(self.iter(), cx)
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn shape() -> TypeShape {
        TypeShape::Array(Box::new(T::shape()), N)
    }

    fn decode(_value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
        Err(cx.error("Converting to Arrays is not supported, please use Lists instead"))
    }

    fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
        Err(cx.error("Serializing Arrays is not supported, please use Lists instead"))
    }
}

macro_rules! reject_set {
    ($($set:ident),+) => {
        $(
            impl<T: FieldType> FieldType for $set<T> {
                fn shape() -> TypeShape {
                    TypeShape::Set(Box::new(T::shape()))
                }

                fn decode(_value: &Value, cx: &mut DecodeContext<'_>) -> Result<Self> {
                    Err(cx.error("Collections are not supported, please use Lists instead"))
                }

                fn encode(&self, cx: &mut EncodeContext<'_>) -> Result<Value> {
                    Err(cx.error("Serializing Collections is not supported, please use Lists instead"))
                }
            }
        )+
    };
}

reject_set!(HashSet, BTreeSet);
