use docmap::bigdecimal::BigDecimal;
use docmap::prost_types::Timestamp;
use docmap::{Mapper, MapperOptions, Unbound, Value};
use models::*;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::time::{Duration, SystemTime};


#[test]
fn test_decode_string_property() {
    let mapper = Mapper::new();

    let bean: StringBean = mapper.decode(&fields(json!({ "value": "foo" })), None).unwrap();

    assert_eq!(bean.value, "foo");
}

#[test]
fn test_unknown_property_is_dropped_by_default() {
    let mapper = Mapper::new();
    let data = fields(json!({ "value": "foo", "unknown": "bar" }));

    let bean: StringBean = mapper.decode(&data, None).unwrap();
    assert_eq!(bean.value, "foo");

    let bean: IgnoreUnknownBean = mapper.decode(&data, None).unwrap();
    assert_eq!(bean.value, "foo");
}

#[test]
fn test_unknown_property_is_rejected_when_requested() {
    let mapper = Mapper::new();
    let data = fields(json!({ "value": "foo", "unknown": "bar" }));

    let err = mapper.decode::<ThrowOnUnknownBean>(&data, None).unwrap_err();

    assert_eq!(
        err.message(),
        "Could not deserialize object. No setter/field for unknown found on class ThrowOnUnknownBean"
    );
    assert_eq!(err.path(), None);
}

#[test]
fn test_unknown_property_hints_at_case_sensitivity() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<ThrowOnUnknownBean>(&fields(json!({ "Value": "foo" })), None)
        .unwrap_err();

    assert!(
        err.message()
            .ends_with("No setter/field for Value found on class ThrowOnUnknownBean (fields/setters are case sensitive!)")
    );
}

#[test]
fn test_read_only_property_is_treated_as_unknown() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<ReadOnlyBean>(&fields(json!({ "value": "foo" })), None)
        .unwrap_err();

    assert!(err.message().contains("No setter/field for value found on class ReadOnlyBean"));
}

#[test]
fn test_int_boundaries() {
    let mapper = Mapper::new();

    // 1. Out of range
    let err = mapper
        .decode::<IntBean>(&fields(json!({ "value": 1e10 })), None)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Could not deserialize object. Numeric value out of 32-bit integer range: 10000000000. Did you mean to use an i64 or f64 instead of an i32? (found in field 'value')"
    );
    assert_eq!(err.path(), Some("value"));

    // 2. Exact integer
    let bean: IntBean = mapper.decode(&fields(json!({ "value": 1 })), None).unwrap();
    assert_eq!(bean.value, 1);

    // 3. Fractions are truncated
    let bean: IntBean = mapper.decode(&fields(json!({ "value": 1.1 })), None).unwrap();
    assert_eq!(bean.value, 1);
}

#[test]
fn test_long_accepts_integral_doubles() {
    let mapper = Mapper::new();

    let bean: LongBean = mapper.decode(&fields(json!({ "value": 1e10 })), None).unwrap();

    assert_eq!(bean.value, 10_000_000_000);
}

#[test]
fn test_double_rejects_imprecise_integers() {
    let mapper = Mapper::new();
    let data = BTreeMap::from([("value".to_string(), Value::Integer((1 << 53) + 1))]);

    let err = mapper.decode::<DoubleBean>(&data, None).unwrap_err();

    assert!(err.message().contains(
        "Loss of precision while converting number to double: 9007199254740993"
    ));
}

#[test]
fn test_float_narrows_doubles() {
    let mapper = Mapper::new();

    let bean: FloatBean = mapper.decode(&fields(json!({ "value": 0.5 })), None).unwrap();

    assert_eq!(bean.value, 0.5_f32);
}

#[test]
fn test_decimal_sources() {
    let mapper = Mapper::new();

    let bean: DecimalBean = mapper.decode(&fields(json!({ "value": "12.50" })), None).unwrap();
    assert_eq!(bean.value, BigDecimal::from_str("12.50").unwrap());

    let bean: DecimalBean = mapper.decode(&fields(json!({ "value": 0.25 })), None).unwrap();
    assert_eq!(bean.value, BigDecimal::from_str("0.25").unwrap());

    let bean: DecimalBean = mapper.decode(&fields(json!({ "value": 3 })), None).unwrap();
    assert_eq!(bean.value, BigDecimal::from(3));
}

#[test]
fn test_boolean_and_string_are_strict() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<BoolBean>(&fields(json!({ "value": 1 })), None)
        .unwrap_err();
    assert!(err.message().contains("Failed to convert value of type Integer to bool"));

    let err = mapper
        .decode::<StringBean>(&fields(json!({ "value": { "nested": true } })), None)
        .unwrap_err();
    assert!(err.message().contains("Failed to convert value of type Map to String"));
}

#[test]
fn test_null_only_decodes_into_optional_types() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<StringBean>(&fields(json!({ "value": null })), None)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Could not deserialize object. Failed to convert value of type Null to String (found in field 'value')"
    );

    let value: Option<String> = mapper.decode_value(&Value::Null, None).unwrap();
    assert_eq!(value, None);

    let bean: AnyBean = mapper.decode(&fields(json!({ "value": null })), None).unwrap();
    assert_eq!(bean.value, Value::Null);
}

#[test]
fn test_narrow_types_are_rejected() {
    let mapper = Mapper::new();
    let data = fields(json!({ "value": 1 }));

    let err = mapper.decode::<ByteBean>(&data, None).unwrap_err();
    assert_eq!(
        err.message(),
        "Could not deserialize object. Deserializing values to i8 is not supported, please use i32 or i64 instead (found in field 'value')"
    );

    let err = mapper.decode::<ShortBean>(&data, None).unwrap_err();
    assert!(
        err.message()
            .contains("Deserializing values to i16 is not supported, please use i32 or i64 instead")
    );

    let err = mapper
        .decode::<CharBean>(&fields(json!({ "value": "a" })), None)
        .unwrap_err();
    assert!(err.message().contains("Deserializing to chars is not supported"));
}

#[test]
fn test_arrays_and_sets_are_rejected() {
    let mapper = Mapper::new();
    let data = fields(json!({ "values": ["a", "b"] }));

    let err = mapper.decode::<ArrayBean>(&data, None).unwrap_err();
    assert!(
        err.message()
            .contains("Converting to Arrays is not supported, please use Lists instead")
    );

    let err = mapper.decode::<SetBean>(&data, None).unwrap_err();
    assert!(
        err.message()
            .contains("Collections are not supported, please use Lists instead")
    );
}

#[test]
fn test_map_keys_must_be_strings() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<IntKeyMapBean>(&fields(json!({ "values": { "1": "bar" } })), None)
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Could not deserialize object. Only maps with string keys are supported, but found map with key type i64 (found in field 'values')"
    );
}

#[test]
fn test_string_keyed_map_of_documents() {
    let mapper = Mapper::new();

    let bean: StringMapBean = mapper
        .decode(
            &fields(json!({ "values": { "a": { "value": "x" }, "b": { "value": "y" } } })),
            None,
        )
        .unwrap();

    assert_eq!(bean.values.len(), 2);
    assert_eq!(bean.values["a"].value, "x");
    assert_eq!(bean.values["b"].value, "y");
}

#[test]
fn test_document_id_is_taken_from_the_document() {
    let mapper = Mapper::new();
    let reference = document();

    // 1. With a document, the id is filled in
    let bean: DocIdBean = mapper.decode(&fields(json!({})), Some(&reference)).unwrap();
    assert_eq!(bean.id, "doc123");

    // 2. Without one, it is left untouched
    let bean: DocIdBean = mapper.decode(&fields(json!({})), None).unwrap();
    assert_eq!(bean.id, "");

    // 3. References receive the whole document reference
    let bean: RefIdBean = mapper
        .decode(&fields(json!({ "value": "x" })), Some(&reference))
        .unwrap();
    assert_eq!(bean.reference, Some(reference));
    assert_eq!(bean.value, "x");
}

#[test]
fn test_document_id_conflicts_with_wire_field() {
    let mapper = Mapper::new();
    let reference = document();

    let err = mapper
        .decode::<DocIdBean>(&fields(json!({ "id": "other" })), Some(&reference))
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Could not deserialize object. 'id' was found from document coll/doc123, cannot apply document id marker on this property for class DocIdBean"
    );
}

#[test]
fn test_document_id_reaches_nested_documents() {
    let mapper = Mapper::new();
    let reference = document();

    let bean: NestedDocIdBean = mapper
        .decode(&fields(json!({ "name": "n", "child": {} })), Some(&reference))
        .unwrap();

    assert_eq!(bean.name, "n");
    assert_eq!(bean.child.id, "doc123");
}

#[test]
fn test_nested_errors_report_the_field_path() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<NestedBean>(&fields(json!({ "first": { "value": 1.1 } })), None)
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Could not deserialize object. Failed to convert value of type Double to String (found in field 'first.value')"
    );
    assert_eq!(err.path(), Some("first.value"));
}

#[test]
fn test_list_errors_report_the_element_index() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<ListBean>(
            &fields(json!({ "values": [{ "value": "a" }, { "value": 1 }] })),
            None,
        )
        .unwrap_err();

    assert_eq!(err.path(), Some("values[1].value"));
}

#[test]
fn test_renamed_property_only_matches_its_alias() {
    let mapper = Mapper::new();

    let bean: RenamedBean = mapper.decode(&fields(json!({ "v": "x" })), None).unwrap();
    assert_eq!(bean.value, "x");

    let bean: RenamedBean = mapper.decode(&fields(json!({ "value": "x" })), None).unwrap();
    assert_eq!(bean.value, "");
}

#[test]
fn test_setter_receives_decoded_value() {
    let mapper = Mapper::new();

    let bean: GetterSetterBean = mapper
        .decode(&fields(json!({ "full_name": "Ada Lovelace" })), None)
        .unwrap();

    assert_eq!(bean.first, "Ada");
    assert_eq!(bean.last, "Lovelace");
}

#[test]
fn test_missing_constructor_fails_at_decode() {
    let mapper = Mapper::new();

    let err = mapper
        .decode::<NoConstructorBean>(&fields(json!({ "value": "x" })), None)
        .unwrap_err();

    assert!(
        err.message()
            .contains("Class NoConstructorBean does not define a no-argument constructor")
    );
}

#[test]
fn test_generic_document_needs_bound_parameters() {
    let mapper = Mapper::new();
    let data = fields(json!({ "value": "x" }));

    let bean: Wrapper<String> = mapper.decode(&data, None).unwrap();
    assert_eq!(bean.value, "x");

    let err = mapper.decode::<Wrapper<Unbound>>(&data, None).unwrap_err();
    assert_eq!(
        err.message(),
        "Class Wrapper<Unbound> has generic type parameters, please decode into a fully parameterized type or use Value instead"
    );
}

#[test]
fn test_any_property_keeps_the_wire_value() {
    let mapper = Mapper::new();

    let bean: AnyBean = mapper
        .decode(&fields(json!({ "value": { "a": [1, "x", 2.5] } })), None)
        .unwrap();

    assert_eq!(bean.value, Value::from(json!({ "a": [1, "x", 2.5] })));
}

#[test]
fn test_enum_values() {
    let mapper = Mapper::new();

    let color: Color = mapper.decode_value(&Value::from("green"), None).unwrap();
    assert_eq!(color, Color::Green);

    let err = mapper
        .decode_value::<Color>(&Value::from("purple"), None)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Could not deserialize object. Could not find enum value of Color for value \"purple\""
    );
}

#[test]
fn test_decode_value_into_containers() {
    let mapper = Mapper::new();

    let map: HashMap<String, Vec<i64>> = mapper
        .decode_value(&Value::from(json!({ "a": [1, 2], "b": [] })), None)
        .unwrap();
    assert_eq!(map["a"], vec![1, 2]);
    assert!(map["b"].is_empty());

    let list: Vec<i32> = mapper
        .decode_value(&Value::from(json!([1, 2.5])), None)
        .unwrap();
    assert_eq!(list, vec![1, 2]);

    let err = mapper
        .decode_value::<Vec<i32>>(&Value::from(json!({ "a": 1 })), None)
        .unwrap_err();
    assert!(err.message().contains("Expected a List, but got a Map"));
}

#[test]
fn test_document_from_non_map_value() {
    let mapper = Mapper::new();

    let err = mapper
        .decode_value::<StringBean>(&Value::from("x"), None)
        .unwrap_err();

    assert!(
        err.message()
            .contains("Can't convert object of type String to type StringBean")
    );
}

#[test]
fn test_timestamps() {
    let mapper = Mapper::new();
    let ts = Timestamp {
        seconds: 1,
        nanos: 500_000_000,
    };

    let time: SystemTime = mapper.decode_value(&Value::Timestamp(ts), None).unwrap();
    assert_eq!(time, SystemTime::UNIX_EPOCH + Duration::from_millis(1500));

    let data = BTreeMap::from([("value".to_string(), Value::Timestamp(ts))]);
    let bean: TimestampBean = mapper.decode(&data, None).unwrap();
    assert_eq!(bean.value, ts);
}

#[test]
fn test_depth_limit_stops_runaway_nesting() {
    let options = MapperOptions {
        max_depth: 50,
        ..MapperOptions::default()
    };
    let mapper = Mapper::with_options(options);

    let mut value = Value::from(json!({ "name": "leaf" }));
    for _ in 0..100 {
        value = Value::Map(BTreeMap::from([(
            "children".to_string(),
            Value::Array(vec![value]),
        )]));
    }

    let err = mapper.decode_value::<Node>(&value, None).unwrap_err();

    assert!(err.message().contains(
        "Exceeded maximum depth of 50, which likely indicates there's an object cycle"
    ));
}

#[test]
fn test_depth_limit_allows_shallow_values() {
    let options = MapperOptions {
        max_depth: 3,
        ..MapperOptions::default()
    };
    let mapper = Mapper::with_options(options);

    let node: Node = mapper
        .decode(&fields(json!({ "children": [{ "name": "a" }] })), None)
        .unwrap();
    assert_eq!(node.children[0].name, "a");

    let err = mapper
        .decode::<Node>(
            &fields(json!({ "children": [{ "children": [{ "name": "b" }] }] })),
            None,
        )
        .unwrap_err();
    assert!(err.message().contains("Exceeded maximum depth of 3"));
}
