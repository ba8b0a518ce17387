//! # Numeric Coercion
//!
//! Conversion rules from wire scalars to Rust primitives. Each rule returns the failure reason
//! as a plain string; callers attach the field path.
use crate::value::Value;
use bigdecimal::BigDecimal;

type Coerced<T> = std::result::Result<T, String>;

pub(crate) fn mismatch(value: &Value, target: &str) -> String {
    format!(
        "Failed to convert value of type {} to {target}",
        value.type_name()
    )
}

pub(crate) fn to_bool(value: &Value) -> Coerced<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        other => Err(mismatch(other, "bool")),
    }
}

pub(crate) fn to_string(value: &Value) -> Coerced<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(other, "String")),
    }
}

/// Integers and doubles inside the 32-bit range. Fractions are truncated.
pub(crate) fn to_i32(value: &Value) -> Coerced<i32> {
    let number = match value {
        Value::Integer(i) => *i as f64,
        Value::Double(d) => *d,
        other => return Err(mismatch(other, "i32")),
    };

    if number >= i32::MIN as f64 && number <= i32::MAX as f64 {
        Ok(match value {
            Value::Integer(i) => *i as i32,
            _ => number as i32,
        })
    } else {
        Err(format!(
            "Numeric value out of 32-bit integer range: {number}. Did you mean to use an i64 or f64 instead of an i32?"
        ))
    }
}

/// Integers as they are, doubles inside the 64-bit range truncated.
pub(crate) fn to_i64(value: &Value) -> Coerced<i64> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Double(d) if *d >= i64::MIN as f64 && *d <= i64::MAX as f64 => Ok(*d as i64),
        Value::Double(d) => Err(format!(
            "Numeric value out of 64-bit long range: {d}. Did you mean to use an f64 instead of an i64?"
        )),
        other => Err(mismatch(other, "i64")),
    }
}

/// Doubles as they are; integers only when they survive the round trip through `f64`.
pub(crate) fn to_f64(value: &Value) -> Coerced<f64> {
    match value {
        Value::Double(d) => Ok(*d),
        Value::Integer(i) => {
            let converted = *i as f64;
            if converted as i128 == *i as i128 {
                Ok(converted)
            } else {
                Err(format!(
                    "Loss of precision while converting number to double: {i}. Did you mean to use a 64-bit i64 instead?"
                ))
            }
        }
        other => Err(mismatch(other, "f64")),
    }
}

pub(crate) fn to_decimal(value: &Value) -> Coerced<BigDecimal> {
    match value {
        Value::Integer(i) => Ok(BigDecimal::from(*i)),
        Value::Double(d) if d.is_finite() => parse_decimal(&d.to_string()),
        Value::Double(d) => Err(format!("Can't convert non-finite double {d} to BigDecimal")),
        Value::String(s) => parse_decimal(s),
        other => Err(mismatch(other, "BigDecimal")),
    }
}

fn parse_decimal(text: &str) -> Coerced<BigDecimal> {
    text.parse::<BigDecimal>()
        .map_err(|e| format!("Failed to parse \"{text}\" as BigDecimal: {e}"))
}
