//! Value enum for dynamic field values

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::Visitor;
use uuid::Uuid;

/// A dynamic value read out of a table record.
///
/// Every field a column can show, search, filter or sort on is surfaced as a
/// `Value`. Display coercion renders [`Value::Null`] as an empty string so a
/// missing field always produces the empty placeholder cell.
///
/// # Example
///
/// ```
/// use marquee_lib::model::Value;
///
/// let name = Value::from("Regal Cinemas");
/// let seats = Value::from(240i32);
/// let empty = Value::Null;
/// assert_eq!(empty.to_string(), "");
/// assert!(seats.loosely_equals(&Value::from("240")));
/// ```
///
/// # Serialization
///
/// Values serialize as their bare payload. Deserialization maps the data
/// model one to one: integers become `Int` (or `Long` when they overflow
/// 32 bits), other numbers `Float`, and every string stays a `String`, so
/// guids, datetimes and decimals come back as text. Read them back with the
/// typed [`Record`](super::Record) getters, which parse that text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for the integer, float and decimal variants.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_)
        )
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the numeric value as a decimal.
    ///
    /// Floats that cannot be represented (NaN, infinities) yield `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Long(n) => Some(Decimal::from(*n)),
            Value::Float(f) => Decimal::from_f64(*f),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the numeric value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Equality used by filter clauses.
    ///
    /// Numbers of different widths compare by numeric value. A string on
    /// one side is parsed into the type of the other side before comparing,
    /// so a clause value of `"240"` matches a seat count of `240` and
    /// `"true"` matches a boolean flag. Null only equals null.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Bool(b), Value::String(s)) | (Value::String(s), Value::Bool(b)) => {
                s.trim().parse::<bool>().is_ok_and(|parsed| parsed == *b)
            }
            (Value::String(s), n) | (n, Value::String(s)) if n.is_numeric() => {
                parse_number(s).is_some_and(|parsed| numbers_equal(&parsed, n))
            }
            (a, b) if a.is_numeric() && b.is_numeric() => numbers_equal(a, b),
            (Value::Guid(a), Value::Guid(b)) => a == b,
            (Value::Guid(g), Value::String(s)) | (Value::String(s), Value::Guid(g)) => {
                Uuid::parse_str(s.trim()).is_ok_and(|parsed| parsed == *g)
            }
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

fn parse_number(s: &str) -> Option<Value> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(Value::Long(n));
    }
    if let Ok(d) = s.parse::<Decimal>() {
        return Some(Value::Decimal(d));
    }
    s.parse::<f64>().ok().map(Value::Float)
}

fn numbers_equal(a: &Value, b: &Value) -> bool {
    match (a.as_decimal(), b.as_decimal()) {
        (Some(x), Some(y)) => x == y,
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{}", g),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a boolean, a number or a string")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> Result<Value, E> {
        Ok(i32::try_from(n).map_or(Value::Long(n), Value::Int))
    }

    fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Value, E> {
        match i64::try_from(n) {
            Ok(n) => self.visit_i64(n),
            Err(_) => Ok(Value::Float(n as f64)),
        }
    }

    fn visit_f64<E>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_displays_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(Option::<i32>::None).to_string(), "");
    }

    #[test]
    fn test_numeric_widths_compare_equal() {
        assert!(Value::Int(3).loosely_equals(&Value::Long(3)));
        assert!(Value::Float(2.5).loosely_equals(&Value::Decimal(Decimal::new(25, 1))));
        assert!(!Value::Int(3).loosely_equals(&Value::Long(4)));
    }

    #[test]
    fn test_string_coerced_to_numeric_side() {
        assert!(Value::Int(240).loosely_equals(&Value::from("240")));
        assert!(Value::from(" 12.50 ").loosely_equals(&Value::Float(12.5)));
        assert!(!Value::Int(240).loosely_equals(&Value::from("two hundred")));
    }

    #[test]
    fn test_bool_and_guid_coercion() {
        assert!(Value::Bool(true).loosely_equals(&Value::from("true")));
        assert!(!Value::Bool(false).loosely_equals(&Value::from("true")));

        let id = Uuid::from_u128(7);
        assert!(Value::Guid(id).loosely_equals(&Value::from(id.to_string())));
    }

    #[test]
    fn test_null_only_equals_null() {
        assert!(Value::Null.loosely_equals(&Value::Null));
        assert!(!Value::Null.loosely_equals(&Value::from("")));
    }

    #[test]
    fn test_deserialize_keeps_json_types() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 7, 5000000000, 2.5, "10001", "Regal"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(7),
                Value::Long(5_000_000_000),
                Value::Float(2.5),
                Value::from("10001"),
                Value::from("Regal"),
            ]
        );
    }

    #[test]
    fn test_strings_are_case_sensitive() {
        assert!(!Value::from("Active").loosely_equals(&Value::from("active")));
    }
}
