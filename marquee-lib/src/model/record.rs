//! Dynamic table record

use std::collections::HashMap;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Value;
use crate::error::FieldError;

/// A record whose shape is only known at runtime.
///
/// Records hold field values as a `HashMap<String, Value>` next to a stable
/// string identifier. Hosting screens that have no typed model (imported
/// sheets, ad-hoc mock data) can hand these straight to a
/// [`DataTable`](crate::table::DataTable).
///
/// # Example
///
/// ```
/// use marquee_lib::model::Record;
///
/// let record = Record::new("th-001")
///     .set("name", "Cinema City Metropolis")
///     .set("screens", 12i32);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Cinema City Metropolis"));
/// assert_eq!(record.get_long("screens").unwrap(), Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The unique identifier of the record.
    pub(crate) id: String,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i64 field value, widening 32-bit integers.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(i64::from(*n))),
            Some(other) => Err(FieldError::type_mismatch(field, "long", other.type_name())),
        }
    }

    /// Gets an f64 field value, widening integers.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(value @ (Value::Float(_) | Value::Int(_) | Value::Long(_))) => {
                Ok(value.as_f64())
            }
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a datetime field value, parsing RFC 3339 text.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| FieldError::type_mismatch(field, "datetime", "string")),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a guid field value, parsing hyphenated text.
    pub fn get_guid(&self, field: &str) -> Result<Option<Uuid>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Guid(id)) => Ok(Some(*id)),
            Some(Value::String(s)) => Uuid::parse_str(s)
                .map(Some)
                .map_err(|_| FieldError::type_mismatch(field, "guid", "string")),
            Some(other) => Err(FieldError::type_mismatch(field, "guid", other.type_name())),
        }
    }

    /// Gets a decimal field value from any numeric variant or decimal text.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Decimal::from_str(s.trim())
                .map(Some)
                .map_err(|_| FieldError::type_mismatch(field, "decimal", "string")),
            Some(value) if value.is_numeric() => value
                .as_decimal()
                .map(Some)
                .ok_or_else(|| FieldError::type_mismatch(field, "decimal", value.type_name())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vs_null() {
        let record = Record::new("r1").set("city", Value::Null);
        assert_eq!(record.get_string("city"), Ok(None));
        assert_eq!(
            record.get_string("country"),
            Err(FieldError::missing("country"))
        );
    }

    #[test]
    fn test_type_mismatch() {
        let record = Record::new("r1").set("seats", 120i32);
        assert_eq!(
            record.get_string("seats"),
            Err(FieldError::type_mismatch("seats", "string", "int"))
        );
        assert_eq!(record.get_long("seats"), Ok(Some(120)));
        assert_eq!(record.get_float("seats"), Ok(Some(120.0)));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut record = Record::new("r1");
        record.insert("status", "Active");
        assert!(record.contains("status"));
        assert_eq!(record.remove("status"), Some(Value::from("Active")));
        assert!(!record.contains("status"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"id":"th-009","fields":{"name":"Yelmo Ideal","screens":9,"open":true,"closed_on":null}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), "th-009");
        assert_eq!(record.get_string("name").unwrap(), Some("Yelmo Ideal"));
        assert_eq!(record.get_long("screens").unwrap(), Some(9));
        assert_eq!(record.get_bool("open").unwrap(), Some(true));
        assert_eq!(record.get_string("closed_on").unwrap(), None);
    }

    #[test]
    fn test_json_round_trip_through_typed_getters() {
        let id = Uuid::from_u128(42);
        let opened = DateTime::parse_from_rfc3339("2023-05-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = Record::new("th-010")
            .set("device", id)
            .set("opened_at", opened)
            .set("ticket_price", Decimal::new(1250, 2))
            .set("zip", "10001")
            .set("seats", 3_000_000_000i64);

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();

        // Text payloads come back as strings; the typed getters recover them.
        assert_eq!(back.get("device"), Some(&Value::String(id.to_string())));
        assert_eq!(back.get_guid("device").unwrap(), Some(id));
        assert_eq!(back.get_datetime("opened_at").unwrap(), Some(opened));
        assert_eq!(back.get_decimal("ticket_price").unwrap(), Some(Decimal::new(1250, 2)));
        assert_eq!(back.get_string("zip").unwrap(), Some("10001"));
        assert_eq!(back.get_long("seats").unwrap(), Some(3_000_000_000));
    }

    #[test]
    fn test_unparseable_text_is_a_mismatch() {
        let record = Record::new("r1").set("device", "not-a-guid");
        assert_eq!(
            record.get_guid("device"),
            Err(FieldError::type_mismatch("device", "guid", "string"))
        );
        assert_eq!(
            record.get_datetime("device"),
            Err(FieldError::type_mismatch("device", "datetime", "string"))
        );
    }
}
