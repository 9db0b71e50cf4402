//! TableRecord trait for rows shown in a data table.

use crate::model::Record;
use crate::model::Value;

/// Trait for records that can be listed in a [`DataTable`](super::DataTable).
///
/// The table is generic over record shape: it only needs a stable string
/// identifier and named field lookup. Search scans the fields listed by
/// [`field_names`](TableRecord::field_names); filters and sorts resolve
/// column keys through [`field`](TableRecord::field) unless the column
/// derives its own value.
///
/// # Example
///
/// ```
/// use marquee_lib::model::Value;
/// use marquee_lib::table::TableRecord;
///
/// #[derive(Debug, Clone)]
/// struct Auditorium {
///     id: String,
///     name: String,
///     seats: i32,
/// }
///
/// impl TableRecord for Auditorium {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(Value::from(&self.id)),
///             "name" => Some(Value::from(&self.name)),
///             "seats" => Some(Value::from(self.seats)),
///             _ => None,
///         }
///     }
///
///     fn field_names(&self) -> Vec<String> {
///         vec!["id".into(), "name".into(), "seats".into()]
///     }
/// }
/// ```
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Stable unique identifier of this record.
    fn id(&self) -> String;

    /// Returns the value of a named field, or `None` if the record has no
    /// such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Names of every field this record exposes.
    fn field_names(&self) -> Vec<String>;
}

impl TableRecord for Record {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        match self.fields.get(name) {
            Some(value) => Some(value.clone()),
            None if name == "id" => Some(Value::from(&self.id)),
            None => None,
        }
    }

    fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }
}
