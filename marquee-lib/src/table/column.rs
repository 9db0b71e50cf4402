//! Column descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::collate::compare_values;
use super::row::TableRecord;
use crate::model::Value;

/// Derives a cell value from a whole record.
pub type DeriveFn<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Renders a record into display text for one cell.
pub type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Computes filter candidates from the current record set.
pub type OptionsFn<T> = Arc<dyn Fn(&[T]) -> Vec<Value> + Send + Sync>;

/// How a column obtains its value from a record.
pub enum Accessor<T> {
    /// Read a named field through [`TableRecord::field`].
    Field(String),
    /// Compute the value from the record.
    Derive(DeriveFn<T>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(name.clone()),
            Accessor::Derive(f) => Accessor::Derive(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Where a filterable column gets its candidate values.
pub enum FilterOptions<T> {
    /// A fixed list.
    Static(Vec<Value>),
    /// Computed from the records currently held by the table.
    Derived(OptionsFn<T>),
}

impl<T> Clone for FilterOptions<T> {
    fn clone(&self) -> Self {
        match self {
            FilterOptions::Static(values) => FilterOptions::Static(values.clone()),
            FilterOptions::Derived(f) => FilterOptions::Derived(Arc::clone(f)),
        }
    }
}

/// Column configuration.
///
/// A column is identified by its `key`, which is also the name used by sort
/// state and filter clauses. By default the key doubles as the field name
/// read from the record.
///
/// # Examples
///
/// ```
/// use marquee_lib::model::{Record, Value};
/// use marquee_lib::table::Column;
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::field("name", "Name").sortable(),
///     Column::field("status", "Status").sortable().filterable(),
///     Column::derived("location", "Location", |r: &Record| {
///         let city = r.get("city").map(ToString::to_string).unwrap_or_default();
///         let country = r.get("country").map(ToString::to_string).unwrap_or_default();
///         Value::from(format!("{}, {}", city, country))
///     }),
/// ];
/// assert_eq!(columns[2].key, "location");
/// ```
pub struct Column<T> {
    /// Identifier used by sort state and filter clauses.
    pub key: String,
    /// Header label.
    pub header: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Whether this column offers filter values.
    pub filterable: bool,
    accessor: Accessor<T>,
    cell: Option<CellFn<T>>,
    options: Option<FilterOptions<T>>,
}

impl<T: TableRecord> Column<T> {
    /// Creates a column reading the field named `key`.
    pub fn field(key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            accessor: Accessor::Field(key.clone()),
            key,
            header: header.into(),
            sortable: false,
            filterable: false,
            cell: None,
            options: None,
        }
    }

    /// Creates a column whose value is computed from the record.
    pub fn derived<F>(key: impl Into<String>, header: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            filterable: false,
            accessor: Accessor::Derive(Arc::new(derive)),
            cell: None,
            options: None,
        }
    }

    /// Reads a differently named field than the column key.
    pub fn from_field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(name.into());
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column filterable.
    ///
    /// Without explicit options the candidates are the distinct values found
    /// in the table's records.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Sets a custom cell renderer, which takes precedence over the value.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Supplies a fixed list of filter options.
    pub fn options<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.filterable = true;
        self.options = Some(FilterOptions::Static(
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Computes filter options from the current records.
    pub fn options_from<F>(mut self, options: F) -> Self
    where
        F: Fn(&[T]) -> Vec<Value> + Send + Sync + 'static,
    {
        self.filterable = true;
        self.options = Some(FilterOptions::Derived(Arc::new(options)));
        self
    }

    /// Returns the accessor.
    pub fn accessor(&self) -> &Accessor<T> {
        &self.accessor
    }

    /// Resolves the column value; a missing field yields [`Value::Null`].
    pub fn value(&self, record: &T) -> Value {
        match &self.accessor {
            Accessor::Field(name) => record.field(name).unwrap_or_default(),
            Accessor::Derive(derive) => derive(record),
        }
    }

    /// Renders the cell text.
    pub fn render(&self, record: &T) -> String {
        match &self.cell {
            Some(cell) => cell(record),
            None => self.value(record).to_string(),
        }
    }

    /// Candidate filter values, sorted and free of duplicates.
    pub fn filter_options(&self, records: &[T]) -> Vec<Value> {
        let mut values = match &self.options {
            Some(FilterOptions::Static(values)) => values.clone(),
            Some(FilterOptions::Derived(options)) => options(records),
            None => records
                .iter()
                .map(|record| self.value(record))
                .filter(|value| !value.is_null())
                .collect(),
        };
        values.sort_by(compare_values);

        // Values that collate equal stay in one run without being identical
        // (an int and a long of the same number), so dedup within each run.
        let mut distinct: Vec<Value> = Vec::with_capacity(values.len());
        let mut run = 0;
        for value in values {
            if distinct
                .last()
                .is_some_and(|last| compare_values(last, &value) != Ordering::Equal)
            {
                run = distinct.len();
            }
            if !distinct[run..].contains(&value) {
                distinct.push(value);
            }
        }
        distinct
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("accessor", &self.accessor)
            .finish_non_exhaustive()
    }
}

/// Resolves a column key for a record.
///
/// Declared columns use their accessor; any other key is read as a plain
/// field so hosts can filter on data they do not display.
pub(crate) fn resolve<T: TableRecord>(columns: &[Column<T>], record: &T, key: &str) -> Value {
    match columns.iter().find(|c| c.key == key) {
        Some(column) => column.value(record),
        None => record.field(key).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn theatres() -> Vec<Record> {
        vec![
            Record::new("1").set("name", "Regal Union Square").set("status", "Active"),
            Record::new("2").set("name", "AMC Lincoln Square").set("status", "Inactive"),
            Record::new("3").set("name", "Cinema City Metropolis").set("status", "Active"),
            Record::new("4").set("name", "Empty Lot"),
        ]
    }

    #[test]
    fn test_value_and_render() {
        let column: Column<Record> = Column::field("status", "Status");
        let rows = theatres();
        assert_eq!(column.value(&rows[0]), Value::from("Active"));
        assert_eq!(column.render(&rows[0]), "Active");
        // Missing field renders the empty placeholder.
        assert_eq!(column.value(&rows[3]), Value::Null);
        assert_eq!(column.render(&rows[3]), "");
    }

    #[test]
    fn test_cell_takes_precedence() {
        let column: Column<Record> = Column::field("status", "Status").cell(|r: &Record| {
            let status = r.get("status").map(ToString::to_string).unwrap_or_default();
            format!("[{}]", status)
        });
        assert_eq!(column.render(&theatres()[1]), "[Inactive]");
        assert_eq!(column.value(&theatres()[1]), Value::from("Inactive"));
    }

    #[test]
    fn test_derived_options_are_distinct_and_sorted() {
        let column: Column<Record> = Column::field("status", "Status").filterable();
        assert_eq!(
            column.filter_options(&theatres()),
            vec![Value::from("Active"), Value::from("Inactive")]
        );
    }

    #[test]
    fn test_static_options_are_sorted() {
        let column: Column<Record> =
            Column::field("status", "Status").options(["Pending", "Active", "Active"]);
        assert!(column.filterable);
        assert_eq!(
            column.filter_options(&[]),
            vec![Value::from("Active"), Value::from("Pending")]
        );
    }

    #[test]
    fn test_options_dedup_across_equal_runs() {
        let column: Column<Record> = Column::field("seats", "Seats").options([
            Value::Int(120),
            Value::Long(120),
            Value::Int(120),
            Value::Int(80),
            Value::Long(120),
        ]);
        assert_eq!(
            column.filter_options(&[]),
            vec![Value::Int(80), Value::Int(120), Value::Long(120)]
        );

        let column: Column<Record> =
            Column::field("city", "City").options(["\u{e9}", "e\u{301}", "\u{e9}"]);
        assert_eq!(
            column.filter_options(&[]),
            vec![Value::from("e\u{301}"), Value::from("\u{e9}")]
        );
    }

    #[test]
    fn test_options_are_case_sensitive() {
        let rows = vec![
            Record::new("1").set("chain", "regal"),
            Record::new("2").set("chain", "Regal"),
        ];
        let column: Column<Record> = Column::field("chain", "Chain").filterable();
        assert_eq!(
            column.filter_options(&rows),
            vec![Value::from("regal"), Value::from("Regal")]
        );
    }

    #[test]
    fn test_resolve_falls_back_to_field() {
        let columns: Vec<Column<Record>> = vec![Column::derived("loud", "Loud", |r: &Record| {
            Value::from(r.get("name").map(|v| v.to_string().to_uppercase()))
        })];
        let row = &theatres()[0];
        assert_eq!(resolve(&columns, row, "loud"), Value::from("REGAL UNION SQUARE"));
        assert_eq!(resolve(&columns, row, "status"), Value::from("Active"));
        assert_eq!(resolve(&columns, row, "nope"), Value::Null);
    }
}
