//! Search, filter and sort over an in-memory record set.
//!
//! These are pure functions: they borrow the records and return the
//! surviving rows in display order. [`apply`] runs the whole pipeline in the
//! fixed order search, filter, sort; pagination happens afterwards so the
//! total count reflects every matching row.

use log::trace;

use super::collate::compare_values;
use super::column::Column;
use super::column::resolve;
use super::query::Direction;
use super::query::FilterClause;
use super::query::SortState;
use super::query::TableQuery;
use super::row::TableRecord;
use crate::model::Value;

/// Keeps records containing `term` as a case-insensitive substring.
///
/// With `fields` unset only string-valued fields are searched. With an
/// explicit field list those fields are searched through their display text,
/// whatever their type. An empty term keeps every record.
pub fn search<'a, T: TableRecord>(
    records: Vec<&'a T>,
    term: &str,
    fields: Option<&[String]>,
) -> Vec<&'a T> {
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_search(*record, &needle, fields))
        .collect()
}

fn matches_search<T: TableRecord>(record: &T, needle: &str, fields: Option<&[String]>) -> bool {
    match fields {
        Some(fields) => fields.iter().any(|name| {
            record
                .field(name)
                .is_some_and(|value| contains_folded(&value.to_string(), needle))
        }),
        None => record.field_names().iter().any(|name| {
            matches!(record.field(name), Some(Value::String(text)) if contains_folded(&text, needle))
        }),
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keeps records satisfying every clause.
pub fn filter<'a, T: TableRecord>(
    records: Vec<&'a T>,
    clauses: &[FilterClause],
    columns: &[Column<T>],
) -> Vec<&'a T> {
    if clauses.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            clauses
                .iter()
                .all(|clause| clause.accepts(&resolve(columns, *record, &clause.column)))
        })
        .collect()
}

/// Stable-sorts records by one column.
///
/// Descending uses the ascending comparator with swapped arguments, so equal
/// keys keep their original relative order in both directions. Reversing an
/// ascending result therefore differs from a descending sort only in how
/// ties are ordered. A column no record carries compares every key as equal
/// and leaves the order untouched.
pub fn sort<'a, T: TableRecord>(
    records: Vec<&'a T>,
    sort: &SortState,
    columns: &[Column<T>],
) -> Vec<&'a T> {
    let Some((column, direction)) = sort.active() else {
        return records;
    };
    let mut keyed: Vec<(Value, &'a T)> = records
        .into_iter()
        .map(|record| (resolve(columns, record, column), record))
        .collect();
    match direction {
        Direction::Asc => keyed.sort_by(|(a, _), (b, _)| compare_values(a, b)),
        Direction::Desc => keyed.sort_by(|(a, _), (b, _)| compare_values(b, a)),
        Direction::None => {}
    }
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Runs search, filter and sort for a query.
///
/// Returns every matching record in display order; the query's page fields
/// are ignored here.
pub fn apply<'a, T: TableRecord>(
    records: &'a [T],
    query: &TableQuery,
    columns: &[Column<T>],
) -> Vec<&'a T> {
    let all: Vec<&T> = records.iter().collect();
    let found = search(all, &query.search, query.search_fields.as_deref());
    let filtered = filter(found, &query.filters, columns);
    let sorted = sort(filtered, &query.sort, columns);
    trace!(
        "query matched {} of {} records (search={:?}, filters={}, sort={:?})",
        sorted.len(),
        records.len(),
        query.search,
        query.filters.len(),
        query.sort.active()
    );
    sorted
}
