//! Page type for one slice of table rows.

use serde::Deserialize;
use serde::Serialize;

/// A page of rows together with the number of rows that matched overall.
///
/// Returned by [`paginate`](super::paginate::paginate) in local mode and by
/// a [`RecordSource`](super::RecordSource) in delegated mode.
///
/// # Example
///
/// ```
/// use marquee_lib::table::Page;
///
/// let page = Page::new(vec!["th-011", "th-012"], 12);
/// assert_eq!(page.len(), 2);
/// assert_eq!(page.total_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    records: Vec<T>,
    /// Matching rows after search and filter, before slicing.
    total_count: usize,
}

impl<T> Page<T> {
    /// Creates a page from its rows and the overall match count.
    pub fn new(records: Vec<T>, total_count: usize) -> Self {
        Self {
            records,
            total_count,
        }
    }

    /// Creates an empty page with no matches.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Returns a reference to the rows in this page.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consumes the page and returns the rows.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Returns the number of rows that matched before slicing.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Converts the rows, keeping the match count.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page::new(self.records.into_iter().map(f).collect(), self.total_count)
    }
}
