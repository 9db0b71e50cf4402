//! Change notifications emitted by a data table.

use super::query::Direction;
use super::query::FilterClause;

/// Receives the table's change notifications.
///
/// Delegated tables rely on these to tell their host which page to load
/// next; local tables emit them too so hosts can persist or mirror the
/// state. Every method defaults to doing nothing.
///
/// Notifications are delivered after the table has released its state, so
/// a listener may call back into the table.
pub trait TableListener: Send + Sync {
    /// The page or page size changed.
    fn on_pagination_change(&self, _page: usize, _page_size: usize) {}

    /// The search term changed.
    fn on_search_change(&self, _term: &str) {}

    /// The sort column or direction changed.
    fn on_sort_change(&self, _column: Option<&str>, _direction: Direction) {}

    /// The set of filter clauses changed.
    fn on_filter_change(&self, _clauses: &[FilterClause]) {}
}
