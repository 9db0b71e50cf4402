//! Generic tabular data view.
//!
//! Turns a collection of uniquely identified records and a set of column
//! descriptors into a searched, filtered, sorted and paginated view.
//!
//! # Layers
//!
//! - [`Column`] - how one field is extracted, rendered and offered as filter
//! - [`engine`] - pure search, filter and sort over a record slice
//! - [`paginate`] - page slicing, clamping and the page-number window
//! - [`DataTable`] - owns the UI state and re-derives the visible page
//!
//! # Operating modes
//!
//! In [`Mode::Local`] the table owns the full record set and recomputes the
//! visible page synchronously on every change. In [`Mode::Delegated`] it only
//! tracks intent, notifies a [`TableListener`], and is fed the current page by
//! its host, usually through [`DataTable::refresh`] against a [`RecordSource`].

mod action;
mod collate;
mod column;
mod config;
pub mod engine;
mod listener;
mod page;
pub mod paginate;
mod query;
mod render;
mod row;
mod source;
mod view;

pub use action::RowAction;
pub use action::RowActions;
pub use collate::compare_strings;
pub use collate::compare_values;
pub use column::Accessor;
pub use column::Column;
pub use column::FilterOptions;
pub use config::ViewConfig;
pub use listener::TableListener;
pub use page::Page;
pub use paginate::PageLink;
pub use paginate::PageRange;
pub use query::Direction;
pub use query::FilterClause;
pub use query::SortState;
pub use query::TableQuery;
pub use render::RenderedHeader;
pub use render::RenderedRow;
pub use render::RenderedTable;
pub use row::TableRecord;
pub use source::MemorySource;
pub use source::RecordSource;
pub use view::DataTable;
pub use view::Mode;
pub use view::TableState;
