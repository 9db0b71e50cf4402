//! Errors raised by the tabular data view

use super::SourceError;

/// Error type for [`DataTable`](crate::table::DataTable) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// A page size of zero was requested.
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// The column key is not declared on this table.
    #[error("column '{0}' is not declared on this table")]
    UnknownColumn(String),

    /// The column exists but does not allow sorting.
    #[error("column '{0}' is not sortable")]
    NotSortable(String),

    /// The column exists but does not allow filtering.
    #[error("column '{0}' is not filterable")]
    NotFilterable(String),

    /// No visible row carries the given id.
    #[error("no row with id '{0}'")]
    RowNotFound(String),

    /// The row has no action with the given label.
    #[error("row '{id}' has no action labelled '{label}'")]
    ActionNotFound { id: String, label: String },

    /// The operation only applies to the other operating mode.
    #[error("operation requires {expected} mode")]
    WrongMode { expected: &'static str },

    /// The delegated record source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
