//! Record source errors

/// Error returned by a [`RecordSource`](crate::table::RecordSource) when a
/// delegated fetch cannot be served.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// The backing store could not be reached.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// The source rejected the query parameters.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
