//! Record sources for delegated tables.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::column::Column;
use super::engine;
use super::page::Page;
use super::paginate::clamp_page;
use super::paginate::paginate;
use super::query::TableQuery;
use super::row::TableRecord;
use crate::error::SourceError;

/// Supplies pages to a table running in delegated mode.
///
/// Implementations must honour the same semantics as local evaluation:
/// case-insensitive substring search, AND-combined filter clauses,
/// single-column stable sort, and 1-based pages whose `total_count` is the
/// number of matches before slicing.
#[async_trait]
pub trait RecordSource<T: TableRecord>: Send + Sync {
    /// Fetches the page described by `query`.
    async fn fetch(&self, query: &TableQuery) -> Result<Page<T>, SourceError>;
}

/// In-memory source that evaluates queries with the local engine.
///
/// Stands in for a backend while one does not exist. An optional latency
/// makes loading states visible.
///
/// # Example
///
/// ```ignore
/// use marquee_lib::model::Record;
/// use marquee_lib::table::{MemorySource, RecordSource, TableQuery};
///
/// let source = MemorySource::new(vec![Record::new("1"), Record::new("2")], Vec::new());
/// let page = source.fetch(&TableQuery::new(1)).await.unwrap();
/// assert_eq!(page.total_count(), 2);
/// ```
pub struct MemorySource<T: TableRecord> {
    records: Vec<T>,
    columns: Vec<Column<T>>,
    latency: Option<Duration>,
    fetches: AtomicUsize,
}

impl<T: TableRecord> MemorySource<T> {
    /// Creates a source over `records`, resolving derived column keys
    /// through `columns`.
    pub fn new(records: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self {
            records,
            columns,
            latency: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Delays every fetch by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: TableRecord> RecordSource<T> for MemorySource<T> {
    async fn fetch(&self, query: &TableQuery) -> Result<Page<T>, SourceError> {
        if query.page_size == 0 {
            return Err(SourceError::InvalidQuery(
                "page size must be greater than zero".to_string(),
            ));
        }
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let matched = engine::apply(&self.records, query, &self.columns);
        let page = clamp_page(query.page, matched.len(), query.page_size);
        debug!(
            "memory source served page {} ({} matches, requested page {})",
            page,
            matched.len(),
            query.page
        );
        Ok(paginate(&matched, page, query.page_size).map(T::clone))
    }
}
