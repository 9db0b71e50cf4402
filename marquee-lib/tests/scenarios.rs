//! End-to-end table behaviour in local and delegated mode.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use marquee_lib::console::fixtures;
use marquee_lib::console::screens::theatre_columns;
use marquee_lib::console::Theatre;
use marquee_lib::error::{SourceError, ViewError};
use marquee_lib::model::Record;
use marquee_lib::table::paginate::page_window;
use marquee_lib::table::{
    Column, DataTable, MemorySource, Page, PageLink, RecordSource, TableListener, TableQuery,
};

fn ids<T: marquee_lib::table::TableRecord>(rows: &[T]) -> Vec<String> {
    rows.iter().map(|r| r.id()).collect()
}

// =============================================================================
// Local mode
// =============================================================================

#[test]
fn second_page_of_twelve() {
    let records: Vec<Record> = (1..=12)
        .map(|i| Record::new(format!("r{}", i)).set("name", format!("Row {}", i)))
        .collect();
    let table = DataTable::new(vec![Column::field("name", "Name")], records);

    assert_eq!(table.set_page(2), 2);
    assert_eq!(table.visible_rows().len(), 2);
    assert_eq!(table.total_count(), 12);
    assert_eq!(table.page_range().to_string(), "Showing 11-12 of 12");
}

#[test]
fn search_for_cinema() {
    let table = DataTable::new(theatre_columns(), fixtures::theatres());
    table.set_search("cinema");

    let rows = table.visible_rows();
    let names: Vec<&str> = rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Cinema City Metropolis", "Regal Cinemas Union Square"]);
}

#[test]
fn filter_active_status() {
    let records = vec![
        Record::new("1").set("status", "Active"),
        Record::new("2").set("status", "Inactive"),
        Record::new("3").set("status", "Active"),
        Record::new("4").set("status", "Inactive"),
        Record::new("5").set("status", "Active"),
    ];
    let table = DataTable::new(vec![Column::field("status", "Status").filterable()], records);
    table.set_filter("status", ["Active"]).unwrap();

    assert_eq!(table.total_count(), 3);
    assert_eq!(ids(&table.visible_rows()), ["1", "3", "5"]);
}

#[test]
fn page_window_around_middle() {
    let window: Vec<String> = page_window(8, 5).iter().map(|l| l.to_string()).collect();
    assert_eq!(window.join(" "), "1 … 4 5 6 … 8");
    assert_eq!(
        page_window(8, 5),
        [
            PageLink::Page(1),
            PageLink::Ellipsis,
            PageLink::Page(4),
            PageLink::Page(5),
            PageLink::Page(6),
            PageLink::Ellipsis,
            PageLink::Page(8),
        ]
    );
}

#[test]
fn empty_result_renders_placeholder() {
    let table = DataTable::new(theatre_columns(), fixtures::theatres());
    table.set_search("no such theatre");

    let rendered = table.render();
    assert!(rendered.is_empty());
    assert_eq!(rendered.page, 1);
    assert_eq!(rendered.total_pages, 1);
    assert_eq!(rendered.range.to_string(), "Showing 0 of 0");
}

#[test]
fn edited_row_replaces_original() {
    let table = DataTable::new(theatre_columns(), fixtures::theatres());
    let mut theatre: Theatre = table.visible_rows()[0].clone();
    theatre.name = "Cinema City Arkadia".to_string();
    table.replace_row(theatre).unwrap();

    table.set_search("arkadia");
    assert_eq!(ids(&table.visible_rows()), ["th-001"]);
}

// =============================================================================
// Delegated mode
// =============================================================================

#[tokio::test]
async fn refresh_fetches_current_page() {
    let source = MemorySource::new(fixtures::theatres(), theatre_columns());
    let table = DataTable::delegated(theatre_columns());

    assert!(table.refresh(&source).await.unwrap());
    assert_eq!(table.total_count(), 12);
    assert_eq!(table.visible_rows().len(), 10);
    assert_eq!(table.total_pages(), 2);

    assert_eq!(table.set_page(2), 2);
    assert!(table.refresh(&source).await.unwrap());
    assert_eq!(ids(&table.visible_rows()), ["th-011", "th-012"]);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn delegated_query_reaches_source() {
    let source = MemorySource::new(fixtures::theatres(), theatre_columns());
    let table = DataTable::delegated(theatre_columns());
    table.set_filter("country", ["United Kingdom"]).unwrap();
    table.set_sort("name", marquee_lib::table::Direction::Asc).unwrap();

    table.refresh(&source).await.unwrap();
    let names: Vec<String> = table.visible_rows().into_iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        ["Cineworld Glasgow", "Odeon Leicester Square", "Vue Westfield"]
    );
}

#[tokio::test]
async fn stale_response_is_discarded() {
    let slow = MemorySource::new(fixtures::theatres(), theatre_columns())
        .with_latency(Duration::from_millis(80));
    let fast = MemorySource::new(fixtures::theatres(), theatre_columns());
    let table = DataTable::delegated(theatre_columns());

    let superseding = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        table.set_search("regal");
        table.refresh(&fast).await
    };
    let (first, second) = tokio::join!(table.refresh(&slow), superseding);

    assert_eq!(first, Ok(false));
    assert_eq!(second, Ok(true));
    assert_eq!(table.total_count(), 1);
    assert_eq!(ids(&table.visible_rows()), ["th-002"]);
}

#[tokio::test]
async fn superseded_refresh_clears_loading() {
    let source = MemorySource::new(fixtures::theatres(), theatre_columns())
        .with_latency(Duration::from_millis(60));
    let table = DataTable::delegated(theatre_columns());

    let change = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        table.set_search("regal");
    };
    let (result, ()) = tokio::join!(table.refresh(&source), change);

    assert_eq!(result, Ok(false));
    assert!(!table.is_loading());
    assert_eq!(table.total_count(), 0);
}

#[tokio::test]
async fn superseded_refresh_keeps_loading_for_newer_fetch() {
    let first = MemorySource::new(fixtures::theatres(), theatre_columns())
        .with_latency(Duration::from_millis(30));
    let second = MemorySource::new(fixtures::theatres(), theatre_columns())
        .with_latency(Duration::from_millis(80));
    let table = DataTable::delegated(theatre_columns());

    let newer = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        table.set_search("regal");
        table.refresh(&second).await
    };
    let observe = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        table.is_loading()
    };
    let (stale, fresh, loading_between) = tokio::join!(table.refresh(&first), newer, observe);

    assert_eq!(stale, Ok(false));
    assert_eq!(fresh, Ok(true));
    assert!(loading_between);
    assert!(!table.is_loading());
    assert_eq!(ids(&table.visible_rows()), ["th-002"]);
}

#[tokio::test]
async fn loading_flag_spans_fetch() {
    let source = MemorySource::new(fixtures::theatres(), theatre_columns())
        .with_latency(Duration::from_millis(40));
    let table = DataTable::delegated(theatre_columns());
    assert!(!table.is_loading());

    let observe = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        (table.is_loading(), table.render().loading)
    };
    let (result, seen) = tokio::join!(table.refresh(&source), observe);

    assert_eq!(result, Ok(true));
    assert_eq!(seen, (true, true));
    assert!(!table.is_loading());
}

struct Offline;

#[async_trait]
impl RecordSource<Theatre> for Offline {
    async fn fetch(&self, _query: &TableQuery) -> Result<Page<Theatre>, SourceError> {
        Err(SourceError::Unavailable("backend offline".to_string()))
    }
}

#[tokio::test]
async fn source_failure_clears_loading() {
    let table = DataTable::delegated(theatre_columns());
    let err = table.refresh(&Offline).await.unwrap_err();

    assert_eq!(
        err,
        ViewError::Source(SourceError::Unavailable("backend offline".to_string()))
    );
    assert!(!table.is_loading());
    assert!(table.render().is_empty());
}

#[tokio::test]
async fn local_table_cannot_refresh() {
    let source = MemorySource::new(fixtures::theatres(), theatre_columns());
    let table = DataTable::new(theatre_columns(), fixtures::theatres());
    assert!(matches!(
        table.refresh(&source).await,
        Err(ViewError::WrongMode { .. })
    ));
}

#[derive(Default)]
struct SearchLog(Mutex<Vec<String>>);

impl TableListener for SearchLog {
    fn on_search_change(&self, term: &str) {
        if let Ok(mut log) = self.0.lock() {
            log.push(term.to_string());
        }
    }
}

#[tokio::test]
async fn host_driven_refresh_from_notifications() {
    let log = Arc::new(SearchLog::default());
    let source = MemorySource::new(fixtures::theatres(), theatre_columns());
    let table = DataTable::delegated(theatre_columns()).with_shared_listener(log.clone());

    table.set_search("square");
    table.set_search("square");
    table.refresh(&source).await.unwrap();

    assert_eq!(*log.0.lock().unwrap(), ["square"]);
    assert_eq!(table.total_count(), 3);
}
