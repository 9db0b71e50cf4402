//! Data table state and operations.

use std::fmt;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use log::debug;
use serde::Deserialize;
use serde::Serialize;

use super::action::RowActions;
use super::column::Column;
use super::config::ViewConfig;
use super::engine;
use super::listener::TableListener;
use super::paginate::PageLink;
use super::paginate::PageRange;
use super::paginate::clamp_page;
use super::paginate::page_window;
use super::paginate::paginate;
use super::paginate::total_pages;
use super::query::Direction;
use super::query::FilterClause;
use super::query::SortState;
use super::query::TableQuery;
use super::render;
use super::render::RenderedTable;
use super::row::TableRecord;
use super::source::RecordSource;
use crate::error::ViewError;
use crate::model::Value;

/// Where the visible page comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The table holds every record and computes pages itself.
    Local,
    /// The host computes pages and feeds them back.
    Delegated,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Local => "local",
            Mode::Delegated => "delegated",
        })
    }
}

/// UI intent owned by a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    pub search: String,
    pub filters: Vec<FilterClause>,
    pub sort: SortState,
    /// 1-based current page, always within `[1, total_pages]`.
    pub page: usize,
    pub page_size: usize,
}

impl TableState {
    fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: SortState::default(),
            page: 1,
            page_size,
        }
    }
}

type RowClickFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A state change to report to the listener once the lock is released.
#[derive(Debug)]
enum Change {
    Pagination(usize, usize),
    Search(String),
    Sort(Option<String>, Direction),
    Filter(Vec<FilterClause>),
}

/// Internal state for the data table.
struct TableInner<T: TableRecord> {
    columns: Vec<Column<T>>,
    mode: Mode,
    config: ViewConfig,
    state: TableState,
    /// Local mode: every record. Delegated mode: the page fed by the host.
    records: Vec<T>,
    /// Matches before slicing; fed by the host in delegated mode.
    total_count: usize,
    /// Rows on the current page.
    visible: Vec<T>,
    loading: bool,
    actions: Option<RowActions<T>>,
    row_click: Option<RowClickFn<T>>,
    listener: Option<Arc<dyn TableListener>>,
}

impl<T: TableRecord> TableInner<T> {
    fn new(columns: Vec<Column<T>>, mode: Mode, records: Vec<T>) -> Self {
        let config = ViewConfig::default();
        let mut inner = Self {
            columns,
            mode,
            state: TableState::new(config.page_size),
            config,
            records,
            total_count: 0,
            visible: Vec::new(),
            loading: false,
            actions: None,
            row_click: None,
            listener: None,
        };
        inner.recompute(&mut Vec::new());
        inner
    }

    fn query(&self) -> TableQuery {
        TableQuery {
            search: self.state.search.clone(),
            search_fields: self.config.search_fields.clone(),
            filters: self.state.filters.clone(),
            sort: self.state.sort.clone(),
            page: self.state.page,
            page_size: self.state.page_size,
        }
    }

    fn column(&self, key: &str) -> Result<&Column<T>, ViewError> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| ViewError::UnknownColumn(key.to_string()))
    }

    fn filterable(&self, key: &str) -> Result<(), ViewError> {
        if self.column(key)?.filterable {
            Ok(())
        } else {
            Err(ViewError::NotFilterable(key.to_string()))
        }
    }

    /// Re-derives the visible page and keeps the page number in range.
    fn recompute(&mut self, changes: &mut Vec<Change>) {
        let before = self.state.page;
        match self.mode {
            Mode::Local => {
                let query = self.query();
                let matched = engine::apply(&self.records, &query, &self.columns);
                self.total_count = matched.len();
                self.state.page =
                    clamp_page(self.state.page, self.total_count, self.state.page_size);
                self.visible = paginate(&matched, self.state.page, self.state.page_size)
                    .map(T::clone)
                    .into_records();
            }
            Mode::Delegated => {
                self.state.page =
                    clamp_page(self.state.page, self.total_count, self.state.page_size);
                self.visible = self.records.clone();
            }
        }
        if self.state.page != before {
            changes.push(Change::Pagination(self.state.page, self.state.page_size));
        }
    }

    fn reset_page(&mut self, changes: &mut Vec<Change>) {
        if self.state.page != 1 {
            self.state.page = 1;
            changes.push(Change::Pagination(1, self.state.page_size));
        }
    }

    fn apply_sort(&mut self, sort: SortState, changes: &mut Vec<Change>) {
        let sort = if sort.is_active() {
            sort
        } else {
            SortState::default()
        };
        if self.state.sort == sort {
            return;
        }
        changes.push(Change::Sort(sort.column.clone(), sort.direction));
        self.state.sort = sort;
        self.reset_page(changes);
        self.recompute(changes);
    }

    fn apply_filters(&mut self, filters: Vec<FilterClause>, changes: &mut Vec<Change>) {
        if self.state.filters == filters {
            return;
        }
        changes.push(Change::Filter(filters.clone()));
        self.state.filters = filters;
        self.reset_page(changes);
        self.recompute(changes);
    }

    fn visible_row(&self, id: &str) -> Result<&T, ViewError> {
        self.visible
            .iter()
            .find(|row| row.id() == id)
            .ok_or_else(|| ViewError::RowNotFound(id.to_string()))
    }
}

/// A searchable, filterable, sortable, paginated table over records of `T`.
///
/// The table owns its UI state (search term, filter clauses, sort, page and
/// page size) and re-derives the visible page synchronously whenever any of
/// it changes. Changing the search, a filter or the sort returns to page 1;
/// the page number is always clamped to the pages that exist.
///
/// All operations take `&self`; the state sits behind a lock so handlers
/// and async refreshes can share one table.
///
/// # Example
///
/// ```
/// use marquee_lib::model::Record;
/// use marquee_lib::table::{Column, DataTable, FilterClause};
///
/// let records = vec![
///     Record::new("1").set("name", "Regal Cinemas").set("status", "Active"),
///     Record::new("2").set("name", "AMC Lincoln Square").set("status", "Inactive"),
/// ];
/// let table = DataTable::new(
///     vec![
///         Column::field("name", "Name").sortable(),
///         Column::field("status", "Status").filterable(),
///     ],
///     records,
/// );
///
/// table.set_filter("status", ["Active"]).unwrap();
/// assert_eq!(table.total_count(), 1);
/// assert_eq!(table.visible_rows()[0].id(), "1");
/// ```
pub struct DataTable<T: TableRecord> {
    inner: Arc<RwLock<TableInner<T>>>,
    /// Bumped on every delegated state change and refresh, so a response to
    /// an older query is recognised and dropped.
    generation: Arc<AtomicU64>,
    /// Generation of the most recently started refresh.
    latest_refresh: Arc<AtomicU64>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRecord> DataTable<T> {
    /// Creates a local-mode table over `records`.
    pub fn new(columns: Vec<Column<T>>, records: Vec<T>) -> Self {
        Self::with_inner(TableInner::new(columns, Mode::Local, records))
    }

    /// Creates a delegated-mode table with no rows yet.
    pub fn delegated(columns: Vec<Column<T>>) -> Self {
        Self::with_inner(TableInner::new(columns, Mode::Delegated, Vec::new()))
    }

    fn with_inner(inner: TableInner<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
            generation: Arc::new(AtomicU64::new(0)),
            latest_refresh: Arc::new(AtomicU64::new(0)),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Applies a view configuration.
    ///
    /// A zero page size in the config is raised to one.
    pub fn with_config(self, config: ViewConfig) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.state.page_size = config.page_size.max(1);
            guard.config = config;
            guard.recompute(&mut Vec::new());
        }
        self
    }

    /// Registers the change listener.
    pub fn with_listener(self, listener: impl TableListener + 'static) -> Self {
        self.with_shared_listener(Arc::new(listener))
    }

    /// Registers a listener shared with other owners.
    pub fn with_shared_listener(self, listener: Arc<dyn TableListener>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.listener = Some(listener);
        }
        self
    }

    /// Sets the per-row action menu.
    pub fn with_actions(self, actions: RowActions<T>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.actions = Some(actions);
        }
        self
    }

    /// Sets the handler run when a row is clicked.
    pub fn with_row_click<F>(self, on_click: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.row_click = Some(Arc::new(on_click));
        }
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Get the operating mode.
    pub fn mode(&self) -> Mode {
        self.inner.read().map(|g| g.mode).unwrap_or(Mode::Local)
    }

    /// Get a snapshot of the UI state.
    pub fn state(&self) -> TableState {
        self.inner
            .read()
            .map(|g| g.state.clone())
            .unwrap_or_else(|_| TableState::new(ViewConfig::default().page_size))
    }

    /// Get the query a record source should answer for the current state.
    pub fn query(&self) -> TableQuery {
        self.inner
            .read()
            .map(|g| g.query())
            .unwrap_or_else(|_| TableQuery::new(ViewConfig::default().page_size))
    }

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the rows on the current page.
    pub fn visible_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.visible.clone())
            .unwrap_or_default()
    }

    /// Get the number of matching rows before pagination.
    pub fn total_count(&self) -> usize {
        self.inner.read().map(|g| g.total_count).unwrap_or(0)
    }

    /// Get the current 1-based page.
    pub fn page(&self) -> usize {
        self.inner.read().map(|g| g.state.page).unwrap_or(1)
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.state.page_size)
            .unwrap_or(ViewConfig::default().page_size)
    }

    /// Get the number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        self.inner
            .read()
            .map(|g| total_pages(g.total_count, g.state.page_size))
            .unwrap_or(1)
    }

    /// Get the page-number links for the current page.
    pub fn page_window(&self) -> Vec<PageLink> {
        self.inner
            .read()
            .map(|g| page_window(total_pages(g.total_count, g.state.page_size), g.state.page))
            .unwrap_or_default()
    }

    /// Get the "Showing x-y of n" range of the current page.
    pub fn page_range(&self) -> PageRange {
        self.inner
            .read()
            .map(|g| PageRange::new(g.state.page, g.state.page_size, g.total_count))
            .unwrap_or_default()
    }

    /// Returns `true` while a delegated fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Returns and clears the re-render flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Candidate values for a filterable column.
    ///
    /// Local tables derive them from every record; delegated tables only
    /// know the current page, so columns there should supply options.
    pub fn filter_options(&self, column: &str) -> Result<Vec<Value>, ViewError> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return Ok(Vec::new()),
        };
        guard.filterable(column)?;
        let column = guard.column(column)?;
        Ok(column.filter_options(&guard.records))
    }

    // -------------------------------------------------------------------------
    // State changes
    // -------------------------------------------------------------------------

    /// Runs a state change and reports what changed once the lock is gone.
    fn update<R>(&self, f: impl FnOnce(&mut TableInner<T>, &mut Vec<Change>) -> R) -> Option<R> {
        let mut changes = Vec::new();
        let (result, listener) = {
            let mut guard = self.inner.write().ok()?;
            let result = f(&mut guard, &mut changes);
            if !changes.is_empty() && guard.mode == Mode::Delegated {
                self.generation.fetch_add(1, Ordering::SeqCst);
            }
            (result, guard.listener.clone())
        };
        self.dirty.store(true, Ordering::SeqCst);
        self.emit(listener.as_deref(), changes);
        Some(result)
    }

    fn emit(&self, listener: Option<&dyn TableListener>, changes: Vec<Change>) {
        for change in changes {
            debug!("table change: {:?}", change);
            let Some(listener) = listener else { continue };
            match change {
                Change::Pagination(page, size) => listener.on_pagination_change(page, size),
                Change::Search(term) => listener.on_search_change(&term),
                Change::Sort(column, direction) => {
                    listener.on_sort_change(column.as_deref(), direction)
                }
                Change::Filter(clauses) => listener.on_filter_change(&clauses),
            }
        }
    }

    /// Set the search term and return to page 1.
    pub fn set_search(&self, term: impl Into<String>) {
        let term = term.into();
        self.update(|inner, changes| {
            if inner.state.search == term {
                return;
            }
            inner.state.search = term.clone();
            changes.push(Change::Search(term));
            inner.reset_page(changes);
            inner.recompute(changes);
        });
    }

    /// Filter a column to any of `values` and return to page 1.
    ///
    /// Replaces an existing clause on the same column; an empty value list
    /// removes it.
    pub fn set_filter<V: Into<Value>>(
        &self,
        column: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Result<(), ViewError> {
        let clause = FilterClause::any_of(column, values);
        self.update(|inner, changes| {
            inner.filterable(column)?;
            let mut filters: Vec<FilterClause> = inner
                .state
                .filters
                .iter()
                .filter(|c| c.column != column)
                .cloned()
                .collect();
            if !clause.values.is_empty() {
                filters.push(clause);
            }
            inner.apply_filters(filters, changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Remove the filter on a column.
    pub fn clear_filter(&self, column: &str) {
        self.update(|inner, changes| {
            let filters = inner
                .state
                .filters
                .iter()
                .filter(|c| c.column != column)
                .cloned()
                .collect();
            inner.apply_filters(filters, changes);
        });
    }

    /// Replace every filter clause at once.
    pub fn set_filters(&self, clauses: Vec<FilterClause>) -> Result<(), ViewError> {
        self.update(|inner, changes| {
            for clause in &clauses {
                inner.filterable(&clause.column)?;
            }
            let filters = clauses.into_iter().filter(|c| !c.values.is_empty()).collect();
            inner.apply_filters(filters, changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Remove every filter clause.
    pub fn clear_filters(&self) {
        self.update(|inner, changes| inner.apply_filters(Vec::new(), changes));
    }

    /// Sort by a column and return to page 1.
    ///
    /// [`Direction::None`] clears the sort.
    pub fn set_sort(&self, column: &str, direction: Direction) -> Result<(), ViewError> {
        self.update(|inner, changes| {
            if !inner.column(column)?.sortable {
                return Err(ViewError::NotSortable(column.to_string()));
            }
            let sort = SortState {
                column: Some(column.to_string()),
                direction,
            };
            inner.apply_sort(sort, changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Advance a column's sort the way a header click does.
    ///
    /// A column that is not the active sort starts ascending; the active
    /// column cycles ascending, descending, unsorted. Returns the new
    /// direction.
    pub fn toggle_sort(&self, column: &str) -> Result<Direction, ViewError> {
        self.update(|inner, changes| {
            if !inner.column(column)?.sortable {
                return Err(ViewError::NotSortable(column.to_string()));
            }
            let current = match inner.state.sort.active() {
                Some((active, direction)) if active == column => direction,
                _ => Direction::None,
            };
            let next = current.cycle();
            let sort = SortState {
                column: Some(column.to_string()),
                direction: next,
            };
            inner.apply_sort(sort, changes);
            Ok(next)
        })
        .unwrap_or(Ok(Direction::None))
    }

    /// Clear the sort.
    pub fn clear_sort(&self) {
        self.update(|inner, changes| inner.apply_sort(SortState::default(), changes));
    }

    /// Go to a page, clamped to the pages that exist. Returns the page
    /// actually shown.
    pub fn set_page(&self, page: usize) -> usize {
        self.update(|inner, changes| {
            let page = clamp_page(page, inner.total_count, inner.state.page_size);
            if page != inner.state.page {
                inner.state.page = page;
                changes.push(Change::Pagination(page, inner.state.page_size));
                inner.recompute(changes);
            }
            inner.state.page
        })
        .unwrap_or(1)
    }

    /// Go to the next page if there is one.
    pub fn next_page(&self) -> usize {
        self.set_page(self.page().saturating_add(1))
    }

    /// Go to the previous page if there is one.
    pub fn prev_page(&self) -> usize {
        self.set_page(self.page().saturating_sub(1))
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&self, page_size: usize) -> Result<(), ViewError> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        self.update(|inner, changes| {
            if inner.state.page_size == page_size {
                return;
            }
            inner.state.page_size = page_size;
            inner.state.page = 1;
            changes.push(Change::Pagination(1, page_size));
            inner.recompute(changes);
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the full record set of a local table.
    pub fn set_records(&self, records: Vec<T>) -> Result<(), ViewError> {
        self.update(|inner, changes| {
            if inner.mode != Mode::Local {
                return Err(ViewError::WrongMode { expected: "local" });
            }
            inner.records = records;
            inner.recompute(changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Feed a delegated table the page its host computed.
    pub fn set_page_data(&self, records: Vec<T>, total_count: usize) -> Result<(), ViewError> {
        self.update(|inner, changes| {
            if inner.mode != Mode::Delegated {
                return Err(ViewError::WrongMode {
                    expected: "delegated",
                });
            }
            inner.records = records;
            inner.total_count = total_count;
            inner.loading = false;
            inner.recompute(changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Show or hide the loading indicator of a delegated table.
    pub fn set_loading(&self, loading: bool) {
        self.update(|inner, _| inner.loading = loading);
    }

    /// Swap in an edited record with the same id.
    pub fn replace_row(&self, record: T) -> Result<(), ViewError> {
        self.update(|inner, changes| {
            let id = record.id();
            let slot = inner
                .records
                .iter_mut()
                .find(|row| row.id() == id)
                .ok_or(ViewError::RowNotFound(id))?;
            *slot = record;
            inner.recompute(changes);
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Fetch the current page from a delegated source.
    ///
    /// Sets the loading flag for the duration of the fetch. Returns `false`
    /// without applying the page if a newer state change or refresh
    /// happened while this one was in flight. The loading flag is then left
    /// to the newer refresh, or cleared if there is none.
    pub async fn refresh<S>(&self, source: &S) -> Result<bool, ViewError>
    where
        S: RecordSource<T> + ?Sized,
    {
        let query = {
            let mut guard = match self.inner.write() {
                Ok(guard) => guard,
                Err(_) => return Ok(false),
            };
            if guard.mode != Mode::Delegated {
                return Err(ViewError::WrongMode {
                    expected: "delegated",
                });
            }
            guard.loading = true;
            guard.query()
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest_refresh.fetch_max(generation, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);

        let result = source.fetch(&query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale page for generation {}", generation);
            if self.latest_refresh.load(Ordering::SeqCst) == generation {
                self.set_loading(false);
            }
            return Ok(false);
        }
        match result {
            Ok(page) => {
                let total = page.total_count();
                self.set_page_data(page.into_records(), total)?;
                Ok(true)
            }
            Err(e) => {
                self.set_loading(false);
                Err(e.into())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Row interaction
    // -------------------------------------------------------------------------

    /// Run the row-click handler for a visible row.
    pub fn click_row(&self, id: &str) -> Result<(), ViewError> {
        let (row, handler) = {
            let guard = match self.inner.read() {
                Ok(guard) => guard,
                Err(_) => return Ok(()),
            };
            (guard.visible_row(id)?.clone(), guard.row_click.clone())
        };
        if let Some(handler) = handler {
            handler(&row);
        }
        Ok(())
    }

    /// Labels of a visible row's action menu.
    pub fn actions_for(&self, id: &str) -> Result<Vec<String>, ViewError> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return Ok(Vec::new()),
        };
        let row = guard.visible_row(id)?;
        Ok(guard
            .actions
            .as_ref()
            .map(|menu| menu.for_row(row).into_iter().map(|a| a.label).collect())
            .unwrap_or_default())
    }

    /// Run the action labelled `label` on a visible row.
    pub fn invoke_action(&self, id: &str, label: &str) -> Result<(), ViewError> {
        let (row, action) = {
            let guard = match self.inner.read() {
                Ok(guard) => guard,
                Err(_) => return Ok(()),
            };
            let row = guard.visible_row(id)?.clone();
            let action = guard
                .actions
                .as_ref()
                .and_then(|menu| menu.for_row(&row).into_iter().find(|a| a.label == label))
                .ok_or_else(|| ViewError::ActionNotFound {
                    id: id.to_string(),
                    label: label.to_string(),
                })?;
            (row, action)
        };
        action.invoke(&row);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Snapshot the table for drawing.
    pub fn render(&self) -> RenderedTable {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => {
                return RenderedTable {
                    headers: Vec::new(),
                    rows: Vec::new(),
                    search: String::new(),
                    page: 1,
                    page_size: 0,
                    total_pages: 1,
                    pages: Vec::new(),
                    range: PageRange::default(),
                    loading: false,
                };
            }
        };
        let pages = total_pages(guard.total_count, guard.state.page_size);
        RenderedTable {
            headers: render::headers(&guard.columns, &guard.state.sort),
            rows: render::rows(
                &guard.columns,
                &guard.visible,
                guard.actions.as_ref(),
                &guard.config.placeholder,
            ),
            search: guard.state.search.clone(),
            page: guard.state.page,
            page_size: guard.state.page_size,
            total_pages: pages,
            pages: page_window(pages, guard.state.page),
            range: PageRange::new(guard.state.page, guard.state.page_size, guard.total_count),
            loading: guard.loading,
        }
    }
}

impl<T: TableRecord> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            generation: Arc::clone(&self.generation),
            latest_refresh: Arc::clone(&self.latest_refresh),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRecord> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("mode", &self.mode())
            .field("state", &self.state())
            .field("total_count", &self.total_count())
            .finish_non_exhaustive()
    }
}
