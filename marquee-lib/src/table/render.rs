//! Render snapshot of a data table.

use serde::Serialize;

use super::action::RowActions;
use super::column::Column;
use super::paginate::PageLink;
use super::paginate::PageRange;
use super::query::Direction;
use super::query::SortState;
use super::row::TableRecord;

/// A column header as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedHeader {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
    /// Direction if this column is the active sort column.
    pub sort: Direction,
}

impl RenderedHeader {
    /// Sort indicator glyph for the header.
    pub fn indicator(&self) -> &'static str {
        match self.sort {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
            Direction::None if self.sortable => "↕",
            Direction::None => "",
        }
    }
}

/// A body row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedRow {
    /// A record with one rendered cell per column.
    Data {
        id: String,
        cells: Vec<String>,
        /// Labels of the row's action menu.
        actions: Vec<String>,
    },
    /// The empty-state row spanning every column.
    Placeholder { text: String, span: usize },
}

/// Everything needed to draw the table once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<RenderedHeader>,
    pub rows: Vec<RenderedRow>,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub pages: Vec<PageLink>,
    pub range: PageRange,
    pub loading: bool,
}

impl RenderedTable {
    /// Returns `true` if the body is the empty-state placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.rows.as_slice(), [RenderedRow::Placeholder { .. }])
    }

    /// Number of record rows in the body.
    pub fn data_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, RenderedRow::Data { .. }))
            .count()
    }
}

pub(super) fn headers<T: TableRecord>(columns: &[Column<T>], sort: &SortState) -> Vec<RenderedHeader> {
    let active = sort.active();
    columns
        .iter()
        .map(|column| RenderedHeader {
            key: column.key.clone(),
            label: column.header.clone(),
            sortable: column.sortable,
            filterable: column.filterable,
            sort: match active {
                Some((key, direction)) if key == column.key => direction,
                _ => Direction::None,
            },
        })
        .collect()
}

pub(super) fn rows<T: TableRecord>(
    columns: &[Column<T>],
    records: &[T],
    actions: Option<&RowActions<T>>,
    placeholder: &str,
) -> Vec<RenderedRow> {
    if records.is_empty() {
        return vec![RenderedRow::Placeholder {
            text: placeholder.to_string(),
            span: columns.len().max(1),
        }];
    }
    records
        .iter()
        .map(|record| RenderedRow::Data {
            id: record.id(),
            cells: columns.iter().map(|column| column.render(record)).collect(),
            actions: actions
                .map(|menu| menu.for_row(record).into_iter().map(|a| a.label).collect())
                .unwrap_or_default(),
        })
        .collect()
}
