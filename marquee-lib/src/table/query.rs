//! Query state shared by local evaluation and delegated sources.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
    /// Unsorted.
    #[default]
    None,
}

impl Direction {
    /// Next direction when a header is clicked repeatedly.
    pub fn cycle(self) -> Self {
        match self {
            Direction::None => Direction::Asc,
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
            Direction::None => "none",
        })
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            "none" | "" => Ok(Direction::None),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Single-column sort state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: Direction,
}

impl SortState {
    /// Sorts ascending on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Direction::Asc,
        }
    }

    /// Sorts descending on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Direction::Desc,
        }
    }

    /// Returns the column and direction if a sort is in effect.
    pub fn active(&self) -> Option<(&str, Direction)> {
        match (&self.column, self.direction) {
            (Some(column), Direction::Asc | Direction::Desc) => {
                Some((column.as_str(), self.direction))
            }
            _ => None,
        }
    }

    /// Returns `true` if a sort is in effect.
    pub fn is_active(&self) -> bool {
        self.active().is_some()
    }
}

/// A column constraint narrowing the visible rows.
///
/// A record passes when its value at `column` equals any of `values`
/// (see [`Value::loosely_equals`]). Clauses on different columns combine with
/// AND. A clause with no values places no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub values: Vec<Value>,
}

impl FilterClause {
    /// Creates a clause matching a single value.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            values: vec![value.into()],
        }
    }

    /// Creates a clause matching any of several values.
    pub fn any_of<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the value satisfies this clause.
    pub fn accepts(&self, value: &Value) -> bool {
        self.values.is_empty()
            || self
                .values
                .iter()
                .any(|wanted| value.loosely_equals(wanted))
    }
}

/// Everything a record source needs to produce one page.
///
/// Local tables evaluate this in memory; delegated tables hand it to their
/// [`RecordSource`](super::RecordSource), which must honour the same search,
/// filter, sort and pagination semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Free-text search term; empty means no search.
    pub search: String,
    /// Fields the search is restricted to; `None` searches every string field.
    pub search_fields: Option<Vec<String>>,
    pub filters: Vec<FilterClause>,
    pub sort: SortState,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    /// Creates a query for the first page with no search, filter or sort.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            search_fields: None,
            filters: Vec::new(),
            sort: SortState::default(),
            page: 1,
            page_size,
        }
    }

    /// Sets the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Adds a filter clause.
    pub fn with_filter(mut self, clause: FilterClause) -> Self {
        self.filters.push(clause);
        self
    }

    /// Sets the sort state.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}
