//! Per-row actions.

use std::fmt;
use std::sync::Arc;

/// A labelled action offered in a row's action menu.
pub struct RowAction<T> {
    pub label: String,
    on_click: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T> RowAction<T> {
    /// Creates an action invoking `on_click` with the row it belongs to.
    pub fn new<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            on_click: Arc::new(on_click),
        }
    }

    /// Runs the action for a row.
    pub fn invoke(&self, row: &T) {
        (self.on_click)(row)
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Produces the action menu for a row.
///
/// Fixed menus are wrapped with [`RowActions::fixed`] so the table only ever
/// deals with one shape.
pub struct RowActions<T> {
    menu: Arc<dyn Fn(&T) -> Vec<RowAction<T>> + Send + Sync>,
}

impl<T: 'static> RowActions<T> {
    /// Builds the menu per row.
    pub fn per_row<F>(menu: F) -> Self
    where
        F: Fn(&T) -> Vec<RowAction<T>> + Send + Sync + 'static,
    {
        Self {
            menu: Arc::new(menu),
        }
    }

    /// Offers the same actions on every row.
    pub fn fixed(actions: Vec<RowAction<T>>) -> Self {
        Self::per_row(move |_| actions.clone())
    }

    /// Returns the actions for a row.
    pub fn for_row(&self, row: &T) -> Vec<RowAction<T>> {
        (self.menu)(row)
    }
}

impl<T> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        Self {
            menu: Arc::clone(&self.menu),
        }
    }
}

impl<T> fmt::Debug for RowActions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowActions(..)")
    }
}
