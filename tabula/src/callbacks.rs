//! Caller-supplied change callbacks.

use std::fmt;
use std::sync::Arc;

use crate::sort::SortDirection;

/// Called with `(column_id, direction)` when a sort is applied in manual
/// sorting mode. `None` means the sort was cleared.
pub type SortChangeFn = Arc<dyn Fn(&str, Option<SortDirection>) + Send + Sync>;

/// Called with the moved column's new index after a column reorder.
pub type ColumnReorderFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Optional callbacks injected at construction.
///
/// Callbacks run after the table's lock is released, so they may read the
/// table (or call `set_rows` to re-supply sorted data).
#[derive(Clone, Default)]
pub struct TableCallbacks {
    pub on_sort_change: Option<SortChangeFn>,
    pub on_column_reorder_change: Option<ColumnReorderFn>,
}

impl TableCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort change callback.
    pub fn on_sort_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<SortDirection>) + Send + Sync + 'static,
    {
        self.on_sort_change = Some(Arc::new(f));
        self
    }

    /// Set the column reorder callback.
    pub fn on_column_reorder_change<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_column_reorder_change = Some(Arc::new(f));
        self
    }

    pub(crate) fn sort_changed(&self, column: &str, direction: Option<SortDirection>) {
        if let Some(f) = &self.on_sort_change {
            f(column, direction);
        }
    }

    pub(crate) fn column_reordered(&self, new_index: usize) {
        if let Some(f) = &self.on_column_reorder_change {
            f(new_index);
        }
    }
}

impl fmt::Debug for TableCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCallbacks")
            .field("on_sort_change", &self.on_sort_change.is_some())
            .field("on_column_reorder_change", &self.on_column_reorder_change.is_some())
            .finish()
    }
}
