//! Table state.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::callbacks::TableCallbacks;
use crate::cell::CellValue;
use crate::column::Column;
use crate::error::TableError;
use crate::filter::RowFilter;
use crate::key::RowKey;
use crate::options::TableOptions;
use crate::order::{self, Step};
use crate::pins::Pins;
use crate::record::TableRecord;
use crate::selection::{CheckState, Selection};
use crate::sort::{SortAction, SortDescriptor, SortDirection, SortState};

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Internal state for the Table.
#[derive(Debug)]
pub(super) struct TableInner<T: TableRecord> {
    /// Feature flags, fixed at construction.
    pub options: TableOptions,
    /// Data columns in current display order.
    pub columns: Vec<Column>,
    /// Records as supplied by the caller.
    pub rows: Vec<T>,
    /// Resolved key of each record, parallel to `rows`.
    pub keys: Vec<RowKey>,
    /// Key to record index.
    pub index: HashMap<RowKey, usize>,
    /// Base row order as record indices.
    pub order: Vec<usize>,
    pub selection: Selection,
    pub pins: Pins,
    pub sort: SortState,
    /// Current filter query (empty = no filter).
    pub filter: String,
}

impl<T: TableRecord> TableInner<T> {
    fn new(options: TableOptions, columns: Vec<Column>, rows: Vec<T>) -> Self {
        let mut inner = Self {
            options,
            columns,
            rows: Vec::new(),
            keys: Vec::new(),
            index: HashMap::new(),
            order: Vec::new(),
            selection: Selection::new(),
            pins: Pins::new(),
            sort: SortState::new(),
            filter: String::new(),
        };
        inner.replace_rows(rows);
        inner
    }

    /// Resolve record keys. Missing or duplicate keys fall back to the
    /// record's position.
    fn resolve_keys(rows: &[T]) -> Vec<RowKey> {
        let mut seen = HashSet::new();
        rows.iter()
            .enumerate()
            .map(|(i, row)| match row.key() {
                Some(key) if !seen.contains(&key) => {
                    seen.insert(key.clone());
                    key
                }
                Some(key) => {
                    debug!("Duplicate row key {key}, using position {i}");
                    RowKey::Position(i)
                }
                None => RowKey::Position(i),
            })
            .collect()
    }

    pub fn replace_rows(&mut self, rows: Vec<T>) {
        self.keys = Self::resolve_keys(&rows);
        self.index = self
            .keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), i))
            .collect();
        self.order = (0..rows.len()).collect();
        self.rows = rows;
        let index = &self.index;
        self.selection.retain(|key| index.contains_key(key));
        self.pins.retain(|key| index.contains_key(key));
    }

    pub fn cell(&self, row: usize, column_id: &str) -> CellValue {
        self.rows
            .get(row)
            .map(|r| r.cell(column_id))
            .unwrap_or_default()
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Text of a row's data cells, used for filtering.
    fn row_text(&self, row: usize) -> String {
        self.columns
            .iter()
            .map(|c| self.cell(row, &c.id).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Base order restricted to rows passing the filter.
    pub fn visible(&self) -> Vec<usize> {
        if self.filter.trim().is_empty() {
            return self.order.clone();
        }
        let mut filter = RowFilter::new(&self.filter);
        self.order
            .iter()
            .copied()
            .filter(|&row| filter.matches(&self.row_text(row)))
            .collect()
    }

    /// Visible pinned rows, in pin order.
    pub fn pinned_view(&self, visible: &[usize]) -> Vec<usize> {
        let visible: HashSet<usize> = visible.iter().copied().collect();
        self.pins
            .keys()
            .iter()
            .filter_map(|key| self.index.get(key).copied())
            .filter(|row| visible.contains(row))
            .collect()
    }

    /// Visible unpinned rows, locally sorted unless sorting is manual.
    pub fn unpinned_view(&self, visible: &[usize]) -> Vec<usize> {
        let mut rows: Vec<usize> = visible
            .iter()
            .copied()
            .filter(|&row| !self.pins.is_pinned(&self.keys[row]))
            .collect();
        if !self.options.manual_sorting && !self.sort.is_empty() {
            rows.sort_by(|&a, &b| self.sort.compare(|row, col| self.cell(row, col), a, b));
        }
        rows
    }

    /// Visible rows in render order: pinned first, then unpinned.
    pub fn render_order(&self) -> Vec<usize> {
        let visible = self.visible();
        let mut rows = self.pinned_view(&visible);
        rows.extend(self.unpinned_view(&visible));
        rows
    }

    fn keys_of(&self, rows: &[usize]) -> Vec<RowKey> {
        rows.iter().map(|&row| self.keys[row].clone()).collect()
    }

    /// Work out a row move without applying it.
    ///
    /// Returns the new unpinned view order and the moved keys, or `None`
    /// when the move is a no-op.
    pub fn plan_row_move(&self, key: &RowKey, step: Step) -> Option<(Vec<RowKey>, Vec<RowKey>)> {
        if self.pins.is_pinned(key) || !self.index.contains_key(key) {
            return None;
        }
        let visible = self.visible();
        let mut view = self.keys_of(&self.unpinned_view(&visible));
        let acting_selected = self.selection.is_selected(key);
        let moved = order::move_block(&mut view, key, step, |k| {
            if acting_selected {
                self.selection.is_selected(k)
            } else {
                k == key
            }
        });
        (!moved.is_empty()).then_some((view, moved))
    }

    /// Write a new order for the rows in `view` into their base slots.
    fn commit_view(&mut self, view: &[RowKey]) {
        let rows: Vec<usize> = view
            .iter()
            .filter_map(|key| self.index.get(key).copied())
            .collect();
        let members: HashSet<usize> = rows.iter().copied().collect();
        let mut incoming = rows.into_iter();
        for slot in self.order.iter_mut() {
            if members.contains(slot)
                && let Some(row) = incoming.next()
            {
                *slot = row;
            }
        }
    }

    pub fn check_state(&self) -> CheckState {
        let visible = self.keys_of(&self.visible());
        self.selection.check_state(&visible)
    }

    /// Swap a data column with its neighbour. Returns the new index.
    pub fn move_column(&mut self, index: usize, step: Step) -> Option<usize> {
        if !self.columns.get(index)?.reorderable {
            trace!("Column {index} is not reorderable");
            return None;
        }
        let moved = order::swap_adjacent(&mut self.columns, index, step);
        if moved.is_none() {
            trace!("Column move {step:?} from {index} is out of bounds");
        }
        moved
    }

    /// Move a row (or its selected block) one step. Returns the moved keys.
    pub fn move_rows(&mut self, key: &RowKey, step: Step) -> Vec<RowKey> {
        let Some((view, moved)) = self.plan_row_move(key, step) else {
            trace!("Row move {step:?} for {key} is a no-op");
            return Vec::new();
        };
        self.commit_view(&view);
        if !self.options.manual_sorting && self.sort.clear() {
            debug!("Local sort cleared by manual row move");
        }
        debug!("Moved rows {moved:?} {step:?}");
        moved
    }

    pub fn toggle_pin(&mut self, key: &RowKey) -> Option<bool> {
        if !self.index.contains_key(key) {
            return None;
        }
        let pinned = self.pins.toggle(key);
        debug!("Row {key} pinned: {pinned}");
        Some(pinned)
    }

    pub fn select_all(&mut self) -> Vec<RowKey> {
        let visible = self.keys_of(&self.render_order());
        let added = self.selection.select_all(&visible);
        if !added.is_empty() {
            debug!("Selected {} rows", added.len());
        }
        added
    }

    pub fn deselect_all(&mut self) -> Vec<RowKey> {
        let removed = self.selection.clear();
        if !removed.is_empty() {
            debug!("Deselected {} rows", removed.len());
        }
        removed
    }

    /// Clear the selection when every visible row is selected, otherwise
    /// select every visible row. Returns true if anything changed.
    pub fn toggle_all(&mut self) -> bool {
        if self.check_state() == CheckState::Checked {
            !self.deselect_all().is_empty()
        } else {
            !self.select_all().is_empty()
        }
    }

    /// Record a sort action. Callbacks are left to the caller.
    pub fn apply_sort(&mut self, column_id: &str, action: SortAction) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable || !action.is_enabled(self.sort.direction(column_id)) {
            trace!("Sort {action:?} on '{column_id}' is disabled");
            return false;
        }
        let multi = self.options.multi_sort;
        self.sort.set(column_id, action.direction(), multi);
        debug!("Sort {action:?} applied to '{column_id}'");
        true
    }

    /// Drop every sort descriptor. Returns the columns that were sorted.
    pub fn clear_sort(&mut self) -> Vec<String> {
        let cleared: Vec<String> = self
            .sort
            .descriptors()
            .iter()
            .map(|d| d.column.clone())
            .collect();
        if self.sort.clear() {
            debug!("Sort cleared on {cleared:?}");
        }
        cleared
    }
}

/// A headless data table.
///
/// `Table<T>` owns the interactive state of a table of records:
/// - Data column order, with move-left/right
/// - Base row order, with multi-row move-up/down
/// - Per-row selection with a derived select-all state
/// - Sort descriptors, applied locally or reported to the caller
/// - Pinned rows, rendered first and exempt from reordering
/// - A fuzzy filter deciding which rows are visible
///
/// It is a cheap handle: clones share state. Every operation is synchronous
/// and either changes state or is a no-op; nothing returns an error once the
/// table is built. Read the derived view with [`Table::snapshot`].
#[derive(Debug)]
pub struct Table<T: TableRecord> {
    id: TableId,
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    pub(super) callbacks: TableCallbacks,
    pub(super) dirty: Arc<AtomicBool>,
}

/// Builder for [`Table`].
#[derive(Debug)]
pub struct TableBuilder<T: TableRecord> {
    columns: Vec<Column>,
    rows: Vec<T>,
    options: TableOptions,
    callbacks: TableCallbacks,
}

impl<T: TableRecord> TableBuilder<T> {
    /// Set the data columns.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the initial rows.
    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    /// Set the feature flags.
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the change callbacks.
    pub fn callbacks(mut self, callbacks: TableCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<Table<T>, TableError> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }
        }
        let table = Table {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(
                self.options,
                self.columns,
                self.rows,
            ))),
            callbacks: self.callbacks,
            dirty: Arc::new(AtomicBool::new(false)),
        };
        debug!("Built table {} with {} rows", table.id, table.len());
        Ok(table)
    }
}

impl<T: TableRecord> Table<T> {
    /// Start building a table.
    pub fn builder() -> TableBuilder<T> {
        TableBuilder {
            columns: Vec::new(),
            rows: Vec::new(),
            options: TableOptions::default(),
            callbacks: TableCallbacks::default(),
        }
    }

    /// Create a table with default options and no callbacks.
    pub fn new(columns: Vec<Column>, rows: Vec<T>) -> Result<Self, TableError> {
        Self::builder().columns(columns).rows(rows).build()
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the feature flags.
    pub fn options(&self) -> TableOptions {
        self.inner
            .read()
            .map(|g| g.options.clone())
            .unwrap_or_default()
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Bookkeeping after a column move, run with the lock released.
    pub(super) fn column_moved(&self, from: usize, to: usize) {
        debug!("Moved column {from} to {to}");
        self.mark_dirty();
        self.callbacks.column_reordered(to);
    }

    /// Bookkeeping after a sort change, run with the lock released.
    ///
    /// In manual sorting mode the change is reported to the caller.
    pub(super) fn sort_changed(
        &self,
        column_id: &str,
        direction: Option<SortDirection>,
        manual: bool,
    ) {
        self.mark_dirty();
        if manual {
            self.callbacks.sort_changed(column_id, direction);
        }
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the data columns in display order.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the data column ids in display order.
    pub fn column_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.columns.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default()
    }

    /// Position of a data column in display order.
    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.column_index(column_id))
    }

    // -------------------------------------------------------------------------
    // Column reordering
    // -------------------------------------------------------------------------

    fn move_column(&self, index: usize, step: Step) -> Option<usize> {
        let new_index = self.inner.write().ok()?.move_column(index, step)?;
        self.column_moved(index, new_index);
        Some(new_index)
    }

    /// Swap the data column at `index` with its left neighbour.
    ///
    /// Returns the column's new index, or `None` if it is already first,
    /// out of range or not reorderable.
    pub fn move_column_left(&self, index: usize) -> Option<usize> {
        self.move_column(index, Step::Back)
    }

    /// Swap the data column at `index` with its right neighbour.
    pub fn move_column_right(&self, index: usize) -> Option<usize> {
        self.move_column(index, Step::Forward)
    }

    /// [`move_column_left`](Self::move_column_left) by column id.
    pub fn move_column_left_by_id(&self, column_id: &str) -> Option<usize> {
        self.move_column(self.column_index(column_id)?, Step::Back)
    }

    /// [`move_column_right`](Self::move_column_right) by column id.
    pub fn move_column_right_by_id(&self, column_id: &str) -> Option<usize> {
        self.move_column(self.column_index(column_id)?, Step::Forward)
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows, hidden rows included.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a record by key.
    pub fn row(&self, key: &RowKey) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.index.get(key).map(|&i| g.rows[i].clone()))
    }

    /// Get all records in base order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.order.iter().map(|&i| g.rows[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Keys of all rows in base order.
    pub fn base_keys(&self) -> Vec<RowKey> {
        self.inner
            .read()
            .map(|g| g.keys_of(&g.order))
            .unwrap_or_default()
    }

    /// Keys of the visible rows in render order.
    pub fn keys(&self) -> Vec<RowKey> {
        self.inner
            .read()
            .map(|g| g.keys_of(&g.render_order()))
            .unwrap_or_default()
    }

    /// Replace all rows.
    ///
    /// The base order becomes the order of `rows`. Selection and pins are
    /// kept for keys that are still present.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.replace_rows(rows);
            debug!("Table {} rows replaced ({} rows)", self.id, guard.rows.len());
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Row reordering
    // -------------------------------------------------------------------------

    fn move_rows(&self, key: &RowKey, step: Step) -> Vec<RowKey> {
        let Ok(mut guard) = self.inner.write() else {
            return Vec::new();
        };
        let moved = guard.move_rows(key, step);
        if !moved.is_empty() {
            self.mark_dirty();
        }
        moved
    }

    /// Move a row up past its visible neighbour.
    ///
    /// If the row is selected, every selected visible row moves with it as a
    /// block. The block lands directly above the nearest unselected row
    /// above the acting row, so a selected row already sitting above that
    /// neighbour keeps its position yet is still reported.
    ///
    /// Returns the keys of the block that was placed (the whole move set);
    /// empty when the row is pinned, hidden, unknown or already first.
    pub fn move_rows_up(&self, key: &RowKey) -> Vec<RowKey> {
        self.move_rows(key, Step::Back)
    }

    /// Move a row down past its visible neighbour. See [`move_rows_up`](Self::move_rows_up).
    pub fn move_rows_down(&self, key: &RowKey) -> Vec<RowKey> {
        self.move_rows(key, Step::Forward)
    }

    // -------------------------------------------------------------------------
    // Pinning
    // -------------------------------------------------------------------------

    /// Check if a row is pinned.
    pub fn is_pinned(&self, key: &RowKey) -> bool {
        self.inner
            .read()
            .map(|g| g.pins.is_pinned(key))
            .unwrap_or(false)
    }

    /// Pin a row. Returns true if it changed.
    pub fn pin(&self, key: &RowKey) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.index.contains_key(key)
            && guard.pins.pin(key.clone())
        {
            debug!("Pinned row {key}");
            self.mark_dirty();
            return true;
        }
        false
    }

    /// Unpin a row. Returns true if it changed.
    pub fn unpin(&self, key: &RowKey) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.pins.unpin(key)
        {
            debug!("Unpinned row {key}");
            self.mark_dirty();
            return true;
        }
        false
    }

    /// Flip the pin state of a row. Returns the new state, or `None` for an
    /// unknown key.
    pub fn toggle_pin(&self, key: &RowKey) -> Option<bool> {
        let pinned = self.inner.write().ok()?.toggle_pin(key)?;
        self.mark_dirty();
        Some(pinned)
    }

    /// Keys of pinned rows in pin order.
    pub fn pinned_keys(&self) -> Vec<RowKey> {
        self.inner
            .read()
            .map(|g| g.pins.keys().to_vec())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check if a row is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Set the selection flag of a row. Returns true if it changed.
    pub fn set_selected(&self, key: &RowKey, selected: bool) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.index.contains_key(key)
            && guard.selection.set(key.clone(), selected)
        {
            self.mark_dirty();
            return true;
        }
        false
    }

    /// Flip the selection flag of a row. Returns the new flag, or `None` for
    /// an unknown key.
    pub fn toggle_row(&self, key: &RowKey) -> Option<bool> {
        let mut guard = self.inner.write().ok()?;
        if !guard.index.contains_key(key) {
            return None;
        }
        let selected = guard.selection.toggle(key);
        self.mark_dirty();
        Some(selected)
    }

    /// Select every visible row. Returns the newly selected keys.
    pub fn select_all(&self) -> Vec<RowKey> {
        let Ok(mut guard) = self.inner.write() else {
            return Vec::new();
        };
        let added = guard.select_all();
        if !added.is_empty() {
            self.mark_dirty();
        }
        added
    }

    /// Deselect every row. Returns the deselected keys.
    pub fn deselect_all(&self) -> Vec<RowKey> {
        let Ok(mut guard) = self.inner.write() else {
            return Vec::new();
        };
        let removed = guard.deselect_all();
        if !removed.is_empty() {
            self.mark_dirty();
        }
        removed
    }

    /// Activate the select-all header: clear when every visible row is
    /// selected, otherwise select all visible rows. Returns the resulting
    /// header state.
    pub fn toggle_all(&self) -> CheckState {
        let Ok(mut guard) = self.inner.write() else {
            return CheckState::Unchecked;
        };
        if guard.toggle_all() {
            self.mark_dirty();
        }
        guard.check_state()
    }

    /// The select-all header state, derived from the current selection.
    pub fn header_check_state(&self) -> CheckState {
        self.inner
            .read()
            .map(|g| g.check_state())
            .unwrap_or(CheckState::Unchecked)
    }

    /// Selected keys in base order, hidden rows included.
    pub fn selected_keys(&self) -> Vec<RowKey> {
        self.inner
            .read()
            .map(|g| {
                g.order
                    .iter()
                    .map(|&i| &g.keys[i])
                    .filter(|key| g.selection.is_selected(key))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Active sort descriptors, highest priority first.
    pub fn sort(&self) -> Vec<SortDescriptor> {
        self.inner
            .read()
            .map(|g| g.sort.descriptors().to_vec())
            .unwrap_or_default()
    }

    /// Current sort direction of a column.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.sort.direction(column_id))
    }

    /// Whether a sort action would change the given column.
    pub fn can_apply_sort(&self, column_id: &str, action: SortAction) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.columns
                    .iter()
                    .any(|c| c.id == column_id && c.sortable)
                    && action.is_enabled(g.sort.direction(column_id))
            })
            .unwrap_or(false)
    }

    /// Apply a sort action to a column.
    ///
    /// In manual sorting mode the new direction is reported through the
    /// `on_sort_change` callback and no local sorting happens; the caller is
    /// expected to re-supply sorted rows with [`set_rows`](Self::set_rows).
    ///
    /// Returns false for unknown or non-sortable columns and for disabled
    /// actions (re-applying the current direction, clearing an unsorted
    /// column).
    pub fn apply_sort(&self, column_id: &str, action: SortAction) -> bool {
        let manual = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.apply_sort(column_id, action) {
                return false;
            }
            guard.options.manual_sorting
        };
        self.sort_changed(column_id, action.direction(), manual);
        true
    }

    /// Advance a column through none, ascending, descending, none.
    ///
    /// Returns the column's new direction, or `None` if it was cleared or the
    /// column cannot be sorted.
    pub fn cycle_sort(&self, column_id: &str) -> Option<SortDirection> {
        let (next, manual) = {
            let mut guard = self.inner.write().ok()?;
            let next = guard.sort.next_direction(column_id);
            let action = match next {
                Some(SortDirection::Ascending) => SortAction::Ascending,
                Some(SortDirection::Descending) => SortAction::Descending,
                None => SortAction::Clear,
            };
            if !guard.apply_sort(column_id, action) {
                return None;
            }
            (next, guard.options.manual_sorting)
        };
        self.sort_changed(column_id, next, manual);
        next
    }

    /// Drop every sort descriptor. Returns true if anything was sorted.
    ///
    /// In manual sorting mode each cleared column is reported through
    /// `on_sort_change` with no direction.
    pub fn clear_sort(&self) -> bool {
        let (cleared, manual) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            (guard.clear_sort(), guard.options.manual_sorting)
        };
        for column_id in &cleared {
            self.sort_changed(column_id, None, manual);
        }
        !cleared.is_empty()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Restrict visible rows to those fuzzily matching `query`.
    pub fn set_filter(&self, query: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filter = query.into();
            debug!("Filter set to {:?}", guard.filter);
            self.mark_dirty();
        }
    }

    /// Show every row again.
    pub fn clear_filter(&self) {
        self.set_filter(String::new());
    }

    /// Current filter query.
    pub fn filter(&self) -> String {
        self.inner
            .read()
            .map(|g| g.filter.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the flag was last cleared.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRecord> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            callbacks: self.callbacks.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
