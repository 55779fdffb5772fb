//! Row and header action menus for the Table.

use log::trace;

use crate::column::ColumnKind;
use crate::key::RowKey;
use crate::menu::{HeaderAction, HeaderMenu, MenuItem, RowAction, RowMenu};
use crate::order::Step;
use crate::record::TableRecord;
use crate::sort::SortAction;

use super::state::{Table, TableInner};

impl<T: TableRecord> TableInner<T> {
    pub fn row_menu(&self, key: &RowKey) -> Option<RowMenu> {
        if !self.options.enable_row_actions || !self.index.contains_key(key) {
            return None;
        }
        let pinned = self.pins.is_pinned(key);
        let pin_label = if pinned { "Unpin" } else { "Pin" };
        let items = vec![
            MenuItem::new(RowAction::TogglePin, pin_label, true),
            MenuItem::new(
                RowAction::MoveUp,
                RowAction::MoveUp.to_string(),
                self.plan_row_move(key, Step::Back).is_some(),
            ),
            MenuItem::new(
                RowAction::MoveDown,
                RowAction::MoveDown.to_string(),
                self.plan_row_move(key, Step::Forward).is_some(),
            ),
        ];
        Some(RowMenu {
            items,
            persistent: self.options.persist_row_kebab_menu,
        })
    }

    pub fn header_menu(&self, column: &ColumnKind) -> Option<HeaderMenu> {
        let column_id = column.data_id()?;
        let index = self.column_index(column_id)?;
        let def = &self.columns[index];
        let mut items = Vec::new();

        if self.options.enable_column_reordering {
            let last = self.columns.len() - 1;
            items.push(MenuItem::new(
                HeaderAction::MoveLeft,
                HeaderAction::MoveLeft.to_string(),
                def.reorderable && index > 0,
            ));
            items.push(MenuItem::new(
                HeaderAction::MoveRight,
                HeaderAction::MoveRight.to_string(),
                def.reorderable && index < last,
            ));
        }

        if self.options.enable_sorting && def.sortable {
            let current = self.sort.direction(column_id);
            for action in [SortAction::Ascending, SortAction::Descending, SortAction::Clear] {
                let header_action = HeaderAction::Sort(action);
                items.push(MenuItem::new(
                    header_action,
                    header_action.to_string(),
                    action.is_enabled(current),
                ));
            }
        }

        if items.is_empty() {
            return None;
        }
        Some(HeaderMenu {
            items,
            persistent: self.options.persist_header_kebab_menu,
        })
    }
}

impl<T: TableRecord> Table<T> {
    /// Build the kebab menu of a row.
    ///
    /// Returns `None` when row actions are disabled or the key is unknown.
    pub fn row_menu(&self, key: &RowKey) -> Option<RowMenu> {
        self.inner.read().ok()?.row_menu(key)
    }

    /// Build the header menu of a column.
    ///
    /// Fixed columns (numeral, selection, kebab) never have one. Items are
    /// only included for enabled features; returns `None` when nothing would
    /// be offered.
    pub fn header_menu(&self, column: &ColumnKind) -> Option<HeaderMenu> {
        self.inner.read().ok()?.header_menu(column)
    }

    /// Perform a row menu action if it is offered and enabled.
    ///
    /// Returns true if the table changed.
    pub fn activate_row_action(&self, key: &RowKey, action: RowAction) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let enabled = guard
            .row_menu(key)
            .is_some_and(|menu| menu.is_enabled(action));
        if !enabled {
            trace!("Row action {action:?} on {key} is not available");
            return false;
        }
        let changed = match action {
            RowAction::TogglePin => guard.toggle_pin(key).is_some(),
            RowAction::MoveUp => !guard.move_rows(key, Step::Back).is_empty(),
            RowAction::MoveDown => !guard.move_rows(key, Step::Forward).is_empty(),
        };
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Perform a header menu action if it is offered and enabled.
    ///
    /// Returns true if the table changed.
    pub fn activate_header_action(&self, column_id: &str, action: HeaderAction) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let column = ColumnKind::Data(column_id.to_string());
        let enabled = guard
            .header_menu(&column)
            .is_some_and(|menu| menu.is_enabled(action));
        if !enabled {
            trace!("Header action {action:?} on '{column_id}' is not available");
            return false;
        }
        match action {
            HeaderAction::MoveLeft | HeaderAction::MoveRight => {
                let step = if action == HeaderAction::MoveLeft {
                    Step::Back
                } else {
                    Step::Forward
                };
                let Some(index) = guard.column_index(column_id) else {
                    return false;
                };
                let moved = guard.move_column(index, step);
                drop(guard);
                if let Some(new_index) = moved {
                    self.column_moved(index, new_index);
                }
                moved.is_some()
            }
            HeaderAction::Sort(sort) => {
                let applied = guard.apply_sort(column_id, sort);
                let manual = guard.options.manual_sorting;
                drop(guard);
                if applied {
                    self.sort_changed(column_id, sort.direction(), manual);
                }
                applied
            }
        }
    }
}
