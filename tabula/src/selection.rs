//! Row selection state.

use std::collections::HashMap;

use crate::key::RowKey;

/// State of the select-all header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// Every visible row is selected.
    Checked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    /// No visible row is selected.
    Unchecked,
}

/// Tracks selected rows by key.
///
/// Keys absent from the map are unselected. The select-all state is never
/// stored here; see [`Selection::check_state`].
#[derive(Debug, Clone, Default)]
pub struct Selection {
    flags: HashMap<RowKey, bool>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set the flag for a key. Returns true if it changed.
    pub fn set(&mut self, key: RowKey, selected: bool) -> bool {
        let previous = self.flags.insert(key, selected).unwrap_or(false);
        previous != selected
    }

    /// Flip the flag for a key. Returns the new value.
    pub fn toggle(&mut self, key: &RowKey) -> bool {
        let selected = !self.is_selected(key);
        self.flags.insert(key.clone(), selected);
        selected
    }

    /// Select every key in `visible`. Returns the keys that were newly selected.
    ///
    /// Keys outside `visible` are left as they are, including keys of rows
    /// added later.
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a RowKey>) -> Vec<RowKey> {
        visible
            .into_iter()
            .filter(|key| self.set((*key).clone(), true))
            .cloned()
            .collect()
    }

    /// Deselect everything. Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<RowKey> {
        self.flags
            .drain()
            .filter_map(|(key, selected)| selected.then_some(key))
            .collect()
    }

    /// Drop entries whose key no longer exists.
    pub fn retain(&mut self, mut exists: impl FnMut(&RowKey) -> bool) {
        self.flags.retain(|key, _| exists(key));
    }

    /// Number of selected keys.
    pub fn count(&self) -> usize {
        self.flags.values().filter(|selected| **selected).count()
    }

    /// Derive the select-all header state for the given visible rows.
    pub fn check_state<'a>(&self, visible: impl IntoIterator<Item = &'a RowKey>) -> CheckState {
        let mut total = 0usize;
        let mut selected = 0usize;
        for key in visible {
            total += 1;
            if self.is_selected(key) {
                selected += 1;
            }
        }
        if total > 0 && selected == total {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[i64]) -> Vec<RowKey> {
        ids.iter().map(|id| RowKey::Number(*id)).collect()
    }

    #[test]
    fn test_absent_keys_are_unselected() {
        let selection = Selection::new();
        assert!(!selection.is_selected(&RowKey::Number(1)));
    }

    #[test]
    fn test_check_state_transitions() {
        let visible = keys(&[1, 2, 3]);
        let mut selection = Selection::new();
        assert_eq!(selection.check_state(&visible), CheckState::Unchecked);

        selection.toggle(&RowKey::Number(2));
        assert_eq!(selection.check_state(&visible), CheckState::Indeterminate);

        let added = selection.select_all(&visible);
        assert_eq!(added, keys(&[1, 3]));
        assert_eq!(selection.check_state(&visible), CheckState::Checked);
    }

    #[test]
    fn test_empty_table_is_unchecked() {
        let selection = Selection::new();
        assert_eq!(selection.check_state(&[] as &[RowKey]), CheckState::Unchecked);
    }

    #[test]
    fn test_select_all_does_not_cover_later_rows() {
        let mut selection = Selection::new();
        selection.select_all(&keys(&[1, 2]));
        let grown = keys(&[1, 2, 3]);
        assert!(!selection.is_selected(&RowKey::Number(3)));
        assert_eq!(selection.check_state(&grown), CheckState::Indeterminate);
    }

    #[test]
    fn test_clear_reports_deselected() {
        let mut selection = Selection::new();
        selection.set(RowKey::Number(1), true);
        selection.set(RowKey::Number(2), false);
        assert_eq!(selection.clear(), keys(&[1]));
        assert_eq!(selection.count(), 0);
    }
}
