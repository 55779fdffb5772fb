//! Table-wide feature flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::OptionsError;

/// Which side of the data columns the row-action column sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KebabPosition {
    Left,
    #[default]
    Right,
}

/// Table-wide configuration.
///
/// Every operation of a [`Table`](crate::Table) reads these flags; they are
/// fixed at construction. Deserializes from JSON with missing fields taking
/// their defaults (camelCase names are accepted as aliases).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Show the selection column and the select-all header.
    #[serde(alias = "showCheckbox")]
    pub show_checkbox: bool,
    /// Placement of the row-action column.
    #[serde(alias = "kebabPosition")]
    pub kebab_position: KebabPosition,
    /// Row-action triggers are always shown instead of on hover.
    #[serde(alias = "persistRowKebabMenu")]
    pub persist_row_kebab_menu: bool,
    /// Header-action triggers are always shown instead of on hover.
    #[serde(alias = "persistHeaderKebabMenu")]
    pub persist_header_kebab_menu: bool,
    /// Row numerals are always shown instead of on hover.
    #[serde(alias = "persistNumerals")]
    pub persist_numerals: bool,
    /// Offer sort actions in header menus.
    #[serde(alias = "enableSorting")]
    pub enable_sorting: bool,
    /// Offer move-left/right actions in header menus.
    #[serde(alias = "enableColumnReordering")]
    pub enable_column_reordering: bool,
    /// Offer the row-action menu.
    #[serde(alias = "enableRowActions")]
    pub enable_row_actions: bool,
    /// Report sort changes to the caller instead of sorting locally.
    #[serde(alias = "manualSorting")]
    pub manual_sorting: bool,
    /// Allow more than one sorted column at a time.
    #[serde(alias = "multiSort")]
    pub multi_sort: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_checkbox: false,
            kebab_position: KebabPosition::Right,
            persist_row_kebab_menu: false,
            persist_header_kebab_menu: false,
            persist_numerals: false,
            enable_sorting: true,
            enable_column_reordering: true,
            enable_row_actions: true,
            manual_sorting: false,
            multi_sort: false,
        }
    }
}

impl TableOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Show the selection column.
    pub fn show_checkbox(mut self, show: bool) -> Self {
        self.show_checkbox = show;
        self
    }

    /// Set the row-action column placement.
    pub fn kebab_position(mut self, position: KebabPosition) -> Self {
        self.kebab_position = position;
        self
    }

    /// Always show row-action triggers.
    pub fn persist_row_kebab_menu(mut self, persist: bool) -> Self {
        self.persist_row_kebab_menu = persist;
        self
    }

    /// Always show header-action triggers.
    pub fn persist_header_kebab_menu(mut self, persist: bool) -> Self {
        self.persist_header_kebab_menu = persist;
        self
    }

    /// Always show row numerals.
    pub fn persist_numerals(mut self, persist: bool) -> Self {
        self.persist_numerals = persist;
        self
    }

    /// Enable sort actions.
    pub fn enable_sorting(mut self, enable: bool) -> Self {
        self.enable_sorting = enable;
        self
    }

    /// Enable column reordering actions.
    pub fn enable_column_reordering(mut self, enable: bool) -> Self {
        self.enable_column_reordering = enable;
        self
    }

    /// Enable the row-action menu.
    pub fn enable_row_actions(mut self, enable: bool) -> Self {
        self.enable_row_actions = enable;
        self
    }

    /// Delegate sorting to the caller.
    pub fn manual_sorting(mut self, manual: bool) -> Self {
        self.manual_sorting = manual;
        self
    }

    /// Allow multi-column sorting.
    pub fn multi_sort(mut self, multi: bool) -> Self {
        self.multi_sort = multi;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options =
            TableOptions::from_json_str(r#"{"showCheckbox": true, "kebab_position": "left"}"#)
                .unwrap();
        assert!(options.show_checkbox);
        assert_eq!(options.kebab_position, KebabPosition::Left);
        assert!(options.enable_sorting);
        assert!(!options.manual_sorting);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tabula-options-{}.json", std::process::id()));
        fs::write(&path, r#"{"manualSorting": true, "multi_sort": true}"#).unwrap();
        let options = TableOptions::from_json_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(options.manual_sorting);
        assert!(options.multi_sort);
        assert!(matches!(
            TableOptions::from_json_file(&path),
            Err(OptionsError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            TableOptions::from_json_str("{\"showCheckbox\": 3}"),
            Err(OptionsError::Json(_))
        ));
    }
}
