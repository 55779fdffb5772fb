//! Table fixtures loaded from JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tabula::{Column, Record, TableOptions};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),
}

/// Columns, rows and options for one table.
///
/// ```json
/// {
///   "columns": [{ "id": "name", "header": "Name" }],
///   "rows": [{ "id": 1, "name": "Ada" }],
///   "options": { "showCheckbox": true }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Record>,
    #[serde(default)]
    pub options: TableOptions,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use tabula::{CellValue, KebabPosition, RowKey, TableRecord};

    use super::*;

    #[test]
    fn test_parse_fixture() {
        let fixture = Fixture::parse(
            r#"{
                "columns": [{ "id": "name", "header": "Name" }, { "id": "age", "sortable": false }],
                "rows": [{ "id": 1, "name": "Ada", "age": 36 }, { "name": "Bob" }],
                "options": { "showCheckbox": true, "kebab_position": "left" }
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.columns.len(), 2);
        assert!(!fixture.columns[1].sortable);
        assert_eq!(fixture.columns[1].title(), "age");
        assert_eq!(fixture.rows[0].key(), Some(RowKey::Number(1)));
        assert_eq!(fixture.rows[1].cell("name"), CellValue::from("Bob"));
        assert!(fixture.options.show_checkbox);
        assert_eq!(fixture.options.kebab_position, KebabPosition::Left);
    }

    #[test]
    fn test_options_default_when_absent() {
        let fixture = Fixture::parse(r#"{ "columns": [] }"#).unwrap();
        assert!(fixture.rows.is_empty());
        assert_eq!(fixture.options, TableOptions::default());
    }

    #[test]
    fn test_missing_columns_is_an_error() {
        let error = Fixture::parse(r#"{ "rows": [] }"#).unwrap_err();
        assert!(matches!(error, FixtureError::Json(_)));
    }
}
