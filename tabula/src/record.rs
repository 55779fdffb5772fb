//! TableRecord trait and a dynamic record type.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::cell::CellValue;
use crate::key::RowKey;

/// Trait for items that can be held as rows in a [`Table`](crate::Table).
///
/// The table never mutates records; it only tracks their position,
/// selection and pin state by key.
///
/// # Examples
///
/// ```
/// use tabula::{CellValue, RowKey, TableRecord};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRecord for User {
///     fn key(&self) -> Option<RowKey> {
///         Some(RowKey::from(self.id))
///     }
///
///     fn cell(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "name" => CellValue::from(self.name.as_str()),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
///
/// Most structs can use `#[derive(TableRecord)]` instead.
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Stable identifier for this record, if it has one.
    ///
    /// Records returning `None` are keyed by their position in the input.
    fn key(&self) -> Option<RowKey> {
        None
    }

    /// The value shown in (and sorted by) the given data column.
    fn cell(&self, column_id: &str) -> CellValue;
}

/// A schemaless record: column id to value, plus an optional key.
///
/// Deserializes from a JSON object. An `id` field, when present and a string
/// or integer, becomes the key and is also available as a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    key: Option<RowKey>,
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    /// Create an empty record without a key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<RowKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set a field value.
    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(column_id.into(), value.into());
        self
    }

    /// Get a field value.
    pub fn get(&self, column_id: &str) -> Option<&CellValue> {
        self.fields.get(column_id)
    }
}

impl TableRecord for Record {
    fn key(&self) -> Option<RowKey> {
        self.key.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        self.fields.get(column_id).cloned().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = BTreeMap::<String, CellValue>::deserialize(deserializer)?;
        let key = match fields.get("id") {
            Some(CellValue::Int(n)) => Some(RowKey::Number(*n)),
            Some(CellValue::Text(s)) => Some(RowKey::Text(s.clone())),
            _ => None,
        };
        Ok(Self { key, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json_takes_id_as_key() {
        let record: Record = serde_json::from_str(r#"{"id": 7, "name": "Ada"}"#).unwrap();
        assert_eq!(record.key(), Some(RowKey::Number(7)));
        assert_eq!(record.cell("name"), CellValue::from("Ada"));
        assert_eq!(record.cell("missing"), CellValue::Empty);
    }

    #[test]
    fn test_record_without_id_has_no_key() {
        let record: Record = serde_json::from_str(r#"{"name": "Ada", "id": null}"#).unwrap();
        assert_eq!(record.key(), None);
    }
}
