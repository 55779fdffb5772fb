//! Column definitions and display column kinds.

use serde::Deserialize;

/// A data column definition.
///
/// Columns define the structure of the table: an id used to look up cell
/// values, header text, and whether the column may be sorted or reordered.
///
/// # Examples
///
/// ```
/// use tabula::Column;
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("email", "Email").sortable(false),
///     Column::new("id", "ID").reorderable(false),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    /// Identifier passed to [`TableRecord::cell`](crate::TableRecord::cell).
    pub id: String,
    /// Header text. Defaults to the id when absent in JSON.
    #[serde(default)]
    pub header: String,
    /// Whether the column offers sort actions.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the column offers move-left/right actions.
    #[serde(default = "default_true")]
    pub reorderable: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a sortable, reorderable column.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            reorderable: true,
        }
    }

    /// Set whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether the column can be reordered.
    pub fn reorderable(mut self, reorderable: bool) -> Self {
        self.reorderable = reorderable;
        self
    }

    /// Header text, falling back to the id.
    pub fn title(&self) -> &str {
        if self.header.is_empty() {
            &self.id
        } else {
            &self.header
        }
    }
}

/// What a displayed column is.
///
/// The numeral, selection and kebab columns are fixed: they are never
/// reordered and carry no header menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Row position number, or a pin marker for pinned rows.
    Numeral,
    /// Per-row selection checkbox with the select-all header.
    Selection,
    /// Row action menu trigger.
    Kebab,
    /// A caller-defined data column, by id.
    Data(String),
}

impl ColumnKind {
    /// Whether this is one of the fixed columns.
    pub fn is_fixed(&self) -> bool {
        !matches!(self, ColumnKind::Data(_))
    }

    /// The data column id, if any.
    pub fn data_id(&self) -> Option<&str> {
        match self {
            ColumnKind::Data(id) => Some(id),
            _ => None,
        }
    }
}
