//! Immutable render view of a Table.

use crate::cell::CellValue;
use crate::column::ColumnKind;
use crate::key::RowKey;
use crate::options::KebabPosition;
use crate::record::TableRecord;
use crate::selection::CheckState;
use crate::sort::{SortDescriptor, SortDirection};

use super::state::Table;

/// A displayed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub kind: ColumnKind,
    /// Header text; empty for fixed columns.
    pub header: String,
    /// Active sort direction of a data column.
    pub sort: Option<SortDirection>,
    /// Sort priority (0 = primary) when more than one column is sorted.
    pub sort_priority: Option<usize>,
}

/// Content of the numeral column for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralCell {
    /// Pin marker.
    Pinned,
    /// 1-based position among the rendered unpinned rows.
    Position(usize),
}

/// A displayed row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: RowKey,
    pub numeral: NumeralCell,
    pub pinned: bool,
    pub selected: bool,
    /// Cell values in data-column display order.
    pub cells: Vec<CellValue>,
}

/// Everything a renderer needs, derived from table state in one read.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// Displayed columns, fixed columns included.
    pub columns: Vec<ColumnView>,
    /// Visible rows in render order.
    pub rows: Vec<RowView>,
    /// Select-all header state, when the selection column is shown.
    pub header_check: Option<CheckState>,
    pub sort: Vec<SortDescriptor>,
    pub filter: String,
    /// Numerals are always shown instead of on hover.
    pub numerals_persistent: bool,
}

impl TableSnapshot {
    /// Row keys in render order.
    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|row| row.key.clone()).collect()
    }

    /// Data column ids in display order.
    pub fn data_column_ids(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|column| column.kind.data_id())
            .collect()
    }
}

fn fixed(kind: ColumnKind) -> ColumnView {
    ColumnView {
        kind,
        header: String::new(),
        sort: None,
        sort_priority: None,
    }
}

impl<T: TableRecord> Table<T> {
    /// Derive the current render view.
    pub fn snapshot(&self) -> TableSnapshot {
        let Ok(guard) = self.inner.read() else {
            return TableSnapshot {
                columns: Vec::new(),
                rows: Vec::new(),
                header_check: None,
                sort: Vec::new(),
                filter: String::new(),
                numerals_persistent: false,
            };
        };
        let options = &guard.options;

        // The kebab column only exists while row actions are enabled.
        let kebab = options.enable_row_actions.then_some(options.kebab_position);

        let mut columns = vec![fixed(ColumnKind::Numeral)];
        if kebab == Some(KebabPosition::Left) {
            columns.push(fixed(ColumnKind::Kebab));
        }
        if options.show_checkbox {
            columns.push(fixed(ColumnKind::Selection));
        }
        let multi = guard.sort.descriptors().len() > 1;
        columns.extend(guard.columns.iter().map(|c| ColumnView {
            kind: ColumnKind::Data(c.id.clone()),
            header: c.title().to_string(),
            sort: guard.sort.direction(&c.id),
            sort_priority: guard.sort.priority(&c.id).filter(|_| multi),
        }));
        if kebab == Some(KebabPosition::Right) {
            columns.push(fixed(ColumnKind::Kebab));
        }

        let mut position = 0;
        let rows = guard
            .render_order()
            .into_iter()
            .map(|row| {
                let key = guard.keys[row].clone();
                let pinned = guard.pins.is_pinned(&key);
                let numeral = if pinned {
                    NumeralCell::Pinned
                } else {
                    position += 1;
                    NumeralCell::Position(position)
                };
                RowView {
                    selected: guard.selection.is_selected(&key),
                    cells: guard
                        .columns
                        .iter()
                        .map(|c| guard.cell(row, &c.id))
                        .collect(),
                    key,
                    numeral,
                    pinned,
                }
            })
            .collect();

        TableSnapshot {
            columns,
            rows,
            header_check: options.show_checkbox.then(|| guard.check_state()),
            sort: guard.sort.descriptors().to_vec(),
            filter: guard.filter.clone(),
            numerals_persistent: options.persist_numerals,
        }
    }
}
