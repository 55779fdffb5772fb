//! Headless data-table state.
//!
//! `tabula` owns the interactive state of a data table (column order, row
//! order, selection, sorting, pinned rows and filtering) and derives an
//! immutable [`TableSnapshot`] for a renderer to draw. It renders nothing
//! itself.
//!
//! ```
//! use tabula::{Column, Record, RowKey, Table};
//!
//! let table = Table::new(
//!     vec![Column::new("a", "A"), Column::new("b", "B"), Column::new("c", "C")],
//!     vec![Record::new().with_key(1), Record::new().with_key(2)],
//! )
//! .unwrap();
//!
//! assert_eq!(table.move_column_right(0), Some(1));
//! assert_eq!(table.column_ids(), ["b", "a", "c"]);
//!
//! table.move_rows_down(&RowKey::Number(1));
//! assert_eq!(table.keys(), [RowKey::Number(2), RowKey::Number(1)]);
//! ```

pub mod callbacks;
pub mod cell;
pub mod column;
pub mod error;
pub mod filter;
pub mod key;
pub mod menu;
pub mod options;
pub mod order;
pub mod pins;
pub mod record;
pub mod selection;
pub mod sort;
pub mod table;

pub use callbacks::TableCallbacks;
pub use cell::CellValue;
pub use column::{Column, ColumnKind};
pub use error::{OptionsError, TableError};
pub use key::RowKey;
pub use menu::{HeaderAction, HeaderMenu, Menu, MenuItem, RowAction, RowMenu};
pub use options::{KebabPosition, TableOptions};
pub use record::{Record, TableRecord};
pub use selection::CheckState;
pub use sort::{SortAction, SortDescriptor, SortDirection};
pub use table::{ColumnView, NumeralCell, RowView, Table, TableBuilder, TableId, TableSnapshot};

pub use tabula_derive::*;

pub mod prelude {
    pub use crate::{
        CellValue, CheckState, Column, ColumnKind, HeaderAction, KebabPosition, Record, RowAction,
        RowKey, SortAction, SortDirection, Table, TableCallbacks, TableOptions, TableRecord,
        TableSnapshot,
    };
}
