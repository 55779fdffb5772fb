mod actions;
mod snapshot;
mod state;

pub use snapshot::{ColumnView, NumeralCell, RowView, TableSnapshot};
pub use state::{Table, TableBuilder, TableId};
