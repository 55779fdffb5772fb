mod macros;

use proc_macro::TokenStream;

/// Derive `tabula::TableRecord` for a struct with named fields.
///
/// Every field becomes a cell addressed by its name. Field attributes:
/// - `#[table(key)]`: the field is the row key (`Option<_>` fields are
///   allowed; `None` falls back to the row's position)
/// - `#[table(skip)]`: the field is not exposed as a cell
/// - `#[table(rename = "column_id")]`: expose the field under another id
#[proc_macro_derive(TableRecord, attributes(table))]
pub fn derive_table_record(input: TokenStream) -> TokenStream {
    macros::table_record::expand(input.into()).into()
}
