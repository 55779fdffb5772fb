use tabula::{
    CheckState, Column, ColumnKind, KebabPosition, NumeralCell, Record, RowKey, SortAction, Table,
    TableOptions,
};

fn key(id: i64) -> RowKey {
    RowKey::Number(id)
}

fn table_with(options: TableOptions) -> Table<Record> {
    let rows = ["apple", "banana", "cherry", "date"]
        .iter()
        .enumerate()
        .map(|(i, fruit)| Record::new().with_key(i as i64 + 1).with("fruit", *fruit))
        .collect();
    Table::builder()
        .columns(vec![Column::new("fruit", "Fruit"), Column::new("qty", "")])
        .rows(rows)
        .options(options)
        .build()
        .unwrap()
}

// ============================================================================
// Columns
// ============================================================================

#[test]
fn test_column_layout_with_every_fixed_column() {
    let table = table_with(
        TableOptions::new()
            .show_checkbox(true)
            .kebab_position(KebabPosition::Left),
    );
    let snapshot = table.snapshot();
    let kinds: Vec<ColumnKind> = snapshot.columns.iter().map(|c| c.kind.clone()).collect();
    assert_eq!(
        kinds,
        [
            ColumnKind::Numeral,
            ColumnKind::Kebab,
            ColumnKind::Selection,
            ColumnKind::Data("fruit".to_string()),
            ColumnKind::Data("qty".to_string()),
        ]
    );
    assert_eq!(snapshot.header_check, Some(CheckState::Unchecked));
    assert_eq!(snapshot.columns.iter().filter(|c| c.kind.is_fixed()).count(), 3);
}

#[test]
fn test_kebab_column_needs_row_actions() {
    let table = table_with(
        TableOptions::new()
            .enable_row_actions(false)
            .kebab_position(KebabPosition::Left),
    );
    let snapshot = table.snapshot();
    assert!(
        snapshot
            .columns
            .iter()
            .all(|c| c.kind != ColumnKind::Kebab)
    );
    assert_eq!(snapshot.columns.len(), 3);
}

#[test]
fn test_header_falls_back_to_id() {
    let snapshot = table_with(TableOptions::default()).snapshot();
    let headers: Vec<&str> = snapshot.columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, ["", "Fruit", "qty", ""]);
    assert_eq!(snapshot.header_check, None);
}

#[test]
fn test_single_sort_has_no_priority() {
    let table = table_with(TableOptions::default());
    table.apply_sort("fruit", SortAction::Descending);
    let snapshot = table.snapshot();
    let fruit = &snapshot.columns[1];
    assert!(fruit.sort.is_some());
    assert_eq!(fruit.sort_priority, None);
    assert_eq!(snapshot.sort.len(), 1);
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_numerals_skip_pinned_rows() {
    let table = table_with(TableOptions::new().persist_numerals(true));
    table.pin(&key(3));
    let snapshot = table.snapshot();
    let numerals: Vec<NumeralCell> = snapshot.rows.iter().map(|r| r.numeral).collect();
    assert_eq!(
        numerals,
        [
            NumeralCell::Pinned,
            NumeralCell::Position(1),
            NumeralCell::Position(2),
            NumeralCell::Position(3),
        ]
    );
    assert!(snapshot.rows[0].pinned);
    assert!(snapshot.numerals_persistent);
}

#[test]
fn test_numerals_follow_render_order() {
    let table = table_with(TableOptions::default());
    table.set_filter("an");
    let snapshot = table.snapshot();
    assert_eq!(snapshot.keys(), [key(2)]);
    assert_eq!(snapshot.rows[0].numeral, NumeralCell::Position(1));
    assert_eq!(snapshot.filter, "an");
}

#[test]
fn test_rows_carry_selection_and_cells() {
    let table = table_with(TableOptions::new().show_checkbox(true));
    table.toggle_row(&key(2));
    let snapshot = table.snapshot();
    assert!(snapshot.rows[1].selected);
    assert!(!snapshot.rows[0].selected);
    assert_eq!(snapshot.rows[1].cells[0].to_string(), "banana");
    assert!(snapshot.rows[1].cells[1].is_empty());
    assert_eq!(snapshot.header_check, Some(CheckState::Indeterminate));
    assert_eq!(snapshot.data_column_ids(), ["fruit", "qty"]);
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let table = table_with(TableOptions::default());
    assert!(!table.is_dirty());
    table.toggle_row(&key(1));
    assert!(table.is_dirty());
    table.clear_dirty();
    table.move_rows_up(&key(1));
    assert!(!table.is_dirty());
    table.move_rows_down(&key(1));
    assert!(table.is_dirty());
}
