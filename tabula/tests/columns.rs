use std::sync::{Arc, Mutex};

use tabula::{Column, ColumnKind, KebabPosition, Record, Table, TableCallbacks, TableError, TableOptions};

fn columns(ids: &[&str]) -> Vec<Column> {
    ids.iter().map(|id| Column::new(*id, id.to_uppercase())).collect()
}

fn table(ids: &[&str]) -> Table<Record> {
    Table::new(columns(ids), Vec::new()).unwrap()
}

// ============================================================================
// Moving
// ============================================================================

#[test]
fn test_move_right_then_left_restores_order() {
    let table = table(&["a", "b", "c"]);
    assert_eq!(table.move_column_right(0), Some(1));
    assert_eq!(table.column_ids(), ["b", "a", "c"]);
    assert_eq!(table.move_column_left(1), Some(0));
    assert_eq!(table.column_ids(), ["a", "b", "c"]);
}

#[test]
fn test_move_left_then_right_is_identity_for_every_index() {
    let ids = ["a", "b", "c", "d", "e"];
    for index in 1..ids.len() - 1 {
        let table = table(&ids);
        assert_eq!(table.move_column_left(index), Some(index - 1));
        assert_eq!(table.move_column_right(index - 1), Some(index));
        assert_eq!(table.column_ids(), ids);
    }
}

#[test]
fn test_moves_past_the_edges_are_noops() {
    let table = table(&["a", "b", "c"]);
    assert_eq!(table.move_column_left(0), None);
    assert_eq!(table.move_column_right(2), None);
    assert_eq!(table.move_column_right(9), None);
    assert_eq!(table.column_ids(), ["a", "b", "c"]);
    assert!(!table.is_dirty());
}

#[test]
fn test_move_by_id() {
    let table = table(&["a", "b", "c"]);
    assert_eq!(table.move_column_right_by_id("b"), Some(2));
    assert_eq!(table.column_ids(), ["a", "c", "b"]);
    assert_eq!(table.move_column_left_by_id("missing"), None);
}

#[test]
fn test_non_reorderable_column_stays_but_can_be_displaced() {
    let table = Table::<Record>::new(
        vec![
            Column::new("a", "A").reorderable(false),
            Column::new("b", "B"),
        ],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(table.move_column_right(0), None);
    assert_eq!(table.move_column_left(1), Some(0));
    assert_eq!(table.column_ids(), ["b", "a"]);
}

#[test]
fn test_reorder_callback_receives_new_index() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let table = Table::<Record>::builder()
        .columns(columns(&["a", "b", "c"]))
        .callbacks(TableCallbacks::new().on_column_reorder_change(move |index| {
            sink.lock().unwrap().push(index);
        }))
        .build()
        .unwrap();

    table.move_column_right(0);
    table.move_column_left(0);
    table.move_column_right(1);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
}

// ============================================================================
// Construction and layout
// ============================================================================

#[test]
fn test_duplicate_column_ids_are_rejected() {
    let result = Table::<Record>::new(columns(&["a", "b", "a"]), Vec::new());
    assert_eq!(result.err(), Some(TableError::DuplicateColumn("a".into())));
}

#[test]
fn test_reserved_looking_ids_are_plain_data_columns() {
    let table = table(&["numeral", "selection", "kebab"]);
    assert_eq!(table.move_column_right(0), Some(1));
    assert_eq!(table.column_ids(), ["selection", "numeral", "kebab"]);

    let snapshot = table.snapshot();
    assert_eq!(
        snapshot.data_column_ids(),
        ["selection", "numeral", "kebab"]
    );
    assert_eq!(snapshot.columns.first().map(|c| &c.kind), Some(&ColumnKind::Numeral));
}

#[test]
fn test_display_column_layout() {
    let options = TableOptions::new()
        .show_checkbox(true)
        .kebab_position(KebabPosition::Left);
    let table = Table::<Record>::builder()
        .columns(columns(&["a", "b"]))
        .options(options)
        .build()
        .unwrap();

    let kinds: Vec<ColumnKind> = table.snapshot().columns.into_iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ColumnKind::Numeral,
            ColumnKind::Kebab,
            ColumnKind::Selection,
            ColumnKind::Data("a".into()),
            ColumnKind::Data("b".into()),
        ]
    );
}

#[test]
fn test_default_layout_puts_kebab_last_without_selection() {
    let table = table(&["a"]);
    let kinds: Vec<ColumnKind> = table.snapshot().columns.into_iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ColumnKind::Numeral, ColumnKind::Data("a".into()), ColumnKind::Kebab]
    );
}
