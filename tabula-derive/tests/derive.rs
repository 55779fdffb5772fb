use tabula::{CellValue, Column, RowKey, Table, TableRecord};

#[derive(Clone, TableRecord)]
struct User {
    #[table(key)]
    id: u32,
    name: String,
    #[table(rename = "mail")]
    email: String,
    age: Option<u8>,
    #[table(skip)]
    #[allow(dead_code)]
    password: String,
}

#[derive(Clone, TableRecord)]
struct Note {
    #[table(key)]
    slug: Option<String>,
    body: &'static str,
}

#[derive(Clone, TableRecord)]
struct Unkeyed {
    value: f64,
}

fn ada() -> User {
    User {
        id: 1,
        name: "Ada".into(),
        email: "ada@example.com".into(),
        age: None,
        password: "hunter2".into(),
    }
}

#[test]
fn test_key_field_becomes_row_key() {
    assert_eq!(ada().key(), Some(RowKey::Number(1)));
}

#[test]
fn test_fields_become_cells() {
    let user = ada();
    assert_eq!(user.cell("id"), CellValue::Int(1));
    assert_eq!(user.cell("name"), CellValue::from("Ada"));
    assert_eq!(user.cell("mail"), CellValue::from("ada@example.com"));
    assert_eq!(user.cell("email"), CellValue::Empty);
    assert_eq!(user.cell("age"), CellValue::Empty);
}

#[test]
fn test_skipped_field_is_not_a_cell() {
    assert_eq!(ada().cell("password"), CellValue::Empty);
}

#[test]
fn test_optional_key() {
    let keyed = Note {
        slug: Some("intro".into()),
        body: "hello",
    };
    let unkeyed = Note {
        slug: None,
        body: "world",
    };
    assert_eq!(keyed.key(), Some(RowKey::from("intro")));
    assert_eq!(unkeyed.key(), None);
    assert_eq!(unkeyed.cell("body"), CellValue::from("world"));
}

#[test]
fn test_struct_without_key_uses_positions() {
    let table = Table::new(
        vec![Column::new("value", "Value")],
        vec![Unkeyed { value: 1.5 }, Unkeyed { value: 0.5 }],
    )
    .unwrap();
    assert_eq!(table.keys(), [RowKey::Position(0), RowKey::Position(1)]);
}
