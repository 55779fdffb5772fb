//! Plain-text rendering of a table snapshot.
//!
//! A printout has no hover state, so numerals and row-action triggers are
//! always drawn.

use std::fmt::Write;

use tabula::{CheckState, ColumnKind, ColumnView, NumeralCell, RowView, SortDirection, TableSnapshot};
use unicode_width::UnicodeWidthStr;

const PIN_MARKER: &str = "📌";
const KEBAB: &str = "⋮";
const GAP: &str = "  ";

fn check_box(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}

fn header(column: &ColumnView, snapshot: &TableSnapshot) -> String {
    match &column.kind {
        ColumnKind::Numeral => "#".to_string(),
        ColumnKind::Selection => snapshot
            .header_check
            .map(check_box)
            .unwrap_or_default()
            .to_string(),
        ColumnKind::Kebab => String::new(),
        ColumnKind::Data(_) => {
            let mut text = column.header.clone();
            if let Some(direction) = column.sort {
                text.push(' ');
                text.push(match direction {
                    SortDirection::Ascending => '↑',
                    SortDirection::Descending => '↓',
                });
                if let Some(priority) = column.sort_priority {
                    let _ = write!(text, "{}", priority + 1);
                }
            }
            text
        }
    }
}

fn cell(column: &ColumnView, row: &RowView, data_index: &mut usize) -> String {
    match &column.kind {
        ColumnKind::Numeral => match row.numeral {
            NumeralCell::Pinned => PIN_MARKER.to_string(),
            NumeralCell::Position(n) => n.to_string(),
        },
        ColumnKind::Selection => check_box(if row.selected {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        })
        .to_string(),
        ColumnKind::Kebab => KEBAB.to_string(),
        ColumnKind::Data(_) => {
            let value = row
                .cells
                .get(*data_index)
                .map(ToString::to_string)
                .unwrap_or_default();
            *data_index += 1;
            value
        }
    }
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn join(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| pad(text, *width))
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

/// Render a snapshot as an aligned text table.
pub fn render(snapshot: &TableSnapshot) -> String {
    let headers: Vec<String> = snapshot
        .columns
        .iter()
        .map(|column| header(column, snapshot))
        .collect();
    let rows: Vec<Vec<String>> = snapshot
        .rows
        .iter()
        .map(|row| {
            let mut data_index = 0;
            snapshot
                .columns
                .iter()
                .map(|column| cell(column, row, &mut data_index))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rule_width = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let mut out = String::new();
    let _ = writeln!(out, "{}", join(&headers, &widths));
    let _ = writeln!(out, "{}", "─".repeat(rule_width));
    for row in &rows {
        let _ = writeln!(out, "{}", join(row, &widths));
    }
    if rows.is_empty() {
        let _ = writeln!(out, "(no rows)");
    }
    if !snapshot.sort.is_empty() {
        let sort: Vec<String> = snapshot
            .sort
            .iter()
            .map(|d| format!("{} {}", d.column, d.direction))
            .collect();
        let _ = writeln!(out, "sort: {}", sort.join(", "));
    }
    if !snapshot.filter.is_empty() {
        let _ = writeln!(out, "filter: {}", snapshot.filter);
    }
    out
}

#[cfg(test)]
mod tests {
    use tabula::{Column, KebabPosition, Record, RowKey, SortAction, Table, TableOptions};

    use super::*;

    fn table(options: TableOptions) -> Table<Record> {
        Table::builder()
            .columns(vec![Column::new("name", "Name"), Column::new("city", "City")])
            .rows(vec![
                Record::new().with_key(1).with("name", "Ada").with("city", "London"),
                Record::new().with_key(2).with("name", "Bo").with("city", "東京"),
            ])
            .options(options)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_default_layout() {
        let out = render(&table(TableOptions::default()).snapshot());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#  Name  City");
        assert_eq!(lines[2], "1  Ada   London  ⋮");
        assert_eq!(lines[3], "2  Bo    東京    ⋮");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_selection_pins_and_sort() {
        let table = table(
            TableOptions::new()
                .show_checkbox(true)
                .kebab_position(KebabPosition::Left),
        );
        table.pin(&RowKey::Number(2));
        table.toggle_row(&RowKey::Number(1));
        table.apply_sort("name", SortAction::Descending);

        let out = render(&table.snapshot());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#      [-]  Name ↓  City");
        assert_eq!(lines[2], "📌  ⋮  [ ]  Bo      東京");
        assert_eq!(lines[3], "1   ⋮  [x]  Ada     London");
        assert_eq!(lines[4], "sort: name desc");
    }

    #[test]
    fn test_render_empty_table() {
        let table = table(TableOptions::default());
        table.set_filter("zzz");
        let out = render(&table.snapshot());
        assert!(out.contains("(no rows)"));
        assert!(out.ends_with("filter: zzz\n"));
    }
}
