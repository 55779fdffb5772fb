//! Line-oriented scripts of table operations.

use std::str::FromStr;

use log::{debug, info};
use tabula::{Record, RowKey, SortAction, Table};

/// Why a script line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid column index '{0}'")]
    InvalidIndex(String),
    #[error("invalid sort action '{0}' (expected asc, desc or clear)")]
    InvalidSortAction(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ScriptErrorKind,
}

/// One script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sort { column: String, action: SortAction },
    CycleSort(String),
    MoveColumnLeft(usize),
    MoveColumnRight(usize),
    MoveUp(RowKey),
    MoveDown(RowKey),
    Pin(RowKey),
    Unpin(RowKey),
    Select(RowKey),
    Toggle(RowKey),
    ToggleAll,
    Filter(String),
    ClearFilter,
    Print,
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

fn key(arg: &str) -> RowKey {
    match RowKey::from_str(arg) {
        Ok(key) => key,
        Err(never) => match never {},
    }
}

fn index(arg: &str) -> Result<usize, ScriptErrorKind> {
    arg.parse()
        .map_err(|_| ScriptErrorKind::InvalidIndex(arg.to_string()))
}

fn sort_action(arg: &str) -> Result<SortAction, ScriptErrorKind> {
    match arg {
        "asc" => Ok(SortAction::Ascending),
        "desc" => Ok(SortAction::Descending),
        "clear" => Ok(SortAction::Clear),
        other => Err(ScriptErrorKind::InvalidSortAction(other.to_string())),
    }
}

impl FromStr for Command {
    type Err = ScriptErrorKind;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();
        let mut arg = |what: &'static str| args.next().ok_or(ScriptErrorKind::MissingArgument(what));

        let command = match name {
            "sort" => Command::Sort {
                column: arg("column id")?.to_string(),
                action: sort_action(arg("sort action")?)?,
            },
            "cycle-sort" => Command::CycleSort(arg("column id")?.to_string()),
            "move-col-left" => Command::MoveColumnLeft(index(arg("column index")?)?),
            "move-col-right" => Command::MoveColumnRight(index(arg("column index")?)?),
            "move-up" => Command::MoveUp(key(arg("row key")?)),
            "move-down" => Command::MoveDown(key(arg("row key")?)),
            "pin" => Command::Pin(key(arg("row key")?)),
            "unpin" => Command::Unpin(key(arg("row key")?)),
            "select" => Command::Select(key(arg("row key")?)),
            "toggle" => Command::Toggle(key(arg("row key")?)),
            "toggle-all" => Command::ToggleAll,
            // The query is the rest of the line, spaces included.
            "filter" if rest.is_empty() => return Err(ScriptErrorKind::MissingArgument("query")),
            "filter" => return Ok(Command::Filter(rest.to_string())),
            "clear-filter" => Command::ClearFilter,
            "print" => Command::Print,
            other => return Err(ScriptErrorKind::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = args.next() {
            return Err(ScriptErrorKind::UnexpectedArgument(extra.to_string()));
        }
        Ok(command)
    }
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse(text: &str) -> Result<Vec<Command>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse::<Command>()
                .map_err(|kind| ScriptError { line: i + 1, kind })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Execution
// -----------------------------------------------------------------------------

/// Run one command against the table.
///
/// `print` is handed back to the caller through `on_print`; every other
/// command is applied directly. Commands that turn out to be no-ops are
/// logged and otherwise ignored.
pub fn run(table: &Table<Record>, command: &Command, mut on_print: impl FnMut(&Table<Record>)) {
    let changed = match command {
        Command::Sort { column, action } => table.apply_sort(column, *action),
        Command::CycleSort(column) => {
            let before = table.sort_direction(column);
            table.cycle_sort(column) != before
        }
        Command::MoveColumnLeft(i) => table.move_column_left(*i).is_some(),
        Command::MoveColumnRight(i) => table.move_column_right(*i).is_some(),
        Command::MoveUp(key) => !table.move_rows_up(key).is_empty(),
        Command::MoveDown(key) => !table.move_rows_down(key).is_empty(),
        Command::Pin(key) => table.pin(key),
        Command::Unpin(key) => table.unpin(key),
        Command::Select(key) => table.set_selected(key, true),
        Command::Toggle(key) => table.toggle_row(key).is_some(),
        Command::ToggleAll => {
            let state = table.toggle_all();
            debug!("Header check state is now {state:?}");
            true
        }
        Command::Filter(query) => {
            table.set_filter(query.as_str());
            true
        }
        Command::ClearFilter => {
            table.clear_filter();
            true
        }
        Command::Print => {
            on_print(table);
            return;
        }
    };
    if changed {
        info!("{command:?}");
    } else {
        info!("{command:?} had no effect");
    }
}

#[cfg(test)]
mod tests {
    use tabula::Column;

    use super::*;

    #[test]
    fn test_parse_commands() {
        let script = "\
# reorder
sort name desc
cycle-sort age
move-col-right 0

move-up 3
pin row-a
select #2
filter ada lovelace
toggle-all
print
";
        let commands = parse(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Sort {
                    column: "name".to_string(),
                    action: SortAction::Descending,
                },
                Command::CycleSort("age".to_string()),
                Command::MoveColumnRight(0),
                Command::MoveUp(RowKey::Number(3)),
                Command::Pin(RowKey::Text("row-a".to_string())),
                Command::Select(RowKey::Position(2)),
                Command::Filter("ada lovelace".to_string()),
                Command::ToggleAll,
                Command::Print,
            ]
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let error = parse("print\n\nfrobnicate 1\n").unwrap_err();
        assert_eq!(
            error,
            ScriptError {
                line: 3,
                kind: ScriptErrorKind::UnknownCommand("frobnicate".to_string()),
            }
        );
        assert_eq!(error.to_string(), "line 3: unknown command 'frobnicate'");
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(
            "sort name".parse::<Command>(),
            Err(ScriptErrorKind::MissingArgument("sort action"))
        );
        assert_eq!(
            "sort name up".parse::<Command>(),
            Err(ScriptErrorKind::InvalidSortAction("up".to_string()))
        );
        assert_eq!(
            "move-col-left -1".parse::<Command>(),
            Err(ScriptErrorKind::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            "print now".parse::<Command>(),
            Err(ScriptErrorKind::UnexpectedArgument("now".to_string()))
        );
        assert_eq!(
            "filter   ".parse::<Command>(),
            Err(ScriptErrorKind::MissingArgument("query"))
        );
    }

    #[test]
    fn test_run_applies_commands() {
        let rows = (1..=3).map(|id| Record::new().with_key(id)).collect();
        let table = Table::new(vec![Column::new("a", "A"), Column::new("b", "B")], rows).unwrap();
        let mut printed = 0;

        for command in parse("move-down 1\nmove-col-right 0\nselect 2\nprint").unwrap() {
            run(&table, &command, |_| printed += 1);
        }

        assert_eq!(table.keys(), [2, 1, 3].map(RowKey::Number).to_vec());
        assert_eq!(table.column_ids(), ["b", "a"]);
        assert!(table.is_selected(&RowKey::Number(2)));
        assert_eq!(printed, 1);
    }
}
