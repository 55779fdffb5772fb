mod fixture;
mod paths;
mod render;
mod script;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::{Record, Table, TableCallbacks, TableError, sort};

use crate::fixture::{Fixture, FixtureError};
use crate::script::ScriptError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Fixture(#[from] FixtureError),
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
    #[error("failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Script(#[from] ScriptError),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Parser, Debug)]
#[command(name = "tabula-cli", about = "Drive a table from a JSON fixture and print it")]
struct Cli {
    /// JSON file with `columns`, `rows` and optional `options`.
    fixture: PathBuf,

    /// Script of table operations, one per line.
    #[arg(long)]
    script: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Defaults to `latest.log` in the platform cache directory.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let Some(path) = cli.log_file.clone().or_else(paths::log_file) else {
        return Ok(());
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| CliError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let file = File::create(&path).map_err(|source| CliError::LogFile {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(cli.log_level, Config::default(), file)?;
    Ok(())
}

/// Build the table. In manual sorting mode this program plays the data
/// owner: every sort change re-supplies the fixture rows in sorted order.
fn build_table(fixture: Fixture) -> Result<Table<Record>, CliError> {
    let manual = fixture.options.manual_sorting;
    let handle: Arc<OnceLock<Table<Record>>> = Arc::new(OnceLock::new());
    let mut callbacks = TableCallbacks::new().on_column_reorder_change(|index| {
        debug!("Column moved to index {index}");
    });
    if manual {
        let source = fixture.rows.clone();
        let handle = Arc::clone(&handle);
        callbacks = callbacks.on_sort_change(move |column, direction| {
            info!("Sort change requested: {column} {direction:?}");
            let Some(table) = handle.get() else {
                return;
            };
            let descriptors = table.sort();
            let mut rows = source.clone();
            rows.sort_by(|a, b| sort::compare_records(&descriptors, a, b));
            table.set_rows(rows);
        });
    }

    let table = Table::builder()
        .columns(fixture.columns)
        .rows(fixture.rows)
        .options(fixture.options)
        .callbacks(callbacks)
        .build()?;
    if manual {
        let _ = handle.set(table.clone());
    }
    Ok(table)
}

fn load_script(path: &Path) -> Result<Vec<script::Command>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(script::parse(&text)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(&cli)?;
    info!("Loading fixture {}", cli.fixture.display());

    let fixture = Fixture::load(&cli.fixture)?;
    let commands = match &cli.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let table = build_table(fixture)?;

    for command in &commands {
        script::run(&table, command, |table| {
            println!("{}", render::render(&table.snapshot()));
        });
    }
    print!("{}", render::render(&table.snapshot()));
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
