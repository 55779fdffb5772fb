//! Error types.
//!
//! Table operations themselves never fail; boundary conditions are no-ops.
//! Errors only arise when building a table or loading configuration.

use thiserror::Error;

/// Errors that can occur when building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two data columns share an id.
    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),
}

/// Errors that can occur when loading options from JSON.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}
