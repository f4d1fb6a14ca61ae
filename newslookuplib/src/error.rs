//! Error types for newslookuplib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while looking up or rendering holdings
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request was rejected before any query ran
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed to open, execute, or stream a query
    #[error("[SQL] {0}")]
    Store(#[from] StoreError),

    /// Template execution failed
    #[error("[HTML] failed to execute template: [{0}]")]
    Render(#[source] minijinja::Error),

    /// JSON serialization of a result failed
    #[error("[JSON] failed to serialize result: [{0}]")]
    Json(#[from] serde_json::Error),

    /// Failed to read the HTML template from disk
    #[error("[TEMPLATE] failed to read html template '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The HTML template did not parse
    #[error("[TEMPLATE] failed to parse html template: [{0}]")]
    TemplateParse(#[source] minijinja::Error),
}

/// Request validation failures, one per mode requirement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("choice 1 requires a year")]
    MissingYear,

    #[error("choice 2 requires a state")]
    MissingState,

    #[error("choice 3 requires a state, beginning year, and ending year")]
    MissingStateRange,

    /// Mode string was not one of "1", "2", "3"
    #[error("invalid choice")]
    InvalidChoice(String),
}

/// Failures raised by a catalog store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database '{path}': [{source}]")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("failed to prepare {name} statement: [{source}]")]
    Prepare {
        name: &'static str,
        source: rusqlite::Error,
    },

    #[error("failed to execute query: [{0}]")]
    Execute(#[source] rusqlite::Error),

    #[error("failed to scan row: [{0}]")]
    Scan(#[source] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("database connection is unavailable")]
    Poisoned,
}
