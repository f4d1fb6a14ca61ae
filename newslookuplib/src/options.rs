//! Input options for lookups and catalog setup.
//!
//! This module contains the configuration types that callers fill in before
//! talking to the library: the five-field lookup request, the catalog's
//! file locations, and the output format selector.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "news.sqlite";

/// A lookup request exactly as collected by an adapter.
///
/// All fields are free-form strings. An empty string means the field was not
/// supplied; which fields are required depends on `mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// "1" (by year), "2" (by state) or "3" (by state and year range)
    pub mode: String,
    /// Full state name or abbreviation, or "all states" for mode 3
    pub state: String,
    /// Year for mode 1
    pub year: String,
    /// First year of the range for mode 3
    pub range_begin: String,
    /// Last year of the range for mode 3
    pub range_end: String,
}

impl LookupRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the mode selector
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Builder: set the state
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builder: set the year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Builder: set both ends of the year range
    pub fn range(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.range_begin = begin.into();
        self.range_end = end.into();
        self
    }
}

/// Where the catalog's long-lived resources come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// SQLite database holding the `microfilm` table
    pub database: PathBuf,
    /// HTML template; `None` selects the built-in page
    pub template: Option<PathBuf>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            template: None,
        }
    }
}

impl CatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the database path
    pub fn database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database = path.into();
        self
    }

    /// Builder: load the HTML template from a file instead of the built-in page
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }
}

/// Rendering selected for a lookup result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column-aligned plain text
    #[default]
    Text,
    /// Page produced by the HTML template
    Html,
    /// Pretty-printed JSON of the grouped result
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}
