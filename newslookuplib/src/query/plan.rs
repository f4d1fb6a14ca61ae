//! Query planning: validate a request and pick the catalog query it maps to.
//!
//! Planning is pure. A request that fails validation never reaches a store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::options::LookupRequest;

/// State value that widens a mode 3 lookup to every state.
pub const ALL_STATES: &str = "ALL STATES";

/// The three lookup shapes a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupMode {
    /// "1": holdings covering a single year
    ByYear,
    /// "2": holdings for one state
    ByState,
    /// "3": holdings for one state (or all states) overlapping a year range
    ByStateRange,
}

impl LookupMode {
    /// The selector string callers use for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::ByYear => "1",
            LookupMode::ByState => "2",
            LookupMode::ByStateRange => "3",
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(LookupMode::ByYear),
            "2" => Ok(LookupMode::ByState),
            "3" => Ok(LookupMode::ByStateRange),
            _ => Err(ValidationError::InvalidChoice(s.to_string())),
        }
    }
}

/// A parameterized catalog read.
///
/// State values are already upper-cased; year values are passed through as
/// the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogQuery {
    /// Records whose `[begin, end]` span contains `year`
    ByYear { year: String },
    /// Records whose state name or abbreviation equals `state`
    ByState { state: String },
    /// Records from any state whose span overlaps `[begin, end]`
    ByRange { begin: String, end: String },
    /// Records matching `state` whose span overlaps `[begin, end]`
    ByStateRange {
        state: String,
        begin: String,
        end: String,
    },
}

/// A validated request: what to run and how to label the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub mode: LookupMode,
    /// Result header, upper-cased
    pub header: String,
    pub query: CatalogQuery,
}

/// Validate `request` and select its query.
pub fn plan(request: &LookupRequest) -> Result<QueryPlan, ValidationError> {
    let mode: LookupMode = request.mode.parse()?;
    let state = request.state.to_uppercase();

    let (header, query) = match mode {
        LookupMode::ByYear => {
            if request.year.is_empty() {
                return Err(ValidationError::MissingYear);
            }
            (
                request.year.clone(),
                CatalogQuery::ByYear {
                    year: request.year.clone(),
                },
            )
        }
        LookupMode::ByState => {
            if state.is_empty() {
                return Err(ValidationError::MissingState);
            }
            (state.clone(), CatalogQuery::ByState { state })
        }
        LookupMode::ByStateRange => {
            if state.is_empty() || request.range_begin.is_empty() || request.range_end.is_empty()
            {
                return Err(ValidationError::MissingStateRange);
            }
            let header = format!("{} {} - {}", state, request.range_begin, request.range_end);
            let begin = request.range_begin.clone();
            let end = request.range_end.clone();
            let query = if state == ALL_STATES {
                CatalogQuery::ByRange { begin, end }
            } else {
                CatalogQuery::ByStateRange { state, begin, end }
            };
            (header, query)
        }
    };

    Ok(QueryPlan {
        mode,
        header: header.to_uppercase(),
        query,
    })
}
