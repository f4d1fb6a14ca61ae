//! # newslookuplib
//!
//! A lookup library for a catalog of microfilmed newspaper holdings, indexed by
//! state, city, title, years held, and call number.
//!
//! ## Overview
//!
//! A caller picks one of three lookup modes and gets back the matching
//! holdings grouped by state:
//!
//! - **"1" By year**: every holding whose years cover the given year
//! - **"2" By state**: every holding for a state, matched by full name or
//!   abbreviation, case-insensitively
//! - **"3" By state and range**: holdings for a state (or `all states`) whose
//!   years overlap a range
//!
//! The grouped result can be rendered as a column-aligned text table or as an
//! HTML page through a template.
//!
//! ## Pipeline
//!
//! 1. **Request**: five raw strings (`LookupRequest`)
//! 2. **Plan**: validation and query selection (`query::plan`)
//! 3. **Store**: one parameterized read (`data::CatalogStore`)
//! 4. **Group**: rows grouped by state in first-seen order (`query::lookup`)
//! 5. **Output**: text or HTML (`output`)
//!
//! ## Example
//!
//! ```rust
//! use newslookuplib::{lookup, CatalogStore, CatalogQuery, Entry, LookupRequest, StoreError};
//!
//! struct Fixed(Vec<Entry>);
//!
//! impl CatalogStore for Fixed {
//!     fn fetch(&self, _query: &CatalogQuery) -> Result<Vec<Entry>, StoreError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let store = Fixed(vec![Entry::new("CA", "Fresno", "Bee", 1922, 1950, "MF 100")]);
//! let result = lookup(&store, &LookupRequest::new().mode("2").state("ca")).unwrap();
//! assert_eq!(result.header, "CA");
//!
//! let text = result.to_text().unwrap();
//! assert_eq!(text, "CA\n\nFresno    Bee    1922    1950    MF 100\n\n");
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;

pub use catalog::Catalog;
pub use data::{CatalogStore, Entry, LookupResult, SqliteStore, StateGroup};
pub use error::{LookupError, StoreError, ValidationError};
pub use options::{CatalogOptions, LookupRequest, OutputFormat, DEFAULT_DATABASE};
pub use output::{render_text, HtmlTemplate};
pub use query::{group_by_state, lookup, plan, CatalogQuery, LookupMode, QueryPlan, ALL_STATES};

/// Result type for newslookuplib operations
pub type Result<T> = std::result::Result<T, LookupError>;
