//! Query processing: validate requests, run them, and group the rows.
//!
//! This module handles the second stage of the pipeline - turning a raw
//! five-field request into a grouped result. It provides:
//!
//! - **Plan**: mode validation and query selection (`plan`, `CatalogQuery`)
//! - **Dispatch**: execution against a store and state grouping (`lookup`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use newslookuplib::query::lookup;
//! use newslookuplib::LookupRequest;
//!
//! let result = lookup(&store, &LookupRequest::new().mode("2").state("ca"))?;
//! assert_eq!(result.header, "CA");
//! ```

pub mod dispatch;
pub mod plan;

pub use dispatch::{group_by_state, lookup};
pub use plan::{plan, CatalogQuery, LookupMode, QueryPlan, ALL_STATES};
