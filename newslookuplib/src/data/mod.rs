//! Data access: catalog records and the stores that produce them.
//!
//! This module handles the first stage of the pipeline - getting rows out of
//! the holdings catalog. It provides:
//!
//! - **Records**: `Entry`, `StateGroup` and `LookupResult`
//! - **Stores**: the `CatalogStore` seam and its SQLite implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use newslookuplib::data::{CatalogStore, SqliteStore};
//! use newslookuplib::query::CatalogQuery;
//!
//! let store = SqliteStore::open("news.sqlite")?;
//! let rows = store.fetch(&CatalogQuery::ByState { state: "CA".into() })?;
//! ```

pub mod records;
pub mod store;

pub use records::{Entry, LookupResult, StateGroup};
pub use store::{CatalogStore, SqliteStore};
