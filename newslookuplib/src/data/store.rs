//! Catalog stores.
//!
//! A store executes one of the planned [`CatalogQuery`] shapes and hands back
//! every matching row, already ordered by state, city, title, begin, end and
//! call number. Grouping relies on that ordering.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params_from_iter, Connection, OpenFlags};

use crate::data::records::Entry;
use crate::error::StoreError;
use crate::query::plan::CatalogQuery;

/// Read-only access to the holdings catalog.
pub trait CatalogStore: Send + Sync {
    /// Execute `query` and drain all of its rows in catalog order.
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Entry>, StoreError>;
}

const SELECT_CLAUSE: &str =
    r#"SELECT state, city, title, "begin", "end", callno FROM microfilm"#;
const WHERE_STATE_CLAUSE: &str = "UPPER(?) IN (UPPER(state), UPPER(abbrev))";
const WHERE_RANGE_CLAUSE: &str = r#"? <= "end" AND ? >= "begin""#;
const ORDER_CLAUSE: &str =
    r#"ORDER BY state ASC, city ASC, title ASC, "begin" ASC, "end" ASC, callno ASC"#;

/// SQL text for the three query shapes.
#[derive(Debug, Clone)]
struct Statements {
    by_state: String,
    by_range: String,
    by_state_range: String,
}

impl Statements {
    fn new() -> Self {
        Self {
            by_state: format!("{SELECT_CLAUSE} WHERE ({WHERE_STATE_CLAUSE}) {ORDER_CLAUSE}"),
            by_range: format!("{SELECT_CLAUSE} WHERE ({WHERE_RANGE_CLAUSE}) {ORDER_CLAUSE}"),
            by_state_range: format!(
                "{SELECT_CLAUSE} WHERE ({WHERE_STATE_CLAUSE}) AND ({WHERE_RANGE_CLAUSE}) {ORDER_CLAUSE}"
            ),
        }
    }

    fn named(&self) -> [(&'static str, &str); 3] {
        [
            ("state", self.by_state.as_str()),
            ("range", self.by_range.as_str()),
            ("state range", self.by_state_range.as_str()),
        ]
    }

    /// SQL and positional bindings for a query.
    ///
    /// A single year is an overlap test against the degenerate range
    /// `[year, year]`, so it shares the range statement.
    fn bind<'q>(&self, query: &'q CatalogQuery) -> (&str, Vec<&'q str>) {
        match query {
            CatalogQuery::ByYear { year } => {
                (self.by_range.as_str(), vec![year.as_str(), year.as_str()])
            }
            CatalogQuery::ByState { state } => (self.by_state.as_str(), vec![state.as_str()]),
            CatalogQuery::ByRange { begin, end } => {
                (self.by_range.as_str(), vec![begin.as_str(), end.as_str()])
            }
            CatalogQuery::ByStateRange { state, begin, end } => (
                self.by_state_range.as_str(),
                vec![state.as_str(), begin.as_str(), end.as_str()],
            ),
        }
    }
}

/// SQLite-backed catalog over the `microfilm` table.
///
/// Years are bound as the caller gave them; the `begin`/`end` columns'
/// integer affinity turns numeric text into numbers for the comparison.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    statements: Statements,
}

impl SqliteStore {
    /// Open a database file read-only and prepare the catalog statements.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection, verifying the catalog statements prepare.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let statements = Statements::new();
        for (name, sql) in statements.named() {
            conn.prepare_cached(sql)
                .map_err(|source| StoreError::Prepare { name, source })?;
        }
        tracing::debug!("catalog statements prepared");

        Ok(Self {
            conn: Mutex::new(conn),
            statements,
        })
    }
}

impl CatalogStore for SqliteStore {
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Entry>, StoreError> {
        let (sql, bindings) = self.statements.bind(query);
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let mut stmt = conn.prepare_cached(sql).map_err(StoreError::Execute)?;
        let mut rows = stmt
            .query(params_from_iter(bindings))
            .map_err(StoreError::Execute)?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().map_err(StoreError::Scan)? {
            let entry = Entry {
                state: row.get(0).map_err(StoreError::Scan)?,
                city: row.get(1).map_err(StoreError::Scan)?,
                title: row.get(2).map_err(StoreError::Scan)?,
                begin: row.get(3).map_err(StoreError::Scan)?,
                end: row.get(4).map_err(StoreError::Scan)?,
                call_no: row.get(5).map_err(StoreError::Scan)?,
            };
            entries.push(entry);
        }

        Ok(entries)
    }
}
