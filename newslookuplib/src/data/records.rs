//! Catalog records and the grouped result of a lookup.

use serde::{Deserialize, Serialize};

/// One microfilm holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// State name as stored in the catalog
    pub state: String,
    pub city: String,
    /// Newspaper title
    pub title: String,
    /// First year held
    pub begin: i64,
    /// Last year held
    pub end: i64,
    /// Library call number
    pub call_no: String,
}

impl Entry {
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        title: impl Into<String>,
        begin: i64,
        end: i64,
        call_no: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            title: title.into(),
            begin,
            end,
            call_no: call_no.into(),
        }
    }
}

/// All entries of one state, in query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGroup {
    pub state: String,
    pub entries: Vec<Entry>,
}

impl StateGroup {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete answer to a lookup request.
///
/// Each state appears in exactly one group, and groups keep the order in
/// which their state was first returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Upper-cased label describing what was searched
    pub header: String,
    pub state_groups: Vec<StateGroup>,
}

impl LookupResult {
    pub fn new(header: impl Into<String>, state_groups: Vec<StateGroup>) -> Self {
        Self {
            header: header.into(),
            state_groups,
        }
    }

    /// True when no holdings matched
    pub fn is_empty(&self) -> bool {
        self.state_groups.iter().all(StateGroup::is_empty)
    }

    /// Total number of entries across all groups
    pub fn entry_count(&self) -> usize {
        self.state_groups.iter().map(StateGroup::len).sum()
    }

    /// Iterate over every entry in group order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.state_groups.iter().flat_map(|g| g.entries.iter())
    }
}
