//! Query dispatch: run a planned query and group its rows by state.
//!
//! The data pipeline is:
//! 1. LookupRequest (five raw strings)
//! 2. QueryPlan (validated, header computed)
//! 3. Rows from a CatalogStore (ordered by state, city, title, ...)
//! 4. LookupResult (rows grouped by state, first-seen order)

use std::collections::HashMap;

use crate::data::records::{Entry, LookupResult, StateGroup};
use crate::data::store::CatalogStore;
use crate::options::LookupRequest;
use crate::query::plan::plan;
use crate::Result;

/// Validate `request`, run its query against `store`, and group the rows.
///
/// Validation failures return before the store is touched. A store failure
/// returns the error alone; no partial result is produced.
pub fn lookup<S>(store: &S, request: &LookupRequest) -> Result<LookupResult>
where
    S: CatalogStore + ?Sized,
{
    let plan = plan(request)?;
    tracing::debug!(mode = %plan.mode, query = ?plan.query, "running catalog query");

    let rows = store.fetch(&plan.query)?;
    tracing::debug!(rows = rows.len(), "catalog query complete");

    Ok(LookupResult::new(plan.header, group_by_state(rows)))
}

/// Group rows by their `state` value, keeping first-seen order.
///
/// Rows are expected to arrive sorted by state, so each state forms one
/// contiguous run. A state that shows up again after a different state is
/// folded back into its existing group.
pub fn group_by_state(rows: impl IntoIterator<Item = Entry>) -> Vec<StateGroup> {
    let mut groups: Vec<StateGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in rows {
        let current = groups.last().map(|g| g.state.as_str());
        if current != Some(entry.state.as_str()) {
            match index.get(&entry.state) {
                Some(&pos) => {
                    tracing::warn!(state = %entry.state, "catalog rows not ordered by state");
                    groups[pos].entries.push(entry);
                    continue;
                }
                None => {
                    index.insert(entry.state.clone(), groups.len());
                    groups.push(StateGroup::new(entry.state.clone()));
                }
            }
        }
        if let Some(group) = groups.last_mut() {
            group.entries.push(entry);
        }
    }

    groups
}
