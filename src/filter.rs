//! Name search over an already-ordered record set.

use crate::core::AthleteRecord;

/// Retain records whose name contains `term` as a case-insensitive
/// substring. An empty term retains everything; order is always preserved
/// and ranks are never touched — this is a view over the ordered set.
pub fn filter_by_name(records: &[AthleteRecord], term: &str) -> Vec<AthleteRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
