use log::debug;

use super::model::{ActivityTable, InteractionTable, Reading};

// ---------------------------------------------------------------------------
// Numeric filtering and named exclusions
// ---------------------------------------------------------------------------

/// Keep only the pairs with a numeric value, in their original order.
///
/// Absent pairs and pairs whose computation failed are dropped.
pub fn numeric_only(activity: &ActivityTable) -> InteractionTable {
    activity
        .iter()
        .filter_map(|(pair, outcome)| match outcome {
            Ok(reading @ Reading::Numeric(_)) => Some((pair.clone(), *reading)),
            _ => None,
        })
        .collect()
}

/// Remove the named pairs from a table.
///
/// A label that is not present is a no-op: absence is already the desired
/// end state.
pub fn apply_exclusions<S: AsRef<str>>(table: &InteractionTable, exclusions: &[S]) -> InteractionTable {
    for label in exclusions {
        if !table.contains_key(label.as_ref()) {
            debug!("exclusion {} not present, nothing to remove", label.as_ref());
        }
    }
    table
        .iter()
        .filter(|(pair, _)| !exclusions.iter().any(|ex| ex.as_ref() == pair.as_str()))
        .map(|(pair, reading)| (pair.clone(), *reading))
        .collect()
}

/// Numeric filtering followed by the exclusion list.
pub fn filter_activity<S: AsRef<str>>(activity: &ActivityTable, exclusions: &[S]) -> InteractionTable {
    apply_exclusions(&numeric_only(activity), exclusions)
}
