use crate::model::Assignment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Simple aggregate statistics for the store.
///
/// Returned by [`CountryCodes::stats`]. The per-index sizes can be smaller
/// than `records` when secondary keys collide or alpha-3 codes are absent.
///
/// [`CountryCodes::stats`]: crate::CountryCodes::stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStats {
    pub records: usize,
    pub alpha3: usize,
    pub names: usize,
    pub numeric: usize,
    pub per_assignment: BTreeMap<Assignment, usize>,
}
