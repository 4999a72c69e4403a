// crates/countrycodes-core/src/model/store.rs
use super::{Assignment, CountryCode};
use crate::common::CodeStats;
use std::collections::{BTreeMap, HashMap};

/// Position of a record inside [`CountryCodes::records`].
/// u32 leaves plenty of room; the ISO table has a few hundred rows.
pub(crate) type RecordId = u32;

/// The index store: every validated record plus the lookup tables over them.
///
/// Built once by the loader (see [`CountryCodes::load_from_path`] and
/// friends) and read-only afterwards, so a shared reference can be handed to
/// any number of threads without locking.
#[derive(Clone, Debug)]
pub struct CountryCodes {
    /// Master list of all records. Sorted by alpha-2.
    pub(crate) records: Vec<CountryCode>,
    pub(crate) by_alpha2: HashMap<String, RecordId>,
    /// Only records with a non-empty alpha-3.
    pub(crate) by_alpha3: HashMap<String, RecordId>,
    pub(crate) by_name: HashMap<String, RecordId>,
    pub(crate) by_numeric: HashMap<i32, RecordId>,
    /// Lower-cased full name -> records, in alpha-2 order. Ordered, so a
    /// prefix is a range. Names differing only in case share one key.
    pub(crate) name_index: BTreeMap<String, Vec<RecordId>>,
}

impl CountryCodes {
    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in alpha-2 order.
    pub fn records(&self) -> &[CountryCode] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryCode> {
        self.records.iter()
    }

    /// Every record with the given assignment status, in alpha-2 order.
    pub fn by_assignment(&self, assignment: Assignment) -> Vec<&CountryCode> {
        self.records
            .iter()
            .filter(|c| c.assignment == assignment)
            .collect()
    }

    pub fn stats(&self) -> CodeStats {
        let mut per_assignment = BTreeMap::new();
        for c in &self.records {
            *per_assignment.entry(c.assignment).or_insert(0) += 1;
        }
        CodeStats {
            records: self.records.len(),
            alpha3: self.by_alpha3.len(),
            names: self.by_name.len(),
            numeric: self.by_numeric.len(),
            per_assignment,
        }
    }

    #[inline]
    pub(crate) fn record(&self, id: RecordId) -> &CountryCode {
        &self.records[id as usize]
    }
}

impl<'a> IntoIterator for &'a CountryCodes {
    type Item = &'a CountryCode;
    type IntoIter = std::slice::Iter<'a, CountryCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
