// crates/countrycodes-core/src/model/search.rs
use super::{CountryCode, CountryCodes};
use crate::text::fold_name;
use crate::traits::CodeLookup;

impl CodeLookup for CountryCodes {
    fn get_by_alpha2(&self, alpha2: &str) -> Option<&CountryCode> {
        self.by_alpha2.get(alpha2).map(|&id| self.record(id))
    }

    fn get_by_alpha3(&self, alpha3: &str) -> Option<&CountryCode> {
        self.by_alpha3.get(alpha3).map(|&id| self.record(id))
    }

    fn get_by_name(&self, name: &str) -> Option<&CountryCode> {
        self.by_name.get(name).map(|&id| self.record(id))
    }

    fn get_by_numeric(&self, numeric: i32) -> Option<&CountryCode> {
        self.by_numeric.get(&numeric).map(|&id| self.record(id))
    }

    fn find_by_name(&self, prefix: &str) -> Vec<&CountryCode> {
        let q = fold_name(prefix);
        // Keys sharing a prefix are contiguous in the ordered index.
        self.name_index
            .range(q.clone()..)
            .take_while(|(name, _)| name.starts_with(&q))
            .flat_map(|(_, ids)| ids.iter().map(|&id| self.record(id)))
            .collect()
    }
}
