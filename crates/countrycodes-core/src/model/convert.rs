// crates/countrycodes-core/src/model/convert.rs
use super::store::{CountryCodes, RecordId};
use super::{Assignment, CountryCode};
use crate::text::fold_name;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

/// **Indexer:** validated table -> store.
///
/// One pass over the records fills every index. Secondary keys that collide
/// resolve last-write-wins; officially assigned records are inserted after
/// all others, so a reserved code never shadows a current one that shares
/// its numeric code (e.g. 104 for both `BU` and `MM`).
pub(crate) fn from_validated(table: BTreeMap<String, CountryCode>) -> CountryCodes {
    let records: Vec<CountryCode> = table.into_values().collect();

    let mut db = CountryCodes {
        by_alpha2: HashMap::with_capacity(records.len()),
        by_alpha3: HashMap::with_capacity(records.len()),
        by_name: HashMap::with_capacity(records.len()),
        by_numeric: HashMap::with_capacity(records.len()),
        name_index: BTreeMap::new(),
        records,
    };

    let (official, others): (Vec<RecordId>, Vec<RecordId>) = (0..db.records.len() as RecordId)
        .partition(|&id| db.record(id).assignment == Assignment::OfficiallyAssigned);

    for id in others.into_iter().chain(official) {
        let c = &db.records[id as usize];
        db.by_alpha2.insert(c.alpha2.clone(), id);
        if !c.alpha3.is_empty() {
            insert_last_wins(&mut db.by_alpha3, c.alpha3.clone(), id, "alpha3");
        }
        insert_last_wins(&mut db.by_name, c.name.clone(), id, "name");
        insert_last_wins(&mut db.by_numeric, c.numeric, id, "numeric");
        db.name_index.entry(fold_name(&c.name)).or_default().push(id);
    }
    for ids in db.name_index.values_mut() {
        ids.sort_unstable();
    }

    tracing::info!(
        records = db.records.len(),
        alpha3 = db.by_alpha3.len(),
        names = db.by_name.len(),
        numeric = db.by_numeric.len(),
        "country code store built"
    );
    db
}

fn insert_last_wins<K>(index: &mut HashMap<K, RecordId>, key: K, id: RecordId, kind: &'static str)
where
    K: Eq + Hash + Display,
{
    if let Some(&prev) = index.get(&key) {
        tracing::debug!(index = kind, key = %key, replaced = prev, by = id, "duplicate key, keeping latest");
    }
    index.insert(key, id);
}
