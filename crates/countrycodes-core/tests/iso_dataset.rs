// Lookups against the shipped ISO 3166-1 table.
use countrycodes_core::prelude::*;

fn codes() -> &'static CountryCodes {
    #[cfg(feature = "bundled")]
    {
        CountryCodes::bundled().unwrap()
    }
    #[cfg(not(feature = "bundled"))]
    {
        use once_cell::sync::Lazy;
        static CODES: Lazy<CountryCodes> =
            Lazy::new(|| CountryCodes::load_from_path(CountryCodes::default_dataset_path()).unwrap());
        &CODES
    }
}

#[test]
fn numeric_840_is_the_usa() {
    let us = codes().get_by_numeric(840).unwrap();
    assert_eq!(us.name(), "United States of America");
    assert_eq!(us.alpha2(), "US");
}

#[test]
fn united_states_minor_prefix() {
    let matches = codes().find_by_name("United States Minor");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], codes().get_by_alpha2("UM").unwrap());
}

#[test]
fn empty_alpha2_is_not_found() {
    let found = codes().get_by_alpha2("");
    assert!(found.is_none());
    assert_eq!(found.cloned().unwrap_or_default(), CountryCode::default());
}

#[test]
fn unknown_keys_are_not_found() {
    let db = codes();
    assert!(db.get_by_alpha2("XX").is_none());
    assert!(db.get_by_alpha3("XXX").is_none());
    assert!(db.get_by_name("Atlantis").is_none());
    assert!(db.get_by_numeric(0).is_none());
    assert!(db.find_by_name("Atlantis").is_empty());
}

#[test]
fn every_alpha2_round_trips() {
    let db = codes();
    for c in db {
        assert_eq!(db.get_by_alpha2(c.alpha2()).unwrap().alpha2(), c.alpha2());
        assert_eq!(db.get_by_alpha3(c.alpha3().unwrap()).unwrap(), c);
        assert_eq!(db.get_by_name(c.name()).unwrap(), c);
    }
}

#[test]
fn official_codes_win_numeric_collisions() {
    let db = codes();
    for (numeric, current, reserved) in [(104, "MM", "BU"), (180, "CD", "ZR"), (626, "TL", "TP")] {
        assert_eq!(db.get_by_numeric(numeric).unwrap().alpha2(), current);
        assert_eq!(db.get_by_alpha2(reserved).unwrap().numeric(), numeric);
    }
    // Both 891 holders are reserved; one of them wins.
    let cs_or_yu = db.get_by_numeric(891).unwrap().alpha2();
    assert!(cs_or_yu == "CS" || cs_or_yu == "YU");
}

#[test]
fn dataset_shape() {
    let stats = codes().stats();
    assert_eq!(stats.records, 257);
    assert_eq!(stats.per_assignment[&Assignment::OfficiallyAssigned], 249);
    assert_eq!(stats.per_assignment[&Assignment::TransitionallyReserved], 7);
    assert_eq!(stats.per_assignment[&Assignment::ExceptionallyReserved], 1);
    assert_eq!(stats.alpha3, 257);
    assert_eq!(stats.names, 257);
    assert_eq!(stats.numeric, 253);
}

#[test]
fn prefix_search_ignores_case() {
    let db = codes();
    let upper: Vec<_> = db.find_by_name("KOREA").into_iter().map(|c| c.alpha2()).collect();
    let lower: Vec<_> = db.find_by_name("korea").into_iter().map(|c| c.alpha2()).collect();
    assert_eq!(upper, lower);
    assert_eq!(upper, ["KP", "KR"]);
    assert_eq!(db.find_by_name("åland").len(), 1);
}

#[test]
fn names_with_commas_survive_parsing() {
    let bq = codes().get_by_alpha3("BES").unwrap();
    assert_eq!(bq.name(), "Bonaire, Sint Eustatius and Saba");
    assert_eq!(bq.numeric_str(), "535");
}

#[test]
fn lookup_by_any_code() {
    let db = codes();
    for code in ["AF", "AFG", "4", "004"] {
        assert_eq!(db.get_by_code(code).unwrap().alpha2(), "AF");
    }
}

#[test]
fn snapshot_rebuilds_the_same_store() {
    let db = codes();
    let restored = CountryCodes::from_bytes(&db.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.records(), db.records());
    assert_eq!(restored.stats(), db.stats());
}

#[test]
fn shared_across_threads() {
    let db = codes();
    std::thread::scope(|s| {
        for prefix in ["a", "b", "c", "s", "u"] {
            s.spawn(move || {
                for c in db.find_by_name(prefix) {
                    assert_eq!(db.get_by_alpha2(c.alpha2()), Some(c));
                }
            });
        }
    });
}
