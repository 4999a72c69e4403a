// crates/countrycodes-core/src/loader/bundled.rs
use crate::error::Result;
use crate::model::CountryCodes;
use once_cell::sync::OnceCell;

/// The reference ISO 3166-1 table shipped in `data/codes.csv`.
pub const BUNDLED_CSV: &str = include_str!("../../data/codes.csv");

// Single in-process instance so the bundled table is parsed once per process.
static BUNDLED: OnceCell<CountryCodes> = OnceCell::new();

impl CountryCodes {
    /// The store built from the dataset compiled into this crate.
    ///
    /// The first call parses and indexes it; later calls return the same
    /// shared instance. Does not touch the filesystem.
    pub fn bundled() -> Result<&'static CountryCodes> {
        BUNDLED.get_or_try_init(|| Self::from_csv_str(BUNDLED_CSV))
    }
}
