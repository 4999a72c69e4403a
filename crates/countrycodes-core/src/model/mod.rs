// crates/countrycodes-core/src/model/mod.rs
pub mod assignment;
pub mod convert;
pub mod record;
pub mod search;
pub mod store;

pub use assignment::Assignment;
pub use record::CountryCode;
pub use store::CountryCodes;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
