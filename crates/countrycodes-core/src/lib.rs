// crates/countrycodes-core/src/lib.rs

//! In-memory ISO 3166-1 country code lookup.
//!
//! A [`CountryCodes`] store is built once from a delimited dataset, validated
//! as a whole, and then answers lookups by alpha-2, alpha-3, numeric code,
//! exact name, or case-insensitive name prefix through [`CodeLookup`].
//!
//! ```
//! use countrycodes_core::{CodeLookup, CountryCodes};
//!
//! let codes = CountryCodes::bundled()?;
//! assert_eq!(codes.get_by_numeric(840).map(|c| c.alpha2()), Some("US"));
//! assert_eq!(codes.find_by_name("united states minor").len(), 1);
//! # Ok::<(), countrycodes_core::CodeError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;
pub mod validate;
// Source row shape, used by the loader only
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::CodeStats;
pub use crate::error::{CodeError, Result};
pub use crate::model::{Assignment, CountryCode, CountryCodes};
pub use crate::traits::CodeLookup;
pub use crate::validate::{ValidationReport, Violation};
