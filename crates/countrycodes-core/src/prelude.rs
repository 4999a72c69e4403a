//! countrycodes prelude: bring common types and traits into scope.

pub use crate::common::CodeStats;
pub use crate::error::{CodeError, Result};
pub use crate::model::{Assignment, CountryCode, CountryCodes};
pub use crate::traits::CodeLookup;
pub use crate::validate::{ValidationReport, Violation};
