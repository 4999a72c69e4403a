// crates/countrycodes-core/src/raw.rs
use crate::error::{CodeError, Result};
use crate::model::{Assignment, CountryCode};
use serde::Deserialize;

/// Number of columns every data row must have.
pub const COLUMNS: usize = 9;

/// One source row, deserialized by position:
///
/// ```text
/// full_name,short_name_lower_case,remarks,independent_bool,territory_name,alpha2_code,alpha3_code,numeric_code,assignment_status
/// ```
///
/// Columns 2-4 are carried for the column count only.
#[derive(Debug, Deserialize)]
pub struct CountryRow {
    pub full_name: String,
    pub short_name: String,
    pub remarks: String,
    pub independent: String,
    pub territory_name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
    pub assignment: String,
}

impl CountryRow {
    /// Types the row. `line` only feeds error messages.
    pub fn into_code(self, line: u64) -> Result<CountryCode> {
        let assignment: Assignment = self.assignment.parse()?;
        let numeric = self
            .numeric
            .parse::<i32>()
            .map_err(|source| CodeError::NumericParse {
                line,
                value: self.numeric.clone(),
                source,
            })?;

        Ok(CountryCode {
            name: self.full_name,
            short_name: self.short_name,
            alpha2: self.alpha2,
            alpha3: self.alpha3,
            numeric,
            assignment,
        })
    }
}
