// crates/countrycodes-core/src/model/record.rs
use super::Assignment;
use serde::{Deserialize, Serialize};

/// One ISO 3166-1 code element.
///
/// Records are immutable once the store is built; lookups hand out shared
/// references. `CountryCode::default()` is the empty record, useful for
/// callers that want a value rather than an `Option`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode {
    /// Full name, unique within a dataset (e.g. "United States of America").
    pub name: String,
    /// Informal display name (e.g. "United States of America (the)").
    pub short_name: String,
    pub alpha2: String,
    /// Empty when the code element has no alpha-3 form.
    pub alpha3: String,
    pub numeric: i32,
    pub assignment: Assignment,
}

impl CountryCode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> Option<&str> {
        (!self.alpha3.is_empty()).then_some(self.alpha3.as_str())
    }

    pub fn numeric(&self) -> i32 {
        self.numeric
    }

    /// Numeric code in its three-digit form, e.g. `"004"` for Afghanistan.
    /// Negative codes are not padded.
    pub fn numeric_str(&self) -> String {
        if self.numeric < 0 {
            self.numeric.to_string()
        } else {
            format!("{:03}", self.numeric)
        }
    }

    pub fn assignment(&self) -> Assignment {
        self.assignment
    }
}
