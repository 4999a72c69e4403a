// crates/countrycodes-core/src/traits.rs
use crate::model::CountryCode;

/// Lookup operations over a built store.
///
/// Every method is a pure read. Exact lookups are case-sensitive and return
/// `None` for an unknown key; [`CodeLookup::find_by_name`] is the only
/// case-insensitive operation.
pub trait CodeLookup {
    /// Exact lookup by alpha-2 code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrycodes_core::{CodeLookup, CountryCodes};
    ///
    /// let codes = CountryCodes::load_from_path("data/codes.csv").unwrap();
    ///
    /// if let Some(de) = codes.get_by_alpha2("DE") {
    ///     println!("{} ({})", de.name(), de.numeric_str());
    /// }
    /// assert!(codes.get_by_alpha2("").is_none());
    /// ```
    fn get_by_alpha2(&self, alpha2: &str) -> Option<&CountryCode>;

    /// Exact lookup by alpha-3 code. Records without an alpha-3 are never
    /// returned.
    fn get_by_alpha3(&self, alpha3: &str) -> Option<&CountryCode>;

    /// Exact, case-sensitive lookup by full name.
    fn get_by_name(&self, name: &str) -> Option<&CountryCode>;

    /// Exact lookup by numeric code.
    fn get_by_numeric(&self, numeric: i32) -> Option<&CountryCode>;

    /// Case-insensitive prefix search over full names.
    ///
    /// Returns every record whose lower-cased name starts with the
    /// lower-cased `prefix`, ordered by lower-cased name. No match gives an
    /// empty vector; the empty prefix matches everything.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrycodes_core::{CodeLookup, CountryCodes};
    ///
    /// let codes = CountryCodes::load_from_path("data/codes.csv").unwrap();
    ///
    /// for c in codes.find_by_name("united") {
    ///     println!("- {} ({})", c.name(), c.alpha2());
    /// }
    /// ```
    fn find_by_name(&self, prefix: &str) -> Vec<&CountryCode>;

    /// Tries alpha-2, then alpha-3, then a numeric code given as 1-3 digits.
    fn get_by_code(&self, code: &str) -> Option<&CountryCode> {
        self.get_by_alpha2(code)
            .or_else(|| self.get_by_alpha3(code))
            .or_else(|| {
                if (1..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit()) {
                    code.parse().ok().and_then(|n| self.get_by_numeric(n))
                } else {
                    None
                }
            })
    }
}
