// crates/countrycodes-core/src/text.rs

/// Folds a name into the key used by the prefix index.
///
/// Per-character Unicode lower-casing; no transliteration, so `"Åland"`
/// folds to `"åland"`, not `"aland"`. Each character folds the same way
/// wherever it sits, so a prefix folds exactly like the start of a name
/// (`str::to_lowercase` would turn a word-final `Σ` into `ς`).
///
/// ```
/// use countrycodes_core::text::fold_name;
///
/// assert_eq!(fold_name("United States Minor"), "united states minor");
/// assert_eq!(fold_name("Côte d'Ivoire"), "côte d'ivoire");
/// ```
#[inline]
pub fn fold_name(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_folds_like_the_start_of_a_name() {
        let name = fold_name("ΟΔΟΣΑ");
        let prefix = fold_name("ΟΔΟΣ");
        assert!(name.starts_with(&prefix), "{name} / {prefix}");
    }
}
