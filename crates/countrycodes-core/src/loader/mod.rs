// crates/countrycodes-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) and funnels every input shape
//! through the same pipeline: parse -> validate -> index. Construction is
//! all-or-nothing; a failed load never yields a partial store.

use crate::error::{CodeError, Result};
use crate::model::convert::from_validated;
use crate::model::{CountryCode, CountryCodes};
use crate::validate::validate;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "bundled")]
mod bundled;
mod csv_source;
mod snapshot;

#[cfg(feature = "bundled")]
pub use bundled::BUNDLED_CSV;
pub use csv_source::parse_records;
pub use snapshot::cache_path;

impl CountryCodes {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "codes.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// **Standard Loader:** reads a delimited dataset from disk.
    ///
    /// With the `compact` feature a path ending in `.gz` is decompressed on
    /// the fly. Any I/O failure, whether opening or mid-read, is reported
    /// as [`CodeError::SourceUnavailable`].
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        Self::from_reader(reader).map_err(|err| match err {
            CodeError::Io(source) => CodeError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Builds the store from any delimited-text reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let table = parse_records(reader)?;
        Self::build(table)
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }

    pub fn from_csv_str(data: &str) -> Result<Self> {
        Self::from_reader(data.as_bytes())
    }

    /// Builds the store from already-typed records.
    ///
    /// Records are keyed by alpha-2 (a later record replaces an earlier one
    /// with the same code) and then validated exactly like parsed rows.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CountryCode>,
    {
        let table: BTreeMap<String, CountryCode> = records
            .into_iter()
            .map(|c| (c.alpha2.clone(), c))
            .collect();
        Self::build(table)
    }

    fn build(table: BTreeMap<String, CountryCode>) -> Result<Self> {
        if let Err(report) = validate(&table) {
            tracing::warn!(invalid = report.len(), "dataset failed validation");
            return Err(report.into());
        }
        Ok(from_validated(table))
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| CodeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    if !is_gzip_path(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(flate2::read::GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CodeError::SourceFormat(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignment;

    fn made_up(key: &str, alpha2: &str) -> (String, CountryCode) {
        (
            key.to_owned(),
            CountryCode {
                name: format!("Made Up {key}"),
                short_name: String::new(),
                alpha2: alpha2.into(),
                alpha3: "MDU".into(),
                numeric: 999,
                assignment: Assignment::UserAssigned,
            },
        )
    }

    #[test]
    fn build_rejects_key_mismatch() {
        let table = BTreeMap::from([made_up("MB", "MU")]);
        let err = CountryCodes::build(table).unwrap_err();
        match err {
            CodeError::Validation(report) => assert_eq!(report.codes().collect::<Vec<_>>(), ["MB"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = CountryCodes::load_from_path("/definitely/not/here/codes.csv").unwrap_err();
        assert!(matches!(err, CodeError::SourceUnavailable { .. }));
    }

    #[test]
    fn directory_is_source_unavailable() {
        let dir = std::env::temp_dir();
        match CountryCodes::load_from_path(&dir).unwrap_err() {
            CodeError::SourceUnavailable { path, .. } => assert_eq!(path, dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gzip_detection_uses_the_extension() {
        assert!(is_gzip_path(Path::new("codes.csv.gz")));
        assert!(is_gzip_path(Path::new("codes.csv.GZ")));
        assert!(!is_gzip_path(Path::new("codes.csv")));
    }
}
