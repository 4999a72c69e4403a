// crates/countrycodes-core/src/loader/snapshot.rs
use crate::error::{CodeError, Result};
use crate::model::{CountryCode, CountryCodes, CACHE_SUFFIX};
use bincode::Options;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Upper bound for decoding; guards against corrupt or hostile snapshots.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

/// Where [`CountryCodes::load_cached`] keeps the snapshot for `source`:
/// `codes.csv` -> `codes.csv.comp.bin` (or `.bin` without `compact`).
pub fn cache_path(source: &Path) -> PathBuf {
    let mut name = source.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(CACHE_SUFFIX);
    source.with_file_name(name)
}

impl CountryCodes {
    /// Serializes the records (not the indexes) with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(&self.records)?)
    }

    /// Rebuilds a store from [`CountryCodes::to_bytes`] output.
    ///
    /// The records go through validation and indexing again, so a snapshot
    /// is held to the same rules as a CSV source.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let records: Vec<CountryCode> = options().deserialize(data)?;
        Self::from_records(records)
    }

    /// Writes a snapshot to disk, gzip-compressed with the `compact` feature.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);

        #[cfg(feature = "compact")]
        {
            let mut gz = flate2::write::GzEncoder::new(&mut writer, flate2::Compression::default());
            gz.write_all(&bytes)?;
            gz.finish()?;
        }
        #[cfg(not(feature = "compact"))]
        writer.write_all(&bytes)?;

        writer.flush()?;
        Ok(())
    }

    /// Loads a snapshot written by [`CountryCodes::save_as`].
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| CodeError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        if !raw.starts_with(&GZIP_MAGIC) {
            return Self::from_bytes(&raw);
        }

        #[cfg(feature = "compact")]
        {
            use std::io::Read;

            let mut data = Vec::new();
            flate2::read::GzDecoder::new(raw.as_slice()).read_to_end(&mut data)?;
            Self::from_bytes(&data)
        }

        #[cfg(not(feature = "compact"))]
        {
            Err(CodeError::SourceFormat(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )))
        }
    }

    /// **Smart Load:** uses the snapshot next to `source` when it is newer
    /// than the source, otherwise parses the source and refreshes the
    /// snapshot (best effort).
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache = cache_path(source);

        if is_cache_fresh(source, &cache) {
            match Self::load_binary_file(&cache) {
                Ok(db) => return Ok(db),
                Err(err) => tracing::warn!(error = %err, "ignoring unusable snapshot"),
            }
        }

        let db = Self::load_from_path(source)?;
        if let Err(err) = db.save_as(&cache) {
            tracing::warn!(error = %err, cache = %cache.display(), "could not write snapshot");
        }
        Ok(db)
    }
}

fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the snapshot is all we have.
        Err(_) => true,
    }
}
