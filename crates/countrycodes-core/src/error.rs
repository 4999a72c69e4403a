// crates/countrycodes-core/src/error.rs
use crate::validate::ValidationReport;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building a [`CountryCodes`] store.
///
/// Lookups never fail; every variant here is raised during construction and
/// aborts it as a whole.
///
/// [`CountryCodes`]: crate::CountryCodes
#[derive(Debug, Error)]
pub enum CodeError {
    /// The dataset could not be opened or read.
    #[error("dataset not available at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tabular structure is broken: too few rows, a wrong column count, or
    /// text the tokenizer rejects.
    #[error("malformed source: {0}")]
    SourceFormat(String),

    /// An assignment status that is not one of the known literals.
    #[error("invalid assignment '{0}'")]
    InvalidAssignment(String),

    /// A numeric code that is not an integer; `line` is the source line.
    #[error("line {line}: numeric code '{value}' is not an integer: {source}")]
    NumericParse {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Aggregated record violations, one entry per offending alpha-2 code.
    #[error("invalid country codes configuration: {0}")]
    Validation(ValidationReport),

    /// A snapshot that bincode cannot encode or decode.
    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Snapshot I/O: writing a snapshot or inflating a compressed one.
    /// Reading a delimited source reports [`CodeError::SourceUnavailable`].
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CodeError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CodeError::Io(io),
            _ => CodeError::SourceFormat(message),
        }
    }
}

impl From<ValidationReport> for CodeError {
    fn from(report: ValidationReport) -> Self {
        CodeError::Validation(report)
    }
}

pub type Result<T> = std::result::Result<T, CodeError>;
