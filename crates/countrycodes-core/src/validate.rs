// crates/countrycodes-core/src/validate.rs

//! # Batch validation
//!
//! Checks every record of a freshly parsed table and collects *all*
//! violations, so one report is enough to fix a broken dataset.

use crate::model::{Assignment, CountryCode};
use std::collections::BTreeMap;
use std::fmt;

/// A single structural problem with one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The record was stored under an empty alpha-2 key.
    MissingCode,
    /// The table key differs from the record's own alpha-2.
    KeyMismatch { key: String, alpha2: String },
    Alpha2Length(String),
    Alpha3Length(String),
    /// A status that parses but may not appear on a record (`NotUsed`).
    InvalidAssignment(Assignment),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingCode => f.write_str("missing alpha2 code"),
            Violation::KeyMismatch { key, alpha2 } => {
                write!(f, "code '{key}' and alpha2 '{alpha2}' mismatch")
            }
            Violation::Alpha2Length(a2) => write!(f, "invalid alpha2 length '{a2}'"),
            Violation::Alpha3Length(a3) => write!(f, "invalid alpha3 length '{a3}'"),
            Violation::InvalidAssignment(a) => write!(f, "invalid assignment '{a}'"),
        }
    }
}

/// Every violation found in one validation pass, keyed by alpha-2 code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<Violation>>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of codes with at least one violation.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Offending codes, in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn violations(&self, code: &str) -> &[Violation] {
        self.errors.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    fn push(&mut self, code: &str, violation: Violation) {
        self.errors.entry(code.to_owned()).or_default().push(violation);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid code(s)", self.errors.len())?;
        for (code, violations) in &self.errors {
            write!(f, "\n  '{code}': ")?;
            for (i, v) in violations.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

/// Validates an alpha-2 keyed table.
///
/// Unknown status literals never get this far (they fail while parsing);
/// here only statuses that parse but are not [`Assignment::is_valid`] are
/// reported.
pub fn validate(table: &BTreeMap<String, CountryCode>) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    for (code, record) in table {
        if code.is_empty() {
            report.push(code, Violation::MissingCode);
        }
        if *code != record.alpha2 {
            report.push(
                code,
                Violation::KeyMismatch {
                    key: code.clone(),
                    alpha2: record.alpha2.clone(),
                },
            );
        }
        if record.alpha2.chars().count() != 2 {
            report.push(code, Violation::Alpha2Length(record.alpha2.clone()));
        }
        // Also rejects an absent alpha-3.
        if record.alpha3.chars().count() != 3 {
            report.push(code, Violation::Alpha3Length(record.alpha3.clone()));
        }
        if !record.assignment.is_valid() {
            report.push(code, Violation::InvalidAssignment(record.assignment));
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}
