// crates/countrycodes-core/src/loader/csv_source.rs
use crate::error::{CodeError, Result};
use crate::model::CountryCode;
use crate::raw::{CountryRow, COLUMNS};
use std::collections::BTreeMap;
use std::io::Read;

/// Parses delimited text into an alpha-2 keyed table.
///
/// The first row is a header and is skipped. Every following row must have
/// exactly [`COLUMNS`] fields. A malformed row, an unknown assignment status
/// or a non-integer numeric code aborts the whole parse; nothing is
/// skipped. No validation happens here.
pub fn parse_records<R: Read>(reader: R) -> Result<BTreeMap<String, CountryCode>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = BTreeMap::new();
    let mut record = csv::StringRecord::new();
    let mut rows: u64 = 0;

    while rdr.read_record(&mut record)? {
        rows += 1;
        if rows == 1 {
            continue;
        }

        let line = record.position().map_or(rows, |p| p.line());
        if record.len() != COLUMNS {
            return Err(CodeError::SourceFormat(format!(
                "line {line}: expected {COLUMNS} fields, found {}",
                record.len()
            )));
        }

        let row: CountryRow = record.deserialize(None)?;
        let code = row.into_code(line)?;
        if let Some(prev) = table.insert(code.alpha2.clone(), code) {
            tracing::warn!(alpha2 = %prev.alpha2, line, "duplicate alpha2 row replaces an earlier one");
        }
    }

    if rows < 2 {
        return Err(CodeError::SourceFormat(format!(
            "expected a header and at least one data row, found {rows} row(s)"
        )));
    }

    tracing::debug!(rows = rows - 1, codes = table.len(), "parsed source rows");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignment;

    const HEADER: &str = "full_name,short_name_lower_case,remarks,independent_bool,territory_name,alpha2_code,alpha3_code,numeric_code,assignment_status\n";

    fn parse(body: &str) -> Result<BTreeMap<String, CountryCode>> {
        parse_records(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn parses_quoted_fields() {
        let table = parse(
            "\"Palestine, State of\",\"Palestine, State of\",,false,\"Palestine, State of\",PS,PSE,275,OfficiallyAssigned\n",
        )
        .unwrap();
        let ps = &table["PS"];
        assert_eq!(ps.name, "Palestine, State of");
        assert_eq!(ps.numeric, 275);
        assert_eq!(ps.assignment, Assignment::OfficiallyAssigned);
    }

    #[test]
    fn header_only_is_rejected() {
        assert!(matches!(parse(""), Err(CodeError::SourceFormat(_))));
        assert!(matches!(parse_records(&b""[..]), Err(CodeError::SourceFormat(_))));
    }

    #[test]
    fn wrong_column_count_names_the_line() {
        let err = parse(
            "Albania,Albania,,true,,AL,ALB,008,OfficiallyAssigned\nAlgeria,Algeria,true,,DZ,DZA,012,OfficiallyAssigned\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed source: line 3: expected 9 fields, found 8"
        );
    }

    #[test]
    fn header_column_count_is_not_checked() {
        let table = parse_records(&b"name\nAlbania,Albania,,true,,AL,ALB,008,OfficiallyAssigned\n"[..]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn bad_numeric_aborts() {
        let err = parse("Albania,Albania,,true,,AL,ALB,eight,OfficiallyAssigned\n").unwrap_err();
        assert!(matches!(err, CodeError::NumericParse { line: 2, .. }));
    }

    #[test]
    fn bad_assignment_aborts() {
        let err = parse("Albania,Albania,,true,,AL,ALB,008,Official\n").unwrap_err();
        assert!(matches!(err, CodeError::InvalidAssignment(ref v) if v == "Official"));
    }

    #[test]
    fn later_duplicate_wins() {
        let table = parse(
            "Albania,Albania,,true,,AL,ALB,008,OfficiallyAssigned\nAlbania (new),Albania,,true,,AL,ALB,008,OfficiallyAssigned\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["AL"].name, "Albania (new)");
    }

    #[test]
    fn invalid_utf8_is_a_format_error() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"Alb\xffnia,Albania,,true,,AL,ALB,008,OfficiallyAssigned\n");
        assert!(matches!(parse_records(&bytes[..]), Err(CodeError::SourceFormat(_))));
    }
}
