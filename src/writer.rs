//! CSV output of mapped records.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::Error;
use crate::records::SourceTable;

/// Write `records` as CSV: one header row with [`SourceTable::COLUMNS`],
/// then one row per record in the given order.
///
/// Fields are quoted only when needed, absent values are written as empty
/// fields and rows end with `\r\n`, like Python's `csv` module.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_table<R: SourceTable, W: io::Write>(
    writer: W,
    records: &[R],
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(R::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write `records` to it.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created and
/// [`Error::WriteOutput`] if writing to it fails.
pub fn write_table_file<R: SourceTable>(path: &Path, records: &[R]) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(file, records).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BreederRecord, StrainRecord};
    use crate::sql::parse_values;

    fn to_csv<R: SourceTable>(records: &[R]) -> String {
        let mut out = Vec::new();
        write_table(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_for_no_records() {
        assert_eq!(
            to_csv::<BreederRecord>(&[]),
            "id,name,created_at,updated_at\r\n"
        );
        assert_eq!(
            to_csv::<StrainRecord>(&[]),
            "id,name,breeder_id,thc_content,cbd_content,strain_type,genetics_type,created_at,updated_at\r\n"
        );
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let values = parse_values(
            r#"7,'Sensi Seeds, "Amsterdam"',s,l,i,d,1,u,'2024-09-28 23:47:24','2024-09-28 23:47:25'"#,
        );
        let breeder = BreederRecord::from_row(&values).unwrap();
        assert_eq!(
            to_csv(&[breeder]),
            "id,name,created_at,updated_at\r\n\
             7,\"Sensi Seeds, \"\"Amsterdam\"\"\",2024-09-28T23:47:24,2024-09-28T23:47:25\r\n"
        );
    }

    #[test]
    fn test_absent_values_are_empty_fields() {
        let values = parse_values(
            "5,NULL,s,l,NULL,1,NULL,'viel THC',u,p,f,d,'2024-01-01 10:00:00','2024-01-02 10:00:00'",
        );
        let strain = StrainRecord::from_row(&values).unwrap();
        assert_eq!(
            to_csv(&[strain]),
            "id,name,breeder_id,thc_content,cbd_content,strain_type,genetics_type,created_at,updated_at\r\n\
             5,,,,,,,2024-01-01T10:00:00,2024-01-02T10:00:00\r\n"
        );
    }

    #[test]
    fn test_rows_keep_input_order() {
        let records: Vec<BreederRecord> = ["3", "1", "2"]
            .iter()
            .map(|id| {
                let row = format!("{id},n,s,l,i,d,1,u,'2024-01-01 00:00:00','2024-01-01 00:00:00'");
                BreederRecord::from_row(&parse_values(&row)).unwrap()
            })
            .collect();
        let csv = to_csv(&records);
        let ids: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("breeders.csv");
        let err = write_table_file::<BreederRecord>(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::CreateOutput { .. }));
    }
}
