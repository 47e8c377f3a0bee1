//! CSV serialization of the export table
//!
//! The header row is always written, even for an empty table. Absent fields
//! are empty cells.

use crate::session::ExportRow;
use std::path::Path;
use thiserror::Error;

/// Column headers, in order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "tweet_id",
    "tweet_text",
    "tagged_entity",
    "entity_label",
    "correct_entities? (yes/no)",
    "your label",
    "notes",
];

/// Default file name for a downloaded export.
pub const DEFAULT_EXPORT_FILE: &str = "ner_manual_eval.csv";

/// Errors that can occur while exporting
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize rows to UTF-8 CSV bytes.
pub fn to_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Parse CSV bytes produced by [`to_csv`] back into rows.
pub fn from_csv(bytes: &[u8]) -> Result<Vec<ExportRow>, ExportError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(bytes);
    let mut rows = Vec::new();
    for row in reader.deserialize::<ExportRow>() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Write rows as CSV to `path`, replacing any existing file.
pub fn write_csv(path: impl AsRef<Path>, rows: &[ExportRow]) -> Result<(), ExportError> {
    let bytes = to_csv(rows)?;
    std::fs::write(path.as_ref(), bytes)?;
    tracing::info!(path = %path.as_ref().display(), rows = rows.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Verdict;

    fn rows() -> Vec<ExportRow> {
        vec![
            ExportRow {
                tweet_id: 0,
                tweet_text: "Wear a mask! #COVID".to_string(),
                tagged_entity: None,
                entity_label: None,
                correct_entities: Verdict::No,
                your_label: None,
                notes: String::new(),
            },
            ExportRow {
                tweet_id: 1,
                tweet_text: "CDC says \"stay home\", again".to_string(),
                tagged_entity: Some("CDC".to_string()),
                entity_label: Some("ORG".to_string()),
                correct_entities: Verdict::Yes,
                your_label: Some("ORG".to_string()),
                notes: "multi\nline".to_string(),
            },
        ]
    }

    #[test]
    fn header_matches_export_columns() {
        let bytes = to_csv(&rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "tweet_id,tweet_text,tagged_entity,entity_label,correct_entities? (yes/no),your label,notes"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let text = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(text.trim_end(), EXPORT_HEADERS.join(","));
    }

    #[test]
    fn absent_fields_are_empty_cells() {
        let text = String::from_utf8(to_csv(&rows()[..1]).unwrap()).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(line, "0,Wear a mask! #COVID,,,no,,");
    }

    #[test]
    fn parses_back_to_equal_rows() {
        let original = rows();
        let parsed = from_csv(&to_csv(&original).unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        write_csv(&path, &rows()).unwrap();
        let parsed = from_csv(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
