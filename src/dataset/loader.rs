//! Dataset loading with a demo fallback
//!
//! Reads a CSV with a header row and pulls one text column. Rows whose text
//! cell is empty are dropped. When the dataset path does not exist the
//! session falls back to four built-in demo tweets and logs a warning.

use crate::session::Record;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column holding the text to tag.
pub const DEFAULT_TEXT_COLUMN: &str = "tweet_text";

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/covidhoax_OR_notomasks_hashtag.csv";

const DEMO_TWEETS: [&str; 4] = [
    "Wear a mask! #COVID",
    "No way I'm wearing a mask 😷",
    "CDC guidance updated today",
    "Pfizer announces new results",
];

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset not found at {}", .0.display())]
    Missing(PathBuf),

    #[error("dataset has no '{0}' column")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a session's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Demo,
}

/// Records plus their provenance.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<Record>,
    pub source: DatasetSource,
}

impl LoadedDataset {
    pub fn is_demo(&self) -> bool {
        self.source == DatasetSource::Demo
    }
}

/// The four built-in demo tweets.
pub fn demo_records() -> Vec<Record> {
    DEMO_TWEETS.iter().map(|t| Record::new(*t)).collect()
}

/// Read records from CSV data, keeping rows with a non-empty `text_column`.
pub fn read_records<R: Read>(reader: R, text_column: &str) -> Result<Vec<Record>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let column = csv_reader
        .headers()?
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| DatasetError::MissingColumn(text_column.to_string()))?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in csv_reader.records() {
        let row = row?;
        match row.get(column) {
            Some(text) if !text.is_empty() => records.push(Record::new(text)),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped rows with missing text");
    }
    Ok(records)
}

/// Load records from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>, text_column: &str) -> Result<Vec<Record>, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let records = read_records(file, text_column)?;
    tracing::info!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}

/// Load records, falling back to the demo tweets when the file is missing.
///
/// Only a missing file is recovered; unreadable or malformed data is still
/// an error.
pub fn load_or_demo(path: impl AsRef<Path>, text_column: &str) -> Result<LoadedDataset, DatasetError> {
    let path = path.as_ref();
    match load_dataset(path, text_column) {
        Ok(records) => Ok(LoadedDataset {
            records,
            source: DatasetSource::File(path.to_path_buf()),
        }),
        Err(DatasetError::Missing(missing)) => {
            tracing::warn!(
                path = %missing.display(),
                "dataset not found; using tiny demo tweets instead"
            );
            Ok(LoadedDataset {
                records: demo_records(),
                source: DatasetSource::Demo,
            })
        }
        Err(e) => Err(e),
    }
}
