//! Session projector: rows + judgments → export table
//!
//! The projection is recomputed on demand and never written back; it reads
//! the store through a shared reference only.

use super::store::{ReviewResult, ReviewStore};
use super::types::{ReviewableRow, NO_LABEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The reviewer's verdict as exported. Unreviewed rows export as `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
        }
    }
}

impl From<Option<bool>> for Verdict {
    fn from(evaluation: Option<bool>) -> Self {
        match evaluation {
            Some(true) => Verdict::Yes,
            Some(false) | None => Verdict::No,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the export table.
///
/// Serialized field names are the column headers of the exported CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub tweet_id: usize,
    pub tweet_text: String,
    pub tagged_entity: Option<String>,
    pub entity_label: Option<String>,
    #[serde(rename = "correct_entities? (yes/no)")]
    pub correct_entities: Verdict,
    #[serde(rename = "your label")]
    pub your_label: Option<String>,
    pub notes: String,
}

/// Build the export table for `rows` from the current judgments.
///
/// Fails with `UnknownRow` if any row was never initialized in `store`.
pub fn project(rows: &[ReviewableRow], store: &ReviewStore) -> ReviewResult<Vec<ExportRow>> {
    rows.iter()
        .map(|row| {
            let state = store.get(row.id)?;
            Ok(ExportRow {
                tweet_id: row.id.index(),
                tweet_text: row.tweet_text.clone(),
                tagged_entity: row.tagged_entity.clone(),
                entity_label: row.entity_label.clone(),
                correct_entities: Verdict::from(state.evaluation),
                your_label: if state.human_label == NO_LABEL {
                    None
                } else {
                    Some(state.human_label.clone())
                },
                notes: state.notes.clone(),
            })
        })
        .collect()
}
