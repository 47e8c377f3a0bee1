//! ReviewSession: the driver that owns rows and judgments
//!
//! A session is built from one sample. Every reviewer action ends with a
//! sync pass that calls `ensure_initialized` on every row, so rendering code
//! can rely on each row having a judgment state. Drawing a new sample
//! replaces the rows and starts from an empty store.

use super::command::ReviewCommand;
use super::flatten::flatten;
use super::projector::{project, ExportRow};
use super::store::{JudgmentState, ReviewError, ReviewResult, ReviewStore};
use super::types::{Record, ReviewableRow, RowId, TaggedRecord, NO_LABEL};
use crate::export::{self, ExportError};
use crate::extract::{extract, ExtractError, Tagger};
use thiserror::Error;

/// Errors surfaced by a review session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// A reviewer referred to a row that is not in this session.
    #[error("no row with id {0} in this session")]
    NoSuchRow(RowId),
}

/// One review session over one sample.
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    records: Vec<Record>,
    rows: Vec<ReviewableRow>,
    store: ReviewStore,
}

impl ReviewSession {
    /// Tag `records` and open a session over the flattened rows.
    ///
    /// On tagger failure no session is created.
    pub fn start(records: Vec<Record>, tagger: &dyn Tagger) -> Result<Self, SessionError> {
        let tagged = extract(&records, tagger)?;
        Ok(Self::from_tagged(tagged))
    }

    /// Open a session over already-tagged records.
    pub fn from_tagged(tagged: Vec<TaggedRecord>) -> Self {
        let rows = flatten(&tagged);
        let records = tagged.into_iter().map(|t| t.record).collect();
        let mut session = Self {
            records,
            rows,
            store: ReviewStore::new(),
        };
        session.sync();
        tracing::info!(
            records = session.records.len(),
            rows = session.rows.len(),
            "review session started"
        );
        session
    }

    /// Replace this session with one over a new sample.
    ///
    /// If tagging fails the current session, judgments included, is left
    /// untouched.
    pub fn restart(&mut self, records: Vec<Record>, tagger: &dyn Tagger) -> Result<(), SessionError> {
        let tagged = extract(&records, tagger)?;
        self.store.reset();
        self.rows = flatten(&tagged);
        self.records = tagged.into_iter().map(|t| t.record).collect();
        self.sync();
        tracing::info!(rows = self.rows.len(), "review session restarted");
        Ok(())
    }

    /// Make sure every row has a judgment state. Returns how many were created.
    pub fn sync(&mut self) -> usize {
        let store = &mut self.store;
        let created = self
            .rows
            .iter()
            .filter(|row| store.ensure_initialized(row))
            .count();
        tracing::debug!(rows = self.rows.len(), created, "session synced");
        created
    }

    /// Apply one reviewer action, then sync.
    ///
    /// Returns whether judgment state changed. Display-only commands are
    /// accepted and change nothing.
    pub fn apply(&mut self, command: &ReviewCommand) -> Result<bool, SessionError> {
        let mutated = match command {
            ReviewCommand::Mark { id, correct } => {
                self.set_evaluation(*id, *correct)?;
                true
            }
            ReviewCommand::Label { id, label } => {
                let value = label.map(|l| l.as_str()).unwrap_or(NO_LABEL);
                self.set_human_label(*id, value)?;
                true
            }
            ReviewCommand::Note { id, text } => {
                self.set_notes(*id, text.clone())?;
                true
            }
            _ => false,
        };
        self.sync();
        Ok(mutated)
    }

    pub fn set_evaluation(&mut self, id: RowId, value: bool) -> Result<(), SessionError> {
        self.require_row(id)?;
        self.store.set_evaluation(id, value)?;
        Ok(())
    }

    pub fn set_human_label(&mut self, id: RowId, value: impl Into<String>) -> Result<(), SessionError> {
        self.require_row(id)?;
        self.store.set_human_label(id, value)?;
        Ok(())
    }

    pub fn set_notes(&mut self, id: RowId, value: impl Into<String>) -> Result<(), SessionError> {
        self.require_row(id)?;
        self.store.set_notes(id, value)?;
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rows(&self) -> &[ReviewableRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&ReviewableRow> {
        self.rows.get(id.index())
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn judgment(&self, id: RowId) -> ReviewResult<&JudgmentState> {
        self.store.get(id)
    }

    /// True when the sample produced no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The current export table.
    pub fn table(&self) -> ReviewResult<Vec<ExportRow>> {
        project(&self.rows, &self.store)
    }

    pub fn accuracy(&self) -> ReviewResult<Option<f64>> {
        Ok(export::accuracy(&self.table()?))
    }

    pub fn export_csv(&self) -> Result<Vec<u8>, SessionError> {
        Ok(export::to_csv(&self.table()?)?)
    }

    fn require_row(&self, id: RowId) -> Result<(), SessionError> {
        if self.row(id).is_some() {
            Ok(())
        } else {
            Err(SessionError::NoSuchRow(id))
        }
    }
}
