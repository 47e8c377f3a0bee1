//! Review state store: per-row judgment fields keyed by row identity
//!
//! States are created lazily on first observation of a row and are never
//! reset by later observations, so a driver may re-synchronize the whole
//! row set after every reviewer action without losing input.

use super::types::{ReviewableRow, RowId, NO_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by the review store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The row was accessed before `ensure_initialized` ever saw it.
    #[error("unknown row: {0} was never initialized")]
    UnknownRow(RowId),
}

/// Result type for review store operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// The mutable human-review fields attached to one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentState {
    /// `None` until the reviewer interacts with the row.
    pub evaluation: Option<bool>,
    /// The reviewer's label, or the literal `"None"`.
    pub human_label: String,
    pub notes: String,
}

impl JudgmentState {
    /// Defaults for a freshly observed row.
    pub fn for_row(row: &ReviewableRow) -> Self {
        Self {
            evaluation: None,
            human_label: row
                .entity_label
                .clone()
                .unwrap_or_else(|| NO_LABEL.to_string()),
            notes: String::new(),
        }
    }

    /// True while the reviewer has not given a verdict.
    pub fn is_unreviewed(&self) -> bool {
        self.evaluation.is_none()
    }
}

/// Session-scoped judgments, one per row identity.
///
/// Owned by the session driver; a new sample means a new (or reset) store.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    states: HashMap<RowId, JudgmentState>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the judgment state for `row` if none exists.
    ///
    /// Returns `true` when a state was created, `false` when the row was
    /// already initialized (in which case nothing changes).
    pub fn ensure_initialized(&mut self, row: &ReviewableRow) -> bool {
        if self.states.contains_key(&row.id) {
            return false;
        }
        self.states.insert(row.id, JudgmentState::for_row(row));
        true
    }

    pub fn set_evaluation(&mut self, id: RowId, value: bool) -> ReviewResult<()> {
        self.state_mut(id)?.evaluation = Some(value);
        Ok(())
    }

    pub fn set_human_label(&mut self, id: RowId, value: impl Into<String>) -> ReviewResult<()> {
        self.state_mut(id)?.human_label = value.into();
        Ok(())
    }

    pub fn set_notes(&mut self, id: RowId, value: impl Into<String>) -> ReviewResult<()> {
        self.state_mut(id)?.notes = value.into();
        Ok(())
    }

    pub fn get(&self, id: RowId) -> ReviewResult<&JudgmentState> {
        self.states.get(&id).ok_or(ReviewError::UnknownRow(id))
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.states.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Count of rows that have received a verdict.
    pub fn reviewed_count(&self) -> usize {
        self.states.values().filter(|s| !s.is_unreviewed()).count()
    }

    /// Drop every judgment. Used when a new sample starts a new session.
    pub fn reset(&mut self) {
        self.states.clear();
    }

    fn state_mut(&mut self, id: RowId) -> ReviewResult<&mut JudgmentState> {
        self.states.get_mut(&id).ok_or(ReviewError::UnknownRow(id))
    }
}
