//! Evaluation session state machine
//!
//! Tagged records are flattened into reviewable rows, each row gets a
//! judgment state on first observation, and the export table is projected
//! from rows + judgments whenever it is asked for.

mod command;
mod controller;
mod flatten;
mod projector;
mod store;
mod types;

pub use command::{
    highlight_entity, label_options, selectable_label, CommandError, ReviewCommand, COMMAND_HELP,
};
pub use controller::{ReviewSession, SessionError};
pub use flatten::flatten;
pub use projector::{project, ExportRow, Verdict};
pub use store::{JudgmentState, ReviewError, ReviewResult, ReviewStore};
pub use types::{
    EntityLabel, RawEntity, Record, ReviewableRow, RowId, TaggedRecord, UnknownLabel, NO_LABEL,
};
