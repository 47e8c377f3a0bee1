//! ner-review: human-in-the-loop review of named-entity tagger output
//!
//! Samples text records, runs a tagger over them, and tracks a reviewer's
//! judgment of every tagged entity until the labels are exported.
//!
//! # Core Concepts
//!
//! - **Rows**: one per (record, entity), or one sentinel per record with no
//!   entities; a row's position is its identity
//! - **Judgments**: per-row reviewer fields, created once and never reset
//!   by later re-synchronization
//! - **Projection**: the export table, rebuilt from rows + judgments on demand
//!
//! # Example
//!
//! ```
//! use ner_review::{RawEntity, Record, ReviewSession, RowId, TaggerError};
//!
//! let tagger = |text: &str| -> Result<Vec<RawEntity>, TaggerError> {
//!     Ok(if text.starts_with("CDC") { vec![RawEntity::new("CDC", "ORG")] } else { vec![] })
//! };
//! let records = vec![Record::new("Wear a mask!"), Record::new("CDC guidance updated today")];
//! let mut session = ReviewSession::start(records, &tagger).unwrap();
//!
//! session.set_evaluation(RowId::new(1), true).unwrap();
//! assert_eq!(session.accuracy().unwrap(), Some(0.5));
//! ```

pub mod config;
pub mod dataset;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use dataset::{DatasetError, DatasetSource, LoadedDataset};
pub use export::{accuracy, format_accuracy, from_csv, to_csv, ExportError};
pub use extract::{extract, ExtractError, LexiconError, LexiconTagger, Tagger, TaggerError};
pub use pipeline::{prepare_session, PipelineError, PreparedSession};
pub use session::{
    flatten, project, EntityLabel, ExportRow, JudgmentState, RawEntity, Record, ReviewCommand,
    ReviewError, ReviewSession, ReviewStore, ReviewableRow, RowId, SessionError, TaggedRecord,
    Verdict,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
