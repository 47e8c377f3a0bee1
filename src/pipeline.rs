//! Session setup: load → sample → tag → open
//!
//! Runs once per sample, before any reviewer input exists.

use crate::config::{ConfigError, SessionConfig};
use crate::dataset::{load_or_demo, sample_records, DatasetError, DatasetSource};
use crate::extract::Tagger;
use crate::session::{Record, ReviewSession, SessionError};
use thiserror::Error;

/// Errors during session setup
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A freshly opened session and how it was produced.
#[derive(Debug)]
pub struct PreparedSession {
    pub source: DatasetSource,
    pub sample: Vec<Record>,
    pub session: ReviewSession,
}

/// Draw the configured sample and open a review session over it.
pub fn prepare_session(config: &SessionConfig, tagger: &dyn Tagger) -> Result<PreparedSession, PipelineError> {
    config.validate()?;
    let loaded = load_or_demo(&config.dataset_path, &config.text_column)?;
    let sample = sample_records(&loaded.records, config.sample_size, config.seed);
    let session = ReviewSession::start(sample.clone(), tagger)?;
    Ok(PreparedSession {
        source: loaded.source,
        sample,
        session,
    })
}
