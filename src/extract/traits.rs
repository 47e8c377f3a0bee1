//! Tagger trait — the contract an entity tagger implements
//!
//! The tagger is opaque to the session: text in, (surface text, label)
//! pairs out. Character offsets are not part of the contract.

use crate::session::RawEntity;
use thiserror::Error;

/// Errors a tagger may report for a single text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggerError {
    #[error("tagger unavailable: {0}")]
    Unavailable(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// An entity tagger.
pub trait Tagger {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &str {
        "tagger"
    }

    /// Detect entities in `text`, in the order the tagger reports them.
    ///
    /// Duplicates are legal and must be preserved by callers.
    fn tag(&self, text: &str) -> Result<Vec<RawEntity>, TaggerError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Vec<RawEntity>, TaggerError>,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn tag(&self, text: &str) -> Result<Vec<RawEntity>, TaggerError> {
        self(text)
    }
}
