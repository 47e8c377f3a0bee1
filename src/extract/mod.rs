//! Entity extraction layer
//!
//! Wraps an opaque tagger and turns a batch of records into tagged
//! records for the flattener.

mod adapter;
mod lexicon;
mod traits;

pub use adapter::{extract, ExtractError};
pub use lexicon::{LexiconError, LexiconTagger};
pub use traits::{Tagger, TaggerError};
