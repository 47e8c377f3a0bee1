//! Extractor adapter: runs a tagger over a batch of records
//!
//! Failure policy: the whole batch fails on the first tagger error. The
//! error names the failing record. Extraction runs before a session exists,
//! so a failure can never touch judgment state.

use super::traits::{Tagger, TaggerError};
use crate::session::{Record, TaggedRecord};
use thiserror::Error;

/// Errors from batch extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("tagger '{tagger}' failed on record {index}: {source}")]
    Tagger {
        /// Position of the failing record in the batch
        index: usize,
        tagger: String,
        #[source]
        source: TaggerError,
    },
}

/// Tag every record, preserving input order. One output per input.
pub fn extract(records: &[Record], tagger: &dyn Tagger) -> Result<Vec<TaggedRecord>, ExtractError> {
    let mut tagged = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let entities = tagger.tag(&record.text).map_err(|source| {
            tracing::error!(tagger = tagger.name(), index, error = %source, "tagger failed");
            ExtractError::Tagger {
                index,
                tagger: tagger.name().to_string(),
                source,
            }
        })?;
        tagged.push(TaggedRecord::new(record.clone(), entities));
    }

    let entity_count: usize = tagged.iter().map(|t| t.entities.len()).sum();
    tracing::info!(
        tagger = tagger.name(),
        records = tagged.len(),
        entities = entity_count,
        "extraction complete"
    );
    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RawEntity;

    fn records(texts: &[&str]) -> Vec<Record> {
        texts.iter().map(|t| Record::new(*t)).collect()
    }

    #[test]
    fn one_output_per_record_in_order() {
        let tagger = |text: &str| -> Result<Vec<RawEntity>, TaggerError> {
            Ok(if text.contains("CDC") {
                vec![RawEntity::new("CDC", "ORG")]
            } else {
                vec![]
            })
        };
        let out = extract(&records(&["no entities", "CDC update", "still none"]), &tagger).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].record.text, "no entities");
        assert!(out[0].entities.is_empty());
        assert_eq!(out[1].entities, vec![RawEntity::new("CDC", "ORG")]);
        assert!(out[2].entities.is_empty());
    }

    #[test]
    fn duplicate_entities_survive_extraction() {
        let tagger = |_: &str| -> Result<Vec<RawEntity>, TaggerError> {
            Ok(vec![RawEntity::new("WHO", "ORG"), RawEntity::new("WHO", "ORG")])
        };
        let out = extract(&records(&["WHO? WHO."]), &tagger).unwrap();
        assert_eq!(out[0].entities.len(), 2);
    }

    #[test]
    fn first_failure_aborts_the_batch() {
        let tagger = |text: &str| -> Result<Vec<RawEntity>, TaggerError> {
            if text == "bad" {
                Err(TaggerError::Inference("model exploded".to_string()))
            } else {
                Ok(vec![])
            }
        };
        let err = extract(&records(&["ok", "bad", "ok"]), &tagger).unwrap_err();
        match err {
            ExtractError::Tagger { index, source, .. } => {
                assert_eq!(index, 1);
                assert_eq!(source, TaggerError::Inference("model exploded".to_string()));
            }
        }
    }

    #[test]
    fn empty_batch_is_fine() {
        let tagger = |_: &str| -> Result<Vec<RawEntity>, TaggerError> { Ok(vec![]) };
        assert!(extract(&[], &tagger).unwrap().is_empty());
    }
}
