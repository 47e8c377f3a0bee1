//! Common test utilities for review session tests
//!
//! A scripted tagger stands in for a real model: it returns fixed entities
//! per text and can be told to fail on specific texts.

use ner_review::{RawEntity, Record, Tagger, TaggerError};
use std::collections::HashMap;

/// The four demo tweets, in order.
pub const DEMO_TWEETS: [&str; 4] = [
    "Wear a mask! #COVID",
    "No way I'm wearing a mask 😷",
    "CDC guidance updated today",
    "Pfizer announces new results",
];

pub fn demo_records() -> Vec<Record> {
    DEMO_TWEETS.iter().map(|t| Record::new(*t)).collect()
}

/// Deterministic tagger driven by a lookup table.
#[derive(Debug, Default)]
pub struct ScriptedTagger {
    responses: HashMap<String, Vec<RawEntity>>,
    failing: Vec<String>,
}

impl ScriptedTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tagger from the demo scenario: nothing for the first two tweets,
    /// one ORG each for the last two.
    pub fn demo() -> Self {
        Self::new()
            .with(DEMO_TWEETS[2], &[("CDC", "ORG")])
            .with(DEMO_TWEETS[3], &[("Pfizer", "ORG")])
    }

    pub fn with(mut self, text: &str, entities: &[(&str, &str)]) -> Self {
        self.responses.insert(
            text.to_string(),
            entities.iter().map(|(t, l)| RawEntity::new(*t, *l)).collect(),
        );
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }
}

impl Tagger for ScriptedTagger {
    fn name(&self) -> &str {
        "scripted"
    }

    fn tag(&self, text: &str) -> Result<Vec<RawEntity>, TaggerError> {
        if self.failing.iter().any(|t| t == text) {
            return Err(TaggerError::Inference(format!("scripted failure on '{}'", text)));
        }
        Ok(self.responses.get(text).cloned().unwrap_or_default())
    }
}
