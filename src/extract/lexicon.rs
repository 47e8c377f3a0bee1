//! Lexicon tagger — gazetteer lookup plus format patterns
//!
//! A small, deterministic tagger for running a review session without a
//! statistical model. Gazetteer entries match case-sensitively on whole
//! words; format patterns cover MONEY, DATE, ORDINAL and CARDINAL.
//!
//! Candidates are claimed in priority order (gazetteer, then patterns in
//! the order above); a candidate overlapping an already claimed span is
//! dropped. Results are reported in text order.

use super::traits::{Tagger, TaggerError};
use crate::session::{EntityLabel, RawEntity};
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors building a lexicon tagger.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex_lite::Error),

    #[error("empty surface form under label {0}")]
    EmptySurface(String),
}

/// Built-in gazetteer for pandemic-era tweets.
const DEFAULT_LEXICON: &str = r#"
ORG: [CDC, WHO, FDA, NIH, Pfizer, Moderna, AstraZeneca, "Johnson & Johnson", BioNTech, Twitter]
PERSON: [Fauci, Trump, Biden, Boris Johnson, Tedros]
GPE: [US, USA, UK, China, Wuhan, America, Italy, India, New York, California]
NORP: [Americans, Chinese, Republicans, Democrats, Italians]
PRODUCT: [N95, Comirnaty, Zoom]
FAC: [White House]
"#;

const MONEY: &str = r"\$\d+(?:[.,]\d+)*(?:\s?(?:million|billion|thousand|[KMB])\b)?";
const DATE: &str = r"(?i)\b(?:\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}|today|yesterday|tomorrow|monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b";
const ORDINAL: &str = r"(?i)\b(?:\d+(?:st|nd|rd|th)|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b";
const CARDINAL: &str = r"(?i)\b(?:\d+(?:,\d{3})*(?:\.\d+)?|one|two|three|four|five|six|seven|eight|nine|ten|hundred|thousand|million|billion)\b";

/// A span claimed during tagging.
struct Claim {
    start: usize,
    end: usize,
    entity: RawEntity,
}

/// Gazetteer + pattern tagger.
pub struct LexiconTagger {
    /// (surface, label), longest surface first
    gazetteer: Vec<(String, String)>,
    patterns: Vec<(Regex, EntityLabel)>,
}

impl LexiconTagger {
    /// Build a tagger from `label -> surface forms`.
    pub fn new(lexicon: BTreeMap<String, Vec<String>>) -> Result<Self, LexiconError> {
        let mut gazetteer = Vec::new();
        for (label, surfaces) in lexicon {
            let label = label.trim().to_string();
            if label.parse::<EntityLabel>().is_err() {
                tracing::warn!(label = %label, "lexicon label outside the review label set");
            }
            for surface in surfaces {
                if surface.trim().is_empty() {
                    return Err(LexiconError::EmptySurface(label));
                }
                gazetteer.push((surface, label.clone()));
            }
        }
        gazetteer.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        let patterns = vec![
            (Regex::new(MONEY)?, EntityLabel::Money),
            (Regex::new(DATE)?, EntityLabel::Date),
            (Regex::new(ORDINAL)?, EntityLabel::Ordinal),
            (Regex::new(CARDINAL)?, EntityLabel::Cardinal),
        ];

        Ok(Self { gazetteer, patterns })
    }

    /// Tagger with the built-in gazetteer.
    pub fn with_default_lexicon() -> Result<Self, LexiconError> {
        Self::from_yaml_str(DEFAULT_LEXICON)
    }

    /// Parse a YAML mapping of `LABEL: [surface, ...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexiconError> {
        let lexicon: BTreeMap<String, Vec<String>> = serde_yaml::from_str(yaml)?;
        Self::new(lexicon)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Number of gazetteer entries.
    pub fn len(&self) -> usize {
        self.gazetteer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gazetteer.is_empty()
    }

    fn claim(claims: &mut Vec<Claim>, start: usize, end: usize, surface: &str, label: &str) {
        if claims.iter().any(|c| start < c.end && end > c.start) {
            return;
        }
        claims.push(Claim {
            start,
            end,
            entity: RawEntity::new(surface, label),
        });
    }
}

/// True if `text[start..end]` is not glued to neighbouring word characters.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    !before.map_or(false, is_word) && !after.map_or(false, is_word)
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag(&self, text: &str) -> Result<Vec<RawEntity>, TaggerError> {
        let mut claims = Vec::new();

        for (surface, label) in &self.gazetteer {
            for (start, matched) in text.match_indices(surface.as_str()) {
                let end = start + matched.len();
                if is_whole_word(text, start, end) {
                    Self::claim(&mut claims, start, end, matched, label);
                }
            }
        }

        for (pattern, label) in &self.patterns {
            for m in pattern.find_iter(text) {
                Self::claim(&mut claims, m.start(), m.end(), m.as_str(), label.as_str());
            }
        }

        claims.sort_by_key(|c| c.start);
        Ok(claims.into_iter().map(|c| c.entity).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> LexiconTagger {
        LexiconTagger::with_default_lexicon().unwrap()
    }

    #[test]
    fn default_lexicon_tags_organizations() {
        let entities = tagger().tag("Pfizer announces new results").unwrap();
        assert_eq!(entities, vec![RawEntity::new("Pfizer", "ORG")]);
    }

    #[test]
    fn results_are_in_text_order() {
        let entities = tagger().tag("Fauci says the CDC will update on Monday").unwrap();
        let labels: Vec<&str> = entities.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["PERSON", "ORG", "DATE"]);
    }

    #[test]
    fn matches_whole_words_only() {
        let entities = tagger().tag("USAID is not the USA").unwrap();
        assert_eq!(entities, vec![RawEntity::new("USA", "GPE")]);
    }

    #[test]
    fn longest_gazetteer_entry_wins() {
        let entities = tagger().tag("Statement from Boris Johnson today").unwrap();
        assert_eq!(
            entities,
            vec![RawEntity::new("Boris Johnson", "PERSON"), RawEntity::new("today", "DATE")]
        );
    }

    #[test]
    fn money_claims_its_digits_before_cardinal() {
        let entities = tagger().tag("Masks cost $12 for 3 packs").unwrap();
        assert_eq!(
            entities,
            vec![RawEntity::new("$12", "MONEY"), RawEntity::new("3", "CARDINAL")]
        );
    }

    #[test]
    fn ordinals_and_dates() {
        let entities = tagger().tag("My second dose on 2021-04-01").unwrap();
        assert_eq!(
            entities,
            vec![RawEntity::new("second", "ORDINAL"), RawEntity::new("2021-04-01", "DATE")]
        );
    }

    #[test]
    fn repeated_mentions_are_all_reported() {
        let entities = tagger().tag("WHO said, WHO repeated").unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn no_entities_in_plain_text() {
        assert!(tagger().tag("Wear a mask! #COVID").unwrap().is_empty());
    }

    #[test]
    fn custom_yaml_lexicon() {
        let tagger = LexiconTagger::from_yaml_str("GPE: [Avignon]\nORG: [Acme Corp]").unwrap();
        assert_eq!(tagger.len(), 2);
        let entities = tagger.tag("Acme Corp opens in Avignon").unwrap();
        assert_eq!(
            entities,
            vec![RawEntity::new("Acme Corp", "ORG"), RawEntity::new("Avignon", "GPE")]
        );
    }

    #[test]
    fn empty_surface_is_rejected() {
        let err = LexiconTagger::from_yaml_str("ORG: ['']").err().unwrap();
        assert!(matches!(err, LexiconError::EmptySurface(label) if label == "ORG"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            LexiconTagger::from_yaml_str("ORG: [unclosed").err(),
            Some(LexiconError::Yaml(_))
        ));
    }
}
