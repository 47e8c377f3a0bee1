//! Core session vocabulary
//!
//! - Record: one sampled input text
//! - RawEntity: one tagger output (surface text + label)
//! - TaggedRecord: a record with its tagger output
//! - EntityLabel: the closed label set a reviewer may correct to
//! - RowId / ReviewableRow: the flattened unit of review

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input text unit. Immutable once sampled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub text: String,
}

impl Record {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for Record {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Record {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One tagger-produced (span text, label) pair.
///
/// The label is whatever the tagger emitted. It may fall outside
/// [`EntityLabel`]; use [`RawEntity::known_label`] to map it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    pub surface_text: String,
    pub label: String,
}

impl RawEntity {
    pub fn new(surface_text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            surface_text: surface_text.into(),
            label: label.into(),
        }
    }

    /// The label as a member of the closed correction set, if it is one.
    pub fn known_label(&self) -> Option<EntityLabel> {
        self.label.parse().ok()
    }
}

/// A record paired with the entities the tagger found in it, in tagger order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRecord {
    pub record: Record,
    pub entities: Vec<RawEntity>,
}

impl TaggedRecord {
    pub fn new(record: Record, entities: Vec<RawEntity>) -> Self {
        Self { record, entities }
    }
}

/// The literal a reviewer picks to say "no label applies".
pub const NO_LABEL: &str = "None";

/// Labels a reviewer can choose when correcting a tagged entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Person,
    Product,
    Money,
    Cardinal,
    Date,
    Norp,
    Gpe,
    Fac,
    Ordinal,
}

impl EntityLabel {
    /// Every label, in presentation order.
    pub const ALL: [EntityLabel; 10] = [
        EntityLabel::Org,
        EntityLabel::Person,
        EntityLabel::Product,
        EntityLabel::Money,
        EntityLabel::Cardinal,
        EntityLabel::Date,
        EntityLabel::Norp,
        EntityLabel::Gpe,
        EntityLabel::Fac,
        EntityLabel::Ordinal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Org => "ORG",
            EntityLabel::Person => "PERSON",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Date => "DATE",
            EntityLabel::Norp => "NORP",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Fac => "FAC",
            EntityLabel::Ordinal => "ORDINAL",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the closed labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity label: {}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for EntityLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        EntityLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == upper)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Identity of a reviewable row: its zero-based position in the flattened
/// sequence. Stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(usize);

impl RowId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// The unit of human review: one record × one entity, or a sentinel row
/// for a record with no entities (both entity fields `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewableRow {
    pub id: RowId,
    /// Position of the source record in the sample
    pub record_index: usize,
    pub tweet_text: String,
    pub tagged_entity: Option<String>,
    pub entity_label: Option<String>,
}

impl ReviewableRow {
    /// True for the placeholder row of a record with no detected entities.
    pub fn is_sentinel(&self) -> bool {
        self.tagged_entity.is_none() && self.entity_label.is_none()
    }
}
