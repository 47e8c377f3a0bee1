//! Flattener: tagged records → reviewable rows
//!
//! One row per entity, or one sentinel row for a record with no entities.
//! A row's position in the output is its identity.

use super::types::{ReviewableRow, RowId, TaggedRecord};

/// Expand tagged records into the ordered sequence of reviewable rows.
///
/// Records are visited in input order and entities in tagger order.
/// Every record contributes at least one row.
pub fn flatten(tagged: &[TaggedRecord]) -> Vec<ReviewableRow> {
    let mut rows = Vec::with_capacity(tagged.len());

    for (record_index, item) in tagged.iter().enumerate() {
        if item.entities.is_empty() {
            rows.push(ReviewableRow {
                id: RowId::new(rows.len()),
                record_index,
                tweet_text: item.record.text.clone(),
                tagged_entity: None,
                entity_label: None,
            });
            continue;
        }

        for entity in &item.entities {
            rows.push(ReviewableRow {
                id: RowId::new(rows.len()),
                record_index,
                tweet_text: item.record.text.clone(),
                tagged_entity: Some(entity.surface_text.clone()),
                entity_label: Some(entity.label.clone()),
            });
        }
    }

    rows
}
