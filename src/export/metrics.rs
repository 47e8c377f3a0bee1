//! Crude accuracy over an export table

use crate::session::{ExportRow, Verdict};

/// Fraction of rows marked correct.
///
/// `None` when there is no row to judge. Unreviewed rows count as incorrect
/// because the projection exports them as "no".
pub fn accuracy(rows: &[ExportRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let correct = rows
        .iter()
        .filter(|r| r.correct_entities == Verdict::Yes)
        .count();
    Some(correct as f64 / rows.len() as f64)
}

/// Percentage with two decimals, e.g. `0.25` → `"25.00%"`.
pub fn format_accuracy(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(verdicts: &[Verdict]) -> Vec<ExportRow> {
        verdicts
            .iter()
            .enumerate()
            .map(|(i, v)| ExportRow {
                tweet_id: i,
                tweet_text: format!("tweet {i}"),
                tagged_entity: None,
                entity_label: None,
                correct_entities: *v,
                your_label: None,
                notes: String::new(),
            })
            .collect()
    }

    #[test]
    fn three_of_four() {
        use Verdict::*;
        assert_eq!(accuracy(&rows(&[Yes, No, Yes, Yes])), Some(0.75));
    }

    #[test]
    fn all_no_is_zero() {
        assert_eq!(accuracy(&rows(&[Verdict::No, Verdict::No])), Some(0.0));
    }

    #[test]
    fn empty_table_has_no_accuracy() {
        assert_eq!(accuracy(&[]), None);
    }

    #[test]
    fn formats_as_percentage() {
        assert_eq!(format_accuracy(0.25), "25.00%");
        assert_eq!(format_accuracy(0.0), "0.00%");
        assert_eq!(format_accuracy(2.0 / 3.0), "66.67%");
    }
}
