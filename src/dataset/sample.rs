//! Seeded sampling of records
//!
//! The same (records, sample size, seed) always yields the same sample in
//! the same order.

use crate::session::Record;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Draw `sample_size` records without replacement using `seed`.
///
/// A sample size larger than the dataset is clamped to the dataset size.
pub fn sample_records(records: &[Record], sample_size: usize, seed: u64) -> Vec<Record> {
    let amount = if sample_size > records.len() {
        tracing::warn!(
            requested = sample_size,
            available = records.len(),
            "sample size exceeds dataset; using every record"
        );
        records.len()
    } else {
        sample_size
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let sample: Vec<Record> = records.choose_multiple(&mut rng, amount).cloned().collect();
    tracing::info!(seed, size = sample.len(), "records sampled");
    sample
}
