//! Input boundary: dataset loading and seeded sampling

mod loader;
mod sample;

pub use loader::{
    demo_records, load_dataset, load_or_demo, read_records, DatasetError, DatasetSource,
    LoadedDataset, DEFAULT_DATASET_PATH, DEFAULT_TEXT_COLUMN,
};
pub use sample::sample_records;
