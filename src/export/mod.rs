//! Output boundary: CSV export and accuracy

mod metrics;
mod table;

pub use metrics::{accuracy, format_accuracy};
pub use table::{from_csv, to_csv, write_csv, ExportError, DEFAULT_EXPORT_FILE, EXPORT_HEADERS};
