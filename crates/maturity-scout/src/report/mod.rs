//! Consumers of finished results.

pub mod export;

pub use export::{export_to_file, to_csv_string, write_csv, COLUMNS};
