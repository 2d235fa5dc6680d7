//! Export module for Spendwise
//!
//! - CSV: transactions with resolved category names (spreadsheet-compatible)
//! - JSON: machine-readable full dataset export
//! - YAML: human-readable full dataset export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
