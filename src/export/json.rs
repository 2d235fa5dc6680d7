//! JSON Export functionality
//!
//! Exports the complete dataset to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, Category, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dataset export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,

    /// Earliest transaction date, if any
    pub earliest_transaction: Option<String>,

    /// Latest transaction date, if any
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot every collection
    pub fn from_storage(storage: &Storage) -> SpendwiseResult<Self> {
        let categories = storage.categories.get_all()?;
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            budget_count: budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories,
            transactions,
            budgets,
            metadata,
        })
    }
}

/// Export the full dataset as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> SpendwiseResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendwiseError::Export(e.to_string()))?;
    Ok(())
}
