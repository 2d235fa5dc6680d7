//! Transaction repository
//!
//! Holds transactions in insertion order. Ordering for display is the
//! filter's job, not the repository's.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendwiseResult;
use crate::models::{CategoryId, Transaction, TransactionId};

use super::document::{load_or_default, save_document, DocumentStore, RecordKind};
use super::{read_guard, write_guard};

/// Serialized form of the transactions document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// In-memory transaction collection
#[derive(Default)]
pub struct TransactionRepository {
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with the stored document (empty on failure)
    pub fn load(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let file_data: TransactionData = load_or_default(store, RecordKind::Transactions);
        tracing::debug!(count = file_data.transactions.len(), "loaded transactions");
        *write_guard(&self.data)? = file_data.transactions;
        Ok(())
    }

    /// Persist the full collection
    pub fn save(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let file_data = TransactionData {
            transactions: self.get_all()?,
        };
        save_document(store, RecordKind::Transactions, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> SpendwiseResult<Option<Transaction>> {
        Ok(read_guard(&self.data)?.iter().find(|t| t.id == id).cloned())
    }

    /// Snapshot of every transaction
    pub fn get_all(&self) -> SpendwiseResult<Vec<Transaction>> {
        Ok(read_guard(&self.data)?.clone())
    }

    /// Transactions whose id matches a short or full id fragment
    pub fn find_matching(&self, fragment: &str) -> SpendwiseResult<Vec<Transaction>> {
        Ok(read_guard(&self.data)?
            .iter()
            .filter(|t| t.id.matches(fragment))
            .cloned()
            .collect())
    }

    pub fn get_by_category(&self, category_id: CategoryId) -> SpendwiseResult<Vec<Transaction>> {
        Ok(read_guard(&self.data)?
            .iter()
            .filter(|t| t.category_id == category_id)
            .cloned()
            .collect())
    }

    pub fn insert(&self, txn: Transaction) -> SpendwiseResult<()> {
        write_guard(&self.data)?.push(txn);
        Ok(())
    }

    /// Replace the transaction with the same id; `false` if there is none
    pub fn replace(&self, txn: Transaction) -> SpendwiseResult<bool> {
        let mut data = write_guard(&self.data)?;
        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: TransactionId) -> SpendwiseResult<Option<Transaction>> {
        let mut data = write_guard(&self.data)?;
        Ok(data
            .iter()
            .position(|t| t.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> SpendwiseResult<usize> {
        Ok(read_guard(&self.data)?.len())
    }
}
