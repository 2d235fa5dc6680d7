//! Transaction service
//!
//! CRUD for transactions plus the filtered queries the presentation layer
//! uses. Every mutation is followed by the alert pass.

use chrono::{NaiveDateTime, Utc};

use crate::error::{SpendwiseResult, ValidationError};
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionType};
use crate::storage::{RecordKind, Storage};

use super::filter::{self, TransactionFilter};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category_id: Option<CategoryId>,
    pub date: NaiveDateTime,
    pub note: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, store and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> SpendwiseResult<Transaction> {
        let category_id = input.category_id.ok_or(ValidationError::MissingCategory)?;

        let mut txn = Transaction::new(
            input.title.trim(),
            input.amount,
            input.kind,
            category_id,
            input.date,
        );
        txn.note = input.note;
        self.validate(&txn)?;

        self.storage.transactions.insert(txn.clone())?;
        tracing::info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "created transaction");
        self.storage.commit(&[RecordKind::Transactions])?;

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> SpendwiseResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by a unique id fragment
    pub fn find(&self, identifier: &str) -> SpendwiseResult<Option<Transaction>> {
        let mut matches = self.storage.transactions.find_matching(identifier)?;
        if matches.len() == 1 {
            return Ok(matches.pop());
        }
        Ok(None)
    }

    /// Every transaction, in insertion order
    pub fn list(&self) -> SpendwiseResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions passing `filter`, most recent first
    pub fn filtered(&self, filter: &TransactionFilter, now: NaiveDateTime) -> SpendwiseResult<Vec<Transaction>> {
        Ok(filter.apply(&self.storage.transactions.get_all()?, now))
    }

    /// Income minus expenses over every transaction
    pub fn balance(&self) -> SpendwiseResult<Money> {
        Ok(filter::balance(&self.storage.transactions.get_all()?))
    }

    /// Replace the stored transaction with the same id
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn update(&self, mut txn: Transaction) -> SpendwiseResult<bool> {
        if self.storage.transactions.get(txn.id)?.is_none() {
            tracing::debug!(id = %txn.id, "update of unknown transaction ignored");
            return Ok(false);
        }

        txn.title = txn.title.trim().to_string();
        self.validate(&txn)?;
        txn.updated_at = Utc::now();
        self.storage.transactions.replace(txn.clone())?;

        tracing::info!(id = %txn.id, "updated transaction");
        self.storage.commit(&[RecordKind::Transactions])?;
        Ok(true)
    }

    /// Remove a transaction; `false` when the id is unknown
    pub fn delete(&self, id: TransactionId) -> SpendwiseResult<bool> {
        if self.storage.transactions.remove(id)?.is_none() {
            tracing::debug!(%id, "delete of unknown transaction ignored");
            return Ok(false);
        }

        tracing::info!(%id, "deleted transaction");
        self.storage.commit(&[RecordKind::Transactions])?;
        Ok(true)
    }

    fn validate(&self, txn: &Transaction) -> SpendwiseResult<()> {
        txn.validate()?;
        if self.storage.categories.get(txn.category_id)?.is_none() {
            return Err(ValidationError::UnknownCategory(txn.category_id.to_string()).into());
        }
        Ok(())
    }
}
