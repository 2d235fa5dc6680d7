//! Storage layer for Spendwise
//!
//! [`Storage`] owns the three record collections, persists them through an
//! injected [`DocumentStore`], and runs the alert pass after mutations.
//! Collections sit behind `RwLock`s and reads hand out cloned snapshots.

pub mod budgets;
pub mod categories;
pub mod document;
pub mod file_io;
pub mod init;
pub mod transactions;

use std::sync::{mpsc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use document::{DocumentStore, JsonFileStore, MemoryStore, RecordKind};
pub use file_io::{read_json, write_json_atomic};
pub use init::seed_default_categories;
pub use transactions::TransactionRepository;

use crate::alert::{AlertPolicy, BudgetAlert};
use crate::config::{Settings, SpendwisePaths};
use crate::error::{SpendwiseError, SpendwiseResult};

pub(crate) fn read_guard<T>(lock: &RwLock<T>) -> SpendwiseResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_guard<T>(lock: &RwLock<T>) -> SpendwiseResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    store: Box<dyn DocumentStore>,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    alerts: AlertPolicy,
}

impl Storage {
    /// Build a storage over `store`, loading every collection
    ///
    /// Seeds the default categories when none were loaded.
    pub fn new(store: Box<dyn DocumentStore>, alerts: AlertPolicy) -> SpendwiseResult<Self> {
        let storage = Self {
            store,
            transactions: TransactionRepository::new(),
            categories: CategoryRepository::new(),
            budgets: BudgetRepository::new(),
            alerts,
        };
        storage.load_all()?;

        if let Err(e) = seed_default_categories(&storage) {
            tracing::warn!(error = %e, "could not persist default categories");
        }

        Ok(storage)
    }

    /// Open the JSON files under `paths`, alerting at the configured threshold
    pub fn open(paths: &SpendwisePaths, settings: &Settings) -> SpendwiseResult<Self> {
        paths.ensure_directories()?;
        tracing::debug!(data_dir = %paths.data_dir().display(), "opening storage");
        Self::new(
            Box::new(JsonFileStore::new(paths.clone())),
            AlertPolicy::new(settings.alert_threshold),
        )
    }

    /// Storage backed by a fresh [`MemoryStore`]
    pub fn in_memory() -> SpendwiseResult<Self> {
        Self::new(Box::new(MemoryStore::new()), AlertPolicy::default())
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Reload every collection from the store
    pub fn load_all(&self) -> SpendwiseResult<()> {
        self.transactions.load(self.store())?;
        self.categories.load(self.store())?;
        self.budgets.load(self.store())?;
        Ok(())
    }

    /// Persist one collection; failures are logged and returned
    pub fn save(&self, kind: RecordKind) -> SpendwiseResult<()> {
        let result = match kind {
            RecordKind::Transactions => self.transactions.save(self.store()),
            RecordKind::Categories => self.categories.save(self.store()),
            RecordKind::Budgets => self.budgets.save(self.store()),
        };
        match &result {
            Ok(()) => tracing::debug!(%kind, "saved"),
            Err(e) => tracing::error!(%kind, error = %e, "failed to save"),
        }
        result
    }

    /// Persist every collection, returning the first failure
    pub fn save_all(&self) -> SpendwiseResult<()> {
        self.persist(RecordKind::all())
    }

    pub fn alerts(&self) -> &AlertPolicy {
        &self.alerts
    }

    /// Receive every alert raised from now on
    pub fn subscribe(&self) -> mpsc::Receiver<BudgetAlert> {
        self.alerts.bus().subscribe()
    }

    /// Run the alert pass over every budget and the complete transaction set
    pub fn check_budgets(&self) -> SpendwiseResult<Vec<BudgetAlert>> {
        let budgets = self.budgets.get_all()?;
        let transactions = self.transactions.get_all()?;
        Ok(self.alerts.run(&budgets, &transactions))
    }

    /// Attempt every save even if an earlier one fails
    pub(crate) fn persist(&self, kinds: &[RecordKind]) -> SpendwiseResult<()> {
        let mut result = Ok(());
        for kind in kinds {
            if let Err(e) = self.save(*kind) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    /// Persist, then run the alert pass regardless of the save outcome
    ///
    /// Memory is never rolled back: a failed save leaves the mutation in
    /// place and surfaces as the returned error.
    pub(crate) fn commit(&self, kinds: &[RecordKind]) -> SpendwiseResult<()> {
        let saved = self.persist(kinds);
        self.check_budgets()?;
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetPeriod, DefaultCategory, Money, Transaction, TransactionType};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories_and_seeds() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, &Settings::default()).unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(paths.categories_file().exists());
        assert_eq!(storage.categories.count().unwrap(), DefaultCategory::all().len());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, &Settings::default()).unwrap();
        let food = storage.categories.get_by_name("Food").unwrap().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
        storage
            .transactions
            .insert(Transaction::new("Lunch", Money::from_units(12), TransactionType::Expense, food.id, date))
            .unwrap();
        storage.save_all().unwrap();

        let reopened = Storage::open(&paths, &Settings::default()).unwrap();
        assert_eq!(reopened.transactions.get_all().unwrap(), storage.transactions.get_all().unwrap());
        assert_eq!(reopened.categories.get_all().unwrap(), storage.categories.get_all().unwrap());
    }

    #[test]
    fn test_commit_runs_alerts_even_when_save_fails() {
        let store = Arc::new(MemoryStore::new());
        let storage = Storage::new(Box::new(Arc::clone(&store)), AlertPolicy::default()).unwrap();
        let rx = storage.subscribe();
        let food = storage.categories.get_by_name("food").unwrap().unwrap();

        storage
            .budgets
            .insert(Budget::new(
                food.id,
                Money::from_units(100),
                BudgetPeriod::Monthly,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
        storage
            .transactions
            .insert(Transaction::new("Groceries", Money::from_units(90), TransactionType::Expense, food.id, date))
            .unwrap();

        store.set_fail_saves(true);
        let err = storage.commit(&[RecordKind::Transactions]).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert!(store.document(RecordKind::Transactions).is_none());
        assert_eq!(rx.try_iter().count(), 1);
    }
}
