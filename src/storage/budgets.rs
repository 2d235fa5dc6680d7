//! Budget repository

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendwiseResult;
use crate::models::{Budget, BudgetId, CategoryId};

use super::document::{load_or_default, save_document, DocumentStore, RecordKind};
use super::{read_guard, write_guard};

/// Serialized form of the budgets document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetData {
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

/// In-memory budget collection
#[derive(Default)]
pub struct BudgetRepository {
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with the stored document (empty on failure)
    pub fn load(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let data: BudgetData = load_or_default(store, RecordKind::Budgets);
        tracing::debug!(count = data.budgets.len(), "loaded budgets");
        *write_guard(&self.budgets)? = data.budgets;
        Ok(())
    }

    /// Persist the full collection
    pub fn save(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let data = BudgetData {
            budgets: self.get_all()?,
        };
        save_document(store, RecordKind::Budgets, &data)
    }

    pub fn get(&self, id: BudgetId) -> SpendwiseResult<Option<Budget>> {
        Ok(read_guard(&self.budgets)?
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    pub fn get_all(&self) -> SpendwiseResult<Vec<Budget>> {
        Ok(read_guard(&self.budgets)?.clone())
    }

    /// Budgets whose id matches a short or full id fragment
    pub fn find_matching(&self, fragment: &str) -> SpendwiseResult<Vec<Budget>> {
        Ok(read_guard(&self.budgets)?
            .iter()
            .filter(|b| b.id.matches(fragment))
            .cloned()
            .collect())
    }

    pub fn get_by_category(&self, category_id: CategoryId) -> SpendwiseResult<Vec<Budget>> {
        Ok(read_guard(&self.budgets)?
            .iter()
            .filter(|b| b.category_id == category_id)
            .cloned()
            .collect())
    }

    pub fn insert(&self, budget: Budget) -> SpendwiseResult<()> {
        write_guard(&self.budgets)?.push(budget);
        Ok(())
    }

    /// Replace the budget with the same id; `false` if there is none
    pub fn replace(&self, budget: Budget) -> SpendwiseResult<bool> {
        let mut budgets = write_guard(&self.budgets)?;
        match budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(slot) => {
                *slot = budget;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: BudgetId) -> SpendwiseResult<Option<Budget>> {
        let mut budgets = write_guard(&self.budgets)?;
        Ok(budgets
            .iter()
            .position(|b| b.id == id)
            .map(|index| budgets.remove(index)))
    }

    /// Remove every budget targeting `category_id`, returning what was removed
    pub fn remove_by_category(&self, category_id: CategoryId) -> SpendwiseResult<Vec<Budget>> {
        let mut budgets = write_guard(&self.budgets)?;
        let (removed, kept): (Vec<_>, Vec<_>) = budgets
            .drain(..)
            .partition(|b| b.category_id == category_id);
        *budgets = kept;
        Ok(removed)
    }

    pub fn count(&self) -> SpendwiseResult<usize> {
        Ok(read_guard(&self.budgets)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Money};
    use crate::storage::document::MemoryStore;
    use chrono::NaiveDate;

    fn budget(category_id: CategoryId, units: i64) -> Budget {
        Budget::new(
            category_id,
            Money::from_units(units),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_remove_by_category_only_touches_that_category() {
        let repo = BudgetRepository::new();
        let food = CategoryId::new();
        let fun = CategoryId::new();
        let keep = budget(fun, 50);
        repo.insert(budget(food, 300)).unwrap();
        repo.insert(keep.clone()).unwrap();
        repo.insert(budget(food, 20)).unwrap();

        let removed = repo.remove_by_category(food).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(removed.iter().all(|b| b.category_id == food));
        assert_eq!(repo.get_all().unwrap(), vec![keep]);
    }

    #[test]
    fn test_replace_and_remove() {
        let repo = BudgetRepository::new();
        let b = budget(CategoryId::new(), 100);
        let id = b.id;
        repo.insert(b.clone()).unwrap();

        let mut raised = b;
        raised.amount = Money::from_units(150);
        assert!(repo.replace(raised).unwrap());
        assert_eq!(repo.get(id).unwrap().unwrap().amount, Money::from_units(150));

        assert!(repo.remove(id).unwrap().is_some());
        assert!(!repo.replace(budget(CategoryId::new(), 1)).unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let store = MemoryStore::new();
        let repo = BudgetRepository::new();
        let b = budget(CategoryId::new(), 300);
        repo.insert(b.clone()).unwrap();
        repo.save(&store).unwrap();

        let reloaded = BudgetRepository::new();
        reloaded.load(&store).unwrap();
        assert_eq!(reloaded.get_all().unwrap(), vec![b]);
    }
}
