//! Budget service
//!
//! Budget CRUD with duplicate detection, plus progress and status queries
//! evaluated against the complete transaction set.

use chrono::{NaiveDate, Utc};

use crate::error::{SpendwiseResult, ValidationError};
use crate::models::{Budget, BudgetId, BudgetPeriod, CategoryId, Money};
use crate::storage::{RecordKind, Storage};

use super::progress::{self, BudgetStatus};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a budget
    ///
    /// Rejected when another budget already covers the same category, period
    /// kind and period instance.
    pub fn create(
        &self,
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> SpendwiseResult<Budget> {
        let budget = Budget::new(category_id, amount, period, start_date);
        self.validate(&budget)?;

        self.storage.budgets.insert(budget.clone())?;
        tracing::info!(id = %budget.id, category = %category_id, %period, amount = %amount, "created budget");
        self.storage.commit(&[RecordKind::Budgets])?;

        Ok(budget)
    }

    pub fn get(&self, id: BudgetId) -> SpendwiseResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// Find a budget by a unique id fragment
    pub fn find(&self, identifier: &str) -> SpendwiseResult<Option<Budget>> {
        let mut matches = self.storage.budgets.find_matching(identifier)?;
        if matches.len() == 1 {
            return Ok(matches.pop());
        }
        Ok(None)
    }

    pub fn list(&self) -> SpendwiseResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    pub fn list_for_category(&self, category_id: CategoryId) -> SpendwiseResult<Vec<Budget>> {
        self.storage.budgets.get_by_category(category_id)
    }

    /// Replace the stored budget with the same id
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn update(&self, mut budget: Budget) -> SpendwiseResult<bool> {
        if self.storage.budgets.get(budget.id)?.is_none() {
            tracing::debug!(id = %budget.id, "update of unknown budget ignored");
            return Ok(false);
        }

        self.validate(&budget)?;
        budget.updated_at = Utc::now();
        self.storage.budgets.replace(budget.clone())?;

        tracing::info!(id = %budget.id, "updated budget");
        self.storage.commit(&[RecordKind::Budgets])?;
        Ok(true)
    }

    /// Remove a budget; `false` when the id is unknown
    pub fn delete(&self, id: BudgetId) -> SpendwiseResult<bool> {
        if self.storage.budgets.remove(id)?.is_none() {
            tracing::debug!(%id, "delete of unknown budget ignored");
            return Ok(false);
        }

        tracing::info!(%id, "deleted budget");
        self.storage.commit(&[RecordKind::Budgets])?;
        Ok(true)
    }

    /// Unclamped progress of `budget`, `None` for a non-positive limit
    pub fn progress(&self, budget: &Budget) -> SpendwiseResult<Option<f64>> {
        Ok(progress::progress(budget, &self.storage.transactions.get_all()?))
    }

    pub fn status(&self, budget: &Budget) -> SpendwiseResult<BudgetStatus> {
        Ok(BudgetStatus::evaluate(budget, &self.storage.transactions.get_all()?))
    }

    /// Status of every budget, in budget order
    pub fn statuses(&self) -> SpendwiseResult<Vec<BudgetStatus>> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(self
            .storage
            .budgets
            .get_all()?
            .iter()
            .map(|b| BudgetStatus::evaluate(b, &transactions))
            .collect())
    }

    fn validate(&self, budget: &Budget) -> SpendwiseResult<()> {
        budget.validate()?;

        let category = self
            .storage
            .categories
            .get(budget.category_id)?
            .ok_or_else(|| ValidationError::UnknownCategory(budget.category_id.to_string()))?;

        let existing = self.storage.budgets.get_by_category(budget.category_id)?;
        if existing.iter().any(|other| budget.conflicts_with(other)) {
            return Err(ValidationError::DuplicateBudget {
                category: category.name,
                period: budget.period.to_string(),
                instance: budget.instance().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
