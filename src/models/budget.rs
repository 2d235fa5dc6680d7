//! Budget model
//!
//! A spending limit for one category over one period instance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::period::{BudgetPeriod, PeriodInstance};
use crate::error::ValidationError;

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category whose expenses count against this budget
    pub category_id: CategoryId,

    /// The spending limit
    pub amount: Money,

    /// Recurrence kind
    pub period: BudgetPeriod,

    /// Anchor date selecting the period instance
    pub start_date: NaiveDate,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category_id,
            amount,
            period,
            start_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// The concrete period this budget measures
    pub fn instance(&self) -> PeriodInstance {
        self.period.instance_containing(self.start_date)
    }

    /// Whether `other` targets the same category, period kind and instance
    pub fn conflicts_with(&self, other: &Budget) -> bool {
        self.id != other.id
            && self.category_id == other.category_id
            && self.period == other.period
            && self.instance() == other.instance()
    }

    /// Validate the budget's own fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(Money::MAX_AMOUNT));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} limit {}", self.period, self.instance(), self.amount)
    }
}
