//! Budget progress evaluation
//!
//! Pure functions over a budget and a transaction snapshot. Nothing here
//! reads storage; callers pass the complete transaction set they want counted.

use crate::models::{Budget, Money, PeriodInstance, Transaction};

/// Whether `txn` counts toward `budget`
///
/// Same category, an expense, and dated inside the budget's period instance.
pub fn is_relevant(budget: &Budget, txn: &Transaction) -> bool {
    counts_toward(budget, budget.instance(), txn)
}

fn counts_toward(budget: &Budget, instance: PeriodInstance, txn: &Transaction) -> bool {
    txn.category_id == budget.category_id && txn.is_expense() && instance.contains(txn.day())
}

/// The transactions that count toward `budget`, in input order
pub fn relevant_transactions<'a>(budget: &Budget, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
    let instance = budget.instance();
    transactions
        .iter()
        .filter(|t| counts_toward(budget, instance, t))
        .collect()
}

/// Total spent against `budget`
pub fn spent(budget: &Budget, transactions: &[Transaction]) -> Money {
    relevant_transactions(budget, transactions)
        .into_iter()
        .map(|t| t.amount)
        .sum()
}

/// Spent divided by the budget limit
///
/// Unclamped: over-budget gives a ratio above 1.0. `None` when the budget
/// amount is not positive.
pub fn progress(budget: &Budget, transactions: &[Transaction]) -> Option<f64> {
    spent(budget, transactions).ratio_of(budget.amount)
}

/// Derived view of one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: Money,
    /// Limit minus spent; negative once over budget
    pub remaining: Money,
    /// Unclamped ratio, `None` for a non-positive limit
    pub progress: Option<f64>,
}

impl BudgetStatus {
    pub fn evaluate(budget: &Budget, transactions: &[Transaction]) -> Self {
        let spent = spent(budget, transactions);
        Self {
            budget: budget.clone(),
            spent,
            remaining: budget.amount - spent,
            progress: spent.ratio_of(budget.amount),
        }
    }

    /// Progress clamped to `0.0..=1.0` for progress bars
    pub fn display_progress(&self) -> f64 {
        self.progress.unwrap_or(0.0).clamp(0.0, 1.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, CategoryId, TransactionType};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn expense(cat: CategoryId, cents: i64, date: chrono::NaiveDateTime) -> Transaction {
        Transaction::new("e", Money::from_cents(cents), TransactionType::Expense, cat, date)
    }

    fn monthly(cat: CategoryId, units: i64) -> Budget {
        Budget::new(
            cat,
            Money::from_units(units),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_food_budget_scenario() {
        let food = CategoryId::new();
        let budget = monthly(food, 300);
        let transactions = vec![
            expense(food, 10_000, at(2024, 1, 5)),
            expense(food, 14_000, at(2024, 1, 20)),
            expense(food, 5_000, at(2024, 2, 1)),
        ];

        let relevant = relevant_transactions(&budget, &transactions);
        assert_eq!(relevant.len(), 2);
        assert_eq!(relevant[0].id, transactions[0].id);
        assert_eq!(relevant[1].id, transactions[1].id);
        assert_eq!(spent(&budget, &transactions), Money::from_units(240));
        assert_eq!(progress(&budget, &transactions), Some(0.8));
    }

    #[test]
    fn test_income_and_other_categories_ignored() {
        let food = CategoryId::new();
        let budget = monthly(food, 100);
        let mut income = expense(food, 50_000, at(2024, 1, 3));
        income.kind = TransactionType::Income;
        let other = expense(CategoryId::new(), 9_000, at(2024, 1, 3));

        let transactions = vec![income, other];
        assert!(relevant_transactions(&budget, &transactions).is_empty());
        assert_eq!(progress(&budget, &transactions), Some(0.0));
    }

    #[test]
    fn test_progress_is_not_clamped() {
        let food = CategoryId::new();
        let budget = monthly(food, 100);
        let transactions = vec![expense(food, 15_000, at(2024, 1, 31))];

        let status = BudgetStatus::evaluate(&budget, &transactions);
        assert_eq!(status.progress, Some(1.5));
        assert_eq!(status.display_progress(), 1.0);
        assert_eq!(status.remaining, Money::from_units(-50));
        assert!(status.is_over_budget());
    }

    #[test]
    fn test_non_positive_budget_has_no_progress() {
        let food = CategoryId::new();
        let mut budget = monthly(food, 100);
        budget.amount = Money::zero();
        let transactions = vec![expense(food, 100, at(2024, 1, 2))];

        assert_eq!(progress(&budget, &transactions), None);
        assert_eq!(BudgetStatus::evaluate(&budget, &transactions).display_progress(), 0.0);
    }

    #[test]
    fn test_weekly_and_yearly_windows() {
        let cat = CategoryId::new();
        // 2024-01-10 is a Wednesday; its ISO week runs Jan 8..=Jan 14
        let weekly = Budget::new(
            cat,
            Money::from_units(100),
            BudgetPeriod::Weekly,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        let yearly = Budget::new(
            cat,
            Money::from_units(1000),
            BudgetPeriod::Yearly,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let transactions = vec![
            expense(cat, 1_000, at(2024, 1, 7)),
            expense(cat, 2_000, at(2024, 1, 8)),
            expense(cat, 3_000, at(2024, 1, 14)),
            expense(cat, 4_000, at(2024, 12, 31)),
            expense(cat, 5_000, at(2025, 1, 1)),
        ];

        assert_eq!(spent(&weekly, &transactions), Money::from_units(50));
        assert_eq!(spent(&yearly, &transactions), Money::from_units(100));
        assert!(is_relevant(&weekly, &transactions[1]));
        assert!(!is_relevant(&weekly, &transactions[0]));

        for budget in [&weekly, &yearly] {
            let by_filter: Vec<_> = transactions.iter().filter(|t| is_relevant(budget, t)).collect();
            assert_eq!(relevant_transactions(budget, &transactions), by_filter);
        }
    }

    #[test]
    fn test_huge_spending_does_not_overflow() {
        let food = CategoryId::new();
        let budget = monthly(food, 100);
        let transactions = vec![
            expense(food, i64::MAX / 2 + 1, at(2024, 1, 2)),
            expense(food, i64::MAX / 2 + 1, at(2024, 1, 3)),
        ];

        assert_eq!(spent(&budget, &transactions).cents(), i64::MAX);
        assert!(progress(&budget, &transactions).unwrap() > 1.0);
    }
}
