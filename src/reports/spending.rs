//! Spending Report
//!
//! Expense totals per category for the transactions passing a filter.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::SpendwiseResult;
use crate::models::{CategoryId, Money};
use crate::services::filter::{category_spending, group_by_category, total_expenses};
use crate::services::TransactionFilter;
use crate::storage::Storage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category_id: CategoryId,
    /// Resolved name, "Unknown" for deleted categories
    pub category_name: String,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Largest spend first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Generate a spending report for the transactions passing `filter`
    pub fn generate(storage: &Storage, filter: &TransactionFilter, now: NaiveDateTime) -> SpendwiseResult<Self> {
        let transactions = filter.apply(&storage.transactions.get_all()?, now);
        let names: HashMap<CategoryId, String> = storage
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let total_spending = total_expenses(&transactions);
        let groups = group_by_category(&transactions);

        let categories = category_spending(&transactions)
            .into_iter()
            .map(|(category_id, spent)| SpendingByCategory {
                category_id,
                category_name: names
                    .get(&category_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                total_spending: spent,
                transaction_count: groups.get(&category_id).map_or(0, Vec::len),
                percentage: spent.ratio_of(total_spending).unwrap_or(0.0) * 100.0,
            })
            .collect();

        Ok(Self {
            categories,
            total_spending,
            total_transactions: groups.values().map(Vec::len).sum(),
        })
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>14} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<32} {:>14} {:>7} {:>6.1}%\n",
                category.category_name,
                category.total_spending.format_with_symbol(currency),
                category.transaction_count,
                category.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>14} {:>7}\n",
            "TOTAL SPENDING",
            self.total_spending.format_with_symbol(currency),
            self.total_transactions
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use crate::services::CategoryService;
    use chrono::NaiveDate;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn add(storage: &Storage, name: &str, cents: i64, kind: TransactionType) {
        let id = storage.categories.get_by_name(name).unwrap().unwrap().id;
        storage
            .transactions
            .insert(Transaction::new("t", Money::from_cents(cents), kind, id, at(1)))
            .unwrap();
    }

    #[test]
    fn test_generate_spending_report() {
        let storage = Storage::in_memory().unwrap();
        add(&storage, "Food", 5_000, TransactionType::Expense);
        add(&storage, "Food", 2_500, TransactionType::Expense);
        add(&storage, "Transport", 2_500, TransactionType::Expense);
        add(&storage, "Income", 100_000, TransactionType::Income);

        let report = SpendingReport::generate(&storage, &TransactionFilter::new(), at(20)).unwrap();
        assert_eq!(report.total_spending, Money::from_cents(10_000));
        assert_eq!(report.total_transactions, 3);

        let names: Vec<_> = report.categories.iter().map(|c| c.category_name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);
        assert_eq!(report.categories[0].transaction_count, 2);
        assert_eq!(report.categories[0].percentage, 75.0);
        assert_eq!(report.categories[1].percentage, 25.0);
        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(10).len(), 2);

        let text = report.format_terminal("$");
        assert!(text.contains("Food"));
        assert!(text.contains("$100.00"));
    }

    #[test]
    fn test_deleted_category_reported_as_unknown() {
        let storage = Storage::in_memory().unwrap();
        add(&storage, "Health", 1_000, TransactionType::Expense);
        let health = storage.categories.get_by_name("Health").unwrap().unwrap();
        CategoryService::new(&storage).delete(health.id).unwrap();

        let report = SpendingReport::generate(&storage, &TransactionFilter::new(), at(20)).unwrap();
        assert_eq!(report.categories[0].category_name, "Unknown");
    }

    #[test]
    fn test_empty_report() {
        let storage = Storage::in_memory().unwrap();
        let report = SpendingReport::generate(&storage, &TransactionFilter::new(), at(20)).unwrap();
        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
    }
}
