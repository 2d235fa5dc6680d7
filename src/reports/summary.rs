//! Income/expense summaries
//!
//! [`SummaryReport`] totals the transactions passing a filter;
//! [`MonthlyTrend`] breaks the whole history down by calendar month.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::error::SpendwiseResult;
use crate::models::{Money, TransactionType};
use crate::services::filter::{balance, total_expenses, total_income};
use crate::services::TransactionFilter;
use crate::storage::Storage;

/// Totals over a filtered transaction set
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub transaction_count: usize,
}

impl SummaryReport {
    pub fn generate(storage: &Storage, filter: &TransactionFilter, now: NaiveDateTime) -> SpendwiseResult<Self> {
        let transactions = filter.apply(&storage.transactions.get_all()?, now);
        Ok(Self {
            income: total_income(&transactions),
            expenses: total_expenses(&transactions),
            balance: balance(&transactions),
            transaction_count: transactions.len(),
        })
    }

    pub fn format_terminal(&self, title: &str, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Summary: {}\n", title));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Income", self.income.format_with_symbol(currency)));
        output.push_str(&format!("{:<20} {:>19}\n", "Expenses", self.expenses.format_with_symbol(currency)));
        output.push_str(&format!("{:<20} {:>19}\n", "Balance", self.balance.format_with_symbol(currency)));
        output.push_str(&format!("{:<20} {:>19}\n", "Transactions", self.transaction_count));
        output
    }
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotals {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
}

impl MonthTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Longest history a trend covers
pub const MAX_TREND_MONTHS: u32 = 120;

/// Month-by-month totals, oldest first
#[derive(Debug, Clone)]
pub struct MonthlyTrend {
    pub months: Vec<MonthTotals>,
}

impl MonthlyTrend {
    /// Totals for the `months` calendar months ending with the month of `now`
    ///
    /// `months` is capped at [`MAX_TREND_MONTHS`].
    pub fn generate(storage: &Storage, months: u32, now: NaiveDateTime) -> SpendwiseResult<Self> {
        let months = months.min(MAX_TREND_MONTHS);
        let transactions = storage.transactions.get_all()?;
        let current = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap_or(now.date());

        let mut totals: Vec<MonthTotals> = (0..months)
            .rev()
            .filter_map(|back| current.checked_sub_months(Months::new(back)))
            .map(|first| MonthTotals {
                year: first.year(),
                month: first.month(),
                income: Money::zero(),
                expenses: Money::zero(),
            })
            .collect();

        for txn in &transactions {
            let slot = totals
                .iter_mut()
                .find(|m| m.year == txn.date.year() && m.month == txn.date.month());
            if let Some(slot) = slot {
                match txn.kind {
                    TransactionType::Income => slot.income += txn.amount,
                    TransactionType::Expense => slot.expenses += txn.amount,
                }
            }
        }

        Ok(Self { months: totals })
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(53));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14}\n",
                month.label(),
                month.income.format_with_symbol(currency),
                month.expenses.format_with_symbol(currency),
                month.net().format_with_symbol(currency)
            ));
        }
        output
    }
}
