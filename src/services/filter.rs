//! Transaction filtering and aggregation
//!
//! Pure functions: every call recomputes from the snapshot it is given, so a
//! view is refreshed simply by calling again after a mutation or after the
//! filter changes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, Money, Transaction, TransactionType};

/// Date window applied relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Today,
    ThisWeek,
    ThisMonth,
    Last3Months,
    ThisYear,
    #[default]
    AllTime,
}

impl DateRange {
    pub fn all() -> &'static [DateRange] {
        &[
            Self::Today,
            Self::ThisWeek,
            Self::ThisMonth,
            Self::Last3Months,
            Self::ThisYear,
            Self::AllTime,
        ]
    }

    /// Whether `date` falls in this range as seen from `now`
    pub fn contains(&self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            Self::Today => date.date() == now.date(),
            Self::ThisWeek => {
                let today = now.date();
                let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                let start = monday.and_time(NaiveTime::MIN);
                let end = start + Duration::days(7);
                date >= start && date < end
            }
            Self::ThisMonth => date.year() == now.year() && date.month() == now.month(),
            Self::Last3Months => match now.checked_sub_months(Months::new(3)) {
                Some(cutoff) => date >= cutoff,
                None => true,
            },
            Self::ThisYear => date.year() == now.year(),
            Self::AllTime => true,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Last3Months => "Last 3 Months",
            Self::ThisYear => "This Year",
            Self::AllTime => "All Time",
        };
        f.write_str(label)
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "today" => Ok(Self::Today),
            "thisweek" | "week" => Ok(Self::ThisWeek),
            "thismonth" | "month" => Ok(Self::ThisMonth),
            "last3months" | "3months" | "quarter" => Ok(Self::Last3Months),
            "thisyear" | "year" => Ok(Self::ThisYear),
            "alltime" | "all" => Ok(Self::AllTime),
            _ => Err(format!(
                "unknown date range '{}' (today, this-week, this-month, last-3-months, this-year, all-time)",
                s.trim()
            )),
        }
    }
}

/// The active filter configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive text matched against title or note; empty matches all
    pub query: String,
    pub kind: Option<TransactionType>,
    pub category_id: Option<CategoryId>,
    pub date_range: DateRange,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Whether a single transaction passes every predicate
    pub fn matches(&self, txn: &Transaction, now: NaiveDateTime) -> bool {
        self.matches_query(txn)
            && self.kind.map_or(true, |kind| txn.kind == kind)
            && self.category_id.map_or(true, |id| txn.category_id == id)
            && self.date_range.contains(txn.date, now)
    }

    fn matches_query(&self, txn: &Transaction) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        txn.title.to_lowercase().contains(&needle)
            || txn
                .note
                .as_deref()
                .map_or(false, |note| note.to_lowercase().contains(&needle))
    }

    /// Filter `transactions`, most recent first
    ///
    /// The sort is stable, so transactions sharing a timestamp keep their
    /// input order.
    pub fn apply(&self, transactions: &[Transaction], now: NaiveDateTime) -> Vec<Transaction> {
        let mut result: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t, now))
            .cloned()
            .collect();
        sort_by_date_desc(&mut result);
        result
    }
}

pub fn sort_by_date_desc(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

fn total_of(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn total_income(transactions: &[Transaction]) -> Money {
    total_of(transactions, TransactionType::Income)
}

pub fn total_expenses(transactions: &[Transaction]) -> Money {
    total_of(transactions, TransactionType::Expense)
}

/// Income minus expenses
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// Expense transactions grouped by category id
pub fn group_by_category(transactions: &[Transaction]) -> HashMap<CategoryId, Vec<&Transaction>> {
    let mut groups: HashMap<CategoryId, Vec<&Transaction>> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        groups.entry(txn.category_id).or_default().push(txn);
    }
    groups
}

/// Expense totals per category, largest first
///
/// Categories with equal totals stay in order of first appearance.
pub fn category_spending(transactions: &[Transaction]) -> Vec<(CategoryId, Money)> {
    let mut totals: Vec<(CategoryId, Money)> = Vec::new();
    let mut index: HashMap<CategoryId, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match index.get(&txn.category_id) {
            Some(&i) => totals[i].1 += txn.amount,
            None => {
                index.insert(txn.category_id, totals.len());
                totals.push((txn.category_id, txn.amount));
            }
        }
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}
