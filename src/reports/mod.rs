//! Reports module for Spendwise
//!
//! Read-only views computed from a storage snapshot: totals, category
//! spending and monthly trends.

pub mod spending;
pub mod summary;

pub use spending::{SpendingByCategory, SpendingReport};
pub use summary::{MonthTotals, MonthlyTrend, SummaryReport, MAX_TREND_MONTHS};
