//! Core data models for Spendwise
//!
//! The three record kinds (categories, transactions, budgets) plus the value
//! types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, DefaultCategory};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodInstance, PeriodParseError};
pub use transaction::{Transaction, TransactionType};
