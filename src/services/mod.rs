//! Service layer for Spendwise
//!
//! `progress` and `filter` are pure functions over snapshots. The services
//! wrap [`Storage`](crate::storage::Storage) with validation, persistence and
//! the alert pass.

pub mod budget;
pub mod category;
pub mod filter;
pub mod progress;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use filter::{DateRange, TransactionFilter};
pub use progress::BudgetStatus;
pub use transaction::{CreateTransactionInput, TransactionService};
