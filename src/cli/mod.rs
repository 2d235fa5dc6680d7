//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::display::CategoryNames;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Category;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Current local wall-clock time
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `date` at the current time of day, or now when no date is given
pub(crate) fn at_date(date: Option<NaiveDate>) -> NaiveDateTime {
    let now = now();
    date.map(|d| d.and_time(now.time())).unwrap_or(now)
}

pub(crate) fn resolve_category(storage: &Storage, identifier: &str) -> SpendwiseResult<Category> {
    CategoryService::new(storage)
        .find(identifier)?
        .ok_or_else(|| SpendwiseError::category_not_found(identifier))
}

pub(crate) fn category_names(storage: &Storage) -> SpendwiseResult<CategoryNames> {
    Ok(CategoryNames::new(&storage.categories.get_all()?))
}
