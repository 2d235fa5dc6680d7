//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for categories, transactions and
//! budgets.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{format_alert, format_budget_list, format_budget_statuses, progress_bar};
pub use category::{format_category_details, format_category_list};
pub use transaction::{format_transaction_details, format_transaction_register, CategoryNames};

/// Pad or cut `s` to exactly `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
