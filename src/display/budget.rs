//! Budget display formatting

use crate::alert::BudgetAlert;
use crate::models::Budget;
use crate::services::BudgetStatus;

use super::transaction::CategoryNames;
use super::truncate;

const BAR_WIDTH: usize = 20;

/// Fixed-width bar for a clamped progress value
pub fn progress_bar(display_progress: f64) -> String {
    let filled = (display_progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format budgets as a plain list
pub fn format_budget_list(budgets: &[Budget], names: &CategoryNames, currency: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    for budget in budgets {
        output.push_str(&format!(
            "{:<12} {} {:8} {:9} {:>11}  (from {})\n",
            budget.id,
            truncate(names.get(budget.category_id), 14),
            budget.period.to_string(),
            budget.instance().to_string(),
            budget.amount.format_with_symbol(currency),
            budget.start_date
        ));
    }
    output
}

/// Format budget statuses as a table
pub fn format_budget_statuses(statuses: &[BudgetStatus], names: &CategoryNames, currency: &str) -> String {
    if statuses.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:14} {:8} {:9} {:>11} {:>11} {:>11}  {:22} {:>6}\n",
        "ID", "Category", "Period", "Instance", "Limit", "Spent", "Remaining", "Progress", "%"
    ));
    output.push_str(&"-".repeat(113));
    output.push('\n');

    for status in statuses {
        let budget = &status.budget;
        let percent = status
            .progress
            .map(|p| format!("{:.0}%", p * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let marker = if status.is_over_budget() { " !" } else { "" };

        output.push_str(&format!(
            "{:<12} {} {:8} {:9} {:>11} {:>11} {:>11}  {} {:>6}{}\n",
            budget.id,
            truncate(names.get(budget.category_id), 14),
            budget.period.to_string(),
            budget.instance().to_string(),
            budget.amount.format_with_symbol(currency),
            status.spent.format_with_symbol(currency),
            status.remaining.format_with_symbol(currency),
            progress_bar(status.display_progress()),
            percent,
            marker
        ));
    }

    output
}

/// One-line warning for a raised alert
pub fn format_alert(alert: &BudgetAlert, names: &CategoryNames) -> String {
    format!(
        "Warning: {} budget for {} ({}) is at {:.0}% of {}",
        alert.budget.period,
        names.get(alert.budget.category_id),
        alert.budget.instance(),
        alert.percent(),
        alert.budget.amount
    )
}
