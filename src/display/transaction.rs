//! Transaction display formatting
//!
//! Register and detail views. Category names are resolved live, so a
//! transaction whose category was deleted shows "Unknown".

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction};
use crate::services::filter::{total_expenses, total_income};

use super::truncate;

/// Category id to name lookup
pub struct CategoryNames(HashMap<CategoryId, String>);

impl CategoryNames {
    pub fn new(categories: &[Category]) -> Self {
        Self(categories.iter().map(|c| (c.id, c.name.clone())).collect())
    }

    pub fn get(&self, id: CategoryId) -> &str {
        self.0.get(&id).map(String::as_str).unwrap_or("Unknown")
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, names: &CategoryNames, currency: &str) -> String {
    format!(
        "{:<12} {} {} {} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.title, 24),
        truncate(names.get(txn.category_id), 14),
        txn.signed_amount().format_with_symbol(currency)
    )
}

/// Format a list of transactions as a register with totals
pub fn format_transaction_register(transactions: &[Transaction], names: &CategoryNames, currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:10} {:24} {:14} {:>12}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, names, currency));
        output.push('\n');
    }

    let income = total_income(transactions);
    let expenses = total_expenses(transactions);
    output.push_str(&"-".repeat(76));
    output.push('\n');
    output.push_str(&format!("{:>63} {:>12}\n", "Income:", income.format_with_symbol(currency)));
    output.push_str(&format!("{:>63} {:>12}\n", "Expenses:", expenses.format_with_symbol(currency)));
    output.push_str(&format!(
        "{:>63} {:>12}\n",
        "Balance:",
        (income - expenses).format_with_symbol(currency)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, category_name: &str, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(currency)));
    output.push_str(&format!("Category:    {}\n", category_name));

    if let Some(note) = txn.note.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}
