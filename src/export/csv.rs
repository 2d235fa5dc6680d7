//! CSV export of transactions

use std::collections::HashMap;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Transaction;
use crate::storage::Storage;

const HEADER: [&str; 7] = ["ID", "Date", "Type", "Title", "Category", "Amount", "Note"];

/// Write `transactions` as CSV, one row each, in the order given
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    transactions: &[Transaction],
    writer: W,
) -> SpendwiseResult<()> {
    let category_names: HashMap<_, _> = storage
        .categories
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_error)?;

    for txn in transactions {
        let category = category_names
            .get(&txn.category_id)
            .map(String::as_str)
            .unwrap_or("Unknown");

        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            txn.kind.to_string(),
            txn.title.clone(),
            category.to_string(),
            txn.amount.to_decimal_string(),
            txn.note.clone().unwrap_or_default(),
        ])
        .map_err(export_error)?;
    }

    csv.flush()
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    tracing::debug!(rows = transactions.len(), "exported transactions to csv");
    Ok(())
}

fn export_error(e: ::csv::Error) -> SpendwiseError {
    SpendwiseError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions_csv() {
        let storage = Storage::in_memory().unwrap();
        let food = storage.categories.get_by_name("Food").unwrap().unwrap().id;
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(18, 30, 0).unwrap();
        let txns = vec![
            Transaction::new("Pizza, large", Money::from_cents(1_850), TransactionType::Expense, food, date)
                .with_note("said \"extra cheese\""),
            Transaction::new("Orphan", Money::from_cents(100), TransactionType::Income, Default::default(), date),
        ];

        let mut out = Vec::new();
        export_transactions_csv(&storage, &txns, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Type,Title,Category,Amount,Note");
        assert!(lines[1].contains("2024-01-05 18:30:00,Expense,\"Pizza, large\",Food,18.50"));
        assert!(lines[1].ends_with("\"said \"\"extra cheese\"\"\""));
        assert!(lines[2].contains(",Income,Orphan,Unknown,1.00,"));
        assert_eq!(lines.len(), 3);
    }
}
