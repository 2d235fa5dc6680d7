//! Transaction CLI commands

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Money, TransactionType};
use crate::services::{CreateTransactionInput, DateRange, TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::{at_date, category_names, now, resolve_category};

/// Filter options shared by listing, reporting and CSV export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to find in title or note
    #[arg(short, long)]
    pub search: Option<String>,
    /// income or expense
    #[arg(short = 't', long = "type")]
    pub kind: Option<TransactionType>,
    /// Category name or ID
    #[arg(short, long)]
    pub category: Option<String>,
    /// today, this-week, this-month, last-3-months, this-year, all-time
    #[arg(short, long)]
    pub range: Option<DateRange>,
}

impl FilterArgs {
    /// Build the filter, using the configured default range when none is given
    pub fn to_filter(&self, storage: &Storage, settings: &Settings) -> SpendwiseResult<TransactionFilter> {
        let mut filter = TransactionFilter::new()
            .date_range(self.range.unwrap_or(settings.default_date_range));
        if let Some(search) = &self.search {
            filter = filter.query(search.as_str());
        }
        if let Some(kind) = self.kind {
            filter = filter.kind(kind);
        }
        if let Some(category) = &self.category {
            filter = filter.category(resolve_category(storage, category)?.id);
        }
        Ok(filter)
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g. "12.50"); always positive, the type gives the sign
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, most recent first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// New note, stored as given (an empty string stays an empty note)
        #[arg(short, long)]
        note: Option<String>,
        /// Remove the note entirely
        #[arg(long, conflicts_with = "note")]
        clear_note: bool,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SpendwiseResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let amount = Money::parse(&amount)?;
            let category_id = match category {
                Some(c) => Some(resolve_category(storage, &c)?.id),
                None => None,
            };

            let txn = service.create(CreateTransactionInput {
                title,
                amount,
                kind,
                category_id,
                date: at_date(date),
                note,
            })?;

            println!("Added {}: {}", txn.kind.to_string().to_lowercase(), txn.title);
            println!("  Amount: {}", txn.amount.format_with_symbol(currency));
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { filter } => {
            let filter = filter.to_filter(storage, settings)?;
            let transactions = service.filtered(&filter, now())?;
            print!(
                "{}",
                format_transaction_register(&transactions, &category_names(storage)?, currency)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SpendwiseError::transaction_not_found(&id))?;
            let names = category_names(storage)?;
            print!(
                "{}",
                format_transaction_details(&txn, names.get(txn.category_id), currency)
            );
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            kind,
            category,
            date,
            note,
            clear_note,
        } => {
            let mut txn = service
                .find(&id)?
                .ok_or_else(|| SpendwiseError::transaction_not_found(&id))?;

            if let Some(title) = title {
                txn.title = title;
            }
            if let Some(amount) = amount {
                txn.amount = Money::parse(&amount)?;
            }
            if let Some(kind) = kind {
                txn.kind = kind;
            }
            if let Some(category) = category {
                txn.category_id = resolve_category(storage, &category)?.id;
            }
            if let Some(date) = date {
                txn.date = date.and_time(txn.date.time());
            }
            if clear_note {
                txn.note = None;
            } else if let Some(note) = note {
                txn.note = Some(note);
            }

            service.update(txn.clone())?;
            println!("Updated transaction: {}", txn.id);
        }

        TransactionCommands::Delete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SpendwiseError::transaction_not_found(&id))?;
            service.delete(txn.id)?;
            println!("Deleted transaction: {} ({})", txn.id, txn.title);
        }
    }

    Ok(())
}
