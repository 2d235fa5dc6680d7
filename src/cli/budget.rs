//! Budget CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{format_budget_list, format_budget_statuses};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetPeriod, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{category_names, now, resolve_category};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all budgets
    List,

    /// Create a budget for a category
    Add {
        /// Category name or ID
        category: String,
        /// Spending limit (e.g. "300" or "300.00")
        amount: String,
        /// weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        period: BudgetPeriod,
        /// Any date inside the period to budget (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<NaiveDate>,
    },

    /// Edit a budget
    Edit {
        /// Budget ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        period: Option<BudgetPeriod>,
        #[arg(short, long)]
        start: Option<NaiveDate>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },

    /// Show spending progress for every budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, settings: &Settings, cmd: BudgetCommands) -> SpendwiseResult<()> {
    let service = BudgetService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            print!(
                "{}",
                format_budget_list(&service.list()?, &category_names(storage)?, currency)
            );
        }

        BudgetCommands::Add {
            category,
            amount,
            period,
            start,
        } => {
            let category = resolve_category(storage, &category)?;
            let amount = Money::parse(&amount)?;
            let start = start.unwrap_or_else(|| now().date());

            let budget = service.create(category.id, amount, period, start)?;
            println!(
                "Created {} budget for {}: {}",
                budget.period.to_string().to_lowercase(),
                category.name,
                budget.amount.format_with_symbol(currency)
            );
            println!("  Period: {}", budget.instance());
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Edit {
            id,
            amount,
            period,
            start,
        } => {
            let mut budget = service
                .find(&id)?
                .ok_or_else(|| SpendwiseError::budget_not_found(&id))?;

            if let Some(amount) = amount {
                budget.amount = Money::parse(&amount)?;
            }
            if let Some(period) = period {
                budget.period = period;
            }
            if let Some(start) = start {
                budget.start_date = start;
            }

            service.update(budget.clone())?;
            println!("Updated budget: {}", budget.id);
        }

        BudgetCommands::Delete { id } => {
            let budget = service
                .find(&id)?
                .ok_or_else(|| SpendwiseError::budget_not_found(&id))?;
            service.delete(budget.id)?;
            println!("Deleted budget: {}", budget.id);
        }

        BudgetCommands::Status => {
            print!(
                "{}",
                format_budget_statuses(&service.statuses()?, &category_names(storage)?, currency)
            );
        }
    }

    Ok(())
}
