//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::SpendwiseResult;
use crate::reports::{MonthlyTrend, SpendingReport, SummaryReport, MAX_TREND_MONTHS};
use crate::storage::Storage;

use super::now;
use super::transaction::FilterArgs;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses and balance
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Spending by category, largest first
    Spending {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only show the top N categories
        #[arg(long)]
        top: Option<usize>,
    },

    /// Income and expenses per month
    Trend {
        /// Number of months ending with the current one (1 to 120)
        #[arg(
            short,
            long,
            default_value = "6",
            value_parser = clap::value_parser!(u32).range(1..=MAX_TREND_MONTHS as i64)
        )]
        months: u32,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, settings: &Settings, cmd: ReportCommands) -> SpendwiseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { filter } => {
            let title = filter
                .range
                .unwrap_or(settings.default_date_range)
                .to_string();
            let filter = filter.to_filter(storage, settings)?;
            let report = SummaryReport::generate(storage, &filter, now())?;
            print!("{}", report.format_terminal(&title, currency));
        }

        ReportCommands::Spending { filter, top } => {
            let filter = filter.to_filter(storage, settings)?;
            let mut report = SpendingReport::generate(storage, &filter, now())?;
            if let Some(limit) = top {
                report.categories = report.top_categories(limit).to_vec();
            }
            print!("{}", report.format_terminal(currency));
        }

        ReportCommands::Trend { months } => {
            let report = MonthlyTrend::generate(storage, months, now())?;
            print!("{}", report.format_terminal(currency));
        }
    }

    Ok(())
}
