use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_budget_command, handle_category_command, handle_export_command, handle_report_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, ExportCommands, ReportCommands,
    TransactionCommands,
};
use spendwise::config::{paths::DATA_DIR_ENV, Settings, SpendwisePaths};
use spendwise::display::{format_alert, CategoryNames};
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal finance tracker with category budgets and alerts",
    long_about = "Spendwise records income and expenses against categories, tracks \
                  weekly, monthly and yearly budgets, and warns when a budget \
                  reaches its alert threshold."
)]
struct Cli {
    /// Base directory for data and settings
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Create the data directory, settings and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    spendwise::logging::init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => SpendwisePaths::with_base_dir(dir),
        None => SpendwisePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Spendwise - personal finance tracker");
        println!();
        println!("Run 'spendwise --help' for usage information.");
        return Ok(());
    };

    let storage = Storage::open(&paths, &settings)?;
    let alerts = storage.subscribe();

    let result = match command {
        Commands::Category(cmd) => handle_category_command(&storage, cmd),
        Commands::Transaction(cmd) => handle_transaction_command(&storage, &settings, cmd),
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd),
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd),
        Commands::Export(cmd) => handle_export_command(&storage, &settings, cmd),
        Commands::Init => {
            settings.save(&paths)?;
            println!("Initialized Spendwise at: {}", paths.base_dir().display());
            println!();
            println!("Categories:");
            for category in storage.categories.get_all()? {
                println!("  - {}", category.name);
            }
            println!();
            println!("Run 'spendwise transaction add --help' to record your first transaction.");
            Ok(())
        }
        Commands::Config => {
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Alert threshold:    {:.0}%", settings.alert_threshold * 100.0);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Default date range: {}", settings.default_date_range);
            Ok(())
        }
    };

    // Alerts raised before a failed save are still worth reporting
    let raised: Vec<_> = alerts.try_iter().collect();
    if !raised.is_empty() {
        let names = CategoryNames::new(&storage.categories.get_all()?);
        println!();
        for alert in &raised {
            println!("{}", format_alert(alert, &names));
        }
    }

    result?;
    Ok(())
}
