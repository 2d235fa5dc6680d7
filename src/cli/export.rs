//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

use super::now;
use super::transaction::FilterArgs;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path
        output: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export everything to JSON
    Json {
        /// Output file path
        output: PathBuf,
    },

    /// Export everything to YAML
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, settings: &Settings, cmd: ExportCommands) -> SpendwiseResult<()> {
    match cmd {
        ExportCommands::Csv { output, filter } => {
            let filter = filter.to_filter(storage, settings)?;
            let transactions = filter.apply(&storage.transactions.get_all()?, now());

            let mut writer = create_output(&output)?;
            export_transactions_csv(storage, &transactions, &mut writer)?;
            finish(writer)?;
            println!("Exported {} transactions to: {}", transactions.len(), output.display());
        }

        ExportCommands::Json { output } => {
            let mut writer = create_output(&output)?;
            export_full_json(storage, &mut writer)?;
            finish(writer)?;
            println!("Full dataset exported to: {}", output.display());
        }

        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            export_full_yaml(storage, &mut writer)?;
            finish(writer)?;
            println!("Full dataset exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> SpendwiseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SpendwiseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> SpendwiseResult<()> {
    writer
        .flush()
        .map_err(|e| SpendwiseError::Export(format!("Failed to write export: {}", e)))
}
