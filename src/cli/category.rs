//! Category CLI commands

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list};
use crate::error::SpendwiseResult;
use crate::services::CategoryService;
use crate::storage::Storage;

use super::resolve_category;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Icon reference
        #[arg(short, long, default_value = "tag.fill")]
        icon: String,
        /// Display color (#RRGGBB)
        #[arg(short, long, default_value = "#8E8E93")]
        color: String,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New color (#RRGGBB)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category and its budgets
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendwiseResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
        }

        CategoryCommands::Add { name, icon, color } => {
            let category = service.create(&name, &icon, &color)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = resolve_category(storage, &category)?;
            let transactions = storage.transactions.get_by_category(cat.id)?.len();
            let budgets = storage.budgets.get_by_category(cat.id)?.len();
            print!("{}", format_category_details(&cat, transactions, budgets));
        }

        CategoryCommands::Edit {
            category,
            name,
            icon,
            color,
        } => {
            let mut cat = resolve_category(storage, &category)?;

            if name.is_none() && icon.is_none() && color.is_none() {
                println!("No changes specified. Use --name, --icon, or --color.");
                return Ok(());
            }

            if let Some(name) = name {
                cat.name = name;
            }
            if let Some(icon) = icon {
                cat.icon = icon;
            }
            if let Some(color) = color {
                cat.color = color;
            }

            service.update(cat.clone())?;
            println!("Updated category: {}", cat.name.trim());
        }

        CategoryCommands::Delete { category } => {
            let cat = resolve_category(storage, &category)?;
            let budgets = storage.budgets.get_by_category(cat.id)?.len();

            service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);
            if budgets > 0 {
                println!("  Also removed {} budget(s)", budgets);
            }
        }
    }

    Ok(())
}
