//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetMap, BudgetMonth, Category};
use crate::services::budget::parse_assignment;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the monthly limits
    Show {
        /// Month as YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Set one or more limits, e.g. `food=250 transport=80`
    Set {
        /// CATEGORY=AMOUNT pairs; zero or negative clears a limit
        #[arg(required = true, allow_hyphen_values = true)]
        assignments: Vec<String>,
        /// Month as YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn resolve_month(month: Option<String>) -> TrackerResult<BudgetMonth> {
    match month {
        Some(raw) => raw.parse().map_err(TrackerError::Validation),
        None => Ok(BudgetMonth::current()),
    }
}

fn format_limits(month: BudgetMonth, budgets: &BudgetMap, symbol: &str) -> String {
    let mut output = format!("Budgets for {}\n", month);
    for category in Category::ALL {
        let limit = budgets
            .get(category)
            .filter(|m| m.is_positive())
            .map(|m| m.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("  {:14} {:>12}\n", category.label(), limit));
    }
    output
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show { month } => {
            let month = resolve_month(month)?;
            let budgets = service.load_for_month(month)?;
            print!("{}", format_limits(month, &budgets, symbol));
        }

        BudgetCommands::Set { assignments, month } => {
            let month = resolve_month(month)?;
            let updates = assignments
                .iter()
                .map(|raw| parse_assignment(raw))
                .collect::<TrackerResult<Vec<_>>>()?;

            let doc = service.set_limits(month, &updates)?;
            println!("Saved budgets.");
            print!("{}", format_limits(month, &doc.budgets, symbol));
        }
    }

    Ok(())
}
