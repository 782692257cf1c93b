//! Transaction CLI commands

use chrono::{DateTime, Local, Utc};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::dashboard::DashboardSession;
use crate::display::report::format_date_filter;
use crate::display::transaction::{
    format_form_errors, format_transaction_details, format_transaction_list,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{DatePreset, DateRange, Transaction};
use crate::services::{TransactionFormInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction dated now
    Add {
        /// What it was for (at least 3 characters)
        description: String,
        /// Signed amount: negative for an expense, positive for income
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// food, groceries, transport, housing, entertainment or other
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// Change a transaction's description, amount or category
    Edit {
        /// Transaction ID (full or short form)
        id: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },
    /// List transactions, newest first
    List {
        /// this-month, last-month or all-time
        #[arg(short, long, default_value = "this-month")]
        range: DatePreset,
    },
}

// Field errors are listed one per line before the error propagates
fn submit(
    session: &DashboardSession<'_>,
    input: &TransactionFormInput,
    now: DateTime<Utc>,
) -> TrackerResult<Transaction> {
    session.submit(input, now).map_err(|e| {
        if let TrackerError::Form(errors) = &e {
            eprintln!("Could not save transaction:");
            eprint!("{}", format_form_errors(errors));
        }
        e
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
        } => {
            let now = Local::now();
            let session = DashboardSession::open(storage, DatePreset::ThisMonth.range(&now))?;
            let input = TransactionFormInput::new(description, amount, category);
            let txn = submit(&session, &input, now.with_timezone(&Utc))?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
        } => {
            if description.is_none() && amount.is_none() && category.is_none() {
                return Err(TrackerError::Validation(
                    "Nothing to change. Pass --description, --amount or --category".into(),
                ));
            }

            let txn = service
                .find(&id)?
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;

            let mut input = TransactionFormInput::from_transaction(&txn);
            if let Some(description) = description {
                input.description = description;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(category) = category {
                input.category = category;
            }

            let session = DashboardSession::open(storage, DateRange::single(txn.date))?;
            if !session.start_edit(txn.id)?.is_editing() {
                return Err(TrackerError::transaction_not_found(&id));
            }
            let updated = submit(&session, &input, Utc::now())?;

            println!("Updated transaction:");
            print!("{}", format_transaction_details(&updated, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;
            let deleted = service.delete(txn.id)?;
            println!("Deleted transaction {} ({})", deleted.id.short(), deleted.description);
        }

        TransactionCommands::List { range } => {
            let now = Local::now();
            let range = range.range(&now);
            let transactions = service.list_in_range(&range)?;

            println!("{}", format_date_filter(&range, &now));
            println!();
            print!(
                "{}",
                format_transaction_list(&transactions, symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
