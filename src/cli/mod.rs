//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod report;
pub mod transaction;
pub mod user;

pub use audit::handle_log_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_analyze_command, handle_dashboard_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_login, handle_logout, handle_whoami};
