//! Display formatting for terminal output
//!
//! Turns reports, transactions and analysis replies into strings for the
//! CLI to print. ANSI colors follow the balance/tier styling rules.

pub mod analysis;
pub mod report;
pub mod transaction;

pub use analysis::{format_analysis, parse_markdown, render_blocks, Block, Span};
pub use report::{
    format_balance, format_bar, format_breakdown, format_budget_progress, format_date_filter,
    format_percentage, separator,
};
pub use transaction::{
    format_form_errors, format_transaction_details, format_transaction_list, format_transaction_row,
};
