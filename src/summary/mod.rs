//! Spending analysis
//!
//! Renders the transactions in scope into an advisor prompt and hands it to
//! a `Summarizer`. The reply is free text using a small markdown subset;
//! `display::analysis` turns it into terminal output.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiSummarizer;
pub use prompt::{build_prompt, render_transactions};

use crate::error::TrackerResult;
use crate::models::Transaction;

/// Reply used when there is nothing to analyze
pub const NO_TRANSACTIONS_MESSAGE: &str =
    "There are no transactions to analyze. Please add some expenses.";

/// Shown to the user when the summarizer fails
pub const FAILURE_MESSAGE: &str =
    "Sorry, I wasn't able to analyze your spending. Please try again later.";

/// A text generator that answers a prompt
pub trait Summarizer {
    fn summarize(&self, prompt: &str) -> TrackerResult<String>;
}

/// Ask `summarizer` for an analysis of `transactions`
///
/// An empty list is answered locally without calling the summarizer.
pub fn analyze_spending(
    summarizer: &dyn Summarizer,
    transactions: &[Transaction],
) -> TrackerResult<String> {
    if transactions.is_empty() {
        return Ok(NO_TRANSACTIONS_MESSAGE.to_string());
    }
    summarizer.summarize(&build_prompt(transactions))
}
