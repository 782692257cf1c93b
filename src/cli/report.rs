//! Dashboard and analysis commands

use chrono::Local;

use crate::config::settings::Settings;
use crate::dashboard::DashboardSession;
use crate::display::analysis::format_analysis;
use crate::display::report::{
    format_balance, format_breakdown, format_budget_progress, format_date_filter, separator,
};
use crate::display::transaction::format_transaction_list;
use crate::error::TrackerResult;
use crate::models::{BudgetMonth, DatePreset, Transaction};
use crate::services::{BudgetService, TransactionService};
use crate::storage::Storage;
use crate::summary::{
    analyze_spending, GeminiSummarizer, Summarizer, FAILURE_MESSAGE, NO_TRANSACTIONS_MESSAGE,
};

/// Print balance, breakdown, budget progress and history for `preset`
///
/// Budgets always come from the current UTC month, whatever the range.
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    preset: DatePreset,
) -> TrackerResult<()> {
    let now = Local::now();
    let range = preset.range(&now);
    let session = DashboardSession::open(storage, range)?;
    let budgets = BudgetService::new(storage).load_for_month(BudgetMonth::current())?;

    let view = session.view(&budgets)?;
    let transactions = session.transactions()?;
    let symbol = settings.currency_symbol.as_str();

    println!("{}", format_date_filter(&range, &now));
    println!("{}", separator(60));
    print!("{}", format_balance(&view.balance, symbol));
    println!();
    print!("{}", format_breakdown(&view.spending, symbol));
    println!();
    print!("{}", format_budget_progress(&view.progress, symbol));
    println!();
    print!(
        "{}",
        format_transaction_list(&transactions, symbol, &settings.date_format)
    );

    Ok(())
}

/// Analysis text for `transactions`, or the apology when the summarizer fails
pub fn analysis_text(summarizer: &dyn Summarizer, transactions: &[Transaction]) -> String {
    match analyze_spending(summarizer, transactions) {
        Ok(reply) => format_analysis(&reply),
        Err(_) => format_analysis(FAILURE_MESSAGE),
    }
}

/// Ask the summarizer about the transactions in `preset`
pub fn handle_analyze_command(
    storage: &Storage,
    settings: &Settings,
    preset: DatePreset,
) -> TrackerResult<()> {
    let range = preset.range(&Local::now());
    let transactions = TransactionService::new(storage).list_in_range(&range)?;

    if transactions.is_empty() {
        print!("{}", format_analysis(NO_TRANSACTIONS_MESSAGE));
        return Ok(());
    }

    let summarizer = GeminiSummarizer::from_settings(&settings.summarizer)?;
    println!("Analyzing your spending...");
    print!("{}", analysis_text(&summarizer, &transactions));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::{Category, Money};
    use chrono::Utc;

    struct Canned(Option<&'static str>);

    impl Summarizer for Canned {
        fn summarize(&self, _prompt: &str) -> TrackerResult<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| TrackerError::Summarizer("offline".into()))
        }
    }

    fn coffee() -> Transaction {
        Transaction::new("Coffee", Money::from_cents(-450), Utc::now(), Category::Food)
    }

    #[test]
    fn test_analysis_text_renders_reply() {
        let text = analysis_text(&Canned(Some("* Cut back on **coffee**")), &[coffee()]);
        assert!(text.contains("Spending Analysis"));
        assert!(text.contains("  • Cut back on"));
    }

    #[test]
    fn test_analysis_text_apologizes_on_failure() {
        let text = analysis_text(&Canned(None), &[coffee()]);
        assert!(text.contains(FAILURE_MESSAGE));
    }
}
