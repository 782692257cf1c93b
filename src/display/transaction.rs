//! Transaction display formatting

use std::fmt::Write;

use chrono::Local;

use crate::models::Transaction;
use crate::services::FormErrors;

use super::report::{paint, GREEN, RED};

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// `-$4.50` for expenses, `+$4.50` for income
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_expense() { "-" } else { "+" };
    let abs = txn.amount.abs();
    format!("{}{}{}.{:02}", sign, symbol, abs.dollars(), abs.cents_part())
}

/// Fallback when the configured date format is not a valid strftime pattern
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Local calendar date of `txn` in `date_format`
pub fn format_local_date(txn: &Transaction, date_format: &str) -> String {
    let local = txn.date.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        return local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

/// One list row: short ID, local date, description, category and amount
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let amount = format!("{:>12}", format_signed_amount(txn, symbol));
    let color = if txn.is_expense() { RED } else { GREEN };
    format!(
        "{:12} {:10} {:24} {:13} {}",
        txn.id.short(),
        format_local_date(txn, date_format),
        truncate(&txn.description, 24),
        txn.category.as_str(),
        paint(&amount, color)
    )
}

/// Transaction history, in the order given
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str, date_format: &str) -> String {
    let mut output = String::from("History\n");

    if transactions.is_empty() {
        output.push_str("  No transactions yet. Add one above!\n");
        return output;
    }

    output.push_str(&format!(
        "{:12} {:10} {:24} {:13} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Full details of one transaction
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    format!(
        "ID:          {}\nDate:        {}\nDescription: {}\nCategory:    {}\nAmount:      {}\n",
        txn.id,
        txn.date.to_rfc3339(),
        txn.description,
        txn.category.label(),
        format_signed_amount(txn, symbol)
    )
}

/// One indented line per failing field
pub fn format_form_errors(errors: &FormErrors) -> String {
    errors
        .fields()
        .into_iter()
        .map(|(field, msg)| format!("  {}: {}\n", field, msg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::services::TransactionFormInput;
    use chrono::{TimeZone, Utc};

    fn txn(description: &str, cents: i64) -> Transaction {
        Transaction::new(
            description,
            Money::from_cents(cents),
            Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap(),
            Category::Food,
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(format_signed_amount(&txn("Coffee", -450), "$"), "-$4.50");
        assert_eq!(format_signed_amount(&txn("Refund", 1200), "$"), "+$12.00");
    }

    #[test]
    fn test_empty_list_message() {
        let text = format_transaction_list(&[], "$", "%Y-%m-%d");
        assert!(text.contains("No transactions yet. Add one above!"));
    }

    #[test]
    fn test_list_rows_in_given_order() {
        let first = txn("Dinner out", -3000);
        let second = txn("Coffee", -450);
        let text = format_transaction_list(&[first.clone(), second], "$", "%Y-%m-%d");

        let dinner = text.find("Dinner out").unwrap();
        let coffee = text.find("Coffee").unwrap();
        assert!(dinner < coffee);
        assert!(text.contains(&first.id.short()));
        let local_date = first.date.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert!(text.contains(&local_date));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let coffee = txn("Coffee", -450);
        let expected = coffee.date.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert_eq!(format_local_date(&coffee, "%Q"), expected);

        let text = format_transaction_list(&[coffee], "$", "%Q");
        assert!(text.contains(&expected));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
    }

    #[test]
    fn test_form_errors_lines() {
        let errors = TransactionFormInput::new("ab", "0", "food").validate().unwrap_err();
        assert_eq!(
            format_form_errors(&errors),
            "  description: Description must be at least 3 characters.\n  amount: Amount cannot be zero.\n"
        );
    }
}
