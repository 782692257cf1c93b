//! Transaction model
//!
//! A single recorded money movement: negative amounts are expenses,
//! positive amounts are income.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier; never changes across edits
    pub id: TransactionId,

    pub description: String,

    /// Signed amount (positive for income, negative for expense)
    pub amount: Money,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    pub category: Category,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date,
            category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_txn(cents: i64) -> Transaction {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        Transaction::new("Coffee", Money::from_cents(cents), date, Category::Food)
    }

    #[test]
    fn test_income_and_expense() {
        assert!(make_txn(10000).is_income());
        assert!(make_txn(-450).is_expense());
        let zero = make_txn(0);
        assert!(!zero.is_income() && !zero.is_expense());
    }

    #[test]
    fn test_display() {
        assert_eq!(make_txn(-450).to_string(), "2025-01-15 Coffee -$4.50 (food)");
    }

    #[test]
    fn test_serde_shape() {
        let txn = make_txn(-450);
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["amount"], -450);
        assert_eq!(value["category"], "food");
        assert_eq!(value["date"], "2025-01-15T12:00:00Z");

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, txn);
    }
}
