//! Balance Report
//!
//! Sum of signed amounts over every transaction in scope.

use crate::models::{Money, Transaction};

/// How the balance is styled when shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStyle {
    /// Zero or positive total
    Income,
    /// Negative total
    Expense,
}

/// Total of all signed transaction amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    pub total: Money,
}

impl Balance {
    /// Sum the amounts of `transactions`; an empty list yields zero
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            total: transactions.iter().map(|t| t.amount).sum(),
        }
    }

    pub fn style(&self) -> BalanceStyle {
        if self.total.is_negative() {
            BalanceStyle::Expense
        } else {
            BalanceStyle::Income
        }
    }
}
