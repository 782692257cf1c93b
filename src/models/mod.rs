//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: transactions,
//! the fixed category vocabulary, monthly budgets, and date ranges.

pub mod budget;
pub mod category;
pub mod date_range;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{BudgetDocument, BudgetMap, BudgetMonth};
pub use category::{Category, UnknownCategory};
pub use date_range::{DatePreset, DateRange};
pub use ids::{BudgetId, TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
