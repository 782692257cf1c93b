//! Reports module for the expense tracker
//!
//! Pure, order-independent folds over a transaction snapshot: the balance,
//! expense totals per category, and budget progress. Nothing here is cached;
//! every snapshot is recomputed from scratch.

pub mod balance;
pub mod budget_progress;
pub mod spending;

pub use balance::{Balance, BalanceStyle};
pub use budget_progress::{BudgetProgress, BudgetProgressRow, Tier};
pub use spending::CategorySpend;
