//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: form validation and the
//! write paths for transactions and budgets.

pub mod budget;
pub mod form;
pub mod transaction;

pub use budget::BudgetService;
pub use form::{FormErrors, TransactionFormData, TransactionFormInput};
pub use transaction::TransactionService;
