//! Expense Tracker - terminal expense tracking with monthly budgets
//!
//! Records income and expense transactions per local user profile, derives
//! a balance, per-category spending and budget progress from them, and can
//! ask a generative model for a short spending analysis.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and settings
//! - `error`: error types
//! - `models`: transactions, categories, money, budgets, date ranges
//! - `reports`: the aggregation engine (balance, category spend, budget progress)
//! - `storage`: per-user JSON storage and live transaction snapshots
//! - `audit`: append-only audit log
//! - `services`: form validation and write paths
//! - `dashboard`: edit session reducer and live dashboard view
//! - `summary`: spending analysis prompt and summarizer client
//! - `display`: terminal formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::{Category, Money, Transaction};
//! use expense_tracker::reports::{Balance, BudgetProgress, CategorySpend};
//!
//! let spend = CategorySpend::from_transactions(&transactions);
//! let progress = BudgetProgress::generate(&spend, &budgets);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod summary;

pub use error::{TrackerError, TrackerResult};
