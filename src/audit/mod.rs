//! Audit logging for the expense tracker
//!
//! Every committed transaction or budget write is appended to a
//! line-delimited JSON log (`audit.log` in the data directory) with the
//! record's state before and after, plus a short diff for updates.
//! `expense log` prints the tail of this file.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
