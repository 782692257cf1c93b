//! Storage layer for the expense tracker
//!
//! Each user profile gets its own directory holding transactions.json and
//! budgets.json. Writes are atomic; every committed write is also appended
//! to the shared audit log and pushed to snapshot subscribers.

pub mod budget;
pub mod feed;
pub mod file_io;
pub mod transactions;

pub use budget::BudgetRepository;
pub use feed::{SnapshotCallback, SnapshotFeed, SubscriptionId};
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::{DateRange, UserId};

/// Storage for one user's data plus the shared audit log
pub struct Storage {
    paths: TrackerPaths,
    user: UserId,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub feed: SnapshotFeed,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage for `user`, creating its directory if needed
    pub fn new(paths: TrackerPaths, user: UserId) -> TrackerResult<Self> {
        paths.ensure_directories(Some(&user))?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file(&user)),
            budgets: BudgetRepository::new(paths.budgets_file(&user)),
            feed: SnapshotFeed::new(),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            user,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Profile this storage belongs to
    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> TrackerResult<()> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> TrackerResult<()> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Subscribe to transaction snapshots for `range`
    pub fn subscribe(
        &self,
        range: DateRange,
        callback: SnapshotCallback,
    ) -> TrackerResult<SubscriptionId> {
        self.feed.subscribe(range, &self.transactions, callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> TrackerResult<bool> {
        self.feed.unsubscribe(id)
    }

    /// Push fresh snapshots to every subscriber
    pub fn publish(&self) -> TrackerResult<()> {
        self.feed.publish(&self.transactions)
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        let entry = AuditEntry::create(&self.user, entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Log an update; the diff is computed from the JSON forms
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> TrackerResult<()> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(
            &self.user,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        );
        self.audit.log(&entry)
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        let entry = AuditEntry::delete(&self.user, entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Category, Money, Transaction};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, UserId::parse("alice").unwrap()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creates_user_directory() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("users").join("alice").exists());
        assert_eq!(storage.user().as_str(), "alice");
    }

    #[test]
    fn test_users_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let alice = Storage::new(paths.clone(), UserId::parse("alice").unwrap()).unwrap();
        alice
            .transactions
            .upsert(Transaction::new("Rent", Money::from_dollars(-900), Utc::now(), Category::Housing))
            .unwrap();
        alice.save_all().unwrap();

        let mut bob = Storage::new(paths, UserId::parse("bob").unwrap()).unwrap();
        bob.load_all().unwrap();
        assert_eq!(bob.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let before = Transaction::new("Rent", Money::from_dollars(-900), Utc::now(), Category::Housing);
        let mut after = before.clone();
        after.amount = Money::from_dollars(-950);

        storage
            .log_update(EntityType::Transaction, before.id.to_string(), None, &before, &after)
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].diff_summary.as_deref(), Some("amount: -90000 -> -95000"));
    }
}
