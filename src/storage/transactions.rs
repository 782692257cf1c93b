//! Transaction repository for JSON storage
//!
//! Manages loading and saving a user's transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::TrackerError;
use crate::models::{DateRange, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<TransactionId, Transaction>>, TrackerError> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<TransactionId, Transaction>>, TrackerError> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), TrackerError> {
        let file_data = TransactionData {
            transactions: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TrackerError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, TrackerError> {
        let mut transactions: Vec<_> = self.read()?.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Get transactions whose date falls inside `range` (inclusive), newest first
    pub fn get_by_date_range(&self, range: &DateRange) -> Result<Vec<Transaction>, TrackerError> {
        let mut transactions: Vec<_> = self
            .read()?
            .values()
            .filter(|t| range.contains(t.date))
            .cloned()
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Insert or replace a transaction by ID
    pub fn upsert(&self, txn: Transaction) -> Result<(), TrackerError> {
        self.write()?.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, TrackerError> {
        Ok(self.write()?.remove(&id))
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.len())
    }
}

// Ties on date fall back to ID so the order is stable across runs
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DatePreset, Money};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn_on(y: i32, m: u32, d: u32, cents: i64) -> Transaction {
        Transaction::new(
            "Groceries run",
            Money::from_cents(cents),
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            Category::Groceries,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = txn_on(2025, 1, 15, -5000);
        let id = txn.id;

        repo.upsert(txn).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), -5000);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let (_temp_dir, repo) = create_test_repo();
        let mut txn = txn_on(2025, 1, 15, -5000);
        repo.upsert(txn.clone()).unwrap();

        txn.description = "Weekly shop".into();
        repo.upsert(txn.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(txn.id).unwrap().unwrap().description, "Weekly shop");
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(txn_on(2025, 1, 1, -100)).unwrap();
        repo.upsert(txn_on(2025, 3, 1, -300)).unwrap();
        repo.upsert(txn_on(2025, 2, 1, -200)).unwrap();

        let amounts: Vec<_> = repo.get_all().unwrap().iter().map(|t| t.amount.cents()).collect();
        assert_eq!(amounts, vec![-300, -200, -100]);
    }

    #[test]
    fn test_get_by_date_range() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(txn_on(2025, 4, 30, -100)).unwrap();
        repo.upsert(txn_on(2025, 5, 1, -200)).unwrap();
        repo.upsert(txn_on(2025, 5, 31, -300)).unwrap();
        repo.upsert(txn_on(2025, 6, 1, -400)).unwrap();

        let now = Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap();
        let may = DatePreset::ThisMonth.range(&now);
        let in_may = repo.get_by_date_range(&may).unwrap();
        let amounts: Vec<_> = in_may.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(amounts, vec![-300, -200]);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let txn = txn_on(2025, 1, 15, -5000);
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.delete(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let txn = txn_on(2025, 1, 15, -5000);
        let id = txn.id;
        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert_eq!(reloaded.get(id).unwrap().unwrap().category, Category::Groceries);
    }
}
