//! Transaction service
//!
//! Create, update and delete transactions for the signed-in profile. Each
//! write is persisted, audited and then pushed to snapshot subscribers.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{DateRange, Transaction, TransactionId};
use crate::storage::Storage;

use super::form::TransactionFormData;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction dated `now`
    pub fn create(&self, data: TransactionFormData, now: DateTime<Utc>) -> TrackerResult<Transaction> {
        let txn = Transaction::new(data.description, data.amount, now, data.category);

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;
        self.storage.publish()?;

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full ID or by a unique prefix of its short form
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let needle = identifier.strip_prefix("txn-").unwrap_or(identifier).to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let mut matches = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.as_uuid().simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn)),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Transaction ID '{}' is ambiguous; use more characters",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Transactions inside `range`, newest first
    pub fn list_in_range(&self, range: &DateRange) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.get_by_date_range(range)
    }

    /// Replace description, amount and category; ID and date never change
    pub fn update(&self, id: TransactionId, data: TransactionFormData) -> TrackerResult<Transaction> {
        let before = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let mut txn = before.clone();
        txn.description = data.description;
        txn.amount = data.amount;
        txn.category = data.category;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_update(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &before,
            &txn,
        )?;
        self.storage.publish()?;

        Ok(txn)
    }

    pub fn delete(&self, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;
        self.storage.publish()?;

        Ok(txn)
    }

    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.transactions.count()
    }
}
