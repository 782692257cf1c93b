//! Live transaction snapshots
//!
//! A subscriber registers a date range and a callback. It receives the
//! matching transactions (newest first) right away, and again as a full
//! replacement after every committed write. There are no deltas.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::error::TrackerError;
use crate::models::{DateRange, Transaction};

use super::transactions::TransactionRepository;

/// Callback receiving a full snapshot
pub type SnapshotCallback = Box<dyn FnMut(Vec<Transaction>) + Send>;

/// Handle returned by `subscribe`, used to stop deliveries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    range: DateRange,
    callback: SnapshotCallback,
}

/// Registry of snapshot subscribers for one user's transactions
///
/// Callbacks run on the writing thread while the registry is locked, so a
/// callback must not subscribe or unsubscribe.
pub struct SnapshotFeed {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SnapshotFeed {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register `callback` for `range` and deliver the current snapshot
    pub fn subscribe(
        &self,
        range: DateRange,
        source: &TransactionRepository,
        mut callback: SnapshotCallback,
    ) -> Result<SubscriptionId, TrackerError> {
        callback(source.get_by_date_range(&range)?);

        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()?.push(Subscriber {
            id,
            range,
            callback,
        });
        Ok(id)
    }

    /// Stop deliveries; returns false if the handle was unknown
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, TrackerError> {
        let mut subscribers = self.lock()?;
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        Ok(subscribers.len() != before)
    }

    /// Re-deliver every subscriber's range after a write
    pub fn publish(&self, source: &TransactionRepository) -> Result<(), TrackerError> {
        let mut subscribers = self.lock()?;
        for subscriber in subscribers.iter_mut() {
            let snapshot = source.get_by_date_range(&subscriber.range)?;
            (subscriber.callback)(snapshot);
        }
        Ok(())
    }

    pub fn subscriber_count(&self) -> Result<usize, TrackerError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Subscriber>>, TrackerError> {
        self.subscribers
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to lock snapshot feed: {}", e)))
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new()
    }
}
