//! Live dashboard session
//!
//! Subscribes to the user's transactions for a date range and keeps the
//! latest snapshot in a `DashboardState`. Derived figures are recomputed
//! from that snapshot on every `view()` call.

pub mod state;

pub use state::{DashboardAction, DashboardState, EditSession, SubmitTarget};

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetMap, DateRange, Transaction, TransactionId};
use crate::reports::{Balance, BudgetProgress, CategorySpend};
use crate::services::{TransactionFormInput, TransactionService};
use crate::storage::{Storage, SubscriptionId};

/// Everything derived from one snapshot and the month's budgets
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance: Balance,
    pub spending: CategorySpend,
    pub progress: BudgetProgress,
}

impl DashboardView {
    pub fn compute(transactions: &[Transaction], budgets: &BudgetMap) -> Self {
        let spending = CategorySpend::from_transactions(transactions);
        Self {
            balance: Balance::from_transactions(transactions),
            progress: BudgetProgress::generate(&spending, budgets),
            spending,
        }
    }
}

/// A dashboard bound to one user's storage
pub struct DashboardSession<'a> {
    storage: &'a Storage,
    range: DateRange,
    state: Arc<Mutex<DashboardState>>,
    subscription: Option<SubscriptionId>,
}

impl<'a> DashboardSession<'a> {
    /// Start a session and receive the first snapshot for `range`
    pub fn open(storage: &'a Storage, range: DateRange) -> TrackerResult<Self> {
        let mut session = Self {
            storage,
            range,
            state: Arc::new(Mutex::new(DashboardState::new())),
            subscription: None,
        };
        session.subscribe()?;
        Ok(session)
    }

    fn subscribe(&mut self) -> TrackerResult<()> {
        self.dispatch(DashboardAction::SetLoading(true))?;

        let shared = Arc::clone(&self.state);
        let id = self.storage.subscribe(
            self.range,
            Box::new(move |snapshot| {
                if let Ok(mut state) = shared.lock() {
                    state.apply(DashboardAction::SetTransactions(snapshot));
                }
            }),
        )?;
        self.subscription = Some(id);
        Ok(())
    }

    fn lock(&self) -> TrackerResult<MutexGuard<'_, DashboardState>> {
        self.state
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to lock dashboard state: {}", e)))
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Switch to another date range and resubscribe
    pub fn set_range(&mut self, range: DateRange) -> TrackerResult<()> {
        if let Some(id) = self.subscription.take() {
            self.storage.unsubscribe(id)?;
        }
        self.range = range;
        self.subscribe()
    }

    pub fn dispatch(&self, action: DashboardAction) -> TrackerResult<()> {
        self.lock()?.apply(action);
        Ok(())
    }

    /// Copy of the current state
    pub fn state(&self) -> TrackerResult<DashboardState> {
        Ok(self.lock()?.clone())
    }

    pub fn transactions(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self.lock()?.transactions.clone())
    }

    pub fn view(&self, budgets: &BudgetMap) -> TrackerResult<DashboardView> {
        let state = self.lock()?;
        Ok(DashboardView::compute(&state.transactions, budgets))
    }

    pub fn start_edit(&self, id: TransactionId) -> TrackerResult<EditSession> {
        let mut state = self.lock()?;
        state.apply(DashboardAction::StartEdit(id));
        Ok(state.editing.clone())
    }

    pub fn cancel_edit(&self) -> TrackerResult<()> {
        self.dispatch(DashboardAction::CancelEdit)
    }

    /// Validate the form and create or update depending on the edit session
    ///
    /// A successful update returns the session to idle. So does an update
    /// whose transaction has been deleted meanwhile; the `NotFound` error is
    /// still returned.
    pub fn submit(&self, input: &TransactionFormInput, now: DateTime<Utc>) -> TrackerResult<Transaction> {
        let data = input.validate()?;
        let target = self.lock()?.submit_target();
        let service = TransactionService::new(self.storage);

        match target {
            SubmitTarget::Create => service.create(data, now),
            SubmitTarget::Update(id) => match service.update(id, data) {
                Ok(txn) => {
                    self.cancel_edit()?;
                    Ok(txn)
                }
                Err(e) if e.is_not_found() => {
                    self.cancel_edit()?;
                    Err(e)
                }
                Err(e) => Err(e),
            },
        }
    }

    pub fn delete(&self, id: TransactionId) -> TrackerResult<Transaction> {
        TransactionService::new(self.storage).delete(id)
    }
}

impl Drop for DashboardSession<'_> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            let _ = self.storage.unsubscribe(id);
        }
    }
}
