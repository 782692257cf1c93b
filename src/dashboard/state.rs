//! Dashboard state and its reducer
//!
//! Holds the latest transaction snapshot, whether it is still loading, and
//! which transaction (if any) is being edited.

use crate::models::{Transaction, TransactionId};

/// Edit mode: nothing selected, or a copy of the selected transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Transaction),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Idle => None,
            Self::Editing(txn) => Some(txn),
        }
    }
}

/// Which write a form submission should perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(TransactionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SetLoading(bool),
    /// A full replacement snapshot; also ends loading
    SetTransactions(Vec<Transaction>),
    /// Select by ID from the current snapshot; unknown IDs go idle
    StartEdit(TransactionId),
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub transactions: Vec<Transaction>,
    pub editing: EditSession,
    pub is_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            editing: EditSession::Idle,
            is_loading: true,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SetLoading(loading) => self.is_loading = loading,
            DashboardAction::SetTransactions(transactions) => {
                self.transactions = transactions;
                self.is_loading = false;
            }
            DashboardAction::StartEdit(id) => {
                self.editing = match self.transactions.iter().find(|t| t.id == id) {
                    Some(txn) => EditSession::Editing(txn.clone()),
                    None => EditSession::Idle,
                };
            }
            DashboardAction::CancelEdit => self.editing = EditSession::Idle,
        }
    }

    /// Consuming form of `apply`
    pub fn reduce(mut self, action: DashboardAction) -> Self {
        self.apply(action);
        self
    }

    pub fn submit_target(&self) -> SubmitTarget {
        match &self.editing {
            EditSession::Idle => SubmitTarget::Create,
            EditSession::Editing(txn) => SubmitTarget::Update(txn.id),
        }
    }
}
