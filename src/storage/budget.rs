//! Budget repository for JSON storage
//!
//! Stores one budget document per calendar month in budgets.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{BudgetDocument, BudgetMonth};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<BudgetDocument>,
}

/// Repository for monthly budget documents
pub struct BudgetRepository {
    path: PathBuf,
    documents: RwLock<BTreeMap<BudgetMonth, BudgetDocument>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budget documents from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut documents = self
            .documents
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        documents.clear();
        for doc in file_data.budgets {
            documents.insert(doc.month, doc);
        }

        Ok(())
    }

    /// Save budget documents to disk, oldest month first
    pub fn save(&self) -> Result<(), TrackerError> {
        let file_data = BudgetData {
            budgets: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// The document for `month`, if one was ever saved
    pub fn get_for_month(&self, month: BudgetMonth) -> Result<Option<BudgetDocument>, TrackerError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.get(&month).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<BudgetDocument>, TrackerError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.values().cloned().collect())
    }

    /// Insert or replace the document for its month
    pub fn upsert(&self, document: BudgetDocument) -> Result<(), TrackerError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        documents.insert(document.month, document);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(documents.len())
    }
}
