//! Budget service
//!
//! Reads and writes the per-month budget document of the signed-in
//! profile. Saved maps always hold every category, with non-positive
//! limits stored as zero.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetDocument, BudgetMap, BudgetMonth, Category, Money};
use crate::services::form::TOO_LARGE_MESSAGE;
use crate::storage::Storage;

/// Service for monthly budgets
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Budget map for `month`; empty when none was ever saved
    pub fn load_for_month(&self, month: BudgetMonth) -> TrackerResult<BudgetMap> {
        Ok(self
            .storage
            .budgets
            .get_for_month(month)?
            .map(|doc| doc.budgets)
            .unwrap_or_default())
    }

    /// Replace the whole budget map for `month`
    pub fn save(&self, month: BudgetMonth, budgets: &BudgetMap) -> TrackerResult<BudgetDocument> {
        let normalized = budgets.normalized();

        match self.storage.budgets.get_for_month(month)? {
            Some(before) => {
                let mut doc = before.clone();
                doc.set_budgets(normalized);

                self.storage.budgets.upsert(doc.clone())?;
                self.storage.budgets.save()?;
                self.storage.log_update(
                    EntityType::Budget,
                    doc.id.to_string(),
                    Some(month.to_string()),
                    &before,
                    &doc,
                )?;
                Ok(doc)
            }
            None => {
                let doc = BudgetDocument::new(month, normalized);

                self.storage.budgets.upsert(doc.clone())?;
                self.storage.budgets.save()?;
                self.storage.log_create(
                    EntityType::Budget,
                    doc.id.to_string(),
                    Some(month.to_string()),
                    &doc,
                )?;
                Ok(doc)
            }
        }
    }

    /// Change some limits for `month`, keeping the others
    pub fn set_limits(
        &self,
        month: BudgetMonth,
        updates: &[(Category, Money)],
    ) -> TrackerResult<BudgetDocument> {
        let mut budgets = self.load_for_month(month)?;
        for &(category, limit) in updates {
            budgets.set(category, limit);
        }
        self.save(month, &budgets)
    }
}

/// Parse a `category=amount` assignment such as `food=250`
pub fn parse_assignment(raw: &str) -> TrackerResult<(Category, Money)> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| TrackerError::Validation(format!("Expected CATEGORY=AMOUNT, got '{}'", raw)))?;

    let category = name
        .trim()
        .parse::<Category>()
        .map_err(|e| TrackerError::Validation(e.to_string()))?;

    let limit = Money::parse(amount)
        .map_err(|e| TrackerError::Validation(format!("Invalid budget for {}: {}", category, e)))?;
    if !limit.is_within_input_limit() {
        return Err(TrackerError::Validation(format!(
            "Invalid budget for {}: {}",
            category, TOO_LARGE_MESSAGE
        )));
    }

    Ok((category, limit))
}
