//! Budget Progress Report
//!
//! Compares category spend against the month's budget limits. Only
//! categories with a strictly positive limit appear, so the percentage
//! division never sees a zero denominator.

use std::fmt;

use crate::models::{BudgetMap, Category, Money};

use super::spending::CategorySpend;

/// Percentage at which a row turns into a warning (exclusive)
pub const WARNING_THRESHOLD: f64 = 70.0;
/// Percentage at which a row turns into danger (exclusive)
pub const DANGER_THRESHOLD: f64 = 90.0;

/// Severity band of a budget row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Warning,
    Danger,
}

impl Tier {
    /// `> 90` is danger, `> 70` is warning, anything else is normal
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > DANGER_THRESHOLD {
            Self::Danger
        } else if percentage > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Progress of one budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgressRow {
    pub category: Category,
    /// Raw spend, not capped
    pub spent: Money,
    pub limit: Money,
    /// `min(100, 100 * spent / limit)`
    pub percentage: f64,
    pub tier: Tier,
}

/// Progress rows for every category with a positive budget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetProgress {
    pub rows: Vec<BudgetProgressRow>,
}

impl BudgetProgress {
    pub fn generate(spend: &CategorySpend, budgets: &BudgetMap) -> Self {
        let rows = budgets
            .positive_limits()
            .map(|(category, limit)| {
                let spent = spend.spent(category);
                let percentage = percentage_of(spent, limit);
                BudgetProgressRow {
                    category,
                    spent,
                    limit,
                    percentage,
                    tier: Tier::from_percentage(percentage),
                }
            })
            .collect();
        Self { rows }
    }

    /// True when no category has a positive budget; callers show a
    /// dedicated "no budgets" state instead of an empty list
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<&BudgetProgressRow> {
        self.rows.iter().find(|r| r.category == category)
    }
}

/// `min(100, 100 * spent / limit)` for a positive `limit`
pub fn percentage_of(spent: Money, limit: Money) -> f64 {
    let raw = spent.cents() as f64 * 100.0 / limit.cents() as f64;
    raw.min(100.0)
}
