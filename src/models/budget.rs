//! Monthly budget model
//!
//! A budget document holds one spending limit per category for a calendar
//! month. An absent entry means no budget is set for that category.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;

/// Calendar month a budget applies to, serialized as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `now`, in the calendar of `now`'s time zone
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// The current month in UTC, the calendar budget documents are keyed by
    pub fn current() -> Self {
        Self::containing(&Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BudgetMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}'. Use YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for BudgetMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BudgetMonth> for String {
    fn from(month: BudgetMonth) -> Self {
        month.to_string()
    }
}

/// Partial mapping from category to a monthly spending limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetMap(BTreeMap<Category, Money>);

impl BudgetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<Money> {
        self.0.get(&category).copied()
    }

    pub fn set(&mut self, category: Category, limit: Money) {
        self.0.insert(category, limit);
    }

    pub fn remove(&mut self, category: Category) -> Option<Money> {
        self.0.remove(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }

    /// Categories with a strictly positive limit, in category order
    pub fn positive_limits(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.iter().filter(|(_, limit)| limit.is_positive())
    }

    /// Form of the map that gets saved: every category present, with
    /// non-positive or missing limits stored as zero
    pub fn normalized(&self) -> Self {
        Self(
            Category::ALL
                .iter()
                .map(|&c| {
                    let limit = self.get(c).filter(|m| m.is_positive()).unwrap_or_default();
                    (c, limit)
                })
                .collect(),
        )
    }
}

impl FromIterator<(Category, Money)> for BudgetMap {
    fn from_iter<I: IntoIterator<Item = (Category, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Stored budget for one user and one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDocument {
    pub id: BudgetId,
    pub month: BudgetMonth,
    pub budgets: BudgetMap,
    pub updated_at: DateTime<Utc>,
}

impl BudgetDocument {
    pub fn new(month: BudgetMonth, budgets: BudgetMap) -> Self {
        Self {
            id: BudgetId::new(),
            month,
            budgets,
            updated_at: Utc::now(),
        }
    }

    pub fn set_budgets(&mut self, budgets: BudgetMap) {
        self.budgets = budgets;
        self.updated_at = Utc::now();
    }
}
