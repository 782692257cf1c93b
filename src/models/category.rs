//! Spending category vocabulary
//!
//! The category set is fixed and closed. Category-keyed maps iterate in
//! declaration order because `Category` derives `Ord`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Groceries,
    Transport,
    Housing,
    Entertainment,
    Other,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Groceries,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Other,
    ];

    /// Stored/serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Name with the first letter capitalized, for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Comma-separated list of every valid name
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for names outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category '{0}'. Expected one of: {}", Category::names())]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
