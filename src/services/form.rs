//! Transaction form validation
//!
//! Turns raw, user-typed text into a checked `TransactionFormData`.
//! Every field is checked and all failures are reported together.

use std::fmt;

use crate::models::{Category, Money, Transaction};

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Shown for amounts beyond `Money::MAX_INPUT` in either direction
pub const TOO_LARGE_MESSAGE: &str = "Amount cannot exceed 1,000,000,000.00.";

/// Raw form text as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFormInput {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl TransactionFormInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Prefill for editing an existing transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self::new(
            txn.description.clone(),
            txn.amount.to_decimal_string(),
            txn.category.as_str(),
        )
    }

    /// Check every field
    pub fn validate(&self) -> Result<TransactionFormData, FormErrors> {
        let mut errors = FormErrors::default();

        if self.description.chars().count() < MIN_DESCRIPTION_LEN {
            errors.description = Some("Description must be at least 3 characters.".into());
        }

        // Text without a leading number counts as zero, which is then rejected
        let amount = Money::parse_leading(&self.amount);
        if amount.is_zero() {
            errors.amount = Some("Amount cannot be zero.".into());
        } else if !amount.is_within_input_limit() {
            errors.amount = Some(TOO_LARGE_MESSAGE.into());
        }

        let category = self.category.parse::<Category>().ok();
        if category.is_none() {
            errors.category = Some(format!(
                "Invalid category. Expected one of: {}.",
                Category::names()
            ));
        }

        match category {
            Some(category) if errors.is_empty() => Ok(TransactionFormData {
                description: self.description.clone(),
                amount,
                category,
            }),
            _ => Err(errors),
        }
    }
}

impl Default for TransactionFormInput {
    /// Blank form for a new transaction
    fn default() -> Self {
        Self::new("", "0", Category::Other.as_str())
    }
}

/// Validated form values, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFormData {
    pub description: String,
    pub amount: Money,
    pub category: Category,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }

    /// `(field, message)` pairs in form order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("description", &self.description),
            ("amount", &self.amount),
            ("category", &self.category),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
        .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .into_iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_valid_input() {
        let data = TransactionFormInput::new("Coffee", "-4.50", "food")
            .validate()
            .unwrap();
        assert_eq!(data.description, "Coffee");
        assert_eq!(data.amount, Money::from_cents(-450));
        assert_eq!(data.category, Category::Food);
    }

    #[test]
    fn test_short_description() {
        let errors = TransactionFormInput::new("ab", "5", "food").validate().unwrap_err();
        assert_eq!(
            errors.description.as_deref(),
            Some("Description must be at least 3 characters.")
        );
        assert!(errors.amount.is_none());
        assert!(errors.category.is_none());
    }

    #[test]
    fn test_zero_and_non_numeric_amounts_rejected() {
        for raw in ["0", "0.00", "abc", "", "$5"] {
            let errors = TransactionFormInput::new("Coffee", raw, "food")
                .validate()
                .unwrap_err();
            assert_eq!(errors.amount.as_deref(), Some("Amount cannot be zero."), "{raw}");
        }
    }

    #[test]
    fn test_huge_amount_rejected() {
        for raw in ["92233720368547758", "-1000000000.01"] {
            let errors = TransactionFormInput::new("Lottery", raw, "other")
                .validate()
                .unwrap_err();
            assert_eq!(errors.amount.as_deref(), Some(TOO_LARGE_MESSAGE), "{raw}");
        }

        let data = TransactionFormInput::new("Lottery", "1000000000", "other")
            .validate()
            .unwrap();
        assert_eq!(data.amount, Money::MAX_INPUT);
    }

    #[test]
    fn test_amount_uses_leading_number() {
        let data = TransactionFormInput::new("Lunch", "12abc", "food")
            .validate()
            .unwrap();
        assert_eq!(data.amount, Money::from_dollars(12));
    }

    #[test]
    fn test_unknown_category() {
        let errors = TransactionFormInput::new("Coffee", "5", "travel")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.category.as_deref(),
            Some("Invalid category. Expected one of: food, groceries, transport, housing, entertainment, other.")
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = TransactionFormInput::new("", "0", "nope").validate().unwrap_err();
        assert_eq!(errors.fields().len(), 3);
        assert!(errors.to_string().starts_with("description: "));
        assert!(errors.to_string().contains("; amount: Amount cannot be zero.; category: "));
    }

    #[test]
    fn test_blank_form_is_invalid() {
        let errors = TransactionFormInput::default().validate().unwrap_err();
        assert!(errors.description.is_some());
        assert!(errors.amount.is_some());
        assert!(errors.category.is_none());
    }

    #[test]
    fn test_prefill_from_transaction_validates_back() {
        let txn = Transaction::new("Rent", Money::from_cents(-120050), Utc::now(), Category::Housing);
        let input = TransactionFormInput::from_transaction(&txn);
        assert_eq!(input.amount, "-1200.50");
        assert_eq!(input.category, "housing");

        let data = input.validate().unwrap();
        assert_eq!(data.amount, txn.amount);
    }
}
