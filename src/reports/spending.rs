//! Spending Report
//!
//! Expense totals per category. Only expense transactions count, and a
//! category with no expenses has no entry at all (never a zero entry).

use std::collections::BTreeMap;

use crate::models::{Category, Money, Transaction};

/// Absolute expense totals keyed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySpend {
    totals: BTreeMap<Category, Money>,
}

impl CategorySpend {
    /// Accumulate `abs(amount)` of every negative-amount transaction
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *totals.entry(txn.category).or_default() += txn.amount.abs();
        }
        Self { totals }
    }

    /// Spend for a category, `None` when it had no expenses
    pub fn get(&self, category: Category) -> Option<Money> {
        self.totals.get(&category).copied()
    }

    /// Spend for a category, zero when it had no expenses
    pub fn spent(&self, category: Category) -> Money {
        self.get(category).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.totals.iter().map(|(c, m)| (*c, *m))
    }

    /// Total expenses across all categories
    pub fn total(&self) -> Money {
        self.totals.values().copied().sum()
    }

    /// Share of total expenses for a category, as a percentage
    pub fn share(&self, category: Category) -> f64 {
        let total = self.total();
        if total.is_zero() {
            return 0.0;
        }
        self.spent(category).cents() as f64 * 100.0 / total.cents() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn txn(cents: i64, category: Category) -> Transaction {
        Transaction::new("Test entry", Money::from_cents(cents), Utc::now(), category)
    }

    #[test]
    fn test_empty_list_gives_empty_map() {
        let spend = CategorySpend::from_transactions(&[]);
        assert!(spend.is_empty());
        assert_eq!(spend.total(), Money::zero());
    }

    #[test]
    fn test_only_expenses_are_counted() {
        let spend = CategorySpend::from_transactions(&[
            txn(-5000, Category::Food),
            txn(-2000, Category::Food),
            txn(10000, Category::Other),
        ]);
        assert_eq!(spend.get(Category::Food), Some(Money::from_dollars(70)));
        assert_eq!(spend.get(Category::Other), None);
        assert_eq!(spend.len(), 1);
    }

    #[test]
    fn test_income_only_category_is_absent() {
        let spend = CategorySpend::from_transactions(&[txn(2500, Category::Housing)]);
        assert!(spend.get(Category::Housing).is_none());
        assert_eq!(spend.spent(Category::Housing), Money::zero());
    }

    #[test]
    fn test_share_of_total() {
        let spend = CategorySpend::from_transactions(&[
            txn(-7500, Category::Groceries),
            txn(-2500, Category::Transport),
        ]);
        assert_eq!(spend.total(), Money::from_dollars(100));
        assert!((spend.share(Category::Groceries) - 75.0).abs() < 1e-9);
        assert_eq!(spend.share(Category::Food), 0.0);
    }

    #[test]
    fn test_huge_expenses_saturate() {
        let spend = CategorySpend::from_transactions(&[
            txn(i64::MIN, Category::Food),
            txn(-(i64::MAX / 2), Category::Food),
            txn(-(i64::MAX / 2), Category::Other),
        ]);
        assert_eq!(spend.spent(Category::Food).cents(), i64::MAX);
        assert_eq!(spend.total().cents(), i64::MAX);
        assert!(spend.share(Category::Food) > 0.0);
    }

    #[test]
    fn test_iterates_in_category_order() {
        let spend = CategorySpend::from_transactions(&[
            txn(-100, Category::Other),
            txn(-100, Category::Food),
            txn(-100, Category::Housing),
        ]);
        let order: Vec<_> = spend.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::Food, Category::Housing, Category::Other]);
    }
}
