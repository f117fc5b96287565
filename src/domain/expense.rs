use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cents;

/// A single recorded expense.
/// Expenses are immutable - a wrong entry is deleted and recorded again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    /// Free-text label, compared case-insensitively
    pub category: String,
    /// Day the money was spent
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount_cents: Cents, category: impl Into<String>, date: NaiveDate) -> Self {
        assert!(amount_cents >= 0, "Expense amount must not be negative");
        Self {
            amount_cents,
            category: category.into(),
            date,
        }
    }

    /// Returns true if this expense is filed under `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
