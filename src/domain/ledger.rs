use chrono::NaiveDate;
use thiserror::Error;

use super::{Cents, Expense, sum_cents};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No expense at position {index} (ledger holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Adding {amount_cents} cents would push the ledger total past its limit")]
    TotalOverflow { amount_cents: Cents },
}

/// The ordered list of expenses recorded in this session.
/// Position in the list is the expense's display index (0-based here, 1-based on screen).
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense and return a reference to the stored record.
    ///
    /// Fails without recording anything if the ledger total would no longer fit
    /// in [`Cents`], so every sum over the stored records stays representable.
    ///
    /// # Panics
    ///
    /// Panics if `amount_cents` is negative.
    pub fn add(
        &mut self,
        amount_cents: Cents,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<&Expense, LedgerError> {
        if self.total().checked_add(amount_cents).is_none() {
            return Err(LedgerError::TotalOverflow { amount_cents });
        }
        self.expenses.push(Expense::new(amount_cents, category, date));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Remove the expense at `index`. Out-of-range indices leave the ledger untouched.
    pub fn delete(&mut self, index: usize) -> Result<Expense, LedgerError> {
        if index >= self.expenses.len() {
            return Err(LedgerError::OutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> Cents {
        sum_cents(self.expenses.iter().map(|e| e.amount_cents))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
