use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::domain::{
    Cents, Expense, Ledger, TimeSummary, TimeUnit, category_totals, parse_cents, summary_by_time,
    total_by_category,
};

use super::{AppError, SpendingReport};

/// Application service providing the expense operations.
/// This is the primary interface for any client (the interactive menu, tests, exporters).
#[derive(Debug, Default)]
pub struct ExpenseService {
    ledger: Ledger,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service around an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record an expense from user-supplied text.
    /// A blank `date` means today (local time).
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        date: &str,
    ) -> Result<&Expense, AppError> {
        let amount_cents = parse_cents(amount).inspect_err(|err| {
            warn!(input = amount, %err, "rejected expense amount");
        })?;

        let date = match date.trim() {
            "" => Local::now().date_naive(),
            text => parse_date(text).inspect_err(|_| {
                warn!(input = text, "rejected expense date");
            })?,
        };

        debug!(amount_cents, category, %date, "recording expense");
        let expense = self
            .ledger
            .add(amount_cents, category, date)
            .inspect_err(|err| {
                warn!(%err, "expense rejected");
            })?;
        Ok(expense)
    }

    /// Delete the expense at 0-based `index`.
    pub fn delete_expense(&mut self, index: usize) -> Result<Expense, AppError> {
        let removed = self.ledger.delete(index).inspect_err(|err| {
            warn!(%err, "delete rejected");
        })?;
        debug!(index, remaining = self.ledger.len(), "deleted expense");
        Ok(removed)
    }

    pub fn list_expenses(&self) -> &[Expense] {
        self.ledger.list()
    }

    pub fn total(&self) -> Cents {
        self.ledger.total()
    }

    // ========================
    // Summaries
    // ========================

    pub fn total_by_category(&self, category: &str) -> Cents {
        total_by_category(self.ledger.list(), category)
    }

    /// Bucket all expenses by a time unit given as text ("daily", "weekly", "monthly").
    pub fn summary_by_time(&self, unit: &str) -> Result<TimeSummary, AppError> {
        let unit: TimeUnit = unit.parse()?;
        let summary = summary_by_time(self.ledger.list(), unit);
        debug!(%unit, buckets = summary.buckets.len(), "computed time summary");
        Ok(summary)
    }

    pub fn spending_report(&self) -> SpendingReport {
        let expenses = self.ledger.list();
        SpendingReport {
            total: self.ledger.total(),
            categories: category_totals(expenses),
            monthly: summary_by_time(expenses, TimeUnit::Monthly),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(input.to_string()))
}
