use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, Expense, TimeUnit, sum_cents};

/// Spending grouped into time buckets, oldest bucket first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSummary {
    pub unit: TimeUnit,
    pub buckets: Vec<BucketTotal>,
    /// Sum over all buckets; equals the ledger total for the same records.
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotal {
    /// Day, week start (Monday) or month start, depending on the unit
    pub bucket: NaiveDate,
    pub total: Cents,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Cents,
    pub count: usize,
}

/// Sum of the expenses filed under `category`, compared case-insensitively.
pub fn total_by_category(expenses: &[Expense], category: &str) -> Cents {
    sum_cents(
        expenses
            .iter()
            .filter(|e| e.in_category(category))
            .map(|e| e.amount_cents),
    )
}

/// Group expenses by the bucket their date falls in and sum each bucket.
pub fn summary_by_time(expenses: &[Expense], unit: TimeUnit) -> TimeSummary {
    let mut buckets: BTreeMap<NaiveDate, (Cents, usize)> = BTreeMap::new();

    for expense in expenses {
        let entry = buckets
            .entry(unit.bucket_key(expense.date))
            .or_insert((0, 0));
        entry.0 = entry.0.saturating_add(expense.amount_cents);
        entry.1 += 1;
    }

    let buckets: Vec<BucketTotal> = buckets
        .into_iter()
        .map(|(bucket, (total, count))| BucketTotal {
            bucket,
            total,
            count,
        })
        .collect();
    let total = sum_cents(buckets.iter().map(|b| b.total));

    TimeSummary {
        unit,
        buckets,
        total,
    }
}

/// Totals for every category, largest first.
/// Categories differing only in case are merged under the first spelling seen.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| expense.in_category(&t.category)) {
            Some(existing) => {
                existing.total = existing.total.saturating_add(expense.amount_cents);
                existing.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount_cents,
                count: 1,
            }),
        }
    }

    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}
