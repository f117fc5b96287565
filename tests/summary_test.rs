mod common;

use anyhow::Result;
use common::{date, june_expenses, service_with};
use expense_tracker::application::{AppError, ExpenseService};
use expense_tracker::domain::{InvalidTimeUnit, TimeUnit};

#[test]
fn test_category_total_is_case_insensitive() -> Result<()> {
    let service = service_with(&[("10.00", "Food", "2024-06-03")])?;

    assert_eq!(service.total_by_category("food"), 1000);
    assert_eq!(service.total_by_category("FOOD"), 1000);
    assert_eq!(service.total_by_category("Food"), 1000);

    Ok(())
}

#[test]
fn test_category_total_merges_spellings() -> Result<()> {
    let service = june_expenses()?;

    assert_eq!(service.total_by_category("food"), 1980);
    assert_eq!(service.total_by_category("groceries"), 0);

    Ok(())
}

#[test]
fn test_weekly_summary_example() -> Result<()> {
    let service = service_with(&[("5", "a", "2024-06-03"), ("7", "b", "2024-06-05")])?;

    let summary = service.summary_by_time("weekly")?;

    assert_eq!(summary.unit, TimeUnit::Weekly);
    assert_eq!(summary.buckets.len(), 1);
    assert_eq!(summary.buckets[0].bucket, date("2024-06-03"));
    assert_eq!(summary.buckets[0].total, 1200);
    assert_eq!(summary.total, 1200);

    Ok(())
}

#[test]
fn test_monthly_summary_example() -> Result<()> {
    let service = service_with(&[("4", "a", "2024-05-31"), ("9", "b", "2024-06-01")])?;

    let summary = service.summary_by_time("monthly")?;

    let buckets: Vec<_> = summary
        .buckets
        .iter()
        .map(|b| (b.bucket, b.total))
        .collect();
    assert_eq!(
        buckets,
        vec![(date("2024-05-01"), 400), (date("2024-06-01"), 900)]
    );

    Ok(())
}

#[test]
fn test_daily_summary_sorted_by_date() -> Result<()> {
    let service = june_expenses()?;

    let summary = service.summary_by_time("daily")?;

    let keys: Vec<_> = summary.buckets.iter().map(|b| b.bucket).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.first(), Some(&date("2024-05-31")));
    assert_eq!(keys.last(), Some(&date("2024-06-10")));

    Ok(())
}

#[test]
fn test_time_unit_is_case_insensitive() -> Result<()> {
    let service = june_expenses()?;
    assert_eq!(service.summary_by_time("Weekly")?.unit, TimeUnit::Weekly);
    assert_eq!(service.summary_by_time("MONTHLY")?.unit, TimeUnit::Monthly);
    Ok(())
}

#[test]
fn test_bucket_totals_sum_to_ledger_total() -> Result<()> {
    let service = june_expenses()?;

    for unit in ["daily", "weekly", "monthly"] {
        let summary = service.summary_by_time(unit)?;
        let sum: i64 = summary.buckets.iter().map(|b| b.total).sum();
        assert_eq!(sum, service.total(), "unit {unit}");
        assert_eq!(summary.total, service.total(), "unit {unit}");
    }

    Ok(())
}

#[test]
fn test_unknown_time_unit() -> Result<()> {
    let service = june_expenses()?;

    let result = service.summary_by_time("yearly");

    assert_eq!(
        result,
        Err(AppError::InvalidTimeUnit(InvalidTimeUnit("yearly".into())))
    );

    Ok(())
}

#[test]
fn test_summary_of_empty_ledger() -> Result<()> {
    let service = ExpenseService::new();

    let summary = service.summary_by_time("daily")?;

    assert!(summary.buckets.is_empty());
    assert_eq!(summary.total, 0);

    Ok(())
}

#[test]
fn test_spending_report() -> Result<()> {
    let service = june_expenses()?;

    let report = service.spending_report();

    assert_eq!(report.total, 86800);
    assert_eq!(report.categories[0].category, "Rent");
    let food = report
        .categories
        .iter()
        .find(|c| c.category == "Food")
        .unwrap();
    assert_eq!(food.total, 1980);
    assert_eq!(food.count, 2);
    assert_eq!(report.monthly.buckets.len(), 2);

    Ok(())
}
