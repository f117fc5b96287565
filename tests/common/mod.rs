// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use expense_tracker::application::ExpenseService;
use expense_tracker::cli::Session;

/// Helper to parse a date string into NaiveDate
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Build a service holding the given (amount, category, date) expenses, in order.
pub fn service_with(expenses: &[(&str, &str, &str)]) -> Result<ExpenseService> {
    let mut service = ExpenseService::new();
    for (amount, category, date) in expenses {
        service.add_expense(amount, category, date)?;
    }
    Ok(service)
}

/// Test fixture: a small June 2024 ledger
pub fn june_expenses() -> Result<ExpenseService> {
    service_with(&[
        ("12.50", "Food", "2024-06-03"),
        ("800", "Rent", "2024-06-01"),
        ("3.20", "Transport", "2024-06-05"),
        ("7.30", "food", "2024-06-10"),
        ("45", "Utilities", "2024-05-31"),
    ])
}

/// Drive a full interactive session with scripted input; returns everything printed.
pub fn run_session(input: &str) -> Result<String> {
    let mut output = Vec::new();
    let mut session = Session::new(input.as_bytes(), &mut output, "₹");
    session.run()?;
    drop(session);
    Ok(String::from_utf8(output)?)
}
