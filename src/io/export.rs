use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{ExpenseService, SpendingReport};
use crate::domain::{Expense, format_cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    /// Pick a format from a file name: `.json` means JSON, anything else CSV.
    pub fn for_path(path: &str) -> Self {
        let is_json = std::path::Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { ExportFormat::Json } else { ExportFormat::Csv }
    }
}

/// Session dump written by the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub exported_at: DateTime<Utc>,
    pub expenses: Vec<Expense>,
    pub report: SpendingReport,
}

/// Writes the session's expenses out in a chosen format.
pub struct Exporter<'a> {
    service: &'a ExpenseService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ExpenseService) -> Self {
        Self { service }
    }

    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        match format {
            ExportFormat::Csv => self.export_csv(writer),
            ExportFormat::Json => self.export_json(writer),
        }
    }

    /// One row per expense, numbered as on screen.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let expenses = self.service.list_expenses();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["number", "date", "category", "amount"])?;
        for (number, expense) in expenses.iter().enumerate().map(|(i, e)| (i + 1, e)) {
            csv_writer.write_record([
                number.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                format_cents(expense.amount_cents),
            ])?;
        }

        csv_writer.flush()?;
        Ok(expenses.len())
    }

    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let snapshot = SessionSnapshot {
            exported_at: Utc::now(),
            expenses: self.service.list_expenses().to_vec(),
            report: self.service.spending_report(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot.expenses.len())
    }
}
