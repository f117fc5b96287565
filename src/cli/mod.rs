use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::num::IntErrorKind;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::{AppError, ExpenseService};
use crate::domain::{Cents, TimeUnit, format_cents};
use crate::io::{ExportFormat, Exporter};

/// Expense Tracker - record, list and summarize your spending
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "An interactive expense tracker: add, list, delete and summarize expenses")]
#[command(version)]
pub struct Cli {
    /// Currency symbol shown next to amounts
    #[arg(long, env = "EXPENSE_TRACKER_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the session's expenses to this file on exit
    #[arg(long)]
    pub export: Option<String>,

    /// Export format: csv, json (default: json for *.json files, csv otherwise)
    #[arg(long, requires = "export")]
    pub format: Option<String>,
}

impl Cli {
    /// Logs go to stderr so they never mix with the menu. `RUST_LOG` overrides the level.
    pub fn init_logging(&self) {
        let level = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={level}")));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(self) -> Result<()> {
        // Resolve the export target up front so a typo fails before any data is entered
        let export = match self.export {
            Some(path) => {
                let format = match self.format.as_deref() {
                    Some(f) => ExportFormat::from_str(f).with_context(|| {
                        format!("Unknown export format '{}'. Use csv or json", f)
                    })?,
                    None => ExportFormat::for_path(&path),
                };
                Some((path, format))
            }
            None => None,
        };

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), self.currency);
        session.run()?;

        if let Some((path, format)) = export {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create export file '{}'", path))?;
            let count = Exporter::new(session.service()).export(format, BufWriter::new(file))?;
            eprintln!("Exported {} expenses to {}", count, path);
        }

        Ok(())
    }
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Summary,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Summary),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidMenuChoice(other.to_string())),
        }
    }
}

enum Step {
    Continue,
    Quit,
}

/// One interactive run of the menu loop.
/// Owns the service, so the ledger lives exactly as long as the session.
pub struct Session<R, W> {
    input: R,
    output: W,
    currency: String,
    service: ExpenseService,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, currency: impl Into<String>) -> Self {
        Self {
            input,
            output,
            currency: currency.into(),
            service: ExpenseService::new(),
        }
    }

    pub fn service(&self) -> &ExpenseService {
        &self.service
    }

    /// Run until the user picks Exit or the input ends.
    /// Only I/O failures on the streams are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Expense Tracker")?;
            writeln!(self.output, "1. Add Expense")?;
            writeln!(self.output, "2. View Expenses")?;
            writeln!(self.output, "3. View Summary of Expenses")?;
            writeln!(self.output, "4. Delete Expense")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let step = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_expense()?,
                Ok(MenuChoice::View) => {
                    self.view_expenses()?;
                    Step::Continue
                }
                Ok(MenuChoice::Summary) => self.view_summary()?,
                Ok(MenuChoice::Delete) => self.delete_expense()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the program.")?;
                    Step::Quit
                }
                Err(err) => {
                    debug!(%err, "unrecognized menu choice");
                    writeln!(self.output, "{}", err)?;
                    Step::Continue
                }
            };

            if let Step::Quit = step {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read one line. `None` means the input is closed.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn money(&self, cents: Cents) -> String {
        format!("{}{}", self.currency, format_cents(cents))
    }

    fn add_expense(&mut self) -> Result<Step> {
        let amount_prompt = format!("Enter expense amount (in {}): ", self.currency);
        let Some(amount) = self.prompt(&amount_prompt)? else {
            return Ok(Step::Quit);
        };
        let Some(category) = self.prompt("Enter expense category: ")? else {
            return Ok(Step::Quit);
        };
        let Some(date) = self.prompt("Enter expense date (YYYY-MM-DD, or press Enter for today): ")?
        else {
            return Ok(Step::Quit);
        };

        let message = match self.service.add_expense(&amount, &category, &date) {
            Ok(expense) => {
                let expense = expense.clone();
                format!(
                    "Added expense: {} in category '{}' on {}.",
                    self.money(expense.amount_cents),
                    expense.category,
                    expense.date.format("%Y-%m-%d")
                )
            }
            Err(err) => err.to_string(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(Step::Continue)
    }

    fn view_expenses(&mut self) -> Result<()> {
        let expenses = self.service.list_expenses();
        if expenses.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(());
        }

        writeln!(self.output, "\nExpenses:")?;
        for (i, expense) in expenses.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {}{} | Category: {} | Date: {}",
                i + 1,
                self.currency,
                format_cents(expense.amount_cents),
                expense.category,
                expense.date.format("%Y-%m-%d")
            )?;
        }
        let total = self.money(self.service.total());
        writeln!(self.output, "Total expenses: {}\n", total)?;
        Ok(())
    }

    fn view_summary(&mut self) -> Result<Step> {
        writeln!(self.output, "\nSummary of Expenses:")?;
        let total = self.money(self.service.total());
        writeln!(self.output, "Total Overall Spending: {}", total)?;

        let Some(category) = self.prompt("Enter category for spending summary: ")? else {
            return Ok(Step::Quit);
        };
        let category_total = self.money(self.service.total_by_category(&category));
        writeln!(self.output, "Total Spending in '{}': {}", category, category_total)?;

        let Some(unit) =
            self.prompt("Enter time unit for spending over time (daily, weekly, monthly): ")?
        else {
            return Ok(Step::Quit);
        };

        let summary = match self.service.summary_by_time(&unit) {
            Ok(summary) => summary,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(Step::Continue);
            }
        };
        if summary.buckets.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(Step::Continue);
        }

        writeln!(self.output, "\nSpending Summary by {}:", unit_title(summary.unit))?;
        for bucket in &summary.buckets {
            let amount = self.money(bucket.total);
            writeln!(self.output, "{}: {}", bucket.bucket.format("%Y-%m-%d"), amount)?;
        }
        let total = self.money(summary.total);
        writeln!(self.output, "Total spending over {}: {}\n", summary.unit, total)?;
        Ok(Step::Continue)
    }

    fn delete_expense(&mut self) -> Result<Step> {
        self.view_expenses()?;

        let Some(input) = self.prompt("Enter the expense number to delete: ")? else {
            return Ok(Step::Quit);
        };
        // Numbers on screen start at 1. Integers too large for i64 can't name an expense either.
        let index = match input.trim().parse::<i64>() {
            Ok(number) => usize::try_from(number).ok().and_then(|n| n.checked_sub(1)),
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                None
            }
            Err(_) => {
                writeln!(self.output, "Please enter a valid number.")?;
                return Ok(Step::Continue);
            }
        };
        let Some(index) = index else {
            debug!(input = input.trim(), "expense number out of range");
            writeln!(self.output, "Invalid expense number.")?;
            return Ok(Step::Continue);
        };

        let message = match self.service.delete_expense(index) {
            Ok(removed) => format!(
                "Removed expense of {} in category '{}'",
                self.money(removed.amount_cents),
                removed.category
            ),
            Err(err) => err.to_string(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(Step::Continue)
    }
}

fn unit_title(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Daily => "Daily",
        TimeUnit::Weekly => "Weekly",
        TimeUnit::Monthly => "Monthly",
    }
}
