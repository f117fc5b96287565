use thiserror::Error;

use crate::domain::{Cents, InvalidTimeUnit, LedgerError, ParseCentsError, format_cents};

/// Everything a single menu action can fail with.
/// None of these end the session; the menu loop reports them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseCentsError),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid expense number.")]
    OutOfRange { index: usize, len: usize },

    #[error(
        "Amount {} is too large: the total would exceed the supported maximum",
        format_cents(*.0)
    )]
    TotalOverflow(Cents),

    #[error("{0}")]
    InvalidTimeUnit(#[from] InvalidTimeUnit),

    #[error("Invalid choice '{0}'. Please try again.")]
    InvalidMenuChoice(String),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::OutOfRange { index, len } => AppError::OutOfRange { index, len },
            LedgerError::TotalOverflow { amount_cents } => AppError::TotalOverflow(amount_cents),
        }
    }
}
