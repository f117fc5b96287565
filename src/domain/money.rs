use thiserror::Error;

/// Amounts are kept as integer cents so totals never pick up floating-point drift.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Sum amounts, saturating at `Cents::MAX` instead of overflowing.
/// The ledger refuses records that would push its total past the limit, so
/// sums over its records are always exact.
pub fn sum_cents(amounts: impl IntoIterator<Item = Cents>) -> Cents {
    amounts.into_iter().fold(0, Cents::saturating_add)
}

/// Format cents as a plain decimal string.
/// Example: 5000 -> "50.00", 7 -> "0.07"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a valid amount")]
    InvalidFormat(String),

    #[error("amount must not be negative: {0}")]
    Negative(String),

    #[error("amount is too large: {0}")]
    Overflow(String),
}

/// Parse a non-negative decimal string into cents.
///
/// Accepts whole units ("12"), one or two decimals ("12.5", "12.34") and a
/// bare fraction (".5"). Extra decimals are rounded half-up to the cent.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseCentsError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(ParseCentsError::Negative(trimmed.to_string()));
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let invalid = || ParseCentsError::InvalidFormat(trimmed.to_string());
    let overflow = || ParseCentsError::Overflow(trimmed.to_string());

    let (units_str, fraction_str) = match unsigned.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (unsigned, ""),
    };
    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(invalid());
    }
    if !units_str
        .chars()
        .chain(fraction_str.chars())
        .all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| overflow())?
    };

    let digits: Vec<i64> = fraction_str
        .bytes()
        .map(|b| i64::from(b - b'0'))
        .collect();
    let tenths = digits.first().copied().unwrap_or(0);
    let hundredths = digits.get(1).copied().unwrap_or(0);
    let round_up = digits.get(2).is_some_and(|d| *d >= 5);

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
        .ok_or_else(overflow)
}
