use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time unit '{0}'. Choose 'daily', 'weekly', or 'monthly'.")]
pub struct InvalidTimeUnit(pub String);

/// Granularity used to group expenses over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Daily,
    Weekly,
    Monthly,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Daily => "daily",
            TimeUnit::Weekly => "weekly",
            TimeUnit::Monthly => "monthly",
        }
    }

    /// The date that represents the bucket `date` falls in.
    pub fn bucket_key(&self, date: NaiveDate) -> NaiveDate {
        match self {
            TimeUnit::Daily => date,
            // Week starts on Monday
            TimeUnit::Weekly => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            // Day 1 exists in every month
            TimeUnit::Monthly => date - Duration::days(i64::from(date.day0())),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = InvalidTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(TimeUnit::Daily),
            "weekly" => Ok(TimeUnit::Weekly),
            "monthly" => Ok(TimeUnit::Monthly),
            _ => Err(InvalidTimeUnit(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-function form of [`TimeUnit::bucket_key`].
pub fn bucket_key(date: NaiveDate, unit: TimeUnit) -> NaiveDate {
    unit.bucket_key(date)
}
