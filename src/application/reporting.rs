use serde::{Deserialize, Serialize};

use crate::domain::{CategoryTotal, Cents, TimeSummary};

/// Overview of a session's spending, as included in the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingReport {
    pub total: Cents,
    pub categories: Vec<CategoryTotal>,
    pub monthly: TimeSummary,
}
