use super::registry::TrackedFund;
use crate::holdings::Position;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The outcome of processing one tracked fund.
///
/// When `error` is set, both position lists are empty and the totals are zero.
/// Both lists are ordered by descending `value_usd`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundReport {
    /// Registry metadata, passed through unchanged.
    #[serde(flatten)]
    pub fund: TrackedFund,
    /// The filing's report period (or filing date). Empty if no filing was located.
    pub period: String,
    /// Sum of every parsed position's value, in dollars.
    #[serde(rename = "total_value")]
    pub total_value_usd: u64,
    /// Number of positions parsed, before truncation.
    #[serde(rename = "num_holdings")]
    pub position_count: usize,
    /// The largest positions, for display.
    #[serde(rename = "top_holdings")]
    pub top_positions: Vec<Position>,
    /// The largest positions, for cross-fund analysis.
    #[serde(rename = "all_holdings")]
    pub all_positions: Vec<Position>,
    pub fetched_at: DateTime<Utc>,
    /// Human-readable reason processing stopped, if it did.
    pub error: Option<String>,
}

impl FundReport {
    pub(crate) fn pending(fund: TrackedFund) -> Self {
        Self {
            fund,
            period: String::new(),
            total_value_usd: 0,
            position_count: 0,
            top_positions: Vec::new(),
            all_positions: Vec::new(),
            fetched_at: Utc::now(),
            error: None,
        }
    }

    pub(crate) fn fail(&mut self, reason: String) {
        self.total_value_usd = 0;
        self.position_count = 0;
        self.top_positions.clear();
        self.all_positions.clear();
        self.error = Some(reason);
    }

    /// `true` when the fund's holdings were fetched and parsed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
