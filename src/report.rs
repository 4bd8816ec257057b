//! A full run over a [`Registry`]: every fund, then the overlap analysis.

use crate::core::EdgarClient;
use crate::fund::{FundProcessor, FundReport, Registry};
use crate::overlap::{OverlapRecord, cross_fund_overlap};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::info;

/// The aggregate handed off for persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingsReport {
    pub generated_at: DateTime<Utc>,
    pub num_funds: usize,
    pub funds: Vec<FundReport>,
    pub cross_fund_overlap: Vec<OverlapRecord>,
}

impl HoldingsReport {
    /// Assembles a report from per-fund results, running the overlap analysis.
    pub fn from_funds(funds: Vec<FundReport>) -> Self {
        let cross_fund_overlap = cross_fund_overlap(&funds);
        Self {
            generated_at: Utc::now(),
            num_funds: funds.len(),
            funds,
            cross_fund_overlap,
        }
    }

    /// Success/failure counts and one status line per fund.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            succeeded: self.funds.iter().filter(|f| f.is_ok()).count(),
            total: self.funds.len(),
            lines: self
                .funds
                .iter()
                .map(|f| FundStatus {
                    name: f.fund.name.clone(),
                    ok: f.is_ok(),
                    positions: f.position_count,
                })
                .collect(),
        }
    }
}

/// Outcome counts of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
    pub lines: Vec<FundStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundStatus {
    pub name: String,
    pub ok: bool,
    pub positions: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}/{}", self.succeeded, self.total)?;
        for line in &self.lines {
            let mark = if line.ok { "ok " } else { "ERR" };
            writeln!(f, "  {mark} {}: {} holdings", line.name, line.positions)?;
        }
        Ok(())
    }
}

/// Processes every fund in `registry`, in order and one at a time, then computes
/// the overlap. The client's [`crate::Pacing::fund_gap`] is observed after each fund.
pub async fn collect(client: &EdgarClient, registry: &Registry) -> HoldingsReport {
    collect_with(&FundProcessor::new(client), client, registry).await
}

/// [`collect`] with a customized [`FundProcessor`].
pub async fn collect_with(
    processor: &FundProcessor,
    client: &EdgarClient,
    registry: &Registry,
) -> HoldingsReport {
    info!(funds = registry.len(), "starting 13F collection");
    let mut funds = Vec::with_capacity(registry.len());
    for fund in registry {
        funds.push(processor.process(fund).await);
        client.pause_between_funds().await;
    }

    let report = HoldingsReport::from_funds(funds);
    info!(
        overlaps = report.cross_fund_overlap.len(),
        succeeded = report.funds.iter().filter(|f| f.is_ok()).count(),
        "collection finished"
    );
    report
}
