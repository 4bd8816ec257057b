use super::model::FundReport;
use super::registry::TrackedFund;
use crate::core::{EdgarClient, EdgarError};
use crate::filing::latest_filing;
use crate::holdings::{Position, parse_information_table};
use crate::resolve::InfoTableResolver;
use std::fmt;
use tracing::{info, warn};

/// How many positions a [`FundReport`] keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Length of `top_positions` for most funds.
    pub top: usize,
    /// Length of `top_positions` for funds in `condensed_group`.
    pub top_condensed: usize,
    /// The registry group of large multi-strategy funds whose long tail is noise.
    pub condensed_group: String,
    /// Length of `all_positions`, the input to overlap analysis.
    pub cross_fund: usize,
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            top: 20,
            top_condensed: 10,
            condensed_group: "C".to_string(),
            cross_fund: 50,
        }
    }
}

impl Truncation {
    fn top_len(&self, group: &str) -> usize {
        if group == self.condensed_group {
            self.top_condensed
        } else {
            self.top
        }
    }
}

/// Runs locate → resolve → fetch → parse for one fund at a time.
///
/// # Example
///
/// ```no_run
/// # use thirteenf_rs::{EdgarClient, fund::{FundProcessor, Registry}};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EdgarClient::builder().user_agent("Example Corp ops@example.com").build()?;
/// let registry = Registry::from_path("funds.json")?;
/// let processor = FundProcessor::new(&client);
/// for fund in &registry {
///     let report = processor.process(fund).await;
///     println!("{}: {:?}", report.fund.name, report.error);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FundProcessor {
    client: EdgarClient,
    resolver: InfoTableResolver,
    truncation: Truncation,
}

impl FundProcessor {
    /// A processor with the default resolver order and truncation.
    pub fn new(client: &EdgarClient) -> Self {
        Self {
            client: client.clone(),
            resolver: InfoTableResolver::default(),
            truncation: Truncation::default(),
        }
    }

    /// Replaces the information-table resolver.
    #[must_use]
    pub fn resolver(mut self, resolver: InfoTableResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the truncation policy.
    #[must_use]
    pub fn truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    /// Processes one fund. Never fails: problems are recorded in [`FundReport::error`].
    pub async fn process(&self, fund: &TrackedFund) -> FundReport {
        let mut report = FundReport::pending(fund.clone());
        match self.run(fund, &mut report).await {
            Ok(()) => info!(
                cik = %fund.cik,
                fund = %fund.name,
                positions = report.position_count,
                total_value = report.total_value_usd,
                "processed fund"
            ),
            Err(stop) => {
                warn!(cik = %fund.cik, fund = %fund.name, reason = %stop, "fund not processed");
                report.fail(stop.to_string());
            }
        }
        report
    }

    async fn run(&self, fund: &TrackedFund, report: &mut FundReport) -> Result<(), Stop> {
        let filing = latest_filing(&self.client, fund.cik)
            .await?
            .ok_or(Stop::NoFiling)?;
        report.period = filing.period().to_string();

        self.client.pause_between_requests().await;
        let url = self
            .resolver
            .resolve(&self.client, &filing)
            .await
            .ok_or(Stop::NoInfoTable)?;

        self.client.pause_between_requests().await;
        let xml = self.client.fetch(&url).await?;
        let positions = parse_information_table(&xml)?;
        if positions.is_empty() {
            return Err(Stop::NoPositions);
        }

        let summary = summarize(positions, &self.truncation, &fund.group);
        report.total_value_usd = summary.total_value_usd;
        report.position_count = summary.position_count;
        report.top_positions = summary.top_positions;
        report.all_positions = summary.all_positions;
        Ok(())
    }
}

/// Processes one fund with the default resolver order and truncation.
pub async fn process_fund(client: &EdgarClient, fund: &TrackedFund) -> FundReport {
    FundProcessor::new(client).process(fund).await
}

/// Why processing a fund stopped early.
#[derive(Debug)]
enum Stop {
    NoFiling,
    NoInfoTable,
    NoPositions,
    Failed(EdgarError),
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::NoFiling => f.write_str("No 13F filing found"),
            Stop::NoInfoTable => f.write_str("Could not find information table XML"),
            Stop::NoPositions => f.write_str("No holdings parsed from XML"),
            Stop::Failed(e) => write!(f, "{e}"),
        }
    }
}

impl From<EdgarError> for Stop {
    fn from(e: EdgarError) -> Self {
        Stop::Failed(e)
    }
}

#[derive(Debug)]
pub(crate) struct Summary {
    pub(crate) total_value_usd: u64,
    pub(crate) position_count: usize,
    pub(crate) top_positions: Vec<Position>,
    pub(crate) all_positions: Vec<Position>,
}

/// Totals, orders by value (descending, stable), weights and truncates.
pub(crate) fn summarize(mut positions: Vec<Position>, truncation: &Truncation, group: &str) -> Summary {
    let total: u64 = positions.iter().map(|p| p.value_usd).fold(0, u64::saturating_add);
    positions.sort_by(|a, b| b.value_usd.cmp(&a.value_usd));
    for p in &mut positions {
        p.weight_pct = weight(p.value_usd, total);
    }

    Summary {
        total_value_usd: total,
        position_count: positions.len(),
        top_positions: positions
            .iter()
            .take(truncation.top_len(group))
            .cloned()
            .collect(),
        all_positions: positions.into_iter().take(truncation.cross_fund).collect(),
    }
}

fn weight(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = value as f64 / total as f64 * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}
