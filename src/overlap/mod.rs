//! Cross-fund overlap: securities held by two or more funds.

use crate::fund::FundReport;
use serde::Serialize;
use std::collections::HashMap;

/// How many overlap records [`cross_fund_overlap`] returns.
pub const MAX_OVERLAPS: usize = 30;

/// One fund's stake in a shared security.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundHolding {
    /// Fund name.
    #[serde(rename = "fund")]
    pub fund_name: String,
    #[serde(rename = "manager")]
    pub manager_name: String,
    #[serde(rename = "value")]
    pub value_usd: u64,
    pub shares: u64,
    #[serde(rename = "weight")]
    pub weight_pct: f64,
}

/// A security held by at least two funds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapRecord {
    pub cusip: String,
    /// Issuer name as reported by the first fund holding it.
    #[serde(rename = "name")]
    pub issuer_name: String,
    /// Holders in fund processing order.
    #[serde(rename = "funds")]
    pub holders: Vec<FundHolding>,
    #[serde(rename = "fund_count")]
    pub holder_count: usize,
    /// Names of the holders, in the same order as `holders`.
    pub fund_names: Vec<String>,
    #[serde(rename = "total_value")]
    pub total_value_usd: u64,
}

/// Finds securities (by CUSIP) that appear in the `all_positions` of two or more
/// successful reports.
///
/// Failed reports and positions without a CUSIP are ignored. The result is sorted
/// by holder count, then combined value, both descending, and capped at
/// [`MAX_OVERLAPS`]. Equal keys keep first-seen order.
pub fn cross_fund_overlap(reports: &[FundReport]) -> Vec<OverlapRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut records: Vec<OverlapRecord> = Vec::new();

    for report in reports.iter().filter(|r| r.is_ok()) {
        for p in report.all_positions.iter().filter(|p| !p.cusip.is_empty()) {
            let slot = *index.entry(p.cusip.as_str()).or_insert_with(|| {
                records.push(OverlapRecord {
                    cusip: p.cusip.clone(),
                    issuer_name: p.issuer_name.clone(),
                    holders: Vec::new(),
                    holder_count: 0,
                    fund_names: Vec::new(),
                    total_value_usd: 0,
                });
                records.len() - 1
            });

            let rec = &mut records[slot];
            rec.holders.push(FundHolding {
                fund_name: report.fund.name.clone(),
                manager_name: report.fund.manager.clone(),
                value_usd: p.value_usd,
                shares: p.shares,
                weight_pct: p.weight_pct,
            });
            rec.total_value_usd = rec.total_value_usd.saturating_add(p.value_usd);
        }
    }

    let mut shared: Vec<OverlapRecord> = records
        .into_iter()
        .filter(|r| r.holders.len() >= 2)
        .map(|mut r| {
            r.holder_count = r.holders.len();
            r.fund_names = r.holders.iter().map(|h| h.fund_name.clone()).collect();
            r
        })
        .collect();

    shared.sort_by(|a, b| {
        b.holder_count
            .cmp(&a.holder_count)
            .then(b.total_value_usd.cmp(&a.total_value_usd))
    });
    shared.truncate(MAX_OVERLAPS);
    shared
}
