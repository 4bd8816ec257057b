use super::model::{AmountType, InvestmentDiscretion, Position};
use super::xml::{self, Element};
use crate::core::EdgarError;
use tracing::{debug, warn};

/// Namespace URIs information tables have been published under.
pub const KNOWN_NAMESPACES: [&str; 3] = [
    "http://www.sec.gov/edgar/document/thirteenf/informationtable",
    "http://www.sec.gov/edgar/thirteenf",
    "http://www.sec.gov/edgar/common/informationtable",
];

const DEFAULT_CLASS_TITLE: &str = "COM";

pub(super) fn parse_information_table(xml_bytes: &[u8]) -> Result<Vec<Position>, EdgarError> {
    let root = match xml::parse_document(xml_bytes) {
        Ok(root) => root,
        Err(first) => {
            // Second pass: lossy UTF-8, minus any declaration that named another encoding.
            let text = String::from_utf8_lossy(xml_bytes);
            let rest = strip_declaration(&text).unwrap_or(&text);
            debug!(error = %first, "retrying information table as lossy utf-8");
            xml::parse_document(rest.as_bytes())?
        }
    };

    let candidates = namespace_candidates(&root);
    let entries = candidates
        .iter()
        .map(|ns| root.descendants(ns.as_deref(), "infoTable"))
        .find(|found| !found.is_empty())
        .unwrap_or_default();
    debug!(entries = entries.len(), "infoTable elements found");

    Ok(entries
        .into_iter()
        .filter_map(|entry| extract(entry, &candidates))
        .collect())
}

/// Root namespace first, then the known ones, then unqualified.
fn namespace_candidates(root: &Element) -> Vec<Option<String>> {
    let mut out: Vec<Option<String>> = Vec::with_capacity(KNOWN_NAMESPACES.len() + 2);
    if let Some(ns) = &root.ns {
        out.push(Some(ns.clone()));
    }
    for ns in KNOWN_NAMESPACES {
        if root.ns.as_deref() != Some(ns) {
            out.push(Some(ns.to_string()));
        }
    }
    out.push(None);
    out
}

/// Reads one `infoTable` using the first namespace under which it has an issuer name.
fn extract(entry: &Element, candidates: &[Option<String>]) -> Option<Position> {
    candidates.iter().find_map(|ns| {
        let ns = ns.as_deref();
        let issuer_name = non_empty(entry.child_text(ns, "nameOfIssuer"))?;

        let (shares, amount_type) = match entry.child(ns, "shrsOrPrnAmt") {
            Some(amt) => (
                coerce_whole(amt.child_text(ns, "sshPrnamt"), "sshPrnamt"),
                non_empty(amt.child_text(ns, "sshPrnamtType"))
                    .map(AmountType::from_tag)
                    .unwrap_or_default(),
            ),
            None => (0, AmountType::Shares),
        };

        Some(Position {
            issuer_name: issuer_name.to_string(),
            class_title: non_empty(entry.child_text(ns, "titleOfClass"))
                .unwrap_or(DEFAULT_CLASS_TITLE)
                .to_string(),
            cusip: entry
                .child_text(ns, "cusip")
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            // reported in thousands of dollars
            value_usd: coerce_whole(entry.child_text(ns, "value"), "value").saturating_mul(1000),
            shares,
            amount_type,
            discretion: non_empty(entry.child_text(ns, "investmentDiscretion"))
                .map(InvestmentDiscretion::from_tag)
                .unwrap_or_default(),
            weight_pct: 0.0,
        })
    })
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// Lenient non-negative integer read: thousands separators are ignored and
/// decimals truncated; anything else becomes 0.
pub(crate) fn coerce_whole(text: Option<&str>, field: &str) -> u64 {
    let Some(raw) = text else {
        return 0;
    };
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return 0;
    }
    if let Ok(v) = cleaned.parse::<u64>() {
        return v;
    }
    match cleaned.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        _ => {
            warn!(field, text = raw, "unreadable amount coerced to 0");
            0
        }
    }
}

/// The document with a leading `<?xml ...?>` declaration (and any BOM before it) removed.
fn strip_declaration(text: &str) -> Option<&str> {
    let t = text.trim_start_matches('\u{feff}').trim_start();
    if !t.starts_with("<?xml") {
        return None;
    }
    t.find("?>").map(|end| &t[end + 2..])
}
