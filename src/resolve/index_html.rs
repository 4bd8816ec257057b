//! Strategy 2: scrape the human-readable `{accession}-index.htm` page for `.xml` links.

use crate::core::{EdgarClient, EdgarError};
use crate::filing::FilingReference;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

use super::{filing_dir, is_primary_doc, is_xml};

static XML_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href="([^"]*\.xml)""#).expect("valid xml href regex")
});

pub(super) async fn resolve(
    client: &EdgarClient,
    filing: &FilingReference,
) -> Result<Option<Url>, EdgarError> {
    let dir = filing_dir(client, filing)?;
    let url = dir.join(&format!("{}-index.htm", filing.accession_formatted()))?;
    debug!(url = %url, "trying index page");

    let body = client.fetch(&url).await?;
    let html = String::from_utf8_lossy(&body);

    match pick(&html) {
        Some(link) => link_url(&dir, link).map(Some),
        None => Ok(None),
    }
}

/// Picks the information-table link out of an index page.
///
/// A link mentioning `infotable`/`information` wins. Failing that, if the page's
/// document table names an INFORMATION TABLE, any non-primary XML link is taken.
fn pick(html: &str) -> Option<&str> {
    let links: Vec<&str> = XML_HREF
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    if let Some(link) = links.iter().copied().find(|l| {
        let lower = l.to_ascii_lowercase();
        lower.contains("infotable") || lower.contains("information")
    }) {
        return Some(link);
    }

    if html.to_uppercase().contains("INFORMATION TABLE") {
        return links.iter().copied().find(|l| {
            let lower = l.to_ascii_lowercase();
            is_xml(&lower) && !is_primary_doc(&lower)
        });
    }
    None
}

/// Absolute links are kept; relative ones are re-rooted at the filing directory by file name.
fn link_url(dir: &Url, link: &str) -> Result<Url, EdgarError> {
    if link.starts_with("http") {
        return Ok(Url::parse(link)?);
    }
    let file = link.rsplit('/').next().unwrap_or(link);
    Ok(dir.join(file)?)
}
