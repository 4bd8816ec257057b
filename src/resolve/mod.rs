//! Resolving the information-table XML inside a 13F filing.
//!
//! EDGAR offers no single path to the document, so resolution runs an ordered
//! list of strategies and the first one that finds a URL wins:
//! - `index_json`: the machine-readable directory listing
//! - `index_html`: links scraped from the human-readable index page
//! - `probe`:      conventional file names tried one by one
//!
//! A strategy that fails (network error, unparseable listing) is logged and the
//! next one runs; exhausting all of them is a normal "not found" outcome.

mod index_html;
mod index_json;
mod probe;

pub use probe::PROBE_FILENAMES;

use crate::core::{EdgarClient, EdgarError};
use crate::filing::FilingReference;
use tracing::{debug, info, warn};
use url::Url;

/// One way of locating the information table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// Scan `{accession}-index.json`.
    IndexJson,
    /// Scrape `{accession}-index.htm`.
    IndexHtml,
    /// Try each of [`PROBE_FILENAMES`].
    FilenameProbe,
}

impl ResolveStrategy {
    /// The order strategies are attempted in by default.
    pub const DEFAULT_ORDER: [ResolveStrategy; 3] = [
        ResolveStrategy::IndexJson,
        ResolveStrategy::IndexHtml,
        ResolveStrategy::FilenameProbe,
    ];

    /// Attempts this strategy alone.
    ///
    /// `Ok(None)` means the strategy ran but found no candidate.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError` if the listing this strategy depends on cannot be fetched or read.
    pub async fn attempt(
        self,
        client: &EdgarClient,
        filing: &FilingReference,
    ) -> Result<Option<Url>, EdgarError> {
        match self {
            ResolveStrategy::IndexJson => index_json::resolve(client, filing).await,
            ResolveStrategy::IndexHtml => index_html::resolve(client, filing).await,
            ResolveStrategy::FilenameProbe => probe::resolve(client, filing).await,
        }
    }
}

/// Runs [`ResolveStrategy`]s in order until one yields a URL.
#[derive(Debug, Clone)]
pub struct InfoTableResolver {
    strategies: Vec<ResolveStrategy>,
}

impl Default for InfoTableResolver {
    fn default() -> Self {
        Self::new(ResolveStrategy::DEFAULT_ORDER)
    }
}

impl InfoTableResolver {
    /// A resolver trying `strategies` in the given order.
    pub fn new(strategies: impl IntoIterator<Item = ResolveStrategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    /// The configured strategy order.
    pub fn strategies(&self) -> &[ResolveStrategy] {
        &self.strategies
    }

    /// Returns the information-table URL, or `None` when no strategy finds one.
    pub async fn resolve(&self, client: &EdgarClient, filing: &FilingReference) -> Option<Url> {
        for strategy in &self.strategies {
            match strategy.attempt(client, filing).await {
                Ok(Some(url)) => {
                    info!(?strategy, url = %url, "resolved information table");
                    return Some(url);
                }
                Ok(None) => debug!(?strategy, "no candidate"),
                Err(e) => warn!(?strategy, error = %e, "strategy failed"),
            }
        }
        None
    }
}

/// Resolves the information table with the default strategy order.
pub async fn find_info_table(client: &EdgarClient, filing: &FilingReference) -> Option<Url> {
    InfoTableResolver::default().resolve(client, filing).await
}

/// `{archives}/{cik}/{accession_raw}/`
pub(crate) fn filing_dir(
    client: &EdgarClient,
    filing: &FilingReference,
) -> Result<Url, EdgarError> {
    Ok(client
        .base_archives()
        .join(&format!("{}/{}/", filing.cik(), filing.accession_raw()))?)
}

fn is_xml(lower: &str) -> bool {
    lower.ends_with(".xml")
}

fn is_primary_doc(lower: &str) -> bool {
    lower.contains("primary")
}
