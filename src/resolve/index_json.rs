//! Strategy 1: the machine-readable `{accession}-index.json` directory listing.

use crate::core::{EdgarClient, EdgarError};
use crate::filing::FilingReference;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{filing_dir, is_primary_doc, is_xml};

#[derive(Deserialize, Default)]
struct IndexEnvelope {
    #[serde(default)]
    directory: Directory,
}

#[derive(Deserialize, Default)]
struct Directory {
    #[serde(default)]
    item: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    #[serde(default)]
    name: String,
}

pub(super) async fn resolve(
    client: &EdgarClient,
    filing: &FilingReference,
) -> Result<Option<Url>, EdgarError> {
    let dir = filing_dir(client, filing)?;
    let url = dir.join(&format!("{}-index.json", filing.accession_formatted()))?;
    debug!(url = %url, "trying index json");

    let body = client.fetch(&url).await?;
    let index: IndexEnvelope = serde_json::from_slice(&body)
        .map_err(|e| EdgarError::Data(format!("filing index json parse: {e}")))?;

    let names: Vec<&str> = index.directory.item.iter().map(|i| i.name.as_str()).collect();
    match pick(&names) {
        Some(name) => Ok(Some(dir.join(name)?)),
        None => Ok(None),
    }
}

/// Prefers an XML file named like an info table, then any XML that is not the primary document.
fn pick<'a>(names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .copied()
        .find(|n| {
            let lower = n.to_ascii_lowercase();
            is_xml(&lower) && lower.contains("infotable")
        })
        .or_else(|| {
            names
                .iter()
                .copied()
                .find(|n| {
                    let lower = n.to_ascii_lowercase();
                    is_xml(&lower) && !is_primary_doc(&lower)
                })
        })
}
