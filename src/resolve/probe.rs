//! Strategy 3: guess conventional file names and keep the first that downloads.

use crate::core::{EdgarClient, EdgarError};
use crate::filing::FilingReference;
use tracing::{debug, info};
use url::Url;

use super::filing_dir;

/// Conventional information-table file names, tried in order.
pub const PROBE_FILENAMES: [&str; 6] = [
    "form13fInfoTable.xml",
    "infotable.xml",
    "InfoTable.xml",
    "INFOTABLE.XML",
    "information_table.xml",
    "xslForm13F_X02.xml",
];

pub(super) async fn resolve(
    client: &EdgarClient,
    filing: &FilingReference,
) -> Result<Option<Url>, EdgarError> {
    let dir = filing_dir(client, filing)?;
    for name in PROBE_FILENAMES {
        let candidate = dir.join(name)?;
        match client.fetch(&candidate).await {
            Ok(_) => {
                info!(file = name, "found info table via filename probe");
                return Ok(Some(candidate));
            }
            Err(e) => debug!(file = name, error = %e, "probe miss"),
        }
    }
    Ok(None)
}
