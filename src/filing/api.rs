use super::model::{Cik, FilingReference, FormType};
use super::wire::{RecentFilings, Submissions};
use crate::core::{EdgarClient, EdgarError};
use tracing::{debug, info};

pub(super) async fn latest_filing(
    client: &EdgarClient,
    cik: Cik,
) -> Result<Option<FilingReference>, EdgarError> {
    let url = client
        .base_submissions()
        .join(&format!("CIK{}.json", cik.padded()))?;
    debug!(%cik, url = %url, "fetching submissions history");

    let body = client.fetch(&url).await?;
    let subs: Submissions = serde_json::from_slice(&body)
        .map_err(|e| EdgarError::Data(format!("submissions json parse: {e}")))?;

    let found = select_latest(cik, &subs.filings.recent)?;
    match &found {
        Some(r) => info!(
            %cik,
            accession = r.accession_formatted(),
            period = r.period(),
            form = r.form().as_str(),
            "located 13F filing"
        ),
        None => info!(%cik, "no 13F filing in recent history"),
    }
    Ok(found)
}

/// Picks the first 13F-HR or 13F-HR/A entry.
///
/// EDGAR lists recent filings newest first; that order is trusted, not checked
/// against the dates.
pub(crate) fn select_latest(
    cik: Cik,
    recent: &RecentFilings,
) -> Result<Option<FilingReference>, EdgarError> {
    let Some((i, form)) = recent
        .form
        .iter()
        .enumerate()
        .find_map(|(i, f)| FormType::from_form(f).map(|t| (i, t)))
    else {
        return Ok(None);
    };

    let accession = recent.accession_number.get(i).ok_or_else(|| {
        EdgarError::Data(format!("accessionNumber missing for filing #{i}"))
    })?;

    let period = match recent.report_date.get(i) {
        Some(d) => d,
        None => recent
            .filing_date
            .get(i)
            .ok_or_else(|| EdgarError::Data(format!("filingDate missing for filing #{i}")))?,
    };

    Ok(Some(FilingReference::new(cik, form, accession, period.as_str())))
}
