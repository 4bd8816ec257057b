//! Locating a filer's most recent 13F disclosure from its submissions history.

mod api;
mod model;
mod wire;

pub use model::{Cik, FilingReference, FormType};

use crate::core::{EdgarClient, EdgarError};

/// Finds the latest 13F-HR (or 13F-HR/A) filing for `cik`.
///
/// Returns `Ok(None)` when the submissions history contains no qualifying filing.
///
/// # Errors
///
/// Returns `EdgarError` if the history cannot be fetched or is not valid JSON.
pub async fn latest_filing(
    client: &EdgarClient,
    cik: Cik,
) -> Result<Option<FilingReference>, EdgarError> {
    api::latest_filing(client, cik).await
}
