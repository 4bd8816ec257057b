use serde::Deserialize;

/* --------- Minimal serde mapping for the submissions JSON --------- */

#[derive(Deserialize, Default)]
pub(crate) struct Submissions {
    #[serde(default)]
    pub(crate) filings: Filings,
}

#[derive(Deserialize, Default)]
pub(crate) struct Filings {
    #[serde(default)]
    pub(crate) recent: RecentFilings,
}

/// Parallel arrays, one entry per filing, newest first.
#[derive(Deserialize, Default)]
pub(crate) struct RecentFilings {
    #[serde(default)]
    pub(crate) form: Vec<String>,
    #[serde(rename = "accessionNumber", default)]
    pub(crate) accession_number: Vec<String>,
    #[serde(rename = "filingDate", default)]
    pub(crate) filing_date: Vec<String>,
    #[serde(rename = "reportDate", default)]
    pub(crate) report_date: Vec<String>,
}
