//! Centralized constants for default endpoints and UA.

/// Courtesy identification header. EDGAR asks automated clients to name
/// themselves and give a contact address.
pub(crate) const USER_AGENT: &str = "thirteenf-rs/0.1 (contact@example.com)";

/// EDGAR submissions API base (`CIK##########.json` is appended).
pub(crate) const DEFAULT_BASE_SUBMISSIONS: &str = "https://data.sec.gov/submissions/";

/// EDGAR archive base (`{cik}/{accession}/` is appended).
pub(crate) const DEFAULT_BASE_ARCHIVES: &str = "https://www.sec.gov/Archives/edgar/data/";

/// Per-request timeout applied when the builder does not override it.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
