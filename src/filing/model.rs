use crate::core::EdgarError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Central Index Key: the numeric identifier EDGAR assigns to every filer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cik(u64);

impl Cik {
    /// Wraps a raw numeric CIK.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The fixed-width, zero-padded form used by the submissions API (`0001067983`).
    pub fn padded(self) -> String {
        format!("{:010}", self.0)
    }
}

/// Unpadded form (`1067983`), as used in archive paths.
impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cik {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EdgarError::InvalidParams(format!("invalid CIK `{s}`")));
        }
        t.parse::<u64>()
            .map(Cik)
            .map_err(|e| EdgarError::InvalidParams(format!("invalid CIK `{s}`: {e}")))
    }
}

impl Serialize for Cik {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cik {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The disclosure form types that carry an information table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormType {
    /// `13F-HR`, the quarterly holdings report.
    #[serde(rename = "13F-HR")]
    HoldingsReport,
    /// `13F-HR/A`, an amendment to a holdings report.
    #[serde(rename = "13F-HR/A")]
    HoldingsReportAmendment,
}

impl FormType {
    /// Recognizes a form-type string from the submissions history.
    pub fn from_form(form: &str) -> Option<Self> {
        match form {
            "13F-HR" => Some(Self::HoldingsReport),
            "13F-HR/A" => Some(Self::HoldingsReportAmendment),
            _ => None,
        }
    }

    /// The EDGAR form-type string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HoldingsReport => "13F-HR",
            Self::HoldingsReportAmendment => "13F-HR/A",
        }
    }
}

/// Identifies one 13F disclosure of one filer.
///
/// The two accession encodings are always derived from the same value; see
/// [`FilingReference::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingReference {
    cik: Cik,
    form: FormType,
    accession_raw: String,
    accession_formatted: String,
    period: String,
}

impl FilingReference {
    /// Builds a reference from the dashed accession number (e.g. `0000950123-25-008343`).
    /// The dash-free form used in archive directory names is derived from it.
    pub fn new(
        cik: Cik,
        form: FormType,
        accession_formatted: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        let accession_formatted = accession_formatted.into();
        let accession_raw = accession_formatted.replace('-', "");
        Self {
            cik,
            form,
            accession_raw,
            accession_formatted,
            period: period.into(),
        }
    }

    /// The filer.
    pub fn cik(&self) -> Cik {
        self.cik
    }

    /// Which 13F variant this filing is.
    pub fn form(&self) -> FormType {
        self.form
    }

    /// Accession number without separators (`000095012325008343`).
    pub fn accession_raw(&self) -> &str {
        &self.accession_raw
    }

    /// Accession number with separators (`0000950123-25-008343`).
    pub fn accession_formatted(&self) -> &str {
        &self.accession_formatted
    }

    /// The report date, or the filing date when the history lacks one. Not calendar-validated.
    pub fn period(&self) -> &str {
        &self.period
    }
}
