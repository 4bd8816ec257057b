// src/holdings/model.rs

use serde::{Serialize, Serializer};

/// Whether a position's amount is a share count or a principal amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AmountType {
    /// `SH`: number of shares.
    #[default]
    Shares,
    /// `PRN`: principal amount (debt, convertibles).
    Principal,
    /// Any other tag, preserved verbatim.
    Other(String),
}

impl AmountType {
    /// Maps the `sshPrnamtType` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "SH" => Self::Shares,
            "PRN" => Self::Principal,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Shares => "SH",
            Self::Principal => "PRN",
            Self::Other(s) => s,
        }
    }
}

impl Serialize for AmountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Who holds investment discretion over a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InvestmentDiscretion {
    /// `SOLE`
    #[default]
    Sole,
    /// `DFND`: shared-defined.
    Defined,
    /// `OTR`: shared-other.
    Other,
    /// A tag outside the form's enumeration, preserved verbatim.
    Unrecognized(String),
}

impl InvestmentDiscretion {
    /// Maps the `investmentDiscretion` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "SOLE" => Self::Sole,
            "DFND" => Self::Defined,
            "OTR" => Self::Other,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sole => "SOLE",
            Self::Defined => "DFND",
            Self::Other => "OTR",
            Self::Unrecognized(s) => s,
        }
    }
}

impl Serialize for InvestmentDiscretion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One security position line from an information table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    /// Name of the issuer. Never empty.
    #[serde(rename = "name")]
    pub issuer_name: String,
    /// Title of the security class (e.g. `COM`, `CL A`).
    #[serde(rename = "title")]
    pub class_title: String,
    /// The 9-character CUSIP; empty when the filer omitted it.
    pub cusip: String,
    /// Market value in whole US dollars.
    #[serde(rename = "value")]
    pub value_usd: u64,
    /// Share count or principal amount, per `amount_type`.
    pub shares: u64,
    #[serde(rename = "type")]
    pub amount_type: AmountType,
    pub discretion: InvestmentDiscretion,
    /// Share of the fund's reported total, in percent with two decimals.
    /// Zero until the owning fund's totals are known.
    #[serde(rename = "weight")]
    pub weight_pct: f64,
}
