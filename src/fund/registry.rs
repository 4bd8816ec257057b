use crate::core::EdgarError;
use crate::filing::Cik;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A fund whose 13F filings are tracked, with its descriptive metadata.
///
/// Everything except `cik` and `group` is passed through to the output untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedFund {
    /// The filer's Central Index Key.
    pub cik: Cik,
    /// Display name of the fund.
    pub name: String,
    /// The person (or people) running it.
    pub manager: String,
    /// Category tag. See [`super::Truncation::condensed_group`].
    pub group: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub strategy: String,
    /// A reported annual return in percent, when one is known.
    #[serde(default, rename = "return_2025")]
    pub return_pct: Option<f64>,
}

/// The ordered set of funds a run processes.
///
/// Loaded from a JSON array of [`TrackedFund`] objects; array order is processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TrackedFund>", into = "Vec<TrackedFund>")]
pub struct Registry {
    funds: Vec<TrackedFund>,
}

impl Registry {
    /// Builds a registry, rejecting duplicate CIKs.
    pub fn new(funds: Vec<TrackedFund>) -> Result<Self, EdgarError> {
        let mut seen = HashSet::new();
        for f in &funds {
            if !seen.insert(f.cik) {
                return Err(EdgarError::InvalidParams(format!(
                    "CIK {} is listed more than once",
                    f.cik
                )));
            }
        }
        Ok(Self { funds })
    }

    /// Parses a registry from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, EdgarError> {
        let funds: Vec<TrackedFund> = serde_json::from_str(json)
            .map_err(|e| EdgarError::InvalidParams(format!("registry json parse: {e}")))?;
        Self::new(funds)
    }

    /// Reads and parses a registry file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EdgarError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn funds(&self) -> &[TrackedFund] {
        &self.funds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackedFund> {
        self.funds.iter()
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TrackedFund;
    type IntoIter = std::slice::Iter<'a, TrackedFund>;

    fn into_iter(self) -> Self::IntoIter {
        self.funds.iter()
    }
}

impl TryFrom<Vec<TrackedFund>> for Registry {
    type Error = EdgarError;

    fn try_from(funds: Vec<TrackedFund>) -> Result<Self, Self::Error> {
        Self::new(funds)
    }
}

impl From<Registry> for Vec<TrackedFund> {
    fn from(r: Registry) -> Self {
        r.funds
    }
}
