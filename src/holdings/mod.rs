//! Parsing 13F information tables into [`Position`]s.
//!
//! Filers have published information tables under several namespace URIs over
//! the years (and sometimes none), with no version marker. The parser tries the
//! document's own root namespace, then every known one, then unqualified names.

mod model;
mod parse;
pub(crate) mod xml;

pub use model::{AmountType, InvestmentDiscretion, Position};
pub use parse::KNOWN_NAMESPACES;

use crate::core::EdgarError;

/// Extracts every position from an information-table document.
///
/// Entries without an issuer name are skipped. `weight_pct` is left at zero; it
/// depends on the fund's total and is filled in by [`crate::fund::process_fund`].
///
/// # Errors
///
/// Returns [`EdgarError::Malformed`] if the bytes are not well-formed XML, even
/// after retrying without the XML declaration.
///
/// # Example
///
/// ```
/// let xml = br#"<informationTable><infoTable>
///     <nameOfIssuer>APPLE INC</nameOfIssuer><cusip>037833100</cusip><value>1234</value>
/// </infoTable></informationTable>"#;
/// let positions = thirteenf_rs::holdings::parse_information_table(xml).unwrap();
/// assert_eq!(positions[0].value_usd, 1_234_000);
/// assert_eq!(positions[0].class_title, "COM");
/// ```
pub fn parse_information_table(xml: &[u8]) -> Result<Vec<Position>, EdgarError> {
    parse::parse_information_table(xml)
}
