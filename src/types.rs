//! Core type definitions for the conversion pipeline.
//!
//! This module names the two contracts the rest of the crate builds on:
//! the output [`Format`] selection and the four-field [`TireRecord`] that
//! the grouper produces from raw input lines.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The selected output template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Customer-facing template with emphasis styling and a fixed
    /// closing services block.
    #[default]
    Retail,
    /// Trade template with a computed VAT-inclusive figure and no
    /// closing boilerplate.
    Wholesale,
}

impl Format {
    /// Returns both format variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Retail, Self::Wholesale]
    }

    /// Returns the human-readable name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Retail => "Retail",
            Self::Wholesale => "Wholesale",
        }
    }

    /// Switch to the other format (the selection is exactly two-valued).
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Retail => Self::Wholesale,
            Self::Wholesale => Self::Retail,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Ok(Self::Retail),
            "wholesale" => Ok(Self::Wholesale),
            other => Err(Error::config(
                format!("unknown format {other:?}"),
                "Use \"retail\" or \"wholesale\"",
            )),
        }
    }
}

/// One logical tire entry, built from exactly four consecutive non-blank
/// input lines.
///
/// The fields are positional: the grouper assigns them in input order and
/// never inspects their content. Validation, where it exists, happens in
/// the wholesale renderer's price step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TireRecord {
    /// Free-form tire description (e.g. "265/65R17 Dueler H/T").
    pub description: String,
    /// Origin line, conventionally `MADE IN <COUNTRY>`.
    pub origin: String,
    /// Price line as typed, conventionally `AED <amount>`.
    pub price_text: String,
    /// Warranty duration in years, as typed.
    pub warranty_years: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn format_default_is_retail() {
        assert_eq!(Format::default(), Format::Retail);
    }

    #[test]
    fn format_toggle_flips_both_ways() {
        assert_eq!(Format::Retail.toggle(), Format::Wholesale);
        assert_eq!(Format::Wholesale.toggle(), Format::Retail);
    }

    #[test]
    fn format_from_str_is_case_insensitive() {
        assert_eq!("retail".parse::<Format>().unwrap(), Format::Retail);
        assert_eq!("Wholesale".parse::<Format>().unwrap(), Format::Wholesale);
        assert_eq!(" WHOLESALE ".parse::<Format>().unwrap(), Format::Wholesale);
    }

    #[test]
    fn format_from_str_rejects_unknown() {
        assert!("bulk".parse::<Format>().is_err());
    }
}
