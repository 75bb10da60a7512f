//! Price magnitude parsing and VAT arithmetic.
//!
//! Prices are held as integer fils (hundredths of a dirham) so the VAT
//! computation stays exact. A binary float would put `250.50 × 1.05`
//! just below the half-fils midpoint and round the wrong way.

use std::fmt;

use crate::constants::price::{CURRENCY_MARKER, VAT_RATE_PERCENT};
use crate::error::{Error, Result};

/// Upper bound on a parsed magnitude, keeping the VAT multiply in u64.
const MAX_FILS: u64 = u64::MAX / (100 + VAT_RATE_PERCENT);

/// A price magnitude in fils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    /// Parse a price field into a magnitude.
    ///
    /// Every occurrence of the literal currency marker `"AED"` is removed
    /// first, then the remainder is trimmed and read as a non-negative
    /// decimal amount with at most two fractional digits. Anything else
    /// is an [`Error::InvalidPrice`] naming the original field text.
    pub fn parse(price_text: &str) -> Result<Self> {
        let magnitude = price_text.replace(CURRENCY_MARKER, "");
        parse_fils(magnitude.trim())
            .map(Self)
            .ok_or_else(|| Error::invalid_price(price_text))
    }

    /// Construct a price from a whole number of fils.
    #[must_use]
    pub const fn from_fils(fils: u64) -> Self {
        Self(fils)
    }

    /// The VAT-inclusive price: magnitude × 1.05, rounded half-up to
    /// whole fils (midpoint away from zero).
    #[must_use]
    pub const fn vat_inclusive(self) -> Self {
        // parse() bounds magnitudes at MAX_FILS, so this never saturates
        // for parsed prices
        Self((self.0.saturating_mul(100 + VAT_RATE_PERCENT).saturating_add(50)) / 100)
    }
}

impl fmt::Display for Price {
    /// Formats with exactly two decimal places, e.g. `1050.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Read a bare decimal magnitude ("1000", "250.50", ".5") into fils.
fn parse_fils(s: &str) -> Option<u64> {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let frac_fils = match frac.len() {
        0 => 0,
        1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
        2 => frac.parse::<u64>().ok()?,
        _ => return None,
    };
    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    whole
        .checked_mul(100)?
        .checked_add(frac_fils)
        .filter(|fils| *fils <= MAX_FILS)
}
