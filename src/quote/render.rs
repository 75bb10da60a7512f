//! Retail and wholesale message templates.
//!
//! Both templates emit literal WhatsApp text: the asterisks are emphasis
//! markers and the emoji are message content, not markup. The retail
//! template mentions VAT only as a static label; the wholesale template
//! actually computes it. That asymmetry is deliberate and must stay.

use crate::error::Result;
use crate::quote::price::Price;
use crate::types::{Format, TireRecord};

const RETAIL_HEADER: &str = "🚗 *Quotation for Tires* 🚗\n\n";

const RETAIL_FOOTER: &str = "*Price includes:*\n\
🔧 Free *Tyre Installation*\n\
⚖️ Free *Wheel Balancing*\n\
💨 Free *Nitrogen Filling*\n\
🔄 Free *10,000 KM Tyre Rotation* (Lifetime)\n\
🛠️ Free *Car Inspection*\n\
📏 Free *Alignment Inspection*\n\n\
Let me know if you'd like to proceed! 😊";

/// Render records through the selected format's template.
pub fn render(records: &[TireRecord], format: Format) -> Result<String> {
    match format {
        Format::Retail => Ok(render_retail(records)),
        Format::Wholesale => render_wholesale(records),
    }
}

/// Customer-facing template: emphasized fields, a static VAT label, and
/// the fixed closing services block.
///
/// The header and closing block are always present, even with zero
/// records. No numeric computation happens here.
fn render_retail(records: &[TireRecord]) -> String {
    let mut out = String::from(RETAIL_HEADER);
    for record in records {
        out.push_str(&format!(
            "🛞 *{}*\n🌍 *{}*\n💵 *{}* (Inclusive of 5% VAT)\n📅 *{} Years Warranty*\n\n",
            record.description, record.origin, record.price_text, record.warranty_years,
        ));
    }
    out.push_str(RETAIL_FOOTER);
    out
}

/// Trade template: one block per record with the computed VAT-inclusive
/// figure, blank-line separated, no closing boilerplate.
///
/// Zero records render as empty text. A price field that does not parse
/// aborts the whole render with [`crate::error::Error::InvalidPrice`].
fn render_wholesale(records: &[TireRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        let vat_inclusive = Price::parse(&record.price_text)?.vat_inclusive();
        out.push_str(&format!(
            "Product: *{}*\nOrigin: *{}*\nPrice: *{} per tire* (price inclusive of VAT= {})\nWarranty: *{} Years Warranty*\n\n",
            record.description,
            record.origin,
            record.price_text,
            vat_inclusive,
            record.warranty_years,
        ));
    }
    Ok(out.trim().to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn record(description: &str, origin: &str, price: &str, warranty: &str) -> TireRecord {
        TireRecord {
            description: description.to_string(),
            origin: origin.to_string(),
            price_text: price.to_string(),
            warranty_years: warranty.to_string(),
        }
    }

    #[test]
    fn retail_with_no_records_is_boilerplate_only() {
        let out = render(&[], Format::Retail).unwrap();
        assert!(out.starts_with("🚗 *Quotation for Tires* 🚗"));
        assert!(out.ends_with("Let me know if you'd like to proceed! 😊"));
        assert!(!out.contains('🛞'));
    }

    #[test]
    fn retail_block_emphasizes_all_four_fields() {
        let records = [record("Tire A", "MADE IN JAPAN", "AED 500", "2")];
        let out = render(&records, Format::Retail).unwrap();
        assert!(out.contains("🛞 *Tire A*\n"));
        assert!(out.contains("🌍 *MADE IN JAPAN*\n"));
        assert!(out.contains("💵 *AED 500* (Inclusive of 5% VAT)\n"));
        assert!(out.contains("📅 *2 Years Warranty*\n"));
    }

    #[test]
    fn retail_never_computes_vat() {
        // The 5% figure is a label; the price passes through verbatim.
        let records = [record("Tire A", "MADE IN JAPAN", "AED 1000", "2")];
        let out = render(&records, Format::Retail).unwrap();
        assert!(out.contains("*AED 1000*"));
        assert!(!out.contains("1050"));
    }

    #[test]
    fn retail_tolerates_unparseable_prices() {
        let records = [record("Tire A", "MADE IN JAPAN", "call us", "2")];
        let out = render(&records, Format::Retail).unwrap();
        assert!(out.contains("💵 *call us* (Inclusive of 5% VAT)"));
    }

    #[test]
    fn wholesale_with_no_records_is_empty() {
        assert_eq!(render(&[], Format::Wholesale).unwrap(), "");
    }

    #[test]
    fn wholesale_single_block_is_exact() {
        let records = [record("Tire A", "MADE IN JAPAN", "AED 500", "2")];
        let out = render(&records, Format::Wholesale).unwrap();
        assert_eq!(
            out,
            "Product: *Tire A*\n\
             Origin: *MADE IN JAPAN*\n\
             Price: *AED 500 per tire* (price inclusive of VAT= 525.00)\n\
             Warranty: *2 Years Warranty*"
        );
    }

    #[test]
    fn wholesale_blocks_are_blank_line_separated() {
        let records = [
            record("Tire A", "MADE IN JAPAN", "AED 500", "2"),
            record("Tire B", "MADE IN THAILAND", "AED 250.50", "3"),
        ];
        let out = render(&records, Format::Wholesale).unwrap();
        assert!(out.contains("Warranty: *2 Years Warranty*\n\nProduct: *Tire B*"));
        assert!(out.contains("(price inclusive of VAT= 263.03)"));
        assert!(!out.starts_with('\n'));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn wholesale_rejects_malformed_price() {
        let records = [record("Tire A", "MADE IN JAPAN", "AED n/a", "2")];
        assert!(render(&records, Format::Wholesale).is_err());
    }
}
