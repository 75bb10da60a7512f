//! Quotation conversion pipeline.
//!
//! Turns a pasted block of tire-price lines into a WhatsApp-ready message:
//! parse raw text into non-blank lines, group them four at a time into
//! [`TireRecord`]s, then render through the selected [`Format`] template.
//! The pipeline is stateless; every conversion recomputes from scratch.

pub mod parser;
pub mod price;
pub mod render;

use crate::error::Result;
use crate::types::Format;

/// Run the full parse → group → render pipeline over raw input text.
///
/// The caller is responsible for rejecting empty input beforehand; an
/// input with no complete record still renders (retail boilerplate, or
/// empty wholesale text).
pub fn convert(input: &str, format: Format) -> Result<String> {
    let lines = parser::non_blank_lines(input);
    let records = parser::group_records(&lines);
    render::render(&records, format)
}
