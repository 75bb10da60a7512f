//! Line parsing and record grouping.

use crate::constants::record::LINES_PER_RECORD;
use crate::types::TireRecord;

/// Split raw input into trimmed, non-blank lines, preserving order.
///
/// Blank-line removal is the only filtering; the parser never reorders
/// or merges lines, and an input that filters down to nothing is the
/// caller's concern.
pub fn non_blank_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Group lines into consecutive four-line records, in input order.
///
/// A trailing group with fewer than four lines is dropped entirely: no
/// partial record is ever produced and no error is raised for the
/// discarded lines. This silent truncation is the documented contract of
/// the input format, not an accident — callers must not "repair" it by
/// padding.
pub fn group_records(lines: &[&str]) -> Vec<TireRecord> {
    lines
        .chunks_exact(LINES_PER_RECORD)
        .map(|chunk| TireRecord {
            description: chunk[0].to_string(),
            origin: chunk[1].to_string(),
            price_text: chunk[2].to_string(),
            warranty_years: chunk[3].to_string(),
        })
        .collect()
}
