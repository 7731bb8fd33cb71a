//! Output generation.
//!
//! The output is the original source with each rewritten literal replaced at
//! its byte range. Everything between edits is copied verbatim, so formatting,
//! comments and unrelated code survive unchanged.

use std::ops::Range;

/// A replacement of one literal in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range of the literal in the original source.
    pub range: Range<usize>,
    /// The literal as it appears in the output.
    pub replacement: String,
}

/// Applies edits to `source`.
///
/// Edits must be sorted by start offset and must not overlap.
pub(crate) fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let growth: usize = edits
        .iter()
        .map(|edit| edit.replacement.len().saturating_sub(edit.range.len()))
        .sum();
    let mut out = String::with_capacity(source.len() + growth);
    let mut cursor = 0;

    for edit in edits {
        debug_assert!(edit.range.start >= cursor, "overlapping edits");
        out.push_str(&source[cursor..edit.range.start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    out.push_str(&source[cursor..]);

    out
}
