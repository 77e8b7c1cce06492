//! Span edits applied against the original source text.
//!
//! Everything outside an edited span is copied through byte-for-byte, which
//! keeps comments and formatting untouched.

/// Replace `start..end` with `replacement`. An empty span is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl SpanEdit {
    pub fn replace(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }
}

/// Apply `edits` to `source`.
///
/// Edits are applied in offset order; an edit overlapping an earlier one is
/// dropped. Insertions at the same offset keep their given order.
pub fn apply_edits(source: &str, mut edits: Vec<SpanEdit>) -> String {
    edits.sort_by_key(|edit| edit.start);

    let extra: usize = edits.iter().map(|edit| edit.replacement.len()).sum();
    let mut out = String::with_capacity(source.len() + extra);
    let mut cursor = 0;

    for edit in edits {
        if edit.start < cursor || edit.end < edit.start || edit.end > source.len() {
            continue;
        }
        out.push_str(&source[cursor..edit.start]);
        out.push_str(&edit.replacement);
        cursor = edit.end;
    }
    out.push_str(&source[cursor..]);
    out
}
