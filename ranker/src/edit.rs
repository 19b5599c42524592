//! The edits a candidate may apply when accepted.
//!
//! A closed sum over the four edit shapes sources produce. Range positions
//! are `(row, col)` pairs, end-exclusive like LSP, with the column unit
//! fixed by `OffsetEncoding`.

use serde::{Deserialize, Serialize};

/// `(row, col)` position; the column unit depends on the edit's encoding.
pub type TextPos = (u32, u32);

/// Column unit for range edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetEncoding {
    Utf8,
    Utf16,
}

/// Snippet body dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetGrammar {
    Lsp,
    Snu,
}

/// Inserts `new_text` at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainEdit {
    pub new_text: String,
}

/// Replaces `[begin, end)` with `new_text`.
///
/// `fallback` is the plain text to insert instead when the range can no
/// longer be trusted (the buffer moved under the candidate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEdit {
    pub new_text: String,
    pub fallback: String,
    pub begin: TextPos,
    pub end: TextPos,
    pub encoding: OffsetEncoding,
}

/// Inserts a snippet body at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEdit {
    pub new_text: String,
    pub grammar: SnippetGrammar,
}

/// Replaces a range with a snippet body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRangeEdit {
    pub new_text: String,
    pub fallback: String,
    pub begin: TextPos,
    pub end: TextPos,
    pub encoding: OffsetEncoding,
    pub grammar: SnippetGrammar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edit {
    Plain(PlainEdit),
    Range(RangeEdit),
    Snippet(SnippetEdit),
    SnippetRange(SnippetRangeEdit),
}

impl Edit {
    /// Plain insertion of `text`.
    pub fn plain(text: impl Into<String>) -> Self {
        Edit::Plain(PlainEdit {
            new_text: text.into(),
        })
    }

    /// The text this edit inserts, whatever its shape.
    pub fn new_text(&self) -> &str {
        match self {
            Edit::Plain(e) => &e.new_text,
            Edit::Range(e) => &e.new_text,
            Edit::Snippet(e) => &e.new_text,
            Edit::SnippetRange(e) => &e.new_text,
        }
    }
}

/// Collapses an edit to the safest shape that still inserts something.
///
/// Range edits lose their range and keep only the fallback text: once a
/// candidate is replayed outside the request it was produced for, the
/// range cannot be trusted. A snippet-range edit whose fallback matches
/// its body stays a snippet (the body is still worth expanding); otherwise
/// it degrades all the way to a plain insertion of the fallback.
pub fn sanitize(edit: &Edit) -> Edit {
    match edit {
        Edit::SnippetRange(e) if e.fallback == e.new_text => Edit::Snippet(SnippetEdit {
            new_text: e.new_text.clone(),
            grammar: e.grammar,
        }),
        Edit::SnippetRange(e) => Edit::plain(e.fallback.clone()),
        Edit::Snippet(e) => Edit::Snippet(e.clone()),
        Edit::Range(e) => Edit::plain(e.fallback.clone()),
        Edit::Plain(e) => Edit::Plain(e.clone()),
    }
}
