//! One completion candidate as supplied by a source.

use serde::{Deserialize, Serialize};

use crate::edit::{Edit, RangeEdit};

/// Preview documentation attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub text: String,
    /// Filetype/syntax hint for highlighting the preview.
    pub syntax: String,
}

/// A completion candidate.
///
/// Use [`Candidate::new`] and chain `with_*` builders for the optional
/// fields. `label` is what the UI shows; `sort_by`, when non-empty, is
/// what the candidate is matched and ranked against instead of the label.
///
/// `weight_adjust` and `tie_breaker` are declared by the producing source:
/// the weight biases ranking between sources once string similarity ties,
/// and the tie-breaker is the deterministic last-resort discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub source: String,
    pub label: String,
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub weight_adjust: f32,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub doc: Option<Doc>,
    #[serde(default)]
    pub icon_match: Option<String>,
    #[serde(default)]
    pub preselect: bool,
    pub primary_edit: Edit,
    #[serde(default)]
    pub secondary_edits: Vec<RangeEdit>,
    #[serde(default)]
    pub tie_breaker: u32,
}

impl Candidate {
    /// New candidate whose primary edit inserts the label verbatim.
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            source: source.into(),
            primary_edit: Edit::plain(label.clone()),
            label,
            sort_by: String::new(),
            weight_adjust: 0.0,
            kind: String::new(),
            doc: None,
            icon_match: None,
            preselect: false,
            secondary_edits: Vec::new(),
            tie_breaker: 0,
        }
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn with_weight_adjust(mut self, weight_adjust: f32) -> Self {
        self.weight_adjust = weight_adjust;
        self
    }

    pub fn with_tie_breaker(mut self, tie_breaker: u32) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_primary_edit(mut self, edit: Edit) -> Self {
        self.primary_edit = edit;
        self
    }

    pub fn preselected(mut self) -> Self {
        self.preselect = true;
        self
    }

    /// The text this candidate is matched and ranked against.
    pub fn match_text(&self) -> &str {
        if self.sort_by.is_empty() {
            &self.label
        } else {
            &self.sort_by
        }
    }
}
