use crate::{
    Candidate, Edit, OffsetEncoding, RangeEdit, SnippetEdit, SnippetGrammar, SnippetRangeEdit,
    sanitize,
};

fn range_edit(new_text: &str, fallback: &str) -> RangeEdit {
    RangeEdit {
        new_text: new_text.to_string(),
        fallback: fallback.to_string(),
        begin: (3, 0),
        end: (3, 7),
        encoding: OffsetEncoding::Utf16,
    }
}

#[test]
fn sanitize_plain_passes_through() {
    let edit = Edit::plain("spawn");
    assert_eq!(sanitize(&edit), edit);
}

#[test]
fn sanitize_snippet_passes_through() {
    let edit = Edit::Snippet(SnippetEdit {
        new_text: "for ${1:x} in ${2:xs}".to_string(),
        grammar: SnippetGrammar::Lsp,
    });
    assert_eq!(sanitize(&edit), edit);
}

#[test]
fn sanitize_range_degrades_to_fallback_text() {
    let edit = Edit::Range(range_edit("spawn(${1})", "spawn"));
    assert_eq!(sanitize(&edit), Edit::plain("spawn"));
}

#[test]
fn sanitize_snippet_range_keeps_snippet_when_fallback_matches() {
    let edit = Edit::SnippetRange(SnippetRangeEdit {
        new_text: "spawn".to_string(),
        fallback: "spawn".to_string(),
        begin: (0, 0),
        end: (0, 5),
        encoding: OffsetEncoding::Utf8,
        grammar: SnippetGrammar::Snu,
    });
    assert_eq!(
        sanitize(&edit),
        Edit::Snippet(SnippetEdit {
            new_text: "spawn".to_string(),
            grammar: SnippetGrammar::Snu,
        })
    );
}

#[test]
fn sanitize_snippet_range_degrades_when_fallback_differs() {
    let edit = Edit::SnippetRange(SnippetRangeEdit {
        new_text: "spawn(${1})".to_string(),
        fallback: "spawn".to_string(),
        begin: (0, 0),
        end: (0, 5),
        encoding: OffsetEncoding::Utf8,
        grammar: SnippetGrammar::Lsp,
    });
    assert_eq!(sanitize(&edit), Edit::plain("spawn"));
}

#[test]
fn new_text_reads_every_variant() {
    assert_eq!(Edit::plain("a").new_text(), "a");
    assert_eq!(Edit::Range(range_edit("b", "x")).new_text(), "b");
}

#[test]
fn candidate_deserializes_with_source_defaults() {
    let json = r#"{
        "source": "lsp",
        "label": "spawn",
        "primary_edit": { "plain": { "new_text": "spawn" } }
    }"#;
    let c: Candidate = serde_json::from_str(json).expect("minimal candidate");
    assert_eq!(c.label, "spawn");
    assert_eq!(c.weight_adjust, 0.0);
    assert_eq!(c.tie_breaker, 0);
    assert!(c.sort_by.is_empty());
    assert!(!c.preselect);
    assert_eq!(c.match_text(), "spawn");
}

#[test]
fn candidate_builder_fills_optional_fields() {
    let c = Candidate::new("tags", "main")
        .with_sort_by("0main")
        .with_weight_adjust(0.5)
        .with_tie_breaker(9)
        .with_kind("Function")
        .preselected();
    assert_eq!(c.match_text(), "0main");
    assert!(c.preselect);
    assert_eq!(c.primary_edit.new_text(), "main");
}
