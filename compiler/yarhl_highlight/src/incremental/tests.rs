use super::*;
use crate::highlight;
use pretty_assertions::assert_eq;
use yarhl_lexer::Classification;

const DOC: &str = "rule a {
  strings:
    $x = \"x\"
  condition:
    $x
}
rule b {
  condition:
    true
}";

fn doc() -> IncrementalHighlighter {
    IncrementalHighlighter::from_source(DOC, HighlightOptions::default())
}

fn assert_matches_full_scan(doc: &IncrementalHighlighter) {
    let source: Vec<&str> = (0..doc.line_count()).filter_map(|i| doc.line(i)).collect();
    let full = highlight(&source.join("\n"), doc.options());
    assert_eq!(doc.to_highlighted(), full);
    assert_eq!(doc.state().counts(), full.counts);
}

#[test]
fn from_source_matches_highlight() {
    let doc = doc();
    assert_eq!(doc.line_count(), 10);
    assert_eq!(doc.to_highlighted(), highlight(DOC, HighlightOptions::default()));
}

#[test]
fn new_document_is_empty() {
    let doc = IncrementalHighlighter::new(HighlightOptions::default());
    assert_eq!(doc.line_count(), 0);
    assert_eq!(doc.line(0), None);
    assert_eq!(doc.tokens(0), None);
    assert_eq!(doc.counts_at(0), None);
    assert_eq!(doc.counts(), Counts::default());
    assert!(doc.diagnostics().is_empty());
}

#[test]
fn local_edit_converges_immediately() {
    let mut doc = doc();
    // Same classification shape, different value: nothing downstream changes.
    let range = doc.replace_line(8, "    false");
    assert_eq!(range, Some(8..9));
    assert_eq!(doc.line(8), Some("    false"));
    assert_matches_full_scan(&doc);
}

#[test]
fn opening_a_comment_rescans_to_the_end() {
    let mut doc = doc();
    let range = doc.replace_line(5, "} /*");
    assert_eq!(range, Some(5..10));
    assert!(doc.state().inside_comment());
    for line in 6..10 {
        let tokens = doc.tokens(line).unwrap_or_default();
        assert!(
            tokens.iter().all(|t| t.class == Classification::COMMENT),
            "line {line}"
        );
    }
    assert_matches_full_scan(&doc);
}

#[test]
fn new_warning_changes_every_later_state() {
    let mut doc = doc();
    let range = doc.replace_line(4, "    $x and $y");
    assert_eq!(range, Some(4..10));
    assert_eq!(doc.counts().warnings, 1);
    assert_eq!(doc.diagnostics().len(), 1);
    assert_eq!(doc.diagnostics()[0].at, crate::LineColumn::new(4, 11));
    assert_matches_full_scan(&doc);
}

#[test]
fn insert_and_remove_shift_diagnostics() {
    let mut doc = doc();
    doc.replace_line(4, "    $y");
    assert_eq!(doc.diagnostics()[0].at.line, 4);

    doc.insert_line(0, "// header");
    assert_eq!(doc.line_count(), 11);
    assert_eq!(doc.diagnostics()[0].at.line, 5);
    assert_matches_full_scan(&doc);

    doc.remove_line(0);
    assert_eq!(doc.diagnostics()[0].at.line, 4);
    assert_matches_full_scan(&doc);
}

#[test]
fn inserting_a_comment_line_converges() {
    let mut doc = doc();
    let range = doc.insert_line(6, "// second rule");
    assert_eq!(range, 6..7);
    assert_matches_full_scan(&doc);
}

#[test]
fn removing_a_declaration_rescans_to_the_end() {
    let mut doc = doc();
    let range = doc.remove_line(2);
    assert_eq!(range, Some(2..9));
    assert_eq!(doc.counts().variables, 0);
    assert_eq!(doc.counts().warnings, 1);
    assert_matches_full_scan(&doc);
}

#[test]
fn appending_past_the_end() {
    let mut doc = doc();
    let range = doc.insert_line(99, "rule c {");
    assert_eq!(range, 10..11);
    assert!(doc.state().inside_rule_definition());
    assert_matches_full_scan(&doc);

    assert_eq!(doc.remove_line(10), Some(10..10));
    assert!(!doc.state().inside_rule_definition());
    assert_matches_full_scan(&doc);
}

#[test]
fn out_of_range_edits_are_rejected() {
    let mut doc = doc();
    assert_eq!(doc.replace_line(10, "x"), None);
    assert_eq!(doc.remove_line(10), None);
    assert_eq!(doc.line_count(), 10);
}

#[test]
fn counts_at_reflect_line_starts() {
    let doc = doc();
    assert_eq!(doc.counts_at(2).map(|c| c.variables), Some(0));
    assert_eq!(doc.counts_at(3).map(|c| c.variables), Some(1));
}
