//! End-to-end highlighting of complete rule files.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use yarhl_highlight::style::style_name;
use yarhl_highlight::{highlight, Classification, Counts, HighlightOptions, Highlighted};

const RULES: &str = r#"import "pe"

/*
  Sample rules.
*/
rule suspicious_loader : loader {
  meta:
    author = "analyst"
    version = 2
    is_beta = false
  strings:
    $mz = { 4D 5A }
    $api = "VirtualAlloc" wide ascii
    $blob = { 6A 40
              68 00 30 00 00 }
  condition:
    $mz at 0 and $api and $blob and not $missing
}

private rule helper {
  condition:
    $mz and filesize < 100KB // shared with the rule above
}
"#;

fn styled_line(result: &Highlighted, line: usize) -> Vec<(String, Option<&'static str>)> {
    result.lines[line]
        .iter()
        .map(|t| (t.text.clone(), style_name(t.class)))
        .collect()
}

fn quiet() -> HighlightOptions {
    HighlightOptions::default().with_trivia(false)
}

#[test]
fn counters_for_the_whole_file() {
    let result = highlight(RULES, HighlightOptions::default());
    assert_eq!(
        result.counts,
        Counts {
            identifiers: 3,
            variables: 3,
            warnings: 1,
        }
    );
    // Trailing newline: one extra empty line.
    assert_eq!(result.lines.len(), RULES.lines().count() + 1);
}

#[test]
fn header_lines() {
    let result = highlight(RULES, quiet());
    assert_eq!(
        styled_line(&result, 0),
        vec![
            ("import".to_owned(), Some("keyword")),
            ("\"".to_owned(), None),
            ("pe".to_owned(), None),
            ("\"".to_owned(), None),
        ]
    );
    for line in 2..=4 {
        assert!(result.lines[line]
            .iter()
            .all(|t| t.class == Classification::COMMENT));
    }
}

#[test]
fn wrapped_byte_pattern_stays_a_value() {
    let result = highlight(RULES, quiet());
    let continuation = styled_line(&result, 14);
    assert!(!continuation.is_empty());
    assert!(continuation
        .iter()
        .all(|(_, style)| *style == Some("oblique-text hex-2")));
    // The closing brace of the pattern did not end the rule.
    assert_eq!(
        styled_line(&result, 15),
        vec![("condition:".to_owned(), Some("oblique-text keyword"))]
    );
}

#[test]
fn modifiers_make_generic_string_content() {
    let result = highlight(RULES, quiet());
    let line = styled_line(&result, 12);
    assert_eq!(line[0], ("$api".to_owned(), Some("oblique-text variable-2")));
    assert!(line[1..].iter().all(|(_, style)| *style == Some("string")));
}

#[test]
fn condition_line() {
    let result = highlight(RULES, quiet());
    assert_eq!(
        styled_line(&result, 16),
        vec![
            ("$mz".to_owned(), Some("oblique-text variable-2")),
            ("at".to_owned(), Some("oblique-text keyword")),
            ("0".to_owned(), Some("oblique-text")),
            ("and".to_owned(), Some("oblique-text keyword")),
            ("$api".to_owned(), Some("oblique-text variable-2")),
            ("and".to_owned(), Some("oblique-text keyword")),
            ("$blob".to_owned(), Some("oblique-text variable-2")),
            ("and".to_owned(), Some("oblique-text keyword")),
            ("not".to_owned(), Some("oblique-text keyword")),
            ("$missing".to_owned(), Some("string error")),
        ]
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].lexeme, "$missing");
    assert_eq!(result.diagnostics[0].at.line, 16);
}

#[test]
fn declarations_carry_across_rules() {
    let result = highlight(RULES, quiet());
    let line = styled_line(&result, 21);
    assert_eq!(line[0], ("$mz".to_owned(), Some("oblique-text variable-2")));
    assert_eq!(
        line.last(),
        Some(&(
            "// shared with the rule above".to_owned(),
            Some("comment")
        ))
    );
    // No new warning from the second rule.
    assert_eq!(result.counts.warnings, 1);
}

#[test]
fn line_counts_track_declarations() {
    let result = highlight(RULES, HighlightOptions::default());
    let variables: Vec<usize> = result.line_counts[10..=16]
        .iter()
        .map(|c| c.variables)
        .collect();
    assert_eq!(variables, vec![0, 0, 1, 2, 3, 3, 3]);
    assert_eq!(result.line_counts[17].warnings, 1);
}
