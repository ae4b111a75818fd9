use super::*;
use pretty_assertions::assert_eq;
use yarhl_lexer::{tokenize_line, ScanState};

const RB: Classification = Classification::RULE_BODY;

#[test]
fn plain_text_outside_rules_is_unstyled() {
    assert_eq!(style_name(Classification::PLAIN_TEXT), None);
    assert_eq!(style_name(Classification::empty()), None);
}

#[test]
fn keywords() {
    assert_eq!(style_name(Classification::KEYWORD), Some("keyword"));
    assert_eq!(
        style_name(Classification::KEYWORD | RB),
        Some("oblique-text keyword")
    );
    assert_eq!(
        style_name(Classification::SECTION_HEADER | Classification::KEYWORD | RB),
        Some("oblique-text keyword")
    );
}

#[test]
fn declarations_and_references() {
    assert_eq!(
        style_name(Classification::VARIABLE_DECLARATION | RB),
        Some("oblique-text variable-2")
    );
    assert_eq!(
        style_name(Classification::VARIABLE_REFERENCE | RB),
        Some("oblique-text variable-2")
    );
    assert_eq!(
        style_name(Classification::IDENTIFIER_DECLARATION | RB),
        Some("oblique-text variable-3")
    );
    assert_eq!(
        style_name(Classification::VARIABLE_UNDECLARED),
        Some("string error")
    );
}

#[test]
fn values() {
    assert_eq!(
        style_name(Classification::VALUE_NUMERIC | RB),
        Some("oblique-text number-2")
    );
    assert_eq!(
        style_name(Classification::VALUE_BOOLEAN | RB),
        Some("oblique-text number-2")
    );
    assert_eq!(
        style_name(Classification::VALUE_HEX_PATTERN | RB),
        Some("oblique-text hex-2")
    );
    assert_eq!(
        style_name(Classification::VALUE_STRING | RB),
        Some("oblique-text string")
    );
    assert_eq!(
        style_name(Classification::PLAIN_TEXT | Classification::VALUE_STRING),
        Some("string")
    );
}

#[test]
fn structural_tokens() {
    assert_eq!(
        style_name(Classification::BOUNDARY_MARKER | RB),
        Some("oblique-text")
    );
    assert_eq!(
        style_name(Classification::PLAIN_TEXT | RB),
        Some("oblique-text")
    );
    assert_eq!(style_name(Classification::COMMENT), Some("comment"));
}

#[test]
fn styles_for_a_scanned_rule() {
    let mut state = ScanState::new();
    let lines = [
        "rule demo {",
        "  meta:",
        "    author = \"a\"",
        "  strings:",
        "    $a = { AA BB }",
        "  condition:",
        "    $a and $b // why",
        "}",
    ];
    let styled: Vec<Vec<Option<&str>>> = lines
        .iter()
        .map(|&line| {
            tokenize_line(line, &mut state)
                .into_iter()
                .filter(|t| !t.lexeme.trim().is_empty())
                .map(|t| style_name(t.class))
                .collect()
        })
        .collect();

    assert_eq!(styled[0][0], Some("keyword"));
    assert_eq!(styled[0].last().copied().flatten(), Some("oblique-text"));
    assert_eq!(styled[1], vec![Some("oblique-text keyword")]);
    assert_eq!(styled[2][0], Some("oblique-text variable-3"));
    assert!(styled[2][1..]
        .iter()
        .all(|s| *s == Some("oblique-text string")));
    assert_eq!(styled[4][0], Some("oblique-text variable-2"));
    assert!(styled[4][1..].iter().all(|s| *s == Some("oblique-text hex-2")));
    assert_eq!(
        styled[6],
        vec![
            Some("oblique-text variable-2"),
            Some("oblique-text keyword"),
            Some("string error"),
            Some("comment"),
        ]
    );
    assert_eq!(styled[7], vec![Some("oblique-text")]);
}
