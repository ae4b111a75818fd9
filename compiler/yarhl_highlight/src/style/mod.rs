//! Editor style classes.
//!
//! Maps a [`Classification`] onto the space-separated class names an
//! editor theme expects. The `oblique-text` prefix marks
//! tokens inside a rule body.

use yarhl_lexer::Classification;

/// Style class for a token, or `None` for unstyled plain text.
///
/// The most specific tag wins: comments, then diagnostics, keywords,
/// declarations and references, and finally values.
pub fn style_name(class: Classification) -> Option<&'static str> {
    let oblique = class.in_rule_body();

    if class.contains(Classification::COMMENT) {
        return Some("comment");
    }
    if class.contains(Classification::VARIABLE_UNDECLARED) {
        return Some("string error");
    }
    if class.contains(Classification::KEYWORD) {
        return Some(if oblique { "oblique-text keyword" } else { "keyword" });
    }
    if class.intersects(Classification::VARIABLE_DECLARATION | Classification::VARIABLE_REFERENCE) {
        return Some("oblique-text variable-2");
    }
    if class.contains(Classification::IDENTIFIER_DECLARATION) {
        return Some("oblique-text variable-3");
    }
    if class.intersects(Classification::VALUE_NUMERIC | Classification::VALUE_BOOLEAN) {
        return Some("oblique-text number-2");
    }
    if class.contains(Classification::VALUE_HEX_PATTERN) {
        return Some("oblique-text hex-2");
    }
    if class.contains(Classification::VALUE_STRING) {
        return Some(if oblique { "oblique-text string" } else { "string" });
    }
    oblique.then_some("oblique-text")
}

#[cfg(test)]
mod tests;
