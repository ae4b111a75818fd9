//! Keyword tables.
//!
//! Two tables, used in different places of the decision list:
//! 1. **Leading keywords**: recognized outside rule bodies at the cursor
//!    (`rule` and `import` only; `private`, `global` and `include` stay
//!    plain text there).
//! 2. **Condition keywords**: operators and built-ins recognized as whole
//!    words inside the `condition` section.
//!
//! Both lookups use the word length as a first-pass filter before
//! comparing text.

use crate::cursor::is_word_char;

/// Match a leading keyword at the start of `rest`.
///
/// The keyword must not run into a word character (`rules` is not `rule`).
/// Returns the keyword text so the caller can advance past it.
pub(crate) fn leading_keyword(rest: &str) -> Option<&'static str> {
    let word_len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    let keyword = match &rest[..word_len] {
        "rule" => "rule",
        "import" => "import",
        _ => return None,
    };
    Some(keyword)
}

/// Look up a word in the `condition` section keyword table.
///
/// `true` and `false` are not in this table; they classify as boolean values.
pub(crate) fn is_condition_keyword(word: &str) -> bool {
    match word.len() {
        2 => matches!(word, "at" | "in" | "of" | "or"),
        3 => matches!(word, "all" | "and" | "any" | "for" | "not"),
        4 => matches!(word, "int8" | "none" | "them"),
        5 => matches!(word, "int16" | "int32" | "uint8"),
        6 => matches!(word, "int8be" | "uint16" | "uint32"),
        7 => matches!(
            word,
            "defined" | "iequals" | "int16be" | "int32be" | "matches" | "uint8be"
        ),
        8 => matches!(
            word,
            "contains" | "endswith" | "filesize" | "uint16be" | "uint32be"
        ),
        9 => matches!(word, "icontains" | "iendswith"),
        10 => matches!(word, "entrypoint" | "startswith"),
        11 => matches!(word, "istartswith"),
        _ => false,
    }
}

/// Check if a word is a boolean literal.
#[inline]
pub(crate) fn is_boolean(word: &str) -> bool {
    matches!(word, "true" | "false")
}
