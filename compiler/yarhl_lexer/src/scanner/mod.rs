//! The tokenizer: one classified token per call.
//!
//! # Decision order
//!
//! Each call walks an ordered list of guarded match attempts and stops at
//! the first that applies. The order is load-bearing:
//!
//! 1. leading keyword (outside rule bodies and comments)
//! 2. `//` line comment
//! 3. `/*` opens a block comment
//! 4. `*/` closes it
//! 5. text inside a block comment
//! 6. `{` opens a rule body
//! 7. `}` closes it
//! 8. rule-body content: section headers, declarations, references, values
//! 9. plain text outside rule bodies
//!
//! Steps 6 and 7 are skipped while a declaration line is being classified,
//! so braces inside a byte pattern are never taken as rule delimiters. A
//! declaration cut off after its `=` keeps that mode for the next line.
//!
//! Every path consumes at least one character, so a host loop that calls
//! [`next_token`] until the line is exhausted always terminates.

use crate::cursor::{Cursor, Position};
use crate::keywords;
use crate::state::{ScanState, Section, UNDECLARED_VARIABLE};
use crate::value::{classify_assigned_value, value_on_next_line, AssignedValue};
use crate::Classification;

/// A classified span of the current line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub lexeme: &'src str,
    pub class: Classification,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(lexeme: &'src str, class: Classification) -> Self {
        Self { lexeme, class }
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.lexeme.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

/// Produce the next token of `line` and advance `cursor` past it.
///
/// `cursor` must point at an unconsumed character of `line`. Calling with an
/// exhausted cursor returns an empty `PLAIN_TEXT` token and leaves the
/// cursor where it is; every other call advances by at least one character.
///
/// `state` is the carry-over from the previous call, on this line or the
/// previous one. Declarations and warnings observed in the consumed span
/// are recorded in it.
pub fn next_token<'src>(
    line: &'src str,
    cursor: &mut Position,
    state: &mut ScanState,
) -> Token<'src> {
    let mut scan = Cursor::new(line, *cursor);
    if scan.is_eof() {
        return Token::new("", Classification::PLAIN_TEXT);
    }
    if cursor.is_line_start() {
        state.begin_line();
    }

    let start = scan.pos();
    let class = classify(&mut scan, state);
    debug_assert!(scan.pos() > start, "token must consume at least one character");

    *cursor = scan.position();
    Token::new(scan.slice_from(start), class)
}

/// Tokenize a whole line, starting at offset 0.
pub fn tokenize_line<'src>(line: &'src str, state: &mut ScanState) -> Vec<Token<'src>> {
    let mut cursor = Position::start();
    let mut tokens = Vec::new();
    while !cursor.is_exhausted(line) {
        tokens.push(next_token(line, &mut cursor, state));
    }
    tokens
}

fn classify(scan: &mut Cursor<'_>, state: &mut ScanState) -> Classification {
    // 1. Leading keyword
    if !state.inside_rule_definition && !state.inside_comment {
        if let Some(keyword) = keywords::leading_keyword(scan.rest()) {
            scan.advance_bytes(keyword.len());
            return Classification::KEYWORD;
        }
    }

    if !state.inside_comment {
        // 2. Line comment
        if scan.starts_with("//") {
            scan.eat_to_end();
            return Classification::COMMENT;
        }
        // 3. Block comment entry
        if scan.starts_with("/*") {
            state.inside_comment = true;
            scan.advance_bytes(2);
            return Classification::COMMENT;
        }
    } else {
        // 4. Block comment exit, 5. comment text
        if scan.starts_with("*/") {
            state.inside_comment = false;
            scan.advance_bytes(2);
        } else {
            scan.eat_until("*/");
        }
        return Classification::COMMENT;
    }

    if !state.variable_assignment_line {
        // 6. Rule body entry
        if !state.inside_rule_definition && scan.starts_with("{") {
            state.enter_rule_body();
            scan.advance();
            return Classification::BOUNDARY_MARKER | Classification::RULE_BODY;
        }
        // 7. Rule body exit
        if state.inside_rule_definition && scan.starts_with("}") {
            state.exit_rule_body();
            scan.advance();
            return Classification::BOUNDARY_MARKER | Classification::RULE_BODY;
        }
    }

    if state.inside_rule_definition {
        // 8.
        rule_body(scan, state)
    } else {
        // 9.
        scan.eat_plain();
        Classification::PLAIN_TEXT
    }
}

fn rule_body(scan: &mut Cursor<'_>, state: &mut ScanState) -> Classification {
    // a. Section header
    if let Some(section) = section_header(scan) {
        state.enter_section(section);
        return Classification::SECTION_HEADER | Classification::KEYWORD | Classification::RULE_BODY;
    }

    match state.section {
        // b. Variable declaration
        Section::Strings if scan.starts_with("$") => {
            scan.eat_variable();
            state.declare_variable(declared_name(scan.line()));
            state.pending_value = value_on_next_line(scan.line());
            return Classification::VARIABLE_DECLARATION | Classification::RULE_BODY;
        }
        // c. Variable reference
        Section::Condition => {
            state.variable_assignment_line = false;
            if scan.starts_with("$") {
                let name = scan.eat_variable();
                if state.is_declared(name) {
                    return Classification::VARIABLE_REFERENCE | Classification::RULE_BODY;
                }
                state.warn(UNDECLARED_VARIABLE);
                return Classification::VARIABLE_UNDECLARED;
            }
        }
        // d. Identifier declaration
        Section::Meta => {
            if let Some(len) = identifier_len(scan.rest()) {
                scan.advance_bytes(len);
                state.declare_identifier(declared_name(scan.line()));
                state.pending_value = value_on_next_line(scan.line());
                return Classification::IDENTIFIER_DECLARATION | Classification::RULE_BODY;
            }
        }
        Section::Strings | Section::None => {}
    }

    // e. Assigned value
    if state.variable_assignment_line {
        return assigned_value(scan, state);
    }

    // f. Anything else
    let start = scan.pos();
    scan.eat_plain();
    if state.section == Section::Condition {
        let word = scan.slice_from(start);
        if keywords::is_boolean(word) {
            return Classification::VALUE_BOOLEAN | Classification::RULE_BODY;
        }
        if keywords::is_condition_keyword(word) {
            return Classification::KEYWORD | Classification::RULE_BODY;
        }
    }
    Classification::PLAIN_TEXT | Classification::RULE_BODY
}

/// Match and consume a section header at the cursor.
fn section_header(scan: &mut Cursor<'_>) -> Option<Section> {
    for section in [Section::Meta, Section::Strings, Section::Condition] {
        if let Some(header) = section.header() {
            if scan.starts_with(header) {
                scan.advance_bytes(header.len());
                return Some(section);
            }
        }
    }
    None
}

/// Left-hand side of a declaration line: the trimmed text before the first `=`.
fn declared_name(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .split_once('=')
        .map_or(trimmed, |(lhs, _)| lhs)
        .trim()
}

/// Length of a `meta` key at the start of `rest`: a run of characters other
/// than whitespace and `=`, followed by optional whitespace and `=`.
fn identifier_len(rest: &str) -> Option<usize> {
    let len = rest
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    rest[len..].trim_start().starts_with('=').then_some(len)
}

fn assigned_value(scan: &mut Cursor<'_>, state: &mut ScanState) -> Classification {
    let value = classify_assigned_value(scan.line());
    let start = scan.pos();
    scan.eat_value_chunk();

    if value == AssignedValue::HexPattern {
        for c in scan.slice_from(start).chars() {
            match c {
                '{' => state.inside_byte_pattern = true,
                '}' => state.inside_byte_pattern = false,
                _ => {}
            }
        }
    }
    value.classification()
}
