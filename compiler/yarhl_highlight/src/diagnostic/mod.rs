//! Positioned diagnostics.
//!
//! The tokenizer only appends messages to its warning log. The driver pairs
//! each new entry with the token that raised it.

use std::fmt;

use crate::LineColumn;

/// A soft diagnostic raised while scanning a line.
///
/// Diagnostics never stop the scan; they are reported alongside the tokens.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    /// Start of the offending token.
    pub at: LineColumn,
    /// Text of the offending token.
    pub lexeme: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(at: LineColumn, lexeme: &str, message: &str) -> Self {
        Diagnostic {
            at,
            lexeme: lexeme.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// `3:14: warning: Undeclared variable. (`$x`)`, with one-based line and column.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: warning: {} (`{}`)",
            self.at.line + 1,
            self.at.column + 1,
            self.message,
            self.lexeme
        )
    }
}
