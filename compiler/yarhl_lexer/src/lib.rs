//! Line-driven tokenizer for YARA-style detection rules.
//!
//! Drives syntax highlighting and live diagnostics inside a rule editor.
//! The tokenizer is a single-pass state machine: every call to
//! [`next_token`] consumes at least one character of the current line,
//! returns a [`Token`] with a [`Classification`], and updates the
//! line-spanning [`ScanState`] (open block comments, the active rule
//! section, declared variables and identifiers, warnings).
//!
//! # Architecture
//!
//! ```text
//! host line loop → next_token(line, &mut Position, &mut ScanState) → Token
//!                                                   ↘ ScanState::counts()
//! ```
//!
//! The crate performs no I/O and never pushes values anywhere: a host reads
//! [`ScanState::counts`] (conventionally at the start of each line) to
//! update its counters, and may snapshot the `ScanState` at line boundaries
//! to re-highlight an edited region without rescanning the whole document.
//!
//! # Example
//!
//! ```
//! use yarhl_lexer::{next_token, Classification, Position, ScanState};
//!
//! let mut state = ScanState::new();
//! let line = "rule demo {";
//! let mut cursor = Position::start();
//! let first = next_token(line, &mut cursor, &mut state);
//! assert_eq!(first.lexeme, "rule");
//! assert!(first.class.contains(Classification::KEYWORD));
//! ```

mod classification;
mod cursor;
mod keywords;
mod scanner;
mod state;
mod value;

pub use classification::Classification;
pub use cursor::Position;
pub use scanner::{next_token, tokenize_line, Token};
pub use state::{Counts, ScanState, Section, UNDECLARED_VARIABLE};
pub use value::{classify_assigned_value, AssignedValue};
