//! Highlighting driver for the yarhl tokenizer.
//!
//! `yarhl_lexer` knows how to classify one token. This crate runs it over
//! documents:
//!
//! - [`Driver`] feeds lines through the tokenizer in order, hands tokens and
//!   per-line counters to host-provided sinks, and turns warnings into
//!   positioned [`Diagnostic`]s.
//! - [`highlight`] is the one-shot form for a whole source string.
//! - [`IncrementalHighlighter`] keeps a line-start state snapshot per line and
//!   re-scans only from an edited line until the state converges.
//! - [`style::style_name`] maps classifications onto editor style classes.
//! - [`load_source`] reads a rule file from disk.

mod diagnostic;
mod driver;
mod incremental;
mod source;
pub mod style;

pub use diagnostic::Diagnostic;
pub use driver::{
    highlight, split_lines, CounterSink, Driver, HighlightOptions, Highlighted, LineColumn,
    OwnedToken, TokenSink,
};
pub use incremental::IncrementalHighlighter;
pub use source::{load_source, SourceError};

pub use yarhl_lexer::{Classification, Counts, ScanState, Token};
