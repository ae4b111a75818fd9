//! Line driver.
//!
//! The tokenizer is pull-based and line-local. [`Driver`] owns the
//! document-wide [`ScanState`] and pushes each line through it:
//!
//! 1. report the counters as they stand at the start of the line
//! 2. call `next_token` until the line is exhausted, forwarding tokens
//! 3. pair every new warning with the token that raised it
//!
//! Hosts receive results through two small sink traits, so an editor can
//! paint tokens and update counters without intermediate allocation.

use tracing::{debug, trace};
use yarhl_lexer::{next_token, Classification, Counts, Position, ScanState, Token};

use crate::Diagnostic;

/// Zero-based line index and byte column of a token start.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        LineColumn { line, column }
    }
}

/// Receives classified tokens in document order.
pub trait TokenSink {
    fn token(&mut self, at: LineColumn, token: Token<'_>);

    /// Called once after the last token of every line, empty lines included.
    fn end_line(&mut self, _line: usize) {}
}

/// Receives the counters at the start of every line.
pub trait CounterSink {
    fn counts(&mut self, line: usize, counts: Counts);
}

impl TokenSink for () {
    fn token(&mut self, _at: LineColumn, _token: Token<'_>) {}
}

impl CounterSink for () {
    fn counts(&mut self, _line: usize, _counts: Counts) {}
}

/// Collects one `Counts` per line, indexed by line.
impl CounterSink for Vec<Counts> {
    fn counts(&mut self, _line: usize, counts: Counts) {
        self.push(counts);
    }
}

/// Driver configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HighlightOptions {
    /// Forward whitespace-only plain-text tokens to the sink.
    pub emit_trivia: bool,
    /// Turn warnings into positioned [`Diagnostic`]s.
    pub record_diagnostics: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            emit_trivia: true,
            record_diagnostics: true,
        }
    }
}

impl HighlightOptions {
    #[must_use]
    pub const fn with_trivia(mut self, emit_trivia: bool) -> Self {
        self.emit_trivia = emit_trivia;
        self
    }

    #[must_use]
    pub const fn with_diagnostics(mut self, record_diagnostics: bool) -> Self {
        self.record_diagnostics = record_diagnostics;
        self
    }
}

/// Whitespace-only plain text: the separators between meaningful tokens.
fn is_trivia(token: &Token<'_>) -> bool {
    token.class.contains(Classification::PLAIN_TEXT)
        && token.lexeme.chars().all(char::is_whitespace)
}

/// Feeds a document through the tokenizer one line at a time.
#[derive(Clone, Debug, Default)]
pub struct Driver {
    options: HighlightOptions,
    state: ScanState,
    /// Index of the next line to be fed.
    line: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Driver {
    pub fn new(options: HighlightOptions) -> Self {
        Self::resume(options, ScanState::new(), 0)
    }

    /// Continue a document from a line-start snapshot of its state.
    pub fn resume(options: HighlightOptions, state: ScanState, line: usize) -> Self {
        Driver {
            options,
            state,
            line,
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    #[inline]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Index of the next line [`feed_line`](Self::feed_line) will scan.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Diagnostics recorded since the driver was created or reset.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Start over at line 0 with a fresh state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.line = 0;
        self.diagnostics.clear();
    }

    pub fn into_parts(self) -> (ScanState, Vec<Diagnostic>) {
        (self.state, self.diagnostics)
    }

    /// Scan one line. `text` must not contain a line terminator.
    pub fn feed_line<T, C>(&mut self, text: &str, tokens: &mut T, counters: &mut C)
    where
        T: TokenSink + ?Sized,
        C: CounterSink + ?Sized,
    {
        let line = self.line;
        counters.counts(line, self.state.counts());

        let mut cursor = Position::start();
        while !cursor.is_exhausted(text) {
            let at = LineColumn::new(line, cursor.offset());
            let warned = self.state.warnings().len();
            let was_inside = self.state.inside_rule_definition();

            let token = next_token(text, &mut cursor, &mut self.state);
            trace!(line, column = at.column, lexeme = token.lexeme, class = ?token.class, "token");

            if was_inside != self.state.inside_rule_definition() {
                debug!(line, entered = !was_inside, "rule body boundary");
            }
            if self.options.record_diagnostics {
                for message in &self.state.warnings()[warned..] {
                    self.diagnostics
                        .push(Diagnostic::new(at, token.lexeme, message));
                }
            }
            if !self.options.emit_trivia && is_trivia(&token) {
                continue;
            }
            tokens.token(at, token);
        }

        tokens.end_line(line);
        self.line += 1;
    }
}

/// Split a source into lines on `\n`, dropping a trailing `\r`.
///
/// A source ending in a newline has a final empty line, as in an editor.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// A token detached from its source line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OwnedToken {
    /// Byte column of the token start.
    pub column: usize,
    pub text: String,
    pub class: Classification,
}

impl OwnedToken {
    pub fn new(column: usize, token: Token<'_>) -> Self {
        OwnedToken {
            column,
            text: token.lexeme.to_owned(),
            class: token.class,
        }
    }
}

/// Token sink that groups owned tokens by line.
#[derive(Debug, Default)]
pub(crate) struct LineCollector {
    pub(crate) lines: Vec<Vec<OwnedToken>>,
    current: Vec<OwnedToken>,
}

impl TokenSink for LineCollector {
    fn token(&mut self, at: LineColumn, token: Token<'_>) {
        self.current.push(OwnedToken::new(at.column, token));
    }

    fn end_line(&mut self, _line: usize) {
        self.lines.push(std::mem::take(&mut self.current));
    }
}

/// Result of highlighting a whole document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Highlighted {
    /// Tokens of each line.
    pub lines: Vec<Vec<OwnedToken>>,
    /// Counters at the start of each line.
    pub line_counts: Vec<Counts>,
    /// Counters after the last line.
    pub counts: Counts,
    pub diagnostics: Vec<Diagnostic>,
}

/// Highlight a whole source string from a fresh state.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn highlight(source: &str, options: HighlightOptions) -> Highlighted {
    let mut driver = Driver::new(options);
    let mut tokens = LineCollector::default();
    let mut line_counts = Vec::new();

    for line in split_lines(source) {
        driver.feed_line(line, &mut tokens, &mut line_counts);
    }

    let counts = driver.state().counts();
    let (_, diagnostics) = driver.into_parts();
    debug!(
        lines = tokens.lines.len(),
        warnings = counts.warnings,
        "highlighted document"
    );
    Highlighted {
        lines: tokens.lines,
        line_counts,
        counts,
        diagnostics,
    }
}
