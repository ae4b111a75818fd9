//! Cursor over a single line of rule text.
//!
//! [`Position`] is the host-visible byte offset threaded through
//! [`next_token`](crate::next_token). [`Cursor`] is the scanner's working
//! view: the line plus the current offset, with the small set of primitives
//! the decision list needs (prefix tests, runs, search for a marker).
//!
//! Offsets are byte offsets and always sit on a `char` boundary; every
//! advancing primitive moves by whole characters.

/// Byte offset of the next unconsumed character in the current line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    offset: usize,
}

impl Position {
    /// Position at the first character of a line.
    #[inline]
    pub const fn start() -> Self {
        Self { offset: 0 }
    }

    /// Position at a byte offset. An offset inside a multi-byte character
    /// is rounded down to the start of that character when scanned.
    #[inline]
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    #[inline]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns `true` when nothing on the line has been consumed yet.
    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.offset == 0
    }

    /// Returns `true` when every character of `line` has been consumed.
    #[inline]
    pub fn is_exhausted(self, line: &str) -> bool {
        self.offset >= line.len()
    }
}

/// Word character: `[A-Za-z0-9_]`.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scanner view of a line.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    line: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at `position`, clamped to the line length and
    /// rounded down to a `char` boundary.
    pub(crate) fn new(line: &'src str, position: Position) -> Self {
        let mut pos = position.offset().min(line.len());
        while !line.is_char_boundary(pos) {
            pos -= 1;
        }
        Self { line, pos }
    }

    #[inline]
    pub(crate) fn line(&self) -> &'src str {
        self.line
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position::new(self.pos)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Unconsumed remainder of the line.
    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.line[self.pos..]
    }

    /// Character at the cursor, `None` at end of line.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Text consumed since `start`.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.line[start..self.pos]
    }

    /// Advance past one character. No-op at end of line.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance past an ASCII prefix already matched with [`starts_with`](Self::starts_with).
    #[inline]
    pub(crate) fn advance_bytes(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Consume the rest of the line.
    #[inline]
    pub(crate) fn eat_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Consume characters while `pred` holds. Returns the number of bytes consumed.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !pred(c))
            .unwrap_or_else(|| self.rest().len());
        self.pos += len;
        self.pos - start
    }

    /// Consume up to (not including) the next occurrence of `marker`, or to
    /// end of line when it does not occur.
    pub(crate) fn eat_until(&mut self, marker: &str) {
        match memchr::memmem::find(self.rest().as_bytes(), marker.as_bytes()) {
            Some(idx) => self.pos += idx,
            None => self.eat_to_end(),
        }
    }

    /// Consume a whitespace run, a word run, or a single other character.
    pub(crate) fn eat_plain(&mut self) {
        match self.current() {
            Some(c) if c.is_whitespace() => {
                self.eat_while(char::is_whitespace);
            }
            Some(c) if is_word_char(c) => {
                self.eat_while(is_word_char);
            }
            Some(_) => self.advance(),
            None => {}
        }
    }

    /// Consume `$` followed by word characters. The cursor must be at `$`.
    pub(crate) fn eat_variable(&mut self) -> &'src str {
        let start = self.pos;
        self.advance();
        self.eat_while(is_word_char);
        self.slice_from(start)
    }

    /// Consume one chunk of an assigned value: a whitespace run, or a run
    /// of non-whitespace characters stopping before a comment opener.
    pub(crate) fn eat_value_chunk(&mut self) {
        match self.current() {
            Some(c) if c.is_whitespace() => {
                self.eat_while(char::is_whitespace);
            }
            Some(_) => {
                self.advance();
                while let Some(c) = self.current() {
                    if c.is_whitespace() || self.starts_with("//") || self.starts_with("/*") {
                        break;
                    }
                    self.advance();
                }
            }
            None => {}
        }
    }
}
