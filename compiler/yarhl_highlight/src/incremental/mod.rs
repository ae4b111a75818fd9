//! Incremental re-highlighting.
//!
//! Tokenizing a line depends only on the line text and the [`ScanState`] at
//! its start. [`IncrementalHighlighter`] caches that line-start state for
//! every line. After an edit it restores the snapshot at the first changed
//! line and re-scans forward. Once the state reaching a line start equals
//! the cached snapshot there, every later line would scan exactly as before
//! and the re-scan stops.
//!
//! The declaration tables and warning log are part of the state, so an edit
//! that adds or removes a declaration or warning re-scans to the end of the
//! document.

use std::ops::Range;

use tracing::debug;
use yarhl_lexer::{Counts, ScanState};

use crate::driver::LineCollector;
use crate::{split_lines, Diagnostic, Driver, HighlightOptions, Highlighted, OwnedToken};

#[derive(Clone, Debug)]
struct LineEntry {
    text: String,
    /// State at the start of this line.
    start: ScanState,
    tokens: Vec<OwnedToken>,
    diagnostics: Vec<Diagnostic>,
}

/// A document kept highlighted across line edits.
#[derive(Clone, Debug)]
pub struct IncrementalHighlighter {
    options: HighlightOptions,
    lines: Vec<LineEntry>,
    /// State after the last line.
    end: ScanState,
}

impl IncrementalHighlighter {
    /// An empty document with no lines.
    pub fn new(options: HighlightOptions) -> Self {
        IncrementalHighlighter {
            options,
            lines: Vec::new(),
            end: ScanState::new(),
        }
    }

    /// Highlight `source` from scratch.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn from_source(source: &str, options: HighlightOptions) -> Self {
        let mut doc = Self::new(options);
        doc.lines = split_lines(source)
            .map(|text| LineEntry {
                text: text.to_owned(),
                start: ScanState::new(),
                tokens: Vec::new(),
                diagnostics: Vec::new(),
            })
            .collect();
        doc.rescan(0, doc.lines.len(), ScanState::new());
        doc
    }

    pub fn options(&self) -> HighlightOptions {
        self.options
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|entry| entry.text.as_str())
    }

    pub fn tokens(&self, index: usize) -> Option<&[OwnedToken]> {
        self.lines.get(index).map(|entry| entry.tokens.as_slice())
    }

    /// Counters at the start of line `index`.
    pub fn counts_at(&self, index: usize) -> Option<Counts> {
        self.lines.get(index).map(|entry| entry.start.counts())
    }

    /// Counters after the last line.
    pub fn counts(&self) -> Counts {
        self.end.counts()
    }

    /// State after the last line.
    pub fn state(&self) -> &ScanState {
        &self.end
    }

    /// All diagnostics, in document order, positioned at current line indices.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(index, entry)| {
                entry.diagnostics.iter().map(move |diag| {
                    let mut diag = diag.clone();
                    diag.at.line = index;
                    diag
                })
            })
            .collect()
    }

    /// Snapshot of the whole document in the one-shot result shape.
    pub fn to_highlighted(&self) -> Highlighted {
        Highlighted {
            lines: self.lines.iter().map(|entry| entry.tokens.clone()).collect(),
            line_counts: self.lines.iter().map(|entry| entry.start.counts()).collect(),
            counts: self.end.counts(),
            diagnostics: self.diagnostics(),
        }
    }

    /// Replace the text of line `index`. Returns the re-scanned line range,
    /// or `None` if there is no such line.
    pub fn replace_line(&mut self, index: usize, text: &str) -> Option<Range<usize>> {
        let entry = self.lines.get_mut(index)?;
        text.clone_into(&mut entry.text);
        let start = entry.start.clone();
        Some(self.rescan(index, index + 1, start))
    }

    /// Insert a line before `index`; an index past the end appends.
    /// Returns the re-scanned line range.
    pub fn insert_line(&mut self, index: usize, text: &str) -> Range<usize> {
        let index = index.min(self.lines.len());
        let start = self.start_state(index);
        self.lines.insert(
            index,
            LineEntry {
                text: text.to_owned(),
                start: start.clone(),
                tokens: Vec::new(),
                diagnostics: Vec::new(),
            },
        );
        self.rescan(index, index + 1, start)
    }

    /// Remove line `index`. Returns the re-scanned line range (possibly
    /// empty), or `None` if there is no such line.
    pub fn remove_line(&mut self, index: usize) -> Option<Range<usize>> {
        if index >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(index);
        Some(self.rescan(index, index, removed.start))
    }

    fn start_state(&self, index: usize) -> ScanState {
        self.lines
            .get(index)
            .map_or_else(|| self.end.clone(), |entry| entry.start.clone())
    }

    /// Scan from line `first` with `state`, at least up to `dirty_end`, then
    /// until the state converges with the cached snapshot.
    fn rescan(&mut self, first: usize, dirty_end: usize, mut state: ScanState) -> Range<usize> {
        let mut index = first;
        loop {
            let Some(entry) = self.lines.get_mut(index) else {
                self.end = state;
                break;
            };
            if index >= dirty_end && entry.start == state {
                break;
            }

            entry.start = state.clone();
            let mut driver = Driver::resume(self.options, state, index);
            let mut collector = LineCollector::default();
            driver.feed_line(&entry.text, &mut collector, &mut ());
            let (next, diagnostics) = driver.into_parts();

            state = next;
            entry.tokens = collector.lines.pop().unwrap_or_default();
            entry.diagnostics = diagnostics;
            index += 1;
        }

        debug!(first, end = index, "re-scanned lines");
        first..index
    }
}

#[cfg(test)]
mod tests;
