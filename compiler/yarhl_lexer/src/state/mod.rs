//! Line-spanning scan state.
//!
//! One [`ScanState`] lives for a whole document. It is threaded through
//! every [`next_token`](crate::next_token) call and carries what a single
//! line cannot know on its own: whether a block comment is open, whether
//! the cursor is inside a rule body and which section, and the tables of
//! declared names used to validate references.
//!
//! The declaration tables and the warning log only ever grow. Declarations
//! from every rule in the document accumulate into the same tables, so a
//! variable declared by one rule satisfies a reference in a later rule.

use rustc_hash::FxHashSet;

/// Warning recorded for a `condition` reference to an undeclared variable.
pub const UNDECLARED_VARIABLE: &str = "Undeclared variable.";

/// Labelled sub-block of a rule body.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Section {
    #[default]
    None,
    Meta,
    Strings,
    Condition,
}

impl Section {
    /// Header text that opens this section, including the colon.
    pub const fn header(self) -> Option<&'static str> {
        match self {
            Section::None => None,
            Section::Meta => Some("meta:"),
            Section::Strings => Some("strings:"),
            Section::Condition => Some("condition:"),
        }
    }
}

/// Snapshot of the three diagnostic counters.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Counts {
    pub identifiers: usize,
    pub variables: usize,
    pub warnings: usize,
}

/// Cross-line tokenizer state for one document.
///
/// `Clone + Eq` so hosts can snapshot it at a line boundary, re-scan an
/// edited line from the snapshot, and detect when the re-scan has
/// converged with the previous result.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanState {
    pub(crate) inside_comment: bool,
    pub(crate) inside_rule_definition: bool,
    pub(crate) section: Section,
    pub(crate) variable_assignment_line: bool,
    /// A `{ ... }` byte pattern value is open and continues on the next line.
    pub(crate) inside_byte_pattern: bool,
    /// The last declaration ended at its `=`; the value is on the next line.
    pub(crate) pending_value: bool,
    variables: Vec<String>,
    /// Lookup index over `variables`.
    declared: FxHashSet<String>,
    identifiers: Vec<String>,
    warnings: Vec<String>,
}

impl ScanState {
    /// Fresh state for the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything, as if the document had been closed and reopened.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn inside_comment(&self) -> bool {
        self.inside_comment
    }

    #[inline]
    pub fn inside_rule_definition(&self) -> bool {
        self.inside_rule_definition
    }

    /// Active section. Only meaningful while inside a rule definition.
    #[inline]
    pub fn section(&self) -> Section {
        if self.inside_rule_definition {
            self.section
        } else {
            Section::None
        }
    }

    #[inline]
    pub fn variable_assignment_line(&self) -> bool {
        self.variable_assignment_line
    }

    #[inline]
    pub fn inside_byte_pattern(&self) -> bool {
        self.inside_byte_pattern
    }

    /// Declared `$` variables, in declaration order, duplicates included.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Declared `meta` identifiers, in declaration order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Warning log, one entry per diagnostic.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Current counter values.
    pub fn counts(&self) -> Counts {
        Counts {
            identifiers: self.identifiers.len(),
            variables: self.variables.len(),
            warnings: self.warnings.len(),
        }
    }

    /// Check if `name` has been declared in any `strings` section so far.
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    // === Transitions (driven by the scanner) ===

    /// Called when the scanner is at offset 0 of a line. Value mode only
    /// survives the line break while a byte pattern is still open, or for
    /// the one line after a declaration with nothing after its `=`.
    pub(crate) fn begin_line(&mut self) {
        self.variable_assignment_line = self.inside_byte_pattern || self.pending_value;
        self.pending_value = false;
    }

    pub(crate) fn enter_rule_body(&mut self) {
        self.inside_rule_definition = true;
        self.section = Section::None;
    }

    pub(crate) fn exit_rule_body(&mut self) {
        self.inside_rule_definition = false;
        self.section = Section::None;
    }

    pub(crate) fn enter_section(&mut self, section: Section) {
        self.section = section;
        self.variable_assignment_line = false;
        self.inside_byte_pattern = false;
        self.pending_value = false;
    }

    pub(crate) fn declare_variable(&mut self, name: &str) {
        self.variables.push(name.to_owned());
        self.declared.insert(name.to_owned());
        self.variable_assignment_line = true;
    }

    pub(crate) fn declare_identifier(&mut self, name: &str) {
        self.identifiers.push(name.to_owned());
        self.variable_assignment_line = true;
    }

    pub(crate) fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_owned());
    }
}
