//! Classification of assigned values.
//!
//! Once a declaration's left-hand side has been matched, every remaining
//! chunk of the line is classified by looking at the line as a whole:
//! the value is the second field of the trimmed line split on `=`.
//! A line with no value field (or an empty one) is treated as the
//! continuation of a wrapped byte pattern.

use crate::Classification;

/// Kind of the value assigned on a declaration line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AssignedValue {
    /// `[0-9]+(\.[0-9]*)?`
    Numeric,
    /// Exactly `true` or `false`.
    Boolean,
    /// Starts with `{`, or a continuation line with no value field.
    HexPattern,
    /// Ends with `"`.
    String,
    /// Anything else: generic string content.
    Generic,
    /// Blank line.
    Blank,
}

impl AssignedValue {
    /// Tags for a chunk of a line carrying this kind of value.
    pub const fn classification(self) -> Classification {
        match self {
            AssignedValue::Numeric => Classification::VALUE_NUMERIC.union(Classification::RULE_BODY),
            AssignedValue::Boolean => Classification::VALUE_BOOLEAN.union(Classification::RULE_BODY),
            AssignedValue::HexPattern => {
                Classification::VALUE_HEX_PATTERN.union(Classification::RULE_BODY)
            }
            AssignedValue::String => Classification::VALUE_STRING.union(Classification::RULE_BODY),
            AssignedValue::Generic => Classification::PLAIN_TEXT.union(Classification::VALUE_STRING),
            AssignedValue::Blank => Classification::PLAIN_TEXT.union(Classification::RULE_BODY),
        }
    }
}

/// Classify the value assigned on `line`.
pub fn classify_assigned_value(line: &str) -> AssignedValue {
    let trimmed = line.trim();
    match trimmed.split('=').nth(1).filter(|value| !value.is_empty()) {
        Some(value) => {
            let value = value.trim();
            if is_numeric(value) {
                AssignedValue::Numeric
            } else if matches!(value, "true" | "false") {
                AssignedValue::Boolean
            } else if value.starts_with('{') {
                AssignedValue::HexPattern
            } else if value.ends_with('"') {
                AssignedValue::String
            } else {
                AssignedValue::Generic
            }
        }
        None if !trimmed.is_empty() => AssignedValue::HexPattern,
        None => AssignedValue::Blank,
    }
}

/// Returns `true` when `line` is a declaration cut off right after its `=`,
/// so the value starts on the next line.
pub(crate) fn value_on_next_line(line: &str) -> bool {
    line.trim()
        .split_once('=')
        .is_some_and(|(_, value)| value.trim().is_empty())
}

/// `[0-9]+(\.[0-9]*)?`, anchored at both ends.
fn is_numeric(text: &str) -> bool {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.map_or(true, |frac| frac.bytes().all(|b| b.is_ascii_digit()))
}
