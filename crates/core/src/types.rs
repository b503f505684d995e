//! Domain types for extracted paper structure.

use crate::config::ELLIPSIS;
use serde::{Deserialize, Serialize};

/// Length in characters, not bytes.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to `max` characters, appending the ellipsis marker if anything
/// was removed.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// A single trimmed, non-empty line of paper text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Zero-based position in the source sequence.
    pub index: usize,

    /// The trimmed text content.
    pub text: String,
}

impl Line {
    /// Create a new line at the given position.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Lines in reading order. Order is significant: every detector is
/// order-dependent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSequence {
    lines: Vec<Line>,
}

impl LineSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from already-clean strings.
    ///
    /// Each entry is trimmed and blanks are dropped, so the sequence
    /// invariants hold regardless of the input.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sequence = Self::new();
        for line in lines {
            sequence.push(line.as_ref());
        }
        sequence
    }

    /// Append a line, tagging it with the next ordinal. Blank input is ignored.
    pub fn push(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let index = self.lines.len();
        self.lines.push(Line::new(index, trimmed));
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the sequence has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Borrow the lines as a slice.
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// Get the text of every line, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Structural metadata inferred from the opening pages of a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected title, empty if none qualified.
    pub title: String,

    /// Author lines in encountered order. Each entry is a whole line and
    /// may hold several comma-separated names.
    pub authors: Vec<String>,

    /// Abstract text, possibly truncated with a trailing "...".
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Section headings in first-seen order.
    pub sections: Vec<String>,
}

impl ExtractionResult {
    /// Whether no detector found anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.abstract_text.is_empty()
            && self.sections.is_empty()
    }
}
