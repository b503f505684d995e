//! Line normalization for text retrieved from paper pages.
//!
//! Turns raw page text into a [`LineSequence`]: one entry per source line,
//! trimmed, with blank lines removed and reading order preserved.

use crate::types::LineSequence;
use unicode_normalization::UnicodeNormalization;

/// Line normalizer for raw page text.
#[derive(Debug, Clone, Default)]
pub struct LineNormalizer {
    /// Whether to apply NFKC compatibility folding before trimming.
    fold_compatibility: bool,
}

impl LineNormalizer {
    /// Create a normalizer that only trims and drops blank lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to fold compatibility characters (ligatures, full-width
    /// forms) into their plain equivalents.
    pub fn with_fold_compatibility(mut self, fold: bool) -> Self {
        self.fold_compatibility = fold;
        self
    }

    /// Normalize a block of text into a line sequence.
    ///
    /// Lines end at `\n`; the `\r` of a `\r\n` ending is trimmed with the
    /// other whitespace. A bare `\r` does not break a line.
    pub fn normalize(&self, text: &str) -> LineSequence {
        let mut sequence = LineSequence::new();
        for raw in text.split('\n') {
            if self.fold_compatibility {
                let folded: String = raw.nfkc().collect();
                sequence.push(&folded);
            } else {
                sequence.push(raw);
            }
        }

        log::debug!("Normalized text into {} lines", sequence.len());
        sequence
    }

    /// Normalize the text of several pages, in page order.
    ///
    /// A page boundary always ends the current line, even when the page
    /// text has no trailing newline.
    pub fn normalize_pages<S: AsRef<str>>(&self, pages: &[S]) -> LineSequence {
        let joined = pages
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        self.normalize(&joined)
    }
}
