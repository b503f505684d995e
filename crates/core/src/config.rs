//! Tunable limits for the structure detectors.

use serde::{Deserialize, Serialize};

/// Title candidates must be longer than this many characters.
pub const DEFAULT_TITLE_MIN_LEN: usize = 20;

/// Title candidates must be shorter than this many characters.
pub const DEFAULT_TITLE_MAX_LEN: usize = 200;

/// Number of lines after the title searched for author names.
pub const DEFAULT_AUTHOR_WINDOW: usize = 4;

/// Maximum number of lines collected into the abstract.
pub const DEFAULT_ABSTRACT_MAX_LINES: usize = 200;

/// Abstract text beyond this many characters is cut and marked.
pub const DEFAULT_ABSTRACT_MAX_CHARS: usize = 500;

/// Maximum number of section headings reported.
pub const DEFAULT_MAX_SECTIONS: usize = 20;

/// Marker appended to a truncated abstract.
pub const ELLIPSIS: &str = "...";

/// Limits applied by [`PaperExtractor`](crate::PaperExtractor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Exclusive lower bound on title length, in characters.
    pub title_min_len: usize,

    /// Exclusive upper bound on title length, in characters.
    pub title_max_len: usize,

    /// Lines after the title line inspected for authors.
    pub author_window: usize,

    /// Hard ceiling on abstract lines, applied before joining.
    pub abstract_max_lines: usize,

    /// Abstract character cap before the ellipsis marker.
    pub abstract_max_chars: usize,

    /// Cap on reported section headings.
    pub max_sections: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title_min_len: DEFAULT_TITLE_MIN_LEN,
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            author_window: DEFAULT_AUTHOR_WINDOW,
            abstract_max_lines: DEFAULT_ABSTRACT_MAX_LINES,
            abstract_max_chars: DEFAULT_ABSTRACT_MAX_CHARS,
            max_sections: DEFAULT_MAX_SECTIONS,
        }
    }
}

impl ExtractorConfig {
    /// Create a config with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exclusive title length window.
    pub fn with_title_len(mut self, min: usize, max: usize) -> Self {
        self.title_min_len = min;
        self.title_max_len = max.max(min);
        self
    }

    /// Set how many lines after the title are searched for authors.
    pub fn with_author_window(mut self, lines: usize) -> Self {
        self.author_window = lines;
        self
    }

    /// Set the abstract line ceiling.
    pub fn with_abstract_max_lines(mut self, lines: usize) -> Self {
        self.abstract_max_lines = lines;
        self
    }

    /// Set the abstract character cap.
    pub fn with_abstract_max_chars(mut self, chars: usize) -> Self {
        self.abstract_max_chars = chars;
        self
    }

    /// Set the section heading cap.
    pub fn with_max_sections(mut self, sections: usize) -> Self {
        self.max_sections = sections;
        self
    }
}
