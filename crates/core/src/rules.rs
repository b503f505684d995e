//! Ordered heuristic rule tables.
//!
//! Each table is evaluated left to right and the first rule that fires
//! decides the outcome for a line.

use crate::config::ExtractorConfig;
use crate::types::char_len;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A line starting with a decimal digit (page stamps, numbered headings).
static LEADING_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").unwrap());

/// One or more "Firstname Lastname" groups joined by ", ", anchored at the
/// start of the line.
static AUTHOR_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+(?:, [A-Z][a-z]+ [A-Z][a-z]+)*").unwrap()
});

/// End of an abstract: "1." style numbering or an all-caps heading.
static SECTION_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[1-9]\.|[A-Z][A-Z\s]{3,}$)").unwrap());

/// "1 Introduction", "1. Introduction", "2.3 Results".
static NUMBERED_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\.?\s+[A-Z]").unwrap());

static KEYWORD_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Introduction|Related Work|Methodology|Methods|Experiments|Results|Conclusion|References|Acknowledgements)",
    )
    .unwrap()
});

static ALL_CAPS_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]{3,}$").unwrap());

/// Whether every cased character is upper case and at least one exists.
///
/// "MARS 2020" is upper case; "2020" is not, since it has no cased letters.
pub fn is_upper_case(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// A named reason for rejecting a title candidate.
#[derive(Debug, Clone, Copy)]
pub struct TitleRule {
    pub name: &'static str,
    pub rejects: fn(&str, &ExtractorConfig) -> bool,
}

fn too_short(line: &str, config: &ExtractorConfig) -> bool {
    char_len(line) <= config.title_min_len
}

fn too_long(line: &str, config: &ExtractorConfig) -> bool {
    char_len(line) >= config.title_max_len
}

fn all_upper_case(line: &str, _: &ExtractorConfig) -> bool {
    is_upper_case(line)
}

fn digit_led(line: &str, _: &ExtractorConfig) -> bool {
    LEADING_DIGIT_REGEX.is_match(line)
}

fn journal_keyword(line: &str, _: &ExtractorConfig) -> bool {
    line.to_lowercase().contains("journal")
}

fn volume_keyword(line: &str, _: &ExtractorConfig) -> bool {
    line.to_lowercase().contains("volume")
}

/// Title rejection rules, in evaluation order.
pub const TITLE_REJECTIONS: &[TitleRule] = &[
    TitleRule {
        name: "too-short",
        rejects: too_short,
    },
    TitleRule {
        name: "too-long",
        rejects: too_long,
    },
    TitleRule {
        name: "all-upper-case",
        rejects: all_upper_case,
    },
    TitleRule {
        name: "digit-led",
        rejects: digit_led,
    },
    TitleRule {
        name: "journal-keyword",
        rejects: journal_keyword,
    },
    TitleRule {
        name: "volume-keyword",
        rejects: volume_keyword,
    },
];

/// Name of the first title rule rejecting `line`, or `None` if the line
/// qualifies as a title.
pub fn first_rejection(line: &str, config: &ExtractorConfig) -> Option<&'static str> {
    TITLE_REJECTIONS
        .iter()
        .find(|rule| (rule.rejects)(line, config))
        .map(|rule| rule.name)
}

/// Whether a line looks like one or more author names.
pub fn is_author_line(line: &str) -> bool {
    AUTHOR_LINE_REGEX.is_match(line)
}

/// Whether a line ends the abstract.
pub fn is_section_boundary(line: &str) -> bool {
    SECTION_BOUNDARY_REGEX.is_match(line)
}

/// Which heading rule matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingKind {
    /// "3 Method", "2.1 Setup", "1. Introduction".
    Numbered,
    /// A canonical section name at the start of the line, any case.
    Keyword,
    /// "RELATED WORK".
    AllCaps,
}

/// A named section heading rule.
#[derive(Debug, Clone, Copy)]
pub struct HeadingRule {
    pub kind: HeadingKind,
    pub matches: fn(&str) -> bool,
}

fn numbered_heading(line: &str) -> bool {
    NUMBERED_HEADING_REGEX.is_match(line)
}

fn keyword_heading(line: &str) -> bool {
    KEYWORD_HEADING_REGEX.is_match(line)
}

fn all_caps_heading(line: &str) -> bool {
    ALL_CAPS_HEADING_REGEX.is_match(line)
}

/// Section heading rules, in evaluation order.
pub const SECTION_RULES: &[HeadingRule] = &[
    HeadingRule {
        kind: HeadingKind::Numbered,
        matches: numbered_heading,
    },
    HeadingRule {
        kind: HeadingKind::Keyword,
        matches: keyword_heading,
    },
    HeadingRule {
        kind: HeadingKind::AllCaps,
        matches: all_caps_heading,
    },
];

/// The first heading rule matching `line`, if any.
pub fn classify_heading(line: &str) -> Option<HeadingKind> {
    SECTION_RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map(|rule| rule.kind)
}
