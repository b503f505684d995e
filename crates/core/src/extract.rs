//! Heuristic paper structure detection.
//!
//! Four independent passes read the same [`LineSequence`]: title, authors,
//! abstract and section headings. Each pass is first-match-wins and degrades
//! to an empty field when nothing qualifies. The only coupling is that the
//! author pass anchors on the detected title.

use crate::config::ExtractorConfig;
use crate::rules;
use crate::types::{truncate_chars, ExtractionResult, LineSequence};

/// Infers title, authors, abstract and section headings from paper lines.
#[derive(Debug, Clone, Default)]
pub struct PaperExtractor {
    config: ExtractorConfig,
}

impl PaperExtractor {
    /// Create an extractor with the given limits.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Run all four detectors over the sequence.
    pub fn extract(&self, lines: &LineSequence) -> ExtractionResult {
        let title = self.detect_title(lines);
        let authors = self.detect_authors(lines, &title);
        let abstract_text = self.detect_abstract(lines);
        let sections = self.detect_sections(lines);

        log::debug!(
            "Extracted title={:?}, {} author line(s), abstract of {} chars, {} section(s)",
            title,
            authors.len(),
            abstract_text.chars().count(),
            sections.len()
        );

        ExtractionResult {
            title,
            authors,
            abstract_text,
            sections,
        }
    }

    /// The first line no title rule rejects, or an empty string.
    pub fn detect_title(&self, lines: &LineSequence) -> String {
        for line in lines {
            match rules::first_rejection(&line.text, &self.config) {
                None => {
                    log::debug!("Title found at line {}", line.index);
                    return line.text.clone();
                }
                Some(rule) => log::trace!("Line {} rejected as title: {}", line.index, rule),
            }
        }

        log::debug!("No title candidate found");
        String::new()
    }

    /// Author lines in the window right after the title line.
    ///
    /// Without a title there is no anchor and the result is empty. Each
    /// matching line is kept whole, names are not split apart.
    pub fn detect_authors(&self, lines: &LineSequence, title: &str) -> Vec<String> {
        if title.is_empty() {
            return Vec::new();
        }

        let Some(anchor) = lines.iter().position(|l| l.text == title) else {
            log::debug!("Title not present in line sequence, skipping authors");
            return Vec::new();
        };

        lines
            .as_slice()
            .iter()
            .skip(anchor + 1)
            .take(self.config.author_window)
            .filter(|l| rules::is_author_line(&l.text))
            .map(|l| l.text.clone())
            .collect()
    }

    /// Text following the first line mentioning "abstract", up to the next
    /// section boundary.
    ///
    /// Collection is capped at `abstract_max_lines` lines; the joined text is
    /// cut to `abstract_max_chars` characters and marked with `...`.
    pub fn detect_abstract(&self, lines: &LineSequence) -> String {
        let Some(start) = lines
            .iter()
            .position(|l| l.text.to_lowercase().contains("abstract"))
        else {
            log::debug!("No abstract keyword found");
            return String::new();
        };

        let collected: Vec<&str> = lines
            .as_slice()
            .iter()
            .skip(start + 1)
            .take_while(|l| !rules::is_section_boundary(&l.text))
            .take(self.config.abstract_max_lines)
            .map(|l| l.text.as_str())
            .collect();

        truncate_chars(&collected.join(" "), self.config.abstract_max_chars)
    }

    /// Lines matching any heading rule, verbatim, at most `max_sections`.
    pub fn detect_sections(&self, lines: &LineSequence) -> Vec<String> {
        lines
            .iter()
            .filter(|l| rules::classify_heading(&l.text).is_some())
            .take(self.config.max_sections)
            .map(|l| l.text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ELLIPSIS;

    fn seq(lines: &[&str]) -> LineSequence {
        LineSequence::from_lines(lines.iter().copied())
    }

    fn mars_paper() -> LineSequence {
        seq(&[
            "Journal of ML Research",
            "Dimension Reduction and MARS",
            "Yu Liu, Degui Li, Yingcun Xia",
            "Abstract",
            "MARS is a popular method...",
            "1. Introduction",
            "MARS was introduced by...",
        ])
    }

    #[test]
    fn test_mars_scenario() {
        let result = PaperExtractor::default().extract(&mars_paper());

        assert_eq!(result.title, "Dimension Reduction and MARS");
        assert_eq!(result.authors, vec!["Yu Liu, Degui Li, Yingcun Xia"]);
        assert_eq!(result.abstract_text, "MARS is a popular method...");
        assert!(result.sections.contains(&"1. Introduction".to_string()));
    }

    #[test]
    fn test_no_long_lines_means_no_title() {
        let lines = seq(&["Short line", "Another one", "exactly twenty chars"]);
        let extractor = PaperExtractor::default();

        assert_eq!("exactly twenty chars".len(), 20);
        assert_eq!(extractor.detect_title(&lines), "");
        assert!(extractor.extract(&lines).authors.is_empty());
    }

    #[test]
    fn test_title_skips_headers_and_stamps() {
        let lines = seq(&[
            "ANNALS OF APPLIED STATISTICS PREPRINT",
            "2021 Vol. 15 pages 1203 through 1240",
            "Volume 15 of the Annals of Statistics",
            "Sparse Additive Models for Regression",
            "A Second Sentence-Like Line Here",
        ]);

        assert_eq!(
            PaperExtractor::default().detect_title(&lines),
            "Sparse Additive Models for Regression"
        );
    }

    #[test]
    fn test_title_ignores_overlong_paragraph() {
        let paragraph = "word ".repeat(50);
        let lines = seq(&[paragraph.as_str(), "A Reasonable Title For A Paper"]);

        assert_eq!(
            PaperExtractor::default().detect_title(&lines),
            "A Reasonable Title For A Paper"
        );
    }

    #[test]
    fn test_authors_limited_to_window() {
        let lines = seq(&[
            "A Reasonable Title For A Paper",
            "Department of Statistics",
            "Ann Smith",
            "University of Somewhere",
            "Bob Jones",
            "Carl Brown",
        ]);

        let extractor = PaperExtractor::default();
        let title = extractor.detect_title(&lines);
        let authors = extractor.detect_authors(&lines, &title);

        assert_eq!(authors, vec!["Ann Smith", "Bob Jones"]);
    }

    #[test]
    fn test_authors_custom_window() {
        let lines = seq(&["A Reasonable Title For A Paper", "Ann Smith", "Bob Jones"]);
        let extractor = PaperExtractor::new(ExtractorConfig::new().with_author_window(1));

        let authors = extractor.detect_authors(&lines, "A Reasonable Title For A Paper");
        assert_eq!(authors, vec!["Ann Smith"]);
    }

    #[test]
    fn test_no_title_means_no_authors() {
        let lines = seq(&["Ann Smith", "Bob Jones"]);
        let extractor = PaperExtractor::default();

        assert!(extractor.detect_authors(&lines, "").is_empty());
    }

    #[test]
    fn test_authors_title_not_in_sequence() {
        let lines = seq(&["Ann Smith"]);
        let extractor = PaperExtractor::default();

        assert!(extractor
            .detect_authors(&lines, "Some Title That Is Not There")
            .is_empty());
    }

    #[test]
    fn test_authors_anchor_on_first_matching_line() {
        let lines = seq(&[
            "A Reasonable Title For A Paper",
            "Ann Smith",
            "filler one",
            "filler two",
            "filler three",
            "A Reasonable Title For A Paper",
            "Bob Jones",
        ]);

        let authors =
            PaperExtractor::default().detect_authors(&lines, "A Reasonable Title For A Paper");
        assert_eq!(authors, vec!["Ann Smith"]);
    }

    #[test]
    fn test_abstract_stops_at_all_caps_heading() {
        let lines = seq(&[
            "ABSTRACT",
            "We propose a method.",
            "It works well.",
            "INTRODUCTION",
            "Not part of it.",
        ]);

        assert_eq!(
            PaperExtractor::default().detect_abstract(&lines),
            "We propose a method. It works well."
        );
    }

    #[test]
    fn test_abstract_line_cap_then_char_cap() {
        let mut lines = vec!["ABSTRACT".to_string()];
        lines.extend((0..250).map(|i| format!("l{}", i)));
        let lines = LineSequence::from_lines(&lines);

        let text = PaperExtractor::default().detect_abstract(&lines);
        assert_eq!(text.chars().count(), 503);
        assert!(text.ends_with(ELLIPSIS));
        assert!(text.starts_with("l0 l1 l2"));

        let uncapped = PaperExtractor::new(ExtractorConfig::new().with_abstract_max_chars(10_000))
            .detect_abstract(&lines);
        assert!(uncapped.ends_with("l199"));
        assert!(!uncapped.contains("l200"));
    }

    #[test]
    fn test_abstract_exactly_at_cap_not_marked() {
        let body = "x".repeat(500);
        let lines = seq(&["Abstract", body.as_str()]);

        let text = PaperExtractor::default().detect_abstract(&lines);
        assert_eq!(text, body);
    }

    #[test]
    fn test_abstract_uses_first_occurrence() {
        let lines = seq(&[
            "Abstract",
            "First abstract text.",
            "2. Method",
            "Abstract algebra is mentioned again here.",
            "Second text.",
        ]);

        assert_eq!(
            PaperExtractor::default().detect_abstract(&lines),
            "First abstract text."
        );
    }

    #[test]
    fn test_abstract_missing() {
        let lines = seq(&["Title", "Body"]);
        assert_eq!(PaperExtractor::default().detect_abstract(&lines), "");
    }

    #[test]
    fn test_abstract_keyword_inline() {
        let lines = seq(&["Abstract: we study things", "Body continues", "2. Next"]);
        assert_eq!(PaperExtractor::default().detect_abstract(&lines), "Body continues");
    }

    #[test]
    fn test_sections_order_and_cap() {
        let mut lines = vec!["Introduction".to_string(), "plain text".to_string()];
        lines.extend((1..=30).map(|i| format!("{} Section Number {}", i, i)));
        let lines = LineSequence::from_lines(&lines);

        let sections = PaperExtractor::default().detect_sections(&lines);
        assert_eq!(sections.len(), 20);
        assert_eq!(sections[0], "Introduction");
        assert_eq!(sections[1], "1 Section Number 1");
        assert_eq!(sections[19], "19 Section Number 19");
    }

    #[test]
    fn test_sections_recorded_once_and_verbatim() {
        let lines = seq(&["RESULTS", "conclusion and outlook", "3 Experiments"]);

        let sections = PaperExtractor::default().detect_sections(&lines);
        assert_eq!(
            sections,
            vec!["RESULTS", "conclusion and outlook", "3 Experiments"]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = PaperExtractor::default().extract(&LineSequence::new());

        assert!(result.is_empty());
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_deterministic() {
        let extractor = PaperExtractor::default();
        let lines = mars_paper();

        assert_eq!(extractor.extract(&lines), extractor.extract(&lines));
    }

    #[test]
    fn test_result_bounds_hold_on_noisy_input() {
        let long = "Q".repeat(10_000);
        let mut lines = vec![
            long.clone(),
            "12345678901234567890123456789".to_string(),
            "Abstract".to_string(),
        ];
        for i in 0..300 {
            lines.push(format!("SECTION HEADING {}", i));
            lines.push(format!("body text line number {} of the noisy input", i));
        }
        let lines = LineSequence::from_lines(&lines);

        let result = PaperExtractor::default().extract(&lines);
        let title_len = result.title.chars().count();
        assert!(title_len > 20 && title_len < 200);
        assert!(!rules::is_upper_case(&result.title));
        assert!(result.abstract_text.chars().count() <= 503);
        assert!(result.sections.len() <= 20);
    }
}
