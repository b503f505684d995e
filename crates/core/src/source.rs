//! Page text retrieval capability.
//!
//! Providers turn document bytes into per-page text. The core never knows
//! which provider is active; front ends pick one at startup.

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::extract::PaperExtractor;
use crate::normalize::LineNormalizer;
use crate::types::ExtractionResult;

/// Ceiling on the number of pages read from a paper.
pub const MAX_PAGES: usize = 10;

/// PDF files start with this magic.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Retrieve ordered text from the first pages of a document.
pub trait PageTextSource {
    /// Short provider name for logging.
    fn name(&self) -> &'static str;

    /// Text of the first `min(max_pages, MAX_PAGES, page_count)` pages, in
    /// page order.
    fn page_texts(&self, data: &[u8], max_pages: usize) -> Result<Vec<String>>;
}

impl<T: PageTextSource + ?Sized> PageTextSource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn page_texts(&self, data: &[u8], max_pages: usize) -> Result<Vec<String>> {
        (**self).page_texts(data, max_pages)
    }
}

/// Whether the bytes look like a PDF document.
///
/// Some writers emit junk before the header, so the magic is accepted
/// anywhere in the first kilobyte.
pub fn is_pdf(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Reject anything that is not a PDF.
pub fn ensure_pdf(bytes: &[u8]) -> Result<()> {
    if is_pdf(bytes) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(
            "missing %PDF- header".to_string(),
        ))
    }
}

/// Clamp a requested page count to the `1..=MAX_PAGES` range.
pub fn clamp_pages(requested: usize) -> usize {
    requested.clamp(1, MAX_PAGES)
}

/// Retrieve, normalize and extract in one step.
///
/// Errors come only from the provider. A paper with no text layer, such as
/// a scan, yields a result with every field empty.
pub fn extract_paper<S: PageTextSource + ?Sized>(
    source: &S,
    data: &[u8],
    max_pages: usize,
    normalizer: &LineNormalizer,
    config: ExtractorConfig,
) -> Result<ExtractionResult> {
    let pages = clamp_pages(max_pages);
    let texts = source.page_texts(data, pages)?;
    log::debug!("{} returned {} page(s)", source.name(), texts.len());

    let lines = normalizer.normalize_pages(&texts);
    if lines.is_empty() {
        log::warn!("{} found no text in the first {} page(s)", source.name(), pages);
    }

    Ok(PaperExtractor::new(config).extract(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPages(Vec<&'static str>);

    impl PageTextSource for FixedPages {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn page_texts(&self, _data: &[u8], max_pages: usize) -> Result<Vec<String>> {
            Ok(self
                .0
                .iter()
                .take(max_pages)
                .map(|p| p.to_string())
                .collect())
        }
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(is_pdf(b"\xEF\xBB\xBF%PDF-1.4"));
        assert!(!is_pdf(b"PK\x03\x04"));
        assert!(!is_pdf(b""));
        assert!(ensure_pdf(b"hello").is_err());
    }

    #[test]
    fn test_clamp_pages() {
        assert_eq!(clamp_pages(0), 1);
        assert_eq!(clamp_pages(5), 5);
        assert_eq!(clamp_pages(50), MAX_PAGES);
    }

    #[test]
    fn test_extract_paper_pipeline() {
        let source = FixedPages(vec![
            "Dimension Reduction and MARS\nYu Liu, Degui Li, Yingcun Xia\n",
            "Abstract\nMARS is popular.\n1. Introduction\n",
        ]);

        let result = extract_paper(
            &source,
            b"",
            10,
            &LineNormalizer::new(),
            ExtractorConfig::default(),
        )
        .unwrap();

        assert_eq!(result.title, "Dimension Reduction and MARS");
        assert_eq!(result.authors, vec!["Yu Liu, Degui Li, Yingcun Xia"]);
        assert_eq!(result.abstract_text, "MARS is popular.");
        assert_eq!(result.sections, vec!["1. Introduction"]);
    }

    #[test]
    fn test_extract_paper_respects_page_limit() {
        let source = FixedPages(vec!["First page text only here", "Abstract\nHidden"]);

        let result = extract_paper(
            &source,
            b"",
            1,
            &LineNormalizer::new(),
            ExtractorConfig::default(),
        )
        .unwrap();

        assert_eq!(result.title, "First page text only here");
        assert!(result.abstract_text.is_empty());
    }

    #[test]
    fn test_extract_paper_without_text_is_empty() {
        let source = FixedPages(vec!["   \n", ""]);

        let result = extract_paper(
            &source,
            b"",
            10,
            &LineNormalizer::new(),
            ExtractorConfig::default(),
        )
        .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_paper_propagates_provider_error() {
        struct Broken;

        impl PageTextSource for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }

            fn page_texts(&self, _data: &[u8], _max_pages: usize) -> Result<Vec<String>> {
                Err(Error::Encrypted)
            }
        }

        let err = extract_paper(
            &Broken,
            b"",
            10,
            &LineNormalizer::new(),
            ExtractorConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Encrypted));
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn PageTextSource> = Box::new(FixedPages(vec!["x"]));
        assert_eq!(source.name(), "fixed");
    }
}
