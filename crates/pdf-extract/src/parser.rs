//! Page text retrieval with pdf-extract.

use deck_core::source::{ensure_pdf, MAX_PAGES};
use deck_core::{Error, PageTextSource, Result};
use std::panic::{self, AssertUnwindSafe};

/// Page text provider backed by pdf-extract.
pub struct PdfExtractSource;

impl PdfExtractSource {
    /// Create a new pdf-extract provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextSource for PdfExtractSource {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn page_texts(&self, data: &[u8], max_pages: usize) -> Result<Vec<String>> {
        ensure_pdf(data)?;

        // pdf-extract panics on some malformed documents.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        let pages = match outcome {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                return Err(Error::PdfParseError(format!("pdf-extract failed: {}", e)));
            }
            Err(_) => {
                return Err(Error::PdfParseError(
                    "pdf-extract panicked (malformed PDF)".to_string(),
                ));
            }
        };

        let total = pages.len();
        let texts: Vec<String> = pages.into_iter().take(max_pages.min(MAX_PAGES)).collect();
        log::debug!("Read {} of {} page(s) with pdf-extract", texts.len(), total);

        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf() {
        let err = PdfExtractSource::new()
            .page_texts(b"plain text, not a document", 10)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_garbage_after_header_is_an_error_not_a_panic() {
        let result = PdfExtractSource::new().page_texts(b"%PDF-1.4\n%%garbage\n", 10);
        assert!(matches!(result, Err(Error::PdfParseError(_))));
    }

    #[test]
    fn test_name() {
        assert_eq!(PdfExtractSource::new().name(), "pdf-extract");
    }
}
