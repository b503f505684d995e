//! Page text retrieval with lopdf.

use deck_core::source::{ensure_pdf, MAX_PAGES};
use deck_core::{Error, PageTextSource, Result};
use lopdf::Document;

/// Page text provider backed by lopdf.
pub struct LopdfSource;

impl LopdfSource {
    /// Create a new lopdf provider.
    pub fn new() -> Self {
        Self
    }

    /// Load a document from memory, refusing encrypted files.
    fn load(&self, data: &[u8]) -> Result<Document> {
        ensure_pdf(data)?;

        let doc = Document::load_mem(data)
            .map_err(|e| Error::PdfParseError(format!("Failed to load PDF: {}", e)))?;

        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        Ok(doc)
    }
}

impl Default for LopdfSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextSource for LopdfSource {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn page_texts(&self, data: &[u8], max_pages: usize) -> Result<Vec<String>> {
        let doc = self.load(data)?;
        let limit = max_pages.min(MAX_PAGES);

        // Keys are 1-based page numbers in document order.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().take(limit).collect();
        log::debug!(
            "Reading {} of {} page(s) with lopdf",
            page_numbers.len(),
            doc.get_pages().len()
        );

        let mut texts = Vec::with_capacity(page_numbers.len());
        for number in page_numbers {
            match doc.extract_text(&[number]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    log::warn!("Failed to extract text from page {} (continuing): {}", number, e);
                    texts.push(String::new());
                }
            }
        }

        Ok(texts)
    }
}
