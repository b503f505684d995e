//! Page text provider selection.

use clap::ValueEnum;
use deck_core::{PageTextSource, Result};
use deck_lopdf::LopdfSource;
use deck_pdf_extract::PdfExtractSource;

/// Which provider reads page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// lopdf first, pdf-extract if lopdf fails or finds no text
    Auto,
    /// lopdf only
    Lopdf,
    /// pdf-extract only
    PdfExtract,
}

impl Backend {
    /// Build the provider for this choice.
    pub fn source(self) -> Box<dyn PageTextSource> {
        match self {
            Backend::Auto => Box::new(FallbackSource::new(LopdfSource::new(), PdfExtractSource::new())),
            Backend::Lopdf => Box::new(LopdfSource::new()),
            Backend::PdfExtract => Box::new(PdfExtractSource::new()),
        }
    }
}

/// Tries `primary`, then `fallback` when the primary errors or returns only
/// blank pages.
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: PageTextSource, F: PageTextSource> PageTextSource for FallbackSource<P, F> {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn page_texts(&self, data: &[u8], max_pages: usize) -> Result<Vec<String>> {
        match self.primary.page_texts(data, max_pages) {
            Ok(texts) if texts.iter().any(|t| !t.trim().is_empty()) => {
                log::debug!("Page text read with {}", self.primary.name());
                return Ok(texts);
            }
            Ok(_) => {
                log::debug!("{} returned no text, trying {}", self.primary.name(), self.fallback.name());
            }
            Err(e) => {
                log::debug!("{} failed: {}, trying {}", self.primary.name(), e, self.fallback.name());
            }
        }

        self.fallback.page_texts(data, max_pages)
    }
}
