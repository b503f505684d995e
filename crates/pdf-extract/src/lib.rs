//! pdf-extract-backed page text provider.
//!
//! Uses pdf-extract's layout-aware text output, which copes better with
//! multi-column papers than raw content streams but is slower and can panic
//! on malformed files.

pub mod parser;

pub use parser::PdfExtractSource;
