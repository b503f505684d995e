//! Error types for paper-to-deck conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while retrieving paper text or handling outlines.
///
/// Structure detection itself never fails; a detector that finds nothing
/// reports an empty field instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a document any provider understands.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// The PDF structure could not be parsed.
    #[error("PDF parsing error: {0}")]
    PdfParseError(String),

    /// The PDF is encrypted and its text cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// The outline markdown is malformed.
    #[error("Outline parsing error: {0}")]
    OutlineParseError(String),

    /// A record could not cross the JS boundary.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
