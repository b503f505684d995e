//! lopdf-backed page text provider.
//!
//! Reads the text content streams of the first pages of a PDF. Pure Rust,
//! so it also works inside the WASM worker.

pub mod parser;

pub use parser::LopdfSource;
