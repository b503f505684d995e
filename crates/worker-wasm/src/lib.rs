//! WASM-compatible wrapper for paper structure extraction.
//!
//! This crate exposes extraction, outline generation and prompt compilation
//! to JavaScript for use in Cloudflare Workers.

use deck_core::{
    extract_paper as extract_paper_core, parse_outline, render_outline, Error, ExtractionResult,
    ExtractorConfig, LineNormalizer, OutlineGenerator, PaperExtractor, PromptBuilder,
};
use deck_lopdf::LopdfSource;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One compiled slide prompt.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlidePrompt {
    /// Suggested file name, e.g. `03-slide-introduction.md`.
    pub filename: String,
    /// The full prompt text.
    pub prompt: String,
}

fn serialization_error(e: impl Display) -> Error {
    Error::SerializationError(e.to_string())
}

fn to_js_error(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| to_js_error(serialization_error(e)))
}

/// Extract title, authors, abstract and sections from PDF bytes.
///
/// # Arguments
/// * `data` - The raw bytes of the PDF
/// * `max_pages` - Number of leading pages to read (clamped to 1..=10)
#[wasm_bindgen]
pub fn extract_paper(data: &[u8], max_pages: usize) -> Result<JsValue, JsValue> {
    let result = extract_paper_impl(data, max_pages).map_err(to_js_error)?;
    to_js(&result)
}

fn extract_paper_impl(data: &[u8], max_pages: usize) -> deck_core::Result<ExtractionResult> {
    extract_paper_core(
        &LopdfSource::new(),
        data,
        max_pages,
        &LineNormalizer::new(),
        ExtractorConfig::default(),
    )
}

/// Extract structure from text that was already pulled out of a paper.
#[wasm_bindgen]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&extract_from_text_impl(text))
}

fn extract_from_text_impl(text: &str) -> ExtractionResult {
    let lines = LineNormalizer::new().normalize(text);
    PaperExtractor::default().extract(&lines)
}

/// Build the outline markdown for an extraction result.
#[wasm_bindgen]
pub fn generate_outline(result: JsValue) -> Result<String, JsValue> {
    let result: ExtractionResult = serde_wasm_bindgen::from_value(result)
        .map_err(|e| to_js_error(serialization_error(e)))?;

    Ok(generate_outline_impl(&result))
}

fn generate_outline_impl(result: &ExtractionResult) -> String {
    render_outline(&OutlineGenerator::new().generate(result))
}

/// Compile one prompt per slide of an outline.
///
/// # Arguments
/// * `markdown` - The outline document
/// * `base_prompt` - Base prompt with the style placeholder; the built-in
///   prompt is used when omitted
#[wasm_bindgen]
pub fn compile_prompts(markdown: &str, base_prompt: Option<String>) -> Result<JsValue, JsValue> {
    let prompts = compile_prompts_impl(markdown, base_prompt.as_deref()).map_err(to_js_error)?;
    to_js(&prompts)
}

fn compile_prompts_impl(
    markdown: &str,
    base_prompt: Option<&str>,
) -> deck_core::Result<Vec<SlidePrompt>> {
    let parsed = parse_outline(markdown)?;
    let builder = base_prompt.map(PromptBuilder::new).unwrap_or_default();

    Ok(builder
        .build_all(&parsed.style_instructions, &parsed.slides)
        .into_iter()
        .map(|(filename, prompt)| SlidePrompt { filename, prompt })
        .collect())
}
