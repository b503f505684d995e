//! Core domain types, paper structure detection, and slide outline handling
//! for turning academic papers into slide decks.

pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod normalize;
pub mod outline;
pub mod prompt;
pub mod rules;
pub mod source;
pub mod types;

pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use extract::PaperExtractor;
pub use generate::OutlineGenerator;
pub use normalize::LineNormalizer;
pub use outline::{parse_outline, render_outline, Outline, ParsedOutline, Slide, SlideType};
pub use prompt::{layout_guidance, prompt_filename, PromptBuilder};
pub use source::{extract_paper, PageTextSource, MAX_PAGES};
pub use types::{ExtractionResult, Line, LineSequence};
