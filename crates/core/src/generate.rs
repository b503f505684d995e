//! Outline generation from extracted paper structure.
//!
//! Fills a fixed template set: a cover, an abstract slide, one content slide
//! per detected section, and a back cover.

use crate::outline::{Outline, Slide, SlideType};
use crate::types::{truncate_chars, ExtractionResult};
use regex::Regex;
use std::sync::LazyLock;

/// Style name used when none is configured.
pub const DEFAULT_STYLE: &str = "academic-paper";

/// Style instructions for [`DEFAULT_STYLE`].
pub const ACADEMIC_STYLE_INSTRUCTIONS: &str = "\
Design Aesthetic:
Clean, professional academic presentation aesthetic. Precise diagrams and charts with clear data visualization. White or light gray backgrounds with restrained color usage. Formal typography hierarchy suitable for academic venues.

Background:
  Color: Pure White (#FFFFFF) or Light Gray (#F8FAFC)
  Texture: None

Typography:
  Primary Font: Serif for titles, bold weight, scholarly presence.
  Secondary Font: Sans-serif for diagram labels, axis titles, and annotations.
  Body Font: Sans-serif for body text and bullet points.

Color Palette:
  Primary Text: Dark Blue-Gray (#1E3A5F)
  Background: White (#FFFFFF)
  Secondary Text: Medium Gray (#6B7280)
  Primary Accent: Academic Blue (#2563EB)
  Chart Colors: Deep Blue (#1E40AF), Teal (#0891B2), Orange (#EA580C), Purple (#7C3AED)

Style Rules:
  Do:
    - Label every chart axis and legend
    - Number figures and add captions
    - Keep color usage minimal and purposeful
  Don't:
    - Use decorative or hand-drawn illustrations
    - Use gradients or 3D effects on charts
    - Add slide numbers in the visual area
    - Use more than 4 colors in a single chart";

/// Headline used on the cover when no title was detected.
const UNTITLED: &str = "Untitled Paper";

/// Abstract slide body is cut to this many characters.
const ABSTRACT_BODY_CHARS: usize = 300;

/// Words kept in a filename slug.
const SLUG_MAX_WORDS: usize = 5;

/// Leading "2.1" or "3." numbering on a heading.
static HEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\.?\s+").unwrap());

static SLUG_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Layout, narrative and visual for a section slide.
struct SectionTemplate {
    /// Matched against the lowercased heading.
    keywords: &'static [&'static str],
    layout: &'static str,
    narrative: &'static str,
    visual: &'static str,
}

/// Checked in order; the first template with a matching keyword wins.
const SECTION_TEMPLATES: &[SectionTemplate] = &[
    SectionTemplate {
        keywords: &["introduction"],
        layout: "split-screen",
        narrative: "Introduce the problem and why it matters",
        visual: "Two panels contrasting the problem setting with the proposed idea",
    },
    SectionTemplate {
        keywords: &["related", "background"],
        layout: "binary-comparison",
        narrative: "Position the work against prior approaches",
        visual: "Side-by-side comparison of prior work and this work",
    },
    SectionTemplate {
        keywords: &["method"],
        layout: "methods-diagram",
        narrative: "Explain how the approach works",
        visual: "Diagram of the method with labeled components and data flow",
    },
    SectionTemplate {
        keywords: &["experiment", "result", "evaluation"],
        layout: "results-chart",
        narrative: "Present the quantitative evidence",
        visual: "Clean chart comparing the proposed method against baselines",
    },
    SectionTemplate {
        keywords: &["conclusion", "discussion"],
        layout: "contributions",
        narrative: "Summarize contributions and takeaways",
        visual: "Numbered list of contributions with clear hierarchy",
    },
];

const DEFAULT_SECTION_TEMPLATE: SectionTemplate = SectionTemplate {
    keywords: &[],
    layout: "bullet-list",
    narrative: "Cover the key points of this section",
    visual: "Clean bullet points with generous spacing",
};

/// Builds an [`Outline`] from an [`ExtractionResult`].
#[derive(Debug, Clone)]
pub struct OutlineGenerator {
    style: String,
    style_instructions: String,
    audience: String,
    language: String,
    generated: Option<String>,
}

impl Default for OutlineGenerator {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            style_instructions: ACADEMIC_STYLE_INSTRUCTIONS.to_string(),
            audience: "intermediate".to_string(),
            language: "en".to_string(),
            generated: None,
        }
    }
}

impl OutlineGenerator {
    /// Create a generator with the academic-paper style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different style and its instructions.
    pub fn with_style(mut self, name: impl Into<String>, instructions: impl Into<String>) -> Self {
        self.style = name.into();
        self.style_instructions = instructions.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Pin the `Generated` timestamp instead of using the current time.
    pub fn with_generated(mut self, timestamp: impl Into<String>) -> Self {
        self.generated = Some(timestamp.into());
        self
    }

    /// Build the outline.
    pub fn generate(&self, paper: &ExtractionResult) -> Outline {
        let mut slides = vec![cover_slide(paper)];

        if !paper.abstract_text.is_empty() {
            slides.push(abstract_slide(&paper.abstract_text));
        }

        slides.extend(
            paper
                .sections
                .iter()
                .filter(|s| !is_skipped_section(s))
                .map(|s| section_slide(s)),
        );

        slides.push(back_cover_slide());

        let total = slides.len();
        for (idx, slide) in slides.iter_mut().enumerate() {
            slide.number = idx + 1;
            slide.total = total;
            slide.filename = format!("{:02}-slide-{}.png", slide.number, slug(&slide.headline));
        }

        log::debug!("Generated outline with {} slides", total);

        Outline {
            topic: if paper.title.is_empty() {
                UNTITLED.to_string()
            } else {
                paper.title.clone()
            },
            style: self.style.clone(),
            audience: self.audience.clone(),
            language: self.language.clone(),
            generated: self
                .generated
                .clone()
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()),
            style_instructions: self.style_instructions.clone(),
            slides,
        }
    }
}

fn cover_slide(paper: &ExtractionResult) -> Slide {
    let mut slide = Slide::new(0, 0);
    slide.slide_type = SlideType::Cover;
    slide.narrative = "Establish paper title, authors, affiliations, and venue".to_string();
    slide.headline = if paper.title.is_empty() {
        UNTITLED.to_string()
    } else {
        paper.title.clone()
    };
    slide.subheadline = paper.authors.join("; ");
    slide.visual =
        "Clean white background, centered title in dark blue, author names below".to_string();
    slide.layout = "paper-title".to_string();
    slide
}

fn abstract_slide(abstract_text: &str) -> Slide {
    let body = truncate_chars(abstract_text, ABSTRACT_BODY_CHARS);

    let mut slide = Slide::new(0, 0);
    slide.narrative = "Provide a high-level overview of the paper's contribution".to_string();
    slide.headline = "Abstract".to_string();
    slide.subheadline = "Key contributions and motivation".to_string();
    slide.body = vec![body];
    slide.visual = "Clean text layout with bullet points highlighting key contributions".to_string();
    slide.layout = "bullet-list".to_string();
    slide
}

fn section_slide(section: &str) -> Slide {
    let heading = strip_heading_number(section);
    let lower = heading.to_lowercase();
    let template = SECTION_TEMPLATES
        .iter()
        .find(|t| t.keywords.iter().any(|k| lower.contains(k)))
        .unwrap_or(&DEFAULT_SECTION_TEMPLATE);

    let mut slide = Slide::new(0, 0);
    slide.narrative = template.narrative.to_string();
    slide.headline = heading.to_string();
    slide.visual = template.visual.to_string();
    slide.layout = template.layout.to_string();
    slide
}

fn back_cover_slide() -> Slide {
    let mut slide = Slide::new(0, 0);
    slide.slide_type = SlideType::BackCover;
    slide.narrative = "Provide references and contact information".to_string();
    slide.headline = "References & Thank You".to_string();
    slide.subheadline = "Key citations and resources".to_string();
    slide.visual = "Two-column reference list, optional QR code in corner".to_string();
    slide.layout = "references-list".to_string();
    slide
}

/// Abstract and references headings already have dedicated slides.
fn is_skipped_section(section: &str) -> bool {
    let lower = strip_heading_number(section).to_lowercase();
    lower.starts_with("abstract") || lower.starts_with("references")
}

fn strip_heading_number(heading: &str) -> &str {
    match HEADING_NUMBER_REGEX.find(heading) {
        Some(m) => &heading[m.end()..],
        None => heading,
    }
}

/// Lowercase hyphenated slug of the first few words, `slide` if none.
fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let words: Vec<&str> = SLUG_WORD_REGEX
        .find_iter(&lower)
        .take(SLUG_MAX_WORDS)
        .map(|m| m.as_str())
        .collect();

    if words.is_empty() {
        "slide".to_string()
    } else {
        words.join("-")
    }
}
