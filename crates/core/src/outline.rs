//! Slide deck outline document.
//!
//! The outline is a markdown file that round-trips between
//! [`render_outline`] and [`parse_outline`]. Slides are separated by lines
//! holding only `---`; inside a slide, `// MARKER` lines open blocks that run
//! until the next marker or `**Field**:` line.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Image source used when a slide does not name one.
pub const DEFAULT_IMAGE_SOURCE: &str = "generate";

const OUTLINE_HEADING: &str = "# Slide Deck Outline";
const STYLE_OPEN: &str = "<STYLE_INSTRUCTIONS>";
const STYLE_CLOSE: &str = "</STYLE_INSTRUCTIONS>";
const SEPARATOR: &str = "---";

const NARRATIVE_MARKER: &str = "// NARRATIVE GOAL";
const KEY_CONTENT_MARKER: &str = "// KEY CONTENT";
const VISUAL_MARKER: &str = "// VISUAL";
const LAYOUT_MARKER: &str = "// LAYOUT";
const IMAGE_SOURCE_MARKER: &str = "// IMAGE_SOURCE";

static SLIDE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## Slide (\d+) of (\d+)").unwrap());

/// Role of a slide within the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideType {
    Cover,
    Content,
    BackCover,
    /// A label this crate does not generate itself, kept verbatim.
    Other(String),
}

impl SlideType {
    /// Parse the `**Type**:` label.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Cover" => Self::Cover,
            "Content" => Self::Content,
            "Back Cover" => Self::BackCover,
            other => Self::Other(other.to_string()),
        }
    }

    /// The label written to the outline.
    pub fn label(&self) -> &str {
        match self {
            Self::Cover => "Cover",
            Self::Content => "Content",
            Self::BackCover => "Back Cover",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slide of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,

    /// Total number of slides in the deck.
    pub total: usize,

    pub slide_type: SlideType,

    /// Image filename, e.g. `03-slide-introduction.png`.
    pub filename: String,

    pub narrative: String,
    pub headline: String,

    /// Empty when the slide has no sub-headline.
    pub subheadline: String,

    /// Body items, without their leading `- `.
    pub body: Vec<String>,

    pub visual: String,

    /// Layout name, empty when unspecified.
    pub layout: String,

    pub image_source: String,
}

impl Slide {
    /// Create an empty content slide with the given position.
    pub fn new(number: usize, total: usize) -> Self {
        Self {
            number,
            total,
            slide_type: SlideType::Content,
            filename: String::new(),
            narrative: String::new(),
            headline: String::new(),
            subheadline: String::new(),
            body: Vec::new(),
            visual: String::new(),
            layout: String::new(),
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
        }
    }
}

/// A complete outline with its document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub topic: String,
    pub style: String,
    pub audience: String,
    pub language: String,

    /// Creation timestamp, `YYYY-MM-DD HH:MM`.
    pub generated: String,

    pub style_instructions: String,
    pub slides: Vec<Slide>,
}

/// What [`parse_outline`] recovers from a markdown outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOutline {
    pub style_instructions: String,
    pub slides: Vec<Slide>,
}

/// Write an outline as markdown.
pub fn render_outline(outline: &Outline) -> String {
    let mut out: Vec<String> = vec![
        OUTLINE_HEADING.to_string(),
        String::new(),
        format!("**Topic**: {}", outline.topic),
        format!("**Style**: {}", outline.style),
        format!("**Audience**: {}", outline.audience),
        format!("**Language**: {}", outline.language),
        format!("**Slide Count**: {}", outline.slides.len()),
        format!("**Generated**: {}", outline.generated),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        STYLE_OPEN.to_string(),
        outline.style_instructions.clone(),
        STYLE_CLOSE.to_string(),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
    ];

    for slide in &outline.slides {
        out.push(format!("## Slide {} of {}", slide.number, slide.total));
        out.push(String::new());
        out.push(format!("**Type**: {}", slide.slide_type));
        out.push(format!("**Filename**: {}", slide.filename));
        out.push(String::new());

        out.push(NARRATIVE_MARKER.to_string());
        out.push(slide.narrative.clone());
        out.push(String::new());

        out.push(KEY_CONTENT_MARKER.to_string());
        out.push(format!("Headline: {}", slide.headline));
        if !slide.subheadline.is_empty() {
            out.push(format!("Sub-headline: {}", slide.subheadline));
        }
        if !slide.body.is_empty() {
            out.push("Body:".to_string());
            out.extend(slide.body.iter().map(|item| format!("- {}", item)));
        }
        out.push(String::new());

        out.push(VISUAL_MARKER.to_string());
        out.push(slide.visual.clone());
        out.push(String::new());

        out.push(LAYOUT_MARKER.to_string());
        out.push(format!("Layout: {}", slide.layout));
        out.push(String::new());

        if !slide.image_source.is_empty() {
            out.push(IMAGE_SOURCE_MARKER.to_string());
            out.push(format!("Source: {}", slide.image_source));
        }
        out.push(String::new());
        out.push(SEPARATOR.to_string());
        out.push(String::new());
    }

    out.join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Narrative,
    KeyContent,
    Visual,
    Layout,
    ImageSource,
}

impl Block {
    fn from_marker(line: &str) -> Option<Self> {
        match line {
            NARRATIVE_MARKER => Some(Self::Narrative),
            KEY_CONTENT_MARKER => Some(Self::KeyContent),
            VISUAL_MARKER => Some(Self::Visual),
            LAYOUT_MARKER => Some(Self::Layout),
            IMAGE_SOURCE_MARKER => Some(Self::ImageSource),
            _ => None,
        }
    }
}

/// Parse a markdown outline back into slides.
///
/// Parsing is lenient: unknown lines are ignored and missing fields stay
/// empty. A slide without a `## Slide N of M` header is numbered by its
/// position. Only numbers too large to represent are an error.
pub fn parse_outline(content: &str) -> Result<ParsedOutline> {
    let content = content.replace("\r\n", "\n");

    let (style_instructions, rest) = match (content.find(STYLE_OPEN), content.find(STYLE_CLOSE)) {
        (Some(open), Some(close)) if open < close => (
            content[open + STYLE_OPEN.len()..close].trim().to_string(),
            &content[close + STYLE_CLOSE.len()..],
        ),
        _ => (String::new(), content.as_str()),
    };

    let mut slides = Vec::new();
    for chunk in split_sections(rest) {
        let chunk = chunk.trim();
        if chunk.is_empty() || chunk.starts_with(OUTLINE_HEADING) {
            continue;
        }
        if let Some(slide) = parse_slide(chunk)? {
            slides.push(slide);
        }
    }

    let count = slides.len();
    for (idx, slide) in slides.iter_mut().enumerate() {
        if slide.number == 0 {
            slide.number = idx + 1;
        }
        if slide.total == 0 {
            slide.total = count;
        }
    }

    log::debug!("Parsed outline with {} slides", count);

    Ok(ParsedOutline {
        style_instructions,
        slides,
    })
}

/// Split on lines consisting only of the separator.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim() == SEPARATOR {
            sections.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    sections.push(current.join("\n"));

    sections
}

fn parse_number(value: &str, what: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|e| Error::OutlineParseError(format!("invalid slide {} '{}': {}", what, value, e)))
}

fn parse_slide(chunk: &str) -> Result<Option<Slide>> {
    let mut slide = Slide::new(0, 0);
    let mut recognized = false;
    let mut block: Option<Block> = None;
    let mut narrative: Vec<&str> = Vec::new();
    let mut visual: Vec<&str> = Vec::new();
    let mut layout: Option<String> = None;
    let mut image_source: Option<String> = None;

    for raw in chunk.lines() {
        let line = raw.trim();

        if let Some(caps) = SLIDE_HEADER_REGEX.captures(line) {
            slide.number = parse_number(&caps[1], "number")?;
            slide.total = parse_number(&caps[2], "total")?;
            recognized = true;
            block = None;
            continue;
        }

        if let Some(value) = line.strip_prefix("**Type**:") {
            slide.slide_type = SlideType::from_label(value);
            recognized = true;
            block = None;
            continue;
        }

        if let Some(value) = line.strip_prefix("**Filename**:") {
            slide.filename = value.trim().to_string();
            recognized = true;
            block = None;
            continue;
        }

        if line.starts_with("**") {
            block = None;
            continue;
        }

        if line.starts_with("//") {
            block = Block::from_marker(line);
            recognized |= block.is_some();
            continue;
        }

        match block {
            Some(Block::Narrative) => narrative.push(line),
            Some(Block::Visual) => visual.push(line),
            Some(Block::KeyContent) => {
                if let Some(value) = line.strip_prefix("Headline:") {
                    slide.headline = value.trim().to_string();
                } else if let Some(value) = line.strip_prefix("Sub-headline:") {
                    slide.subheadline = value.trim().to_string();
                } else if line.starts_with("Body:") {
                    continue;
                } else if let Some(item) = line.strip_prefix('-') {
                    slide.body.push(item.trim().to_string());
                }
            }
            Some(Block::Layout) => {
                if let (None, Some(value)) = (&layout, line.strip_prefix("Layout:")) {
                    layout = Some(value.trim().to_string());
                }
            }
            Some(Block::ImageSource) => {
                if let (None, Some(value)) = (&image_source, line.strip_prefix("Source:")) {
                    image_source = Some(value.trim().to_string());
                }
            }
            None => {}
        }
    }

    if !recognized {
        return Ok(None);
    }

    slide.narrative = narrative.join("\n").trim().to_string();
    slide.visual = visual.join("\n").trim().to_string();
    slide.layout = layout.unwrap_or_default();
    slide.image_source = image_source
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_SOURCE.to_string());

    Ok(Some(slide))
}
