//! Per-slide image prompt compilation.

use crate::outline::Slide;
use std::path::Path;

/// Placeholder in the base prompt replaced by the style instructions.
pub const STYLE_PLACEHOLDER: &str = "[Insert style-specific instructions here]";

/// Base prompt used when the caller supplies none.
pub const DEFAULT_BASE_PROMPT: &str = "\
# Slide Image Generation

Create a single 16:9 presentation slide image. Render all text legibly and
exactly as given. Do not add slide numbers, watermarks, or logos.

## STYLE

[Insert style-specific instructions here]";

/// Guidance text for a named layout, if the layout is known.
pub fn layout_guidance(layout: &str) -> Option<&'static str> {
    let guidance = match layout {
        "paper-title" => "Centered title at top, authors and affiliations below, conference/venue at bottom. Formal academic style.",
        "bullet-list" => "Clean bullet points with consistent indentation and markers. Generous line spacing.",
        "split-screen" => "Two equal panels side by side. Left and right content clearly separated.",
        "binary-comparison" => "Side-by-side comparison with clear labels. Highlight differences.",
        "linear-progression" => "Sequential flow from left to right with arrows connecting steps.",
        "equation-focus" => "Centered mathematical equation with variable definitions around it.",
        "methods-diagram" => "Central diagram with labeled components and data flow arrows.",
        "agenda" => "Numbered steps with clear progression. Highlight current step if applicable.",
        "results-chart" => "Clean chart or table with axis labels, legends, and highlighted results.",
        "qualitative-grid" => "2x2 or 3x2 grid of images with consistent sizing and labels.",
        "hub-spoke" => "Central concept in middle with related items radiating outward.",
        "contributions" => "Numbered list with icons or checkmarks. Clear visual hierarchy.",
        "references-list" => "Two-column reference list with proper citation formatting.",
        _ => return None,
    };
    Some(guidance)
}

/// Prompt file name for a slide: its image filename with a `.md` extension.
pub fn prompt_filename(slide: &Slide) -> String {
    match Path::new(&slide.filename).file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => format!("{}.md", stem),
        _ => format!("{:02}-slide.md", slide.number),
    }
}

/// Compiles a base prompt plus slide content into one prompt per slide.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    base_prompt: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PROMPT)
    }
}

impl PromptBuilder {
    pub fn new(base_prompt: impl Into<String>) -> Self {
        Self {
            base_prompt: base_prompt.into(),
        }
    }

    /// Build the prompt for one slide.
    pub fn build(&self, style_instructions: &str, slide: &Slide) -> String {
        let mut prompt = self.base_prompt.replace(STYLE_PLACEHOLDER, style_instructions);
        let layout = if slide.layout.is_empty() {
            "default"
        } else {
            slide.layout.as_str()
        };

        prompt.push_str(&format!(
            "\n\n## SLIDE CONTENT\n\n**Slide {}/{}**\n**Type**: {}\n**Layout**: {}\n\n",
            slide.number, slide.total, slide.slide_type, layout
        ));
        prompt.push_str(&format!("**Narrative Goal**:\n{}\n\n", slide.narrative));
        prompt.push_str(&format!("**Headline**: {}\n", slide.headline));
        if !slide.subheadline.is_empty() {
            prompt.push_str(&format!("**Sub-headline**: {}\n", slide.subheadline));
        }

        if !slide.body.is_empty() {
            prompt.push_str("\n**Body Content**:\n");
            for (i, item) in slide.body.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", i + 1, item));
            }
        }

        prompt.push_str(&format!("\n**Visual Description**:\n{}\n", slide.visual));

        if let Some(guidance) = layout_guidance(&slide.layout) {
            prompt.push_str(&format!("\n**Layout Guidance**:\n{}\n", guidance));
        }

        prompt
    }

    /// Build `(file name, prompt)` pairs for every slide.
    pub fn build_all(&self, style_instructions: &str, slides: &[Slide]) -> Vec<(String, String)> {
        slides
            .iter()
            .map(|slide| (prompt_filename(slide), self.build(style_instructions, slide)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::SlideType;

    fn slide() -> Slide {
        let mut slide = Slide::new(3, 14);
        slide.filename = "03-slide-introduction.png".to_string();
        slide.narrative = "Introduce the problem".to_string();
        slide.headline = "Introduction".to_string();
        slide.subheadline = "Challenges".to_string();
        slide.body = vec!["First".to_string(), "Second".to_string()];
        slide.visual = "Two panels".to_string();
        slide.layout = "split-screen".to_string();
        slide
    }

    #[test]
    fn test_build_full_slide() {
        let builder = PromptBuilder::new("BASE\n[Insert style-specific instructions here]\nEND");
        let prompt = builder.build("Serif fonts.", &slide());

        assert!(prompt.starts_with("BASE\nSerif fonts.\nEND\n\n## SLIDE CONTENT\n\n"));
        assert!(prompt.contains("**Slide 3/14**\n**Type**: Content\n**Layout**: split-screen\n\n"));
        assert!(prompt.contains("**Narrative Goal**:\nIntroduce the problem\n\n**Headline**: Introduction\n"));
        assert!(prompt.contains("**Sub-headline**: Challenges\n"));
        assert!(prompt.contains("\n**Body Content**:\n1. First\n2. Second\n"));
        assert!(prompt.contains("\n**Visual Description**:\nTwo panels\n"));
        assert!(prompt.ends_with(
            "\n**Layout Guidance**:\nTwo equal panels side by side. Left and right content clearly separated.\n"
        ));
    }

    #[test]
    fn test_build_minimal_slide() {
        let mut slide = Slide::new(1, 1);
        slide.slide_type = SlideType::Cover;
        slide.headline = "Title".to_string();

        let prompt = PromptBuilder::new("B").build("", &slide);
        assert!(prompt.contains("**Layout**: default"));
        assert!(!prompt.contains("Sub-headline"));
        assert!(!prompt.contains("Body Content"));
        assert!(!prompt.contains("Layout Guidance"));
    }

    #[test]
    fn test_unknown_layout_has_no_guidance() {
        assert!(layout_guidance("results-chart").is_some());
        assert!(layout_guidance("mystery").is_none());
    }

    #[test]
    fn test_prompt_filename() {
        assert_eq!(prompt_filename(&slide()), "03-slide-introduction.md");

        let unnamed = Slide::new(7, 9);
        assert_eq!(prompt_filename(&unnamed), "07-slide.md");
    }

    #[test]
    fn test_default_base_prompt_has_placeholder() {
        assert!(DEFAULT_BASE_PROMPT.contains(STYLE_PLACEHOLDER));

        let prompts = PromptBuilder::default().build_all("Serif.", &[slide()]);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, "03-slide-introduction.md");
        assert!(prompts[0].1.contains("## STYLE\n\nSerif."));
        assert!(!prompts[0].1.contains(STYLE_PLACEHOLDER));
    }
}
