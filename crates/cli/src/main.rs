//! CLI tool for turning academic papers into slide deck outlines and prompts.

mod backend;

use anyhow::{Context, Result};
use backend::Backend;
use clap::{Args, Parser, Subcommand};
use deck_core::{
    extract_paper, parse_outline, render_outline, ExtractionResult, ExtractorConfig,
    LineNormalizer, OutlineGenerator, PageTextSource, PromptBuilder, MAX_PAGES,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Characters of the abstract shown in the text summary.
const ABSTRACT_PREVIEW_CHARS: usize = 500;

/// Extract paper structure and build slide deck outlines and prompts.
#[derive(Parser, Debug)]
#[command(name = "paper-deck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print title, authors, abstract and sections of one or more papers
    Extract(ExtractArgs),
    /// Write a slide deck outline for a paper
    Outline(OutlineArgs),
    /// Write one image prompt per slide of an outline
    Prompts(PromptsArgs),
}

/// Options shared by commands that read a PDF.
#[derive(Args, Debug)]
struct SourceArgs {
    /// Number of leading pages to read (at most 10)
    #[arg(short = 'n', long, default_value_t = MAX_PAGES)]
    pages: usize,

    /// Text retrieval backend
    #[arg(short, long, value_enum, default_value_t = Backend::Auto)]
    backend: Backend,

    /// Fold ligatures and other compatibility characters before detection
    #[arg(long)]
    fold: bool,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Input PDF file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Debug)]
struct OutlineArgs {
    /// Input PDF file
    input: PathBuf,

    /// Output file (default: outline.md next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Debug)]
struct PromptsArgs {
    /// Outline markdown file
    outline: PathBuf,

    /// Base prompt containing the style placeholder (default: built-in)
    #[arg(long)]
    base_prompt: Option<PathBuf>,

    /// Output directory (default: prompts/ next to the outline)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Extract(args) => run_extract(&args),
        Command::Outline(args) => run_outline(&args),
        Command::Prompts(args) => run_prompts(&args),
    }
}

fn run_extract(args: &ExtractArgs) -> Result<()> {
    let source = args.source.backend.source();
    let normalizer = LineNormalizer::new().with_fold_compatibility(args.source.fold);

    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        match process_file(input_path, source.as_ref(), &normalizer, args.source.pages) {
            Ok(result) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print!("{}", format_summary(&result));
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

fn run_outline(args: &OutlineArgs) -> Result<()> {
    let source = args.source.backend.source();
    let normalizer = LineNormalizer::new().with_fold_compatibility(args.source.fold);

    let result = process_file(&args.input, source.as_ref(), &normalizer, args.source.pages)?;
    let outline = OutlineGenerator::new().generate(&result);
    let markdown = render_outline(&outline);

    if args.print {
        print!("{}", markdown);
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.input, "outline.md"));
    write_output(&output_path, &markdown)?;
    eprintln!(
        "Generated outline: {} ({} slides)",
        output_path.display(),
        outline.slides.len()
    );

    Ok(())
}

fn run_prompts(args: &PromptsArgs) -> Result<()> {
    let content = fs::read_to_string(&args.outline)
        .with_context(|| format!("Failed to read {}", args.outline.display()))?;
    let parsed = parse_outline(&content)
        .with_context(|| format!("Failed to parse {}", args.outline.display()))?;
    log::info!("Parsed {} slides", parsed.slides.len());

    let builder = match &args.base_prompt {
        Some(path) => PromptBuilder::new(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => PromptBuilder::default(),
    };

    let prompts_dir = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.outline, "prompts"));
    fs::create_dir_all(&prompts_dir).with_context(|| {
        format!("Failed to create output directory: {}", prompts_dir.display())
    })?;

    for (filename, prompt) in builder.build_all(&parsed.style_instructions, &parsed.slides) {
        let prompt_path = prompts_dir.join(filename);
        write_output(&prompt_path, &prompt)?;
        eprintln!("Generated: {}", prompt_path.display());
    }

    eprintln!("All prompts generated in {}", prompts_dir.display());
    Ok(())
}

/// Read a paper and extract its structure.
fn process_file(
    input_path: &Path,
    source: &dyn PageTextSource,
    normalizer: &LineNormalizer,
    pages: usize,
) -> Result<ExtractionResult> {
    let data = fs::read(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let result = extract_paper(source, &data, pages, normalizer, ExtractorConfig::default())
        .with_context(|| format!("Failed to extract {}", input_path.display()))?;

    if result.is_empty() {
        log::warn!(
            "No structure found in {} (is it a scanned PDF without a text layer?)",
            input_path.display()
        );
    }

    log::info!(
        "  Found {} author line(s) and {} section(s)",
        result.authors.len(),
        result.sections.len()
    );

    Ok(result)
}

/// Human-readable summary of an extraction result.
fn format_summary(result: &ExtractionResult) -> String {
    let preview: String = result
        .abstract_text
        .chars()
        .take(ABSTRACT_PREVIEW_CHARS)
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Title: {}\n", result.title));
    out.push_str(&format!("\nAuthors: {}\n", result.authors.join("; ")));
    out.push_str(&format!("\nAbstract preview: {}\n", preview));
    out.push_str("\nSections found:\n");
    for section in &result.sections {
        out.push_str(&format!("  - {}\n", section));
    }
    out
}

/// A path named `name` in the same directory as `input`.
fn sibling_path(input: &Path, name: &str) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_defaults() {
        let cli = Cli::parse_from(["paper-deck", "extract", "paper.pdf"]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input, vec![PathBuf::from("paper.pdf")]);
                assert_eq!(args.source.pages, MAX_PAGES);
                assert_eq!(args.source.backend, Backend::Auto);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_backend_flag() {
        let cli = Cli::parse_from(["paper-deck", "-v", "outline", "p.pdf", "--backend", "pdf-extract"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Outline(args) => assert_eq!(args.source.backend, Backend::PdfExtract),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("papers/mars.pdf"), "outline.md"),
            PathBuf::from("papers/outline.md")
        );
        assert_eq!(
            sibling_path(Path::new("mars.pdf"), "prompts"),
            PathBuf::from("prompts")
        );
    }

    #[test]
    fn test_format_summary() {
        let result = ExtractionResult {
            title: "Dimension Reduction and MARS".to_string(),
            authors: vec!["Yu Liu, Degui Li".to_string()],
            abstract_text: "Short.".to_string(),
            sections: vec!["1. Introduction".to_string()],
        };

        let text = format_summary(&result);
        assert!(text.starts_with("Title: Dimension Reduction and MARS\n"));
        assert!(text.contains("\nAuthors: Yu Liu, Degui Li\n"));
        assert!(text.contains("\nAbstract preview: Short.\n"));
        assert!(text.ends_with("Sections found:\n  - 1. Introduction\n"));
    }
}
