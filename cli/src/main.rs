//! pdfdigest CLI - PDF summarization tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfdigest::render::{self, RenderOptions};
use pdfdigest::{
    summarize_document, ExtractOptions, JsonFormat, SelectionSettings, SourceDocument,
    SummaryFocus, SummaryLength, SummaryStyle,
};

#[derive(Parser)]
#[command(name = "pdfdigest")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Summarize PDF documents to text, Markdown, and JSON", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    summary: SummaryArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a PDF and print or save one format
    #[command(alias = "sum")]
    Summarize {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Include a document header
        #[arg(long)]
        header: bool,

        /// Omit page references
        #[arg(long)]
        no_page_refs: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        summary: SummaryArgs,
    },

    /// Summarize a PDF into all formats (Markdown, text, JSON, export)
    Convert {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        summary: SummaryArgs,
    },

    /// Print the extracted text of each page
    Pages {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only print this page (1-indexed)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Copy)]
struct SummaryArgs {
    /// Summary length
    #[arg(short, long, value_enum, default_value = "medium")]
    length: LengthArg,

    /// Summary layout
    #[arg(short, long, value_enum, default_value = "bullets")]
    style: StyleArg,

    /// Scoring focus
    #[arg(long, value_enum, default_value = "overview")]
    focus: FocusArg,

    /// Keep going when a page's text cannot be extracted
    #[arg(long)]
    lenient: bool,
}

impl SummaryArgs {
    fn settings(&self) -> SelectionSettings {
        SelectionSettings::new()
            .with_length(self.length.into())
            .with_style(self.style.into())
            .with_focus(self.focus.into())
    }

    fn extract_options(&self) -> ExtractOptions {
        if self.lenient {
            ExtractOptions::new().lenient()
        } else {
            ExtractOptions::new()
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LengthArg {
    /// About 7 points
    Short,
    /// About 14 points (default)
    Medium,
    /// About 22 points
    Detailed,
}

impl From<LengthArg> for SummaryLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => SummaryLength::Short,
            LengthArg::Medium => SummaryLength::Medium,
            LengthArg::Detailed => SummaryLength::Detailed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    /// One bullet per point
    Bullets,
    /// Points grouped into short paragraphs
    Paragraphs,
    /// Points grouped under numbered parts
    Outline,
}

impl From<StyleArg> for SummaryStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Bullets => SummaryStyle::Bullets,
            StyleArg::Paragraphs => SummaryStyle::Paragraphs,
            StyleArg::Outline => SummaryStyle::Outline,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FocusArg {
    /// Findings and conclusions
    Overview,
    /// Numbers, statistics and trends
    Data,
    /// Procedures and study design
    Methods,
}

impl From<FocusArg> for SummaryFocus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::Overview => SummaryFocus::Overview,
            FocusArg::Data => SummaryFocus::Data,
            FocusArg::Methods => SummaryFocus::Methods,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain text
    Text,
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Summarize {
            input,
            output,
            format,
            header,
            no_page_refs,
            compact,
            summary,
        }) => {
            let render_options = RenderOptions::new()
                .with_header(header)
                .with_page_refs(!no_page_refs);
            cmd_summarize(
                &input,
                output.as_deref(),
                format,
                compact,
                &render_options,
                summary,
            )
        }
        Some(Commands::Convert {
            input,
            output,
            summary,
        }) => cmd_convert(&input, output.as_deref(), summary),
        Some(Commands::Pages { input, page }) => cmd_pages(&input, page),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), cli.summary)
            } else {
                println!("{}", "Usage: pdfdigest <FILE> [OUTPUT]".yellow());
                println!("       pdfdigest --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_summarize(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    compact: bool,
    render_options: &RenderOptions,
    args: SummaryArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SourceDocument::open_with_options(input, args.extract_options())?;
    let summary = summarize_document(&doc, &args.settings());

    if summary.is_empty() {
        log::warn!("no sentence in {} qualified for the summary", input.display());
    }

    let content = match format {
        OutputFormat::Text => render::to_text(&summary, render_options),
        OutputFormat::Markdown => render::to_markdown(&summary, render_options),
        OutputFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&summary, json_format)?
        }
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    args: SummaryArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_summary", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting text...");
    let doc = SourceDocument::open_with_options(input, args.extract_options())?;
    pb.inc(1);

    pb.set_message("Summarizing...");
    let summary = summarize_document(&doc, &args.settings());
    let render_options = RenderOptions::new().with_header(true);
    pb.inc(1);

    pb.set_message("Generating Markdown and text...");
    fs::write(
        output_dir.join("summary.md"),
        render::to_markdown(&summary, &render_options),
    )?;
    fs::write(
        output_dir.join("summary.txt"),
        render::to_text(&summary, &render_options),
    )?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    fs::write(
        output_dir.join("summary.json"),
        render::to_json(&summary, JsonFormat::Pretty)?,
    )?;
    let export = render::to_export_document(&summary);
    fs::write(
        output_dir.join("export.json"),
        serde_json::to_string_pretty(&export)?,
    )?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} points from {} pages",
        "Summary:".green().bold(),
        summary.stats.selected_count,
        summary.stats.page_count
    );
    println!("{}", "Output files:".green().bold());
    println!("  {} summary.md", "├─".dimmed());
    println!("  {} summary.txt", "├─".dimmed());
    println!("  {} summary.json", "├─".dimmed());
    println!("  {} export.json", "└─".dimmed());

    Ok(())
}

fn cmd_pages(input: &Path, page: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SourceDocument::open_with_options(input, ExtractOptions::new().lenient())?;

    let pages: Vec<_> = match page {
        Some(n) => vec![doc
            .get_page(n)
            .ok_or_else(|| format!("Page {} not found ({} pages)", n, doc.page_count()))?],
        None => doc.pages.iter().collect(),
    };

    for page in pages {
        println!(
            "{}",
            format!("── Page {} ({} words) ──", page.page_number, page.word_count())
                .cyan()
                .bold()
        );
        println!("{}\n", page.text.trim());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Show metadata even if some pages fail to extract
    let doc = SourceDocument::open_with_options(input, ExtractOptions::new().lenient())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), doc.metadata.pdf_version);
    println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if doc.metadata.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let blank = doc.pages.iter().filter(|p| p.is_blank()).count();
    let chars: usize = doc.pages.iter().map(|p| p.text.chars().count()).sum();

    println!("{}: {}", "Words".bold(), doc.word_count());
    println!("{}: {}", "Characters".bold(), chars);
    println!("{}: {}", "Blank pages".bold(), blank);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfdigest".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Extractive PDF summarization tool");
    println!();
    println!("License: MIT");
}
