//! # pdfdigest
//!
//! Extractive summaries of text-bearing PDF documents.
//!
//! Page text is pulled out with `lopdf`, split into sentences, scored by
//! keyword, numeric and structural signals, and reduced to a small,
//! page-diverse set of points. The points can be laid out as bullets,
//! grouped paragraphs or an outline, and written as plain text, Markdown,
//! JSON or an export document for word-processor writers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfdigest::{summarize_file, render, SelectionSettings};
//!
//! fn main() -> pdfdigest::Result<()> {
//!     let summary = summarize_file("report.pdf", &SelectionSettings::default())?;
//!
//!     let options = render::RenderOptions::new().with_header(true);
//!     println!("{}", render::to_markdown(&summary, &options));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Segmentation**: sentence splitting with length and word-count filters
//! - **Scoring**: focus keywords, numbers, significance, proper nouns, structure
//! - **Selection**: one point per page first, then best remaining, no near-duplicates
//! - **Rendering**: bullets, paragraphs or outline with numeric emphasis
//!
//! Summarization is deterministic: the same pages and settings always give
//! the same summary.

pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod summarize;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    detect_format_from_bytes, detect_format_from_path, is_pdf, ErrorMode, ExtractOptions,
    LopdfExtractor, PageExtractor, PdfFormat,
};
pub use model::{
    Candidate, DocumentInfo, DocumentMetadata, PageText, SelectionSettings, SourceDocument,
    SummaryFocus, SummaryLength, SummaryPoint, SummaryStyle, TextSpan,
};
pub use render::{
    ExportDocument, JsonFormat, RenderOptions, RenderedOutput, Summary, SummaryBlock,
};
pub use summarize::{generate_summary, Summarizer, SummaryStats};

use std::path::Path;

/// Summarize an already-extracted document.
///
/// # Example
///
/// ```
/// use pdfdigest::{summarize_document, PageText, SelectionSettings, SourceDocument};
///
/// let doc = SourceDocument::new(
///     "memo.pdf",
///     vec![PageText::new(1, "The main result is that output rose 12% over the year.")],
/// );
/// let summary = summarize_document(&doc, &SelectionSettings::default());
/// assert_eq!(summary.info.filename, "memo.pdf");
/// assert_eq!(summary.output.referenced_pages(), vec![1]);
/// ```
pub fn summarize_document(doc: &SourceDocument, settings: &SelectionSettings) -> Summary {
    let run = Summarizer::new(*settings).run(&doc.pages);
    Summary::new(doc.info(), *settings, run.output, run.stats)
}

/// Extract and summarize a PDF file.
///
/// # Example
///
/// ```no_run
/// use pdfdigest::{summarize_file, SelectionSettings, SummaryStyle};
///
/// let settings = SelectionSettings::new().with_style(SummaryStyle::Outline);
/// let summary = summarize_file("paper.pdf", &settings).unwrap();
/// println!("{}", summary.output.plain_text());
/// ```
pub fn summarize_file<P: AsRef<Path>>(path: P, settings: &SelectionSettings) -> Result<Summary> {
    let doc = SourceDocument::open(path)?;
    Ok(summarize_document(&doc, settings))
}

/// Extract and summarize a PDF held in memory.
///
/// # Example
///
/// ```no_run
/// use pdfdigest::{summarize_bytes, SelectionSettings};
///
/// let data = std::fs::read("paper.pdf").unwrap();
/// let summary = summarize_bytes("paper.pdf", &data, &SelectionSettings::default()).unwrap();
/// ```
pub fn summarize_bytes(
    filename: impl Into<String>,
    data: &[u8],
    settings: &SelectionSettings,
) -> Result<Summary> {
    let doc = SourceDocument::from_bytes(filename, data)?;
    Ok(summarize_document(&doc, settings))
}

/// Builder for extracting and summarizing PDF documents.
///
/// # Example
///
/// ```no_run
/// use pdfdigest::{Digest, SummaryFocus, SummaryLength};
///
/// let markdown = Digest::new()
///     .with_length(SummaryLength::Detailed)
///     .with_focus(SummaryFocus::Data)
///     .with_header()
///     .lenient()
///     .summarize("report.pdf")?
///     .to_markdown();
/// # Ok::<(), pdfdigest::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Digest {
    extract_options: ExtractOptions,
    settings: SelectionSettings,
    render_options: RenderOptions,
}

impl Digest {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given selection settings.
    pub fn with_settings(mut self, settings: SelectionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the summary length.
    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.settings = self.settings.with_length(length);
        self
    }

    /// Set the summary style.
    pub fn with_style(mut self, style: SummaryStyle) -> Self {
        self.settings = self.settings.with_style(style);
        self
    }

    /// Set the summary focus.
    pub fn with_focus(mut self, focus: SummaryFocus) -> Self {
        self.settings = self.settings.with_focus(focus);
        self
    }

    /// Keep going past pages whose text cannot be extracted.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Set the page limit.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.extract_options = self.extract_options.with_max_pages(max_pages);
        self
    }

    /// Set the size limit in bytes.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.extract_options = self.extract_options.with_max_bytes(max_bytes);
        self
    }

    /// Include a document header in text and Markdown output.
    pub fn with_header(mut self) -> Self {
        self.render_options = self.render_options.with_header(true);
        self
    }

    /// Enable or disable page references in output.
    pub fn with_page_refs(mut self, page_refs: bool) -> Self {
        self.render_options = self.render_options.with_page_refs(page_refs);
        self
    }

    /// Extract and summarize a PDF file.
    pub fn summarize<P: AsRef<Path>>(self, path: P) -> Result<DigestResult> {
        let document = SourceDocument::open_with_options(path, self.extract_options.clone())?;
        Ok(self.summarize_document(document))
    }

    /// Extract and summarize a PDF held in memory.
    pub fn summarize_bytes(self, filename: impl Into<String>, data: &[u8]) -> Result<DigestResult> {
        let document =
            SourceDocument::from_bytes_with_options(filename, data, self.extract_options.clone())?;
        Ok(self.summarize_document(document))
    }

    /// Summarize an already-extracted document.
    pub fn summarize_document(self, document: SourceDocument) -> DigestResult {
        let summary = summarize_document(&document, &self.settings);
        DigestResult {
            document,
            summary,
            render_options: self.render_options,
        }
    }
}

/// Result of summarizing a document with [`Digest`].
#[derive(Debug, Clone)]
pub struct DigestResult {
    /// The extracted document
    pub document: SourceDocument,
    /// The generated summary
    pub summary: Summary,
    /// Render options to use
    render_options: RenderOptions,
}

impl DigestResult {
    /// Get the summary.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Get the extracted document.
    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.summary, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.summary, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.summary, format)
    }

    /// Build an export document for binary writers.
    pub fn to_export(&self) -> ExportDocument {
        render::to_export_document(&self.summary)
    }
}
