//! Text extraction from PDF sources.
//!
//! The summarizer only sees [`PageText`]; anything able to turn bytes into
//! page texts can feed it through [`PageExtractor`]. [`LopdfExtractor`] is
//! the built-in implementation.

mod backend;
mod detect;
mod normalize;

pub use backend::LopdfExtractor;
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_pdf, is_pdf_bytes, PdfFormat,
};
pub use normalize::normalize_text;

use crate::error::Result;
use crate::model::PageText;

/// Largest accepted source, in bytes (30 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 30 * 1024 * 1024;

/// Largest accepted page count.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Something that turns a document's bytes into per-page text.
pub trait PageExtractor {
    /// Extract the text of every page, in document order.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>>;
}

/// How per-page extraction failures are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop on the first page that fails
    #[default]
    Strict,
    /// Log the failure and keep the page with empty text
    Lenient,
}

/// Options for text extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Reject sources larger than this many bytes
    pub max_bytes: u64,

    /// Reject documents with more pages than this
    pub max_pages: u32,

    /// Per-page failure handling
    pub error_mode: ErrorMode,

    /// Apply Unicode and ligature normalization to page text
    pub normalize: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the page limit.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the error handling mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Keep going past pages that fail to extract.
    pub fn lenient(self) -> Self {
        self.with_error_mode(ErrorMode::Lenient)
    }

    /// Enable or disable text normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_pages: DEFAULT_MAX_PAGES,
            error_mode: ErrorMode::Strict,
            normalize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let options = ExtractOptions::default();
        assert_eq!(options.max_bytes, 31_457_280);
        assert_eq!(options.max_pages, 100);
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.normalize);
    }

    #[test]
    fn test_builder() {
        let options = ExtractOptions::new()
            .with_max_pages(5)
            .with_max_bytes(1024)
            .lenient()
            .with_normalize(false);
        assert_eq!(options.max_pages, 5);
        assert_eq!(options.max_bytes, 1024);
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.normalize);
    }
}
