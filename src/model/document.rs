//! Document-level types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PageText;
use crate::error::Result;
use crate::extract::{ExtractOptions, LopdfExtractor};

/// An extracted PDF: metadata plus per-page text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File name the document was loaded from
    pub filename: String,

    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Page texts in document order
    pub pages: Vec<PageText>,
}

impl SourceDocument {
    /// Create a document from already-extracted pages.
    pub fn new(filename: impl Into<String>, pages: Vec<PageText>) -> Self {
        let metadata = DocumentMetadata {
            page_count: pages.len() as u32,
            ..Default::default()
        };
        Self {
            filename: filename.into(),
            metadata,
            pages,
        }
    }

    /// Open and extract a PDF file with default limits.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open and extract a PDF file.
    ///
    /// The size limit is checked against file metadata before the file is
    /// read.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();
        let extractor = LopdfExtractor::with_options(options);
        extractor.check_size(std::fs::metadata(path)?.len())?;

        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        extractor.extract_document(filename, &data)
    }

    /// Extract a PDF held in memory with default limits.
    pub fn from_bytes(filename: impl Into<String>, data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(filename, data, ExtractOptions::default())
    }

    /// Extract a PDF held in memory.
    pub fn from_bytes_with_options(
        filename: impl Into<String>,
        data: &[u8],
        options: ExtractOptions,
    ) -> Result<Self> {
        LopdfExtractor::with_options(options).extract_document(filename, data)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_number: u32) -> Option<&PageText> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Approximate word count over all pages.
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(PageText::word_count).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Header information for rendered summaries.
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            filename: self.filename.clone(),
            title: self.metadata.title.clone(),
            page_count: self.page_count(),
            word_count: self.word_count(),
        }
    }
}

/// Document metadata read from the PDF trailer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

/// Summary header data: which document, how big.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Source file name
    pub filename: String,

    /// Title from metadata, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Number of pages
    pub page_count: u32,

    /// Number of words across all pages
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = SourceDocument::new("empty.pdf", Vec::new());
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.word_count(), 0);
    }

    #[test]
    fn test_document_info() {
        let doc = SourceDocument::new(
            "report.pdf",
            vec![
                PageText::new(1, "one two three"),
                PageText::new(2, "four  five"),
            ],
        );
        let info = doc.info();
        assert_eq!(info.filename, "report.pdf");
        assert_eq!(info.page_count, 2);
        assert_eq!(info.word_count, 5);
        assert_eq!(doc.metadata.page_count, 2);
        assert_eq!(doc.get_page(2).map(|p| p.text.as_str()), Some("four  five"));
        assert!(doc.get_page(3).is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let result = SourceDocument::open("/nonexistent/path/report.pdf");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_from_bytes_not_pdf() {
        let result = SourceDocument::from_bytes("notes.txt", b"just some notes");
        assert!(matches!(result, Err(crate::Error::UnknownFormat)));
    }
}
