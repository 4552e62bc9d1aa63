//! Error types for pdfdigest.

use std::io;
use thiserror::Error;

/// Result type alias for pdfdigest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or summarizing a document.
///
/// The summarization pipeline itself never fails; every variant here
/// originates at the extraction boundary or while parsing settings.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The document parsed but carries no extractable text.
    #[error("Document has no extractable text (scanned or image-only PDF?)")]
    NotTextBearing,

    /// The source exceeds the configured size limit.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// The document exceeds the configured page limit.
    #[error("Document has {pages} pages, limit is {limit}")]
    TooManyPages { pages: u32, limit: u32 },

    /// A summary setting name was not recognized.
    #[error("Invalid {kind} setting: {value}")]
    InvalidSetting { kind: &'static str, value: String },

    /// Error while serializing a rendered summary.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
