//! Page text extraction backed by lopdf.

use lopdf::{Dictionary, Document as LopdfDocument, Object};

use crate::error::{Error, Result};
use crate::model::{DocumentMetadata, PageText, SourceDocument};

use super::{
    detect_format_from_bytes, normalize_text, ErrorMode, ExtractOptions, PageExtractor,
};

/// Extracts per-page text with `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfExtractor {
    options: ExtractOptions,
}

impl LopdfExtractor {
    /// Create an extractor with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Reject sources over the size limit before reading them.
    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.options.max_bytes {
            return Err(Error::FileTooLarge {
                size,
                limit: self.options.max_bytes,
            });
        }
        Ok(())
    }

    /// Extract a whole document: metadata plus page texts.
    pub fn extract_document(
        &self,
        filename: impl Into<String>,
        data: &[u8],
    ) -> Result<SourceDocument> {
        let format = detect_format_from_bytes(data)?;
        self.check_size(data.len() as u64)?;

        let doc = LopdfDocument::load_mem(data)?;
        let page_ids = doc.get_pages();
        let page_count = page_ids.len() as u32;
        if page_count > self.options.max_pages {
            return Err(Error::TooManyPages {
                pages: page_count,
                limit: self.options.max_pages,
            });
        }

        let mut pages = Vec::with_capacity(page_ids.len());
        for &page_number in page_ids.keys() {
            let text = self.extract_page_text(&doc, page_number)?;
            pages.push(PageText::new(page_number, text));
        }

        if pages.iter().all(PageText::is_blank) {
            return Err(Error::NotTextBearing);
        }

        let metadata = read_metadata(&doc, format.version, page_count);
        let filename = filename.into();
        log::info!(
            "extracted {} pages from {} (PDF {})",
            page_count,
            if filename.is_empty() { "<memory>" } else { filename.as_str() },
            metadata.pdf_version
        );

        Ok(SourceDocument {
            filename,
            metadata,
            pages,
        })
    }

    fn extract_page_text(&self, doc: &LopdfDocument, page_number: u32) -> Result<String> {
        let text = match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => match self.options.error_mode {
                ErrorMode::Strict => {
                    return Err(Error::TextExtract(format!("Page {}: {}", page_number, e)));
                }
                ErrorMode::Lenient => {
                    log::warn!("skipping text of page {}: {}", page_number, e);
                    String::new()
                }
            },
        };

        if self.options.normalize {
            Ok(normalize_text(&text))
        } else {
            Ok(text)
        }
    }
}

impl PageExtractor for LopdfExtractor {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>> {
        self.extract_document(String::new(), data).map(|doc| doc.pages)
    }
}

fn read_metadata(doc: &LopdfDocument, header_version: String, page_count: u32) -> DocumentMetadata {
    let mut metadata = DocumentMetadata {
        pdf_version: if doc.version.is_empty() {
            header_version
        } else {
            doc.version.clone()
        },
        page_count,
        encrypted: doc.is_encrypted(),
        ..Default::default()
    };

    if let Ok(info_ref) = doc.trailer.get(b"Info").and_then(Object::as_reference) {
        if let Ok(info) = doc.get_dictionary(info_ref) {
            metadata.title = get_string_from_dict(info, b"Title");
            metadata.author = get_string_from_dict(info, b"Author");
        }
    }

    metadata
}

fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let value = match dict.get(key).ok()? {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok()?,
        _ => return None,
    };
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let [0xFE, 0xFF, rest @ ..] = bytes {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::StringFormat;

    #[test]
    fn test_rejects_non_pdf() {
        let result = LopdfExtractor::new().extract_pages(b"plain text, not a pdf");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_rejects_oversized() {
        let extractor = LopdfExtractor::with_options(ExtractOptions::new().with_max_bytes(8));
        let result = extractor.extract_pages(b"%PDF-1.4\n% padding past the limit");
        assert!(matches!(
            result,
            Err(Error::FileTooLarge { limit: 8, .. })
        ));
    }

    #[test]
    fn test_broken_body() {
        let result = LopdfExtractor::new().extract_pages(b"%PDF-1.4\ngarbage");
        assert!(matches!(
            result,
            Err(Error::PdfParse(_)) | Err(Error::Io(_)) | Err(Error::NotTextBearing)
        ));
    }

    #[test]
    fn test_decode_utf16() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_string(&bytes), "Hi");
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_pdf_string(&[0x63, 0x61, 0x66, 0xE9]), "caf\u{e9}");
    }

    #[test]
    fn test_get_string_from_dict() {
        let mut dict = Dictionary::new();
        dict.set("Title", Object::String(b"Annual Report".to_vec(), StringFormat::Literal));
        dict.set("Author", Object::String(b"   ".to_vec(), StringFormat::Literal));
        assert_eq!(get_string_from_dict(&dict, b"Title").as_deref(), Some("Annual Report"));
        assert_eq!(get_string_from_dict(&dict, b"Author"), None);
        assert_eq!(get_string_from_dict(&dict, b"Subject"), None);
    }
}
