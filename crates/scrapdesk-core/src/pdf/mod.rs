//! PDF text source using lopdf and pdf-extract.
//!
//! Price sheets arrive as text-layer PDFs; this module only pulls the
//! embedded text out. Rendering, layout, and scanned documents are out
//! of scope.

use lopdf::Document;
use tracing::debug;

use crate::error::{PdfError, Result};

/// A loaded PDF document serving as extraction input.
pub struct PdfTextSource {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfTextSource {
    /// Load a PDF from memory.
    ///
    /// PDFs encrypted with an empty password are decrypted in place;
    /// anything needing a real password is rejected, as are documents
    /// without pages.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted.into());
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages.into());
        }
        debug!("loaded PDF with {} pages", page_count);

        Ok(Self { document, raw_data })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Extract the embedded text layer of the whole document.
    pub fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapdeskError;

    #[test]
    fn test_load_rejects_garbage() {
        let result = PdfTextSource::load(b"not a pdf at all");
        assert!(matches!(
            result,
            Err(ScrapdeskError::Pdf(PdfError::Parse(_)))
        ));
    }
}
