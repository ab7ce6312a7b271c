//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document as PdfDocument;
use tracing::debug;

use crate::error::SourceError;

/// Text-layer extractor for digital PDFs.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Extract the text of an in-memory PDF, all pages concatenated in page
    /// order with no per-page boundary markers.
    pub fn extract_text(data: &[u8]) -> Result<String, SourceError> {
        let mut doc =
            PdfDocument::load_mem(data).map_err(|e| SourceError::Pdf(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(SourceError::Encrypted);
            }
            debug!("decrypted PDF with empty password");
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| SourceError::Pdf(format!("failed to save decrypted PDF: {e}")))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(SourceError::NoPages);
        }
        debug!("loaded PDF with {} pages", page_count);

        pdf_extract::extract_text_from_mem(&raw)
            .map_err(|e| SourceError::Extraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bytes_are_a_parse_error() {
        let result = PdfTextExtractor::extract_text(b"%PDF-oops truncated");
        assert!(matches!(result, Err(SourceError::Pdf(_))));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(matches!(
            PdfTextExtractor::extract_text(&[]),
            Err(SourceError::Pdf(_))
        ));
    }
}
