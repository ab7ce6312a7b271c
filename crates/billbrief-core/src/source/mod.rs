//! Document-to-text sourcing.

mod ocr;
mod pdf;

pub use ocr::{MockOcr, OcrBackend};
#[cfg(feature = "tesseract")]
pub use ocr::tesseract::TesseractOcr;
pub use pdf::PdfTextExtractor;

use crate::error::SourceError;
use crate::models::{Document, MediaKind};

/// Converts raw document bytes into plain text.
///
/// PDF documents go through the embedded text layer; image documents go
/// through whichever [`OcrBackend`] is configured. No retries - a
/// collaborator failure propagates as a typed [`SourceError`].
pub struct TextSource {
    ocr: Option<Box<dyn OcrBackend>>,
}

impl TextSource {
    pub fn new() -> Self {
        Self { ocr: None }
    }

    /// Attach an OCR backend for image documents.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrBackend>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Extract plain text from a document.
    pub fn extract(&self, document: &Document) -> Result<String, SourceError> {
        match document.kind() {
            MediaKind::Pdf => PdfTextExtractor::extract_text(document.bytes()),
            MediaKind::Image => {
                let ocr = self.ocr.as_ref().ok_or(SourceError::NoOcrBackend)?;
                ocr.recognize(document.bytes())
            }
        }
    }
}

impl Default for TextSource {
    fn default() -> Self {
        Self::new()
    }
}
