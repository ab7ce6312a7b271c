//! OCR backends for image documents.

use crate::error::SourceError;

/// Abstraction over an OCR engine.
///
/// Implementations accept raw PNG/JPEG bytes and return the recognized text
/// for the whole image; no region-of-interest cropping.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, SourceError>;
}

/// Returns a pre-set string regardless of input. Lets pipeline tests run
/// without a system Tesseract install.
pub struct MockOcr {
    text: String,
}

impl MockOcr {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockOcr {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

#[cfg(feature = "tesseract")]
pub mod tesseract {
    //! Tesseract OCR backend. Requires system libtesseract + libleptonica.

    use leptess::LepTess;

    use super::OcrBackend;
    use crate::error::SourceError;

    pub struct TesseractOcr {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractOcr {
        pub fn new(data_path: Option<String>, lang: impl Into<String>) -> Self {
            Self {
                data_path,
                lang: lang.into(),
            }
        }
    }

    impl OcrBackend for TesseractOcr {
        fn recognize(&self, image_bytes: &[u8]) -> Result<String, SourceError> {
            let mut tess = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| SourceError::Extraction(e.to_string()))?;
            tess.set_image_from_mem(image_bytes)
                .map_err(|e| SourceError::Extraction(e.to_string()))?;
            tess.get_utf8_text()
                .map_err(|e| SourceError::Extraction(e.to_string()))
        }
    }
}
