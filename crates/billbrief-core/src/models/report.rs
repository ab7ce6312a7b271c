//! Document and report models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Declared media kind of a bill document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Digital PDF with an extractable text layer.
    Pdf,
    /// Scanned image (PNG/JPEG), needs OCR.
    Image,
}

impl MediaKind {
    /// Resolve a media kind from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self, SourceError> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "png" | "jpg" | "jpeg" => Ok(Self::Image),
            other => Err(SourceError::UnsupportedMedia(other.to_string())),
        }
    }

    /// Resolve a media kind from a MIME type string.
    pub fn from_mime(mime: &str) -> Result<Self, SourceError> {
        match mime {
            "application/pdf" => Ok(Self::Pdf),
            "image/png" | "image/jpeg" | "image/jpg" => Ok(Self::Image),
            other => Err(SourceError::UnsupportedMedia(other.to_string())),
        }
    }
}

/// A bill document submitted for one pipeline invocation.
///
/// Immutable; the pipeline never holds onto it between invocations.
#[derive(Debug, Clone)]
pub struct Document {
    bytes: Vec<u8>,
    kind: MediaKind,
}

impl Document {
    pub fn new(bytes: Vec<u8>, kind: MediaKind) -> Self {
        Self { bytes, kind }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

/// Output aggregate of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    /// Localized natural-language summary of the bill.
    pub summary: String,

    /// Inferred payment due date. Absence is a valid outcome, not an error.
    pub due_date: Option<NaiveDate>,

    /// Rendered PDF report, when requested and rendering succeeded.
    #[serde(skip)]
    pub pdf: Option<Vec<u8>>,

    /// Encoded audio voice-over (mp3), when requested and synthesis succeeded.
    #[serde(skip)]
    pub audio: Option<Vec<u8>>,

    /// Non-fatal diagnostics (rendering failures, unknown languages).
    pub warnings: Vec<String>,
}
