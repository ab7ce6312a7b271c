//! Rendering collaborator contracts.
//!
//! Implementations live in `billbrief-render`; the pipeline only depends on
//! these traits so rendering failures stay isolated from summary and
//! due-date extraction.

use async_trait::async_trait;

use crate::error::RenderError;

/// Renders a summary into a PDF report.
pub trait PdfRenderer: Send + Sync {
    fn render(&self, summary: &str, language: &str) -> Result<Vec<u8>, RenderError>;
}

/// Renders text into an encoded audio stream (mp3).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang_code: &str) -> Result<Vec<u8>, RenderError>;
}
