//! Error types for the billbrief-core library.

use thiserror::Error;

/// Main error type for the billbrief library.
#[derive(Error, Debug)]
pub enum BillbriefError {
    /// Document-to-text sourcing error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Summarization error.
    #[error("summarization error: {0}")]
    Summarize(#[from] SummarizeError),

    /// Date parsing error.
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// Rendering error from the PDF/speech collaborators.
    #[error("rendering error: {0}")]
    Render(#[from] RenderError),

    /// Completion error from the completion layer.
    #[error("completion error: {0}")]
    Completion(#[from] billbrief_llm::CompletionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning document bytes into text.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The declared media kind is neither PDF nor a supported image type.
    #[error("unsupported media kind: {0}")]
    UnsupportedMedia(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Text extraction failed in a collaborator.
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// Extraction produced no text to process.
    #[error("no text could be extracted from the document")]
    EmptyDocument,

    /// An image document was submitted but no OCR backend is configured.
    #[error("no OCR backend configured for image input")]
    NoOcrBackend,
}

/// Errors related to summary generation.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The completion service failed while producing or translating a summary.
    #[error("completion request failed: {0}")]
    Completion(#[from] billbrief_llm::CompletionError),
}

/// Errors related to date parsing.
#[derive(Error, Debug)]
pub enum DateError {
    /// No date could be recovered from the text.
    #[error("unparseable date: {0:?}")]
    Unparseable(String),
}

/// Errors from the optional rendering collaborators. Non-fatal to the
/// pipeline result; they surface as warnings and absent fields.
#[derive(Error, Debug)]
pub enum RenderError {
    /// PDF report generation failed.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    /// Speech synthesis failed.
    #[error("speech synthesis failed: {0}")]
    Speech(String),
}

/// Result type for the billbrief library.
pub type Result<T> = std::result::Result<T, BillbriefError>;
