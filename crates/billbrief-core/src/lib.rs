//! Core library for bill report extraction.
//!
//! This crate provides:
//! - Document-to-text sourcing (PDF text layer, pluggable OCR)
//! - Fuzzy date parsing and keyword/regex due-date heuristics
//! - Completion-backed summarization, translation and due-date extraction
//! - The report pipeline tying the stages together

pub mod dates;
pub mod error;
pub mod lang;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod summary;
pub mod tts;

pub use dates::{DueDateExtractor, HeuristicDateExtractor, parse_fuzzy};
pub use error::{BillbriefError, Result};
pub use models::{BillbriefConfig, Document, MediaKind, ReportResult};
pub use pipeline::BillReportPipeline;
pub use render::{PdfRenderer, SpeechSynthesizer};
pub use source::{OcrBackend, TextSource};
#[cfg(feature = "tesseract")]
pub use source::TesseractOcr;
pub use summary::{AiDateExtractor, BASE_LANGUAGE, Summarizer};
pub use tts::clean_for_tts;

/// Re-export completion types.
pub use billbrief_llm::{CompletionBackend, CompletionError, OpenAiBackend, OpenAiConfig};
