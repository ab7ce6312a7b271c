//! Report rendering for billbrief.
//!
//! Implements the rendering collaborators consumed by the pipeline: a typst
//! based PDF report generator and a speech synthesizer backed by the Google
//! Translate TTS endpoint. Both are best-effort from the pipeline's point of
//! view - failures degrade to warnings, never to a failed report.

mod pdf;
mod speech;

pub use pdf::TypstPdfRenderer;
pub use speech::GoogleTtsSynthesizer;
