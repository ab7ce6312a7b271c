//! Text-completion abstraction layer for billbrief.
//!
//! This crate provides a unified interface for prompt-in, text-out completion
//! services so the summarization pipeline stays independent of any single
//! provider. The default backend speaks the OpenAI chat-completions protocol,
//! which most hosted and self-hosted services accept.

mod backend;
mod error;

pub use backend::CompletionBackend;
pub use backend::openai::{OpenAiBackend, OpenAiConfig};
pub use error::CompletionError;

/// Result type for completion operations.
pub type Result<T> = std::result::Result<T, CompletionError>;
