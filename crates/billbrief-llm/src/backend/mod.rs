//! Completion backend implementations.

pub mod openai;

use async_trait::async_trait;

use crate::Result;

/// Trait for text-completion backends.
///
/// Abstracts over chat-completion providers so prompt logic can run against
/// the real service in production and scripted mocks in tests.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submit a single-prompt completion request and return the generated
    /// text, trimmed.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}
