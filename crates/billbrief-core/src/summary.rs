//! Bill summarization and AI-assisted due-date extraction.

use std::sync::Arc;

use billbrief_llm::CompletionBackend;
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::dates::parse_fuzzy;
use crate::error::SummarizeError;

/// Language summaries are produced in before any translation pass.
pub const BASE_LANGUAGE: &str = "English";

/// Character budget for bill text submitted to the completion service.
/// Truncation is silent and lossy; the pipeline's whole-text heuristic tier
/// still sees everything past the cutoff.
const MAX_PROMPT_CHARS: usize = 12_000;

const SUMMARY_MAX_TOKENS: u32 = 800;
const TRANSLATION_MAX_TOKENS: u32 = 800;
const DUE_DATE_MAX_TOKENS: u32 = 30;

/// Sentinel the completion service is instructed to answer when no due date
/// is stated.
const NOT_FOUND: &str = "not found";

/// Produces a human-readable bill summary via the completion service, with
/// an optional end-to-end translation pass.
pub struct Summarizer {
    backend: Arc<dyn CompletionBackend>,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Summarize bill text, translating when the target is not the base
    /// language. Both completion calls are atomic; any failure aborts.
    pub async fn summarize(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, SummarizeError> {
        let truncated = truncate_chars(text, MAX_PROMPT_CHARS);
        if truncated.len() < text.len() {
            debug!(
                "bill text truncated from {} to {} chars for summarization",
                text.len(),
                truncated.len()
            );
        }

        let prompt = format!(
            "You are a helpful assistant. Read the following utility bill and provide a clear, \
             concise summary for a general audience. Highlight the total amount due, due date, \
             billing period, usage details, and any important notes or charges. Format the \
             summary as a friendly, easy-to-read report.\n\n\
             At the end of your summary, add a line in the format: 'Due Date: <date>'. \
             Double-check that this is the correct due date from the bill. If you cannot find \
             a due date, say 'Due Date: Not found'.\n\n{truncated}"
        );
        let summary = self.backend.complete(&prompt, SUMMARY_MAX_TOKENS).await?;

        if target_language != BASE_LANGUAGE {
            debug!("translating summary to {target_language}");
            return self.translate(&summary, target_language).await;
        }
        Ok(summary)
    }

    async fn translate(
        &self,
        summary: &str,
        target_language: &str,
    ) -> Result<String, SummarizeError> {
        let prompt = format!(
            "Translate the following bill summary into {target_language}. Keep the translation \
             clear, friendly, and easy to understand.\n\n{summary}"
        );
        Ok(self.backend.complete(&prompt, TRANSLATION_MAX_TOKENS).await?)
    }
}

/// Asks the completion service for the due date already stated in a summary.
pub struct AiDateExtractor {
    backend: Arc<dyn CompletionBackend>,
}

impl AiDateExtractor {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Best-effort extraction: completion failures, the not-found sentinel
    /// and unparseable answers all yield `None`, deferring to the heuristic
    /// tiers.
    pub async fn extract(&self, summary: &str) -> Option<NaiveDate> {
        let prompt = format!(
            "Extract the due date from the following bill summary. Return only the due date in \
             YYYY-MM-DD format if possible, or the exact date string as shown. If no due date \
             is found, reply with 'Not found'.\n\n{summary}"
        );
        let answer = match self.backend.complete(&prompt, DUE_DATE_MAX_TOKENS).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!("due-date completion failed: {err}");
                return None;
            }
        };

        if answer.trim().to_lowercase() == NOT_FOUND {
            return None;
        }
        match parse_fuzzy(&answer) {
            Ok(date) => Some(date),
            Err(_) => {
                debug!("completion answer {answer:?} is not a parseable date");
                None
            }
        }
    }
}

/// Truncate to a maximum number of characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
