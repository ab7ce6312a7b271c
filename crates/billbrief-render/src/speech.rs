//! Speech synthesis via the Google Translate TTS endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use billbrief_core::error::RenderError;
use billbrief_core::render::SpeechSynthesizer;

const TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects queries beyond roughly this many characters, so
/// longer text is sent in chunks and the resulting mp3 frames concatenated.
const MAX_CHUNK_CHARS: usize = 200;

/// Text-to-speech client for the unauthenticated Google Translate endpoint.
pub struct GoogleTtsSynthesizer {
    client: Client,
}

impl GoogleTtsSynthesizer {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Split text into chunks the endpoint accepts, on word boundaries.
    /// A single word longer than the budget is sent as its own oversized
    /// chunk and left for the endpoint to reject.
    fn chunk_text(text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > MAX_CHUNK_CHARS {
                chunks.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

impl Default for GoogleTtsSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsSynthesizer {
    async fn synthesize(&self, text: &str, lang_code: &str) -> Result<Vec<u8>, RenderError> {
        let chunks = Self::chunk_text(text);
        debug!("synthesizing {} chunks as {lang_code}", chunks.len());

        let mut audio = Vec::new();
        for chunk in &chunks {
            let response = self
                .client
                .get(TTS_URL)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", lang_code),
                    ("q", chunk.as_str()),
                ])
                .send()
                .await
                .map_err(|e| RenderError::Speech(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RenderError::Speech(format!(
                    "TTS endpoint returned {status}"
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| RenderError::Speech(e.to_string()))?;
            audio.extend_from_slice(&bytes);
        }
        Ok(audio)
    }
}
