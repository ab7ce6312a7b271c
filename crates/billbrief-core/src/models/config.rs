//! Configuration structures for the billbrief pipeline.

use billbrief_llm::OpenAiConfig;
use serde::{Deserialize, Serialize};

/// Main configuration for the billbrief pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillbriefConfig {
    /// Completion service configuration.
    pub completion: OpenAiConfig,

    /// Report configuration.
    pub report: ReportConfig,

    /// OCR configuration.
    pub ocr: OcrConfig,
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default target language for summaries and speech.
    pub language: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: "English".to_string(),
        }
    }
}

/// OCR backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language code.
    pub lang: String,

    /// Tesseract data directory (None = system default).
    pub data_path: Option<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            data_path: None,
        }
    }
}

impl BillbriefConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
