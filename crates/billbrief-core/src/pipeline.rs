//! The bill report pipeline: document bytes in, summary and due date out.

use std::sync::Arc;
use std::time::Instant;

use billbrief_llm::CompletionBackend;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::dates::{DueDateExtractor, HeuristicDateExtractor};
use crate::error::{Result, SourceError};
use crate::lang::{DEFAULT_LANGUAGE_CODE, language_code};
use crate::models::{Document, ReportResult};
use crate::render::{PdfRenderer, SpeechSynthesizer};
use crate::source::{OcrBackend, TextSource};
use crate::summary::{AiDateExtractor, Summarizer};
use crate::tts::clean_for_tts;

/// Orchestrates extraction, summarization, due-date inference and optional
/// rendering for a single bill document.
///
/// Invocations are independent: the pipeline keeps no state between runs,
/// so one instance can serve concurrent documents.
pub struct BillReportPipeline {
    source: TextSource,
    summarizer: Summarizer,
    ai_dates: AiDateExtractor,
    heuristic: Box<dyn DueDateExtractor>,
    pdf: Option<Box<dyn PdfRenderer>>,
    speech: Option<Box<dyn SpeechSynthesizer>>,
}

impl BillReportPipeline {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            source: TextSource::new(),
            summarizer: Summarizer::new(Arc::clone(&backend)),
            ai_dates: AiDateExtractor::new(backend),
            heuristic: Box::new(HeuristicDateExtractor::new()),
            pdf: None,
            speech: None,
        }
    }

    /// Attach an OCR backend for image documents.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrBackend>) -> Self {
        self.source = self.source.with_ocr(ocr);
        self
    }

    /// Replace the heuristic due-date extractor used for tiers b and c.
    pub fn with_due_date_extractor(mut self, extractor: Box<dyn DueDateExtractor>) -> Self {
        self.heuristic = extractor;
        self
    }

    /// Attach a PDF renderer for `want_pdf` requests.
    pub fn with_pdf_renderer(mut self, renderer: Box<dyn PdfRenderer>) -> Self {
        self.pdf = Some(renderer);
        self
    }

    /// Attach a speech synthesizer for `want_audio` requests.
    pub fn with_speech_synthesizer(mut self, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(synthesizer);
        self
    }

    /// Run the full pipeline over one document.
    ///
    /// Extraction and summarization failures are fatal; a missing due date
    /// is not. Rendering failures degrade to an absent field plus a warning.
    pub async fn run(
        &self,
        document: &Document,
        language: &str,
        want_pdf: bool,
        want_audio: bool,
    ) -> Result<ReportResult> {
        let start = Instant::now();

        let text = self.source.extract(document)?;
        if text.trim().is_empty() {
            return Err(SourceError::EmptyDocument.into());
        }
        debug!("extracted {} bytes of text", text.len());

        let summary = self.summarizer.summarize(&text, language).await?;

        let due_date = self.infer_due_date(&summary, &text).await;

        let mut warnings = Vec::new();
        let pdf = if want_pdf {
            self.render_pdf(&summary, language, &mut warnings)
        } else {
            None
        };
        let audio = if want_audio {
            self.render_audio(&summary, language, &mut warnings).await
        } else {
            None
        };

        info!(
            "processed bill in {} ms (due date: {:?})",
            start.elapsed().as_millis(),
            due_date
        );

        Ok(ReportResult {
            summary,
            due_date,
            pdf,
            audio,
            warnings,
        })
    }

    /// Three-tier due-date cascade. Each tier runs only when the previous
    /// one yielded nothing; all-tiers-empty is a valid outcome.
    ///
    /// Tier b scans the (possibly translated) summary with English keywords,
    /// a deliberate low-recall net; tier c still sees the untranslated text.
    async fn infer_due_date(&self, summary: &str, original_text: &str) -> Option<NaiveDate> {
        if let Some(date) = self.ai_dates.extract(summary).await {
            debug!("due date {date} from completion service");
            return Some(date);
        }
        for (origin, text) in [("summary", summary), ("original text", original_text)] {
            if let Some(date) = self.heuristic.find_date(text) {
                debug!("due date {date} from heuristic scan of {origin}");
                return Some(date);
            }
        }
        None
    }

    fn render_pdf(
        &self,
        summary: &str,
        language: &str,
        warnings: &mut Vec<String>,
    ) -> Option<Vec<u8>> {
        let Some(renderer) = &self.pdf else {
            warnings.push("PDF requested but no renderer is configured".to_string());
            return None;
        };
        match renderer.render(summary, language) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!("PDF rendering failed: {err}");
                warnings.push(format!("PDF rendering failed: {err}"));
                None
            }
        }
    }

    async fn render_audio(
        &self,
        summary: &str,
        language: &str,
        warnings: &mut Vec<String>,
    ) -> Option<Vec<u8>> {
        let Some(synthesizer) = &self.speech else {
            warnings.push("audio requested but no synthesizer is configured".to_string());
            return None;
        };
        let code = match language_code(language) {
            Some(code) => code,
            None => {
                warn!("unknown language {language:?}, speech falls back to {DEFAULT_LANGUAGE_CODE}");
                warnings.push(format!(
                    "unknown language {language:?}, speech rendered as {DEFAULT_LANGUAGE_CODE}"
                ));
                DEFAULT_LANGUAGE_CODE
            }
        };
        let clean = clean_for_tts(summary);
        match synthesizer.synthesize(&clean, code).await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!("speech synthesis failed: {err}");
                warnings.push(format!("speech synthesis failed: {err}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use billbrief_llm::{CompletionError, Result as LlmResult};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{BillbriefError, RenderError};
    use crate::models::MediaKind;
    use crate::source::MockOcr;

    struct ScriptedBackend {
        replies: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn new(replies: &[&str]) -> Arc<Self> {
            let mut replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();
            replies.reverse();
            Arc::new(Self {
                replies: Mutex::new(replies),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> LlmResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or(CompletionError::EmptyResponse)
        }
    }

    struct CountingHeuristic {
        calls: Arc<AtomicUsize>,
    }

    impl DueDateExtractor for CountingHeuristic {
        fn find_date(&self, text: &str) -> Option<NaiveDate> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HeuristicDateExtractor::new().find_date(text)
        }
    }

    struct CountingPdfRenderer {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl PdfRenderer for CountingPdfRenderer {
        fn render(&self, _summary: &str, _language: &str) -> Result<Vec<u8>, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(RenderError::Pdf("boom".to_string()))
            } else {
                Ok(b"%PDF-mock".to_vec())
            }
        }
    }

    struct CountingSynthesizer {
        calls: Arc<AtomicUsize>,
        langs: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SpeechSynthesizer for CountingSynthesizer {
        async fn synthesize(&self, _text: &str, lang_code: &str) -> Result<Vec<u8>, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.langs.lock().unwrap().push(lang_code.to_string());
            Ok(vec![0xff, 0xfb])
        }
    }

    fn image_document(text: &str) -> (BillReportPipeline, Document, Arc<ScriptedBackend>) {
        let backend = ScriptedBackend::new(&[
            "Your bill is $42.00. Due Date: 2024-05-01",
            "2024-05-01",
        ]);
        let pipeline = BillReportPipeline::new(backend.clone())
            .with_ocr(Box::new(MockOcr::new(text)));
        let document = Document::new(vec![0u8; 4], MediaKind::Image);
        (pipeline, document, backend)
    }

    #[tokio::test]
    async fn empty_document_fails_before_any_completion_call() {
        let backend = ScriptedBackend::new(&[]);
        let pipeline = BillReportPipeline::new(backend.clone())
            .with_ocr(Box::new(MockOcr::new("   \n \t ")));
        let document = Document::new(vec![1], MediaKind::Image);

        let result = pipeline.run(&document, "English", false, false).await;
        assert!(matches!(
            result,
            Err(BillbriefError::Source(SourceError::EmptyDocument))
        ));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn full_run_extracts_summary_and_due_date() {
        let (pipeline, document, backend) =
            image_document("Invoice #123, total $42.00, Due Date: 2024-05-01");

        let report = pipeline.run(&document, "English", false, false).await.unwrap();

        assert_eq!(report.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(report.summary.contains("Due Date"));
        assert!(report.pdf.is_none());
        assert!(report.audio.is_none());
        assert!(report.warnings.is_empty());
        // one summary call + one due-date call
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn tier_a_success_short_circuits_heuristic_tiers() {
        let heuristic_calls = Arc::new(AtomicUsize::new(0));
        let (pipeline, document, _) =
            image_document("Invoice #123, total $42.00, Due Date: 2024-05-01");
        let pipeline = pipeline.with_due_date_extractor(Box::new(CountingHeuristic {
            calls: heuristic_calls.clone(),
        }));

        let report = pipeline.run(&document, "English", false, false).await.unwrap();

        assert_eq!(report.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(heuristic_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn tier_b_scans_summary_when_completion_has_no_date() {
        // Summary carries a keyword date, but the date query says not found.
        let backend = ScriptedBackend::new(&[
            "Bill summary.\nDue Date: 2024-03-15",
            "Not found",
        ]);
        let pipeline = BillReportPipeline::new(backend.clone())
            .with_ocr(Box::new(MockOcr::new("some scanned bill text")));
        let document = Document::new(vec![1], MediaKind::Image);

        let report = pipeline.run(&document, "English", false, false).await.unwrap();
        assert_eq!(report.due_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[tokio::test]
    async fn tier_c_falls_back_to_original_text() {
        // Neither the completion service nor the summary knows the date; the
        // original scanned text still contains it after the truncation point
        // of a keywordless summary.
        let backend = ScriptedBackend::new(&["A summary with no dates.", "Not found"]);
        let pipeline = BillReportPipeline::new(backend.clone())
            .with_ocr(Box::new(MockOcr::new("fine print\nPay by 05/01/2024")));
        let document = Document::new(vec![1], MediaKind::Image);

        let report = pipeline.run(&document, "English", false, false).await.unwrap();
        assert_eq!(report.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[tokio::test]
    async fn all_tiers_empty_is_a_valid_result() {
        let backend = ScriptedBackend::new(&["A summary with no dates.", "Not found"]);
        let pipeline = BillReportPipeline::new(backend.clone())
            .with_ocr(Box::new(MockOcr::new("no dates anywhere")));
        let document = Document::new(vec![1], MediaKind::Image);

        let report = pipeline.run(&document, "English", false, false).await.unwrap();
        assert_eq!(report.due_date, None);
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn renderers_are_not_invoked_unless_requested() {
        let pdf_calls = Arc::new(AtomicUsize::new(0));
        let speech_calls = Arc::new(AtomicUsize::new(0));
        let (pipeline, document, _) = image_document("Due Date: 2024-05-01");
        let pipeline = pipeline
            .with_pdf_renderer(Box::new(CountingPdfRenderer {
                calls: pdf_calls.clone(),
                fail: false,
            }))
            .with_speech_synthesizer(Box::new(CountingSynthesizer {
                calls: speech_calls.clone(),
                langs: Mutex::new(Vec::new()),
            }));

        pipeline.run(&document, "English", false, false).await.unwrap();

        assert_eq!(pdf_calls.load(Ordering::SeqCst), 0);
        assert_eq!(speech_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn requested_artifacts_are_rendered() {
        let pdf_calls = Arc::new(AtomicUsize::new(0));
        let speech_calls = Arc::new(AtomicUsize::new(0));
        let (pipeline, document, _) = image_document("Due Date: 2024-05-01");
        let pipeline = pipeline
            .with_pdf_renderer(Box::new(CountingPdfRenderer {
                calls: pdf_calls.clone(),
                fail: false,
            }))
            .with_speech_synthesizer(Box::new(CountingSynthesizer {
                calls: speech_calls.clone(),
                langs: Mutex::new(Vec::new()),
            }));

        let report = pipeline.run(&document, "English", true, true).await.unwrap();

        assert!(report.pdf.is_some());
        assert!(report.audio.is_some());
        assert_eq!(pdf_calls.load(Ordering::SeqCst), 1);
        assert_eq!(speech_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pdf_failure_is_a_warning_not_an_error() {
        let pdf_calls = Arc::new(AtomicUsize::new(0));
        let (pipeline, document, _) = image_document("Due Date: 2024-05-01");
        let pipeline = pipeline.with_pdf_renderer(Box::new(CountingPdfRenderer {
            calls: pdf_calls,
            fail: true,
        }));

        let report = pipeline.run(&document, "English", true, false).await.unwrap();

        assert!(report.pdf.is_none());
        assert_eq!(report.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("PDF rendering failed"));
    }

    #[tokio::test]
    async fn unknown_language_warns_and_uses_default_speech_code() {
        let speech_calls = Arc::new(AtomicUsize::new(0));
        let langs = Mutex::new(Vec::new());
        let synthesizer = CountingSynthesizer {
            calls: speech_calls.clone(),
            langs,
        };
        // reach into the synthesizer afterwards via Arc
        let synthesizer = Arc::new(synthesizer);

        struct Forward(Arc<CountingSynthesizer>);
        #[async_trait]
        impl SpeechSynthesizer for Forward {
            async fn synthesize(
                &self,
                text: &str,
                lang_code: &str,
            ) -> Result<Vec<u8>, RenderError> {
                self.0.synthesize(text, lang_code).await
            }
        }

        // Non-base language, so the summarizer also issues a translation call.
        let backend = ScriptedBackend::new(&[
            "Summary. Due Date: 2024-05-01",
            "Summary, translated. Due Date: 2024-05-01",
            "2024-05-01",
        ]);
        let pipeline = BillReportPipeline::new(backend)
            .with_ocr(Box::new(MockOcr::new("Due Date: 2024-05-01")))
            .with_speech_synthesizer(Box::new(Forward(synthesizer.clone())));
        let document = Document::new(vec![1], MediaKind::Image);

        let report = pipeline.run(&document, "Klingon", false, true).await.unwrap();

        assert_eq!(synthesizer.langs.lock().unwrap().as_slice(), ["en"]);
        assert!(report.warnings.iter().any(|w| w.contains("unknown language")));
    }

    #[tokio::test]
    async fn requested_pdf_without_renderer_warns() {
        let (pipeline, document, _) = image_document("Due Date: 2024-05-01");
        let report = pipeline.run(&document, "English", true, false).await.unwrap();
        assert!(report.pdf.is_none());
        assert!(report.warnings.iter().any(|w| w.contains("no renderer")));
    }
}
