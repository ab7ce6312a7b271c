//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod languages;
pub mod process;

use std::path::Path;
use std::sync::Arc;

use billbrief_core::{BillReportPipeline, BillbriefConfig, OpenAiBackend};
use billbrief_render::{GoogleTtsSynthesizer, TypstPdfRenderer};

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<BillbriefConfig> {
    match config_path {
        Some(path) => Ok(BillbriefConfig::from_file(Path::new(path))?),
        None => Ok(BillbriefConfig::default()),
    }
}

/// Wire a pipeline from configuration. Fails fast on missing credentials,
/// before any document is read.
pub(crate) fn build_pipeline(config: &BillbriefConfig) -> anyhow::Result<BillReportPipeline> {
    let backend = OpenAiBackend::new(config.completion.clone())?;

    let pipeline = BillReportPipeline::new(Arc::new(backend))
        .with_pdf_renderer(Box::new(TypstPdfRenderer::new()))
        .with_speech_synthesizer(Box::new(GoogleTtsSynthesizer::new()));

    #[cfg(feature = "tesseract")]
    let pipeline = pipeline.with_ocr(Box::new(billbrief_core::TesseractOcr::new(
        config.ocr.data_path.clone(),
        config.ocr.lang.clone(),
    )));

    Ok(pipeline)
}
