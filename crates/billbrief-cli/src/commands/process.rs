//! Process command - summarize a single bill file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use billbrief_core::{Document, MediaKind, ReportResult};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input bill file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for the report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Target language for the summary
    #[arg(short, long)]
    language: Option<String>,

    /// Write a PDF report to this path
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Write an mp3 voice-over to this path
    #[arg(long)]
    audio: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text report
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let kind = MediaKind::from_extension(&extension)?;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.report.language.clone());

    // Credentials are checked here, before the document is read.
    let pipeline = super::build_pipeline(&config)?;

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Reading document...");

    let bytes = fs::read(&args.input)?;
    let document = Document::new(bytes, kind);

    pb.set_message("Summarizing...");
    let report = pipeline
        .run(&document, &language, args.pdf.is_some(), args.audio.is_some())
        .await?;

    pb.finish_and_clear();

    for warning in &report.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }

    if let (Some(path), Some(bytes)) = (&args.pdf, &report.pdf) {
        fs::write(path, bytes)?;
        println!("PDF report written to {}", path.display());
    }
    if let (Some(path), Some(bytes)) = (&args.audio, &report.audio) {
        fs::write(path, bytes)?;
        println!("Voice-over written to {}", path.display());
    }

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => format_text(&report, &language),
    };
    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    info!("Done in {} ms", start.elapsed().as_millis());
    Ok(())
}

fn format_text(report: &ReportResult, language: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bill Report ({language})\n\n"));
    out.push_str(&report.summary);
    out.push('\n');
    match report.due_date {
        Some(date) => out.push_str(&format!("\nDue date: {date}\n")),
        None => out.push_str("\nDue date: not found\n"),
    }
    out
}
