//! Batch command - process multiple bill files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use billbrief_core::{BillReportPipeline, Document, MediaKind};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Directory for per-bill JSON reports
    #[arg(short, long, default_value = "reports")]
    output_dir: PathBuf,

    /// Target language for summaries
    #[arg(short, long)]
    language: Option<String>,

    /// Stop at the first failure instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.report.language.clone());
    let pipeline = super::build_pipeline(&config)?;

    let files = collect_files(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No input files matched");
    }

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut processed = 0usize;
    let mut failed = 0usize;
    for file in &files {
        pb.set_message(file.display().to_string());
        match process_one(&pipeline, file, &language, &args.output_dir).await {
            Ok(due_date) => {
                processed += 1;
                let due = due_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "not found".to_string());
                pb.println(format!("{} {} (due: {due})", style("ok").green(), file.display()));
            }
            Err(err) => {
                failed += 1;
                pb.println(format!("{} {}: {err:#}", style("failed").red(), file.display()));
                if args.fail_fast {
                    pb.finish_and_clear();
                    return Err(err);
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{processed} processed, {failed} failed");
    Ok(())
}

fn collect_files(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in inputs {
        let path = PathBuf::from(pattern);
        if path.exists() {
            files.push(path);
            continue;
        }
        for entry in glob::glob(pattern)? {
            files.push(entry?);
        }
    }
    Ok(files)
}

async fn process_one(
    pipeline: &BillReportPipeline,
    file: &Path,
    language: &str,
    output_dir: &Path,
) -> anyhow::Result<Option<NaiveDate>> {
    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let kind = MediaKind::from_extension(&extension)?;

    let bytes = fs::read(file)?;
    let report = pipeline
        .run(&Document::new(bytes, kind), language, false, false)
        .await?;

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let out = output_dir.join(format!("{stem}.json"));
    fs::write(&out, serde_json::to_string_pretty(&report)?)?;

    Ok(report.due_date)
}
