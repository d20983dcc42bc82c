//! Batch processing command for multiple statement files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use finstat_core::models::config::{OutputFormat, PdfConfig};
use finstat_core::{FinancialSnapshot, LabelSearchParser, StatementExtractor, StatementReport};

use super::config::load_config;
use super::process::{format_report, Format};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    snapshot: Option<FinancialSnapshot>,
    report: Option<StatementReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

impl FileResult {
    fn status(&self) -> &'static str {
        match (&self.report, &self.snapshot) {
            (Some(_), _) => "success",
            (None, Some(_)) => "incomplete",
            (None, None) => "error",
        }
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Each document is independent; workers share only the read-only parser.
    let parser = Arc::new(LabelSearchParser::new().with_config(config.extraction.clone()));
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for path in files {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let parser = Arc::clone(&parser);
        let pdf_config = config.pdf.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            process_single_file(path, &parser, &pdf_config)
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle.await?;
        overall_pb.inc(1);

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                overall_pb.abandon();
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }

        results.push(result);
    }

    overall_pb.finish_with_message("Complete");

    // Write outputs
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(report) = &result.report {
                let output_path = output_path(output_dir, &result.path, format);
                let content = format_report(report, format, config.output.pretty)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.report.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: PathBuf,
    parser: &LabelSearchParser,
    pdf_config: &PdfConfig,
) -> FileResult {
    let start = Instant::now();

    let (snapshot, report, error) = match parser.extract_from_file(&path, pdf_config) {
        Ok(result) => {
            let snapshot = result.snapshot;
            match StatementReport::from_snapshot(&snapshot, None) {
                Ok(report) => (Some(snapshot), Some(report), None),
                Err(e) => (Some(snapshot), None, Some(e.to_string())),
            }
        }
        Err(e) => (None, None, Some(e.to_string())),
    };

    FileResult {
        path,
        snapshot,
        report,
        error,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }
}

fn output_path(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let output_name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("statement");

    let extension = match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };

    output_dir.join(format!("{}.{}", output_name, extension))
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "revenue",
        "cost_of_sales",
        "gross_profit",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let snapshot = result.snapshot.as_ref();
        let revenue = snapshot.and_then(|s| s.revenue.value()).unwrap_or("");
        let cost_of_sales = snapshot.and_then(|s| s.cost_of_sales.value()).unwrap_or("");
        let gross_profit = snapshot
            .and_then(|s| s.gross_profit.as_deref())
            .unwrap_or("");

        wtr.write_record([
            filename,
            result.status(),
            revenue,
            cost_of_sales,
            gross_profit,
            &result.processing_time_ms.to_string(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_extension() {
        let path = output_path(Path::new("out"), Path::new("in/acme-10k.pdf"), OutputFormat::Csv);
        assert_eq!(path, PathBuf::from("out/acme-10k.csv"));
    }

    #[test]
    fn test_process_single_file_reports_missing_input() {
        let parser = LabelSearchParser::new();
        let result = process_single_file(
            PathBuf::from("does-not-exist.txt"),
            &parser,
            &PdfConfig::default(),
        );
        assert_eq!(result.status(), "error");
        assert!(result.error.is_some());
    }
}
