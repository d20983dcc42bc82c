//! Process command - extract figures from a single statement file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use finstat_core::models::config::OutputFormat;
use finstat_core::{
    ExtractionOutcome, FinancialSnapshot, Label, LabelSearchParser, StatementExtractor,
    StatementReport,
};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Period end date to echo in the report (YYYY-MM-DD)
    #[arg(long, value_parser = parse_period_end_date)]
    period_end_date: Option<String>,

    /// Report absent figures as null instead of failing
    #[arg(long)]
    allow_partial: bool,

    /// Show where each figure was found
    #[arg(long)]
    show_details: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Format {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
            Format::Text => OutputFormat::Text,
        }
    }
}

/// Validate a period end date, keeping it as the caller wrote it.
pub fn parse_period_end_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| value.to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let parser = LabelSearchParser::new().with_config(config.extraction.clone());
    let result = parser.extract_from_file(&args.input, &config.pdf)?;
    for warning in &result.warnings {
        warn!("{}", warning);
    }

    if args.show_details {
        print_details(&result.snapshot);
    }

    let report = if args.allow_partial {
        StatementReport::partial(&result.snapshot, args.period_end_date.clone())
    } else {
        StatementReport::from_snapshot(&result.snapshot, args.period_end_date.clone())?
    };

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let output = format_report(&report, format, config.output.pretty)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_details(snapshot: &FinancialSnapshot) {
    for label in Label::ALL {
        match snapshot.outcome(label) {
            ExtractionOutcome::Present(found) => eprintln!(
                "{} {}: {} ({:?} at line {}, raw {:?})",
                style("ℹ").blue(),
                label,
                found.value,
                found.resolution,
                found.line + 1,
                found.raw
            ),
            ExtractionOutcome::Absent => {
                eprintln!("{} {}: absent", style("ℹ").blue(), label)
            }
        }
    }
}

pub fn format_report(
    report: &StatementReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &StatementReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["period_end_date", "revenue", "cost_of_sales", "gross_profit"])?;
    wtr.write_record([
        report.period_end_date.as_deref().unwrap_or(""),
        report.results.revenue.as_deref().unwrap_or(""),
        report.results.cost_of_sales.as_deref().unwrap_or(""),
        report.results.gross_profit.as_deref().unwrap_or(""),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &StatementReport) -> String {
    let mut output = String::new();

    if let Some(date) = &report.period_end_date {
        output.push_str(&format!("Period end:    {}\n", date));
    }

    let value = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    output.push_str(&format!("Revenue:       {}\n", value(&report.results.revenue)));
    output.push_str(&format!("Cost of sales: {}\n", value(&report.results.cost_of_sales)));
    output.push_str(&format!("Gross profit:  {}\n", value(&report.results.gross_profit)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use finstat_core::ReportResults;

    fn report() -> StatementReport {
        StatementReport {
            period_end_date: Some("2023-12-31".to_string()),
            results: ReportResults {
                revenue: Some("350018".to_string()),
                cost_of_sales: Some("146306".to_string()),
                gross_profit: None,
            },
        }
    }

    #[test]
    fn test_parse_period_end_date() {
        assert_eq!(parse_period_end_date("2023-12-31"), Ok("2023-12-31".to_string()));
        assert!(parse_period_end_date("31/12/2023").is_err());
        assert!(parse_period_end_date("2023-02-30").is_err());
    }

    #[test]
    fn test_format_csv() {
        let csv = format_report(&report(), OutputFormat::Csv, false).unwrap();
        assert_eq!(
            csv,
            "period_end_date,revenue,cost_of_sales,gross_profit\n2023-12-31,350018,146306,\n"
        );
    }

    #[test]
    fn test_format_text() {
        let text = format_report(&report(), OutputFormat::Text, false).unwrap();
        assert!(text.contains("Revenue:       350018"));
        assert!(text.contains("Gross profit:  -"));
    }
}
