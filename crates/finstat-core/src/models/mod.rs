//! Data models: configuration, extraction outcomes and reports.

pub mod config;
pub mod report;
pub mod snapshot;

pub use config::{AnchorPolicy, ExtractionConfig, FinstatConfig, OutputConfig, OutputFormat, PdfConfig};
pub use report::{ReportResults, StatementReport};
pub use snapshot::{ExtractionOutcome, FinancialSnapshot, LabelValue, Resolution};
