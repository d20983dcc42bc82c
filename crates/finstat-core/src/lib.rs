//! Core library for financial statement figure extraction.
//!
//! This crate provides:
//! - PDF text extraction (the text source for the engine)
//! - Label-anchored extraction of Revenue and Cost of Sales from flattened text
//! - Exact decimal Gross Profit computation
//! - Report and configuration models

pub mod document;
pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use document::Document;
pub use error::{ArithmeticError, FinstatError, PdfError, ReportError, Result};
pub use models::config::FinstatConfig;
pub use models::report::{ReportResults, StatementReport};
pub use models::snapshot::{ExtractionOutcome, FinancialSnapshot, LabelValue, Resolution};
pub use pdf::{LoadedPdf, PdfExtractor, PdfType};
pub use statement::rules::{gross_profit, normalize, Label};
pub use statement::{
    extract_snapshot, ExtractionResult, LabelSearchParser, StatementExtractor, StatementParser,
};
