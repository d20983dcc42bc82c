//! Error types for the finstat-core library.

use thiserror::Error;

/// Main error type for the finstat library.
#[derive(Error, Debug)]
pub enum FinstatError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or written as JSON.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input file type that has no text source.
    #[error("unsupported input format: {0:?}")]
    UnsupportedInput(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF holds too little text to read (scanned or blank).
    #[error("no text could be extracted ({found} characters, need {required}); scanned documents are not supported")]
    NoText { found: usize, required: usize },
}

/// Errors raised when gross profit is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// One of the operands was never extracted.
    #[error("missing input: {field}")]
    MissingInput { field: String },

    /// An operand is present but is not an exact decimal number.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// An operand or the difference does not fit the exact decimal range.
    #[error("gross profit is out of range")]
    Overflow,
}

impl ArithmeticError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingInput {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Errors raised when a snapshot is converted into the outgoing report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// One or both labels resolved to absent.
    #[error("could not extract: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    /// Both values are present but gross profit cannot be computed.
    #[error("cannot compute gross profit: {0}")]
    CannotCompute(#[source] ArithmeticError),
}

/// Result type for the finstat library.
pub type Result<T> = std::result::Result<T, FinstatError>;
