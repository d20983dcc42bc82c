//! PDF text source.
//!
//! A PDF is parsed with lopdf and its text layer is pulled once with
//! pdf-extract. Pages without a text layer are not OCR'd.

mod extractor;

pub use extractor::{LoadedPdf, PdfExtractor, PdfType};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
