//! Financial statement figure extraction module.

mod parser;
pub mod rules;

pub use parser::{
    lookahead_candidate, same_line_candidate, ExtractionResult, LabelSearchParser, StatementParser,
};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FinstatError, Result};
use crate::models::config::PdfConfig;
use crate::models::snapshot::FinancialSnapshot;
use crate::pdf::PdfExtractor;

/// Entry points from flattened text, PDF bytes or a statement file.
pub trait StatementExtractor: StatementParser {
    /// Extract figures from already flattened text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        self.parse(text)
    }

    /// Extract figures from PDF bytes.
    ///
    /// A PDF with less text than `pdf.min_text_length` fails with
    /// `PdfError::NoText` rather than producing an empty snapshot.
    fn extract_from_pdf(&self, data: &[u8], pdf: &PdfConfig) -> Result<ExtractionResult> {
        let text = PdfExtractor::from_config(pdf).extract_text(data)?;
        Ok(self.extract_from_text(&text))
    }

    /// Extract figures from a `.pdf`, `.txt` or `.text` file.
    fn extract_from_file(&self, path: &Path, pdf: &PdfConfig) -> Result<ExtractionResult> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        debug!("Reading {} as {:?}", path.display(), extension);

        match extension.as_str() {
            "pdf" => self.extract_from_pdf(&fs::read(path)?, pdf),
            "txt" | "text" => Ok(self.extract_from_text(&fs::read_to_string(path)?)),
            _ => Err(FinstatError::UnsupportedInput(extension)),
        }
    }
}

impl StatementExtractor for LabelSearchParser {}

/// Extract figures from flattened text with default settings.
pub fn extract_snapshot(text: &str) -> FinancialSnapshot {
    LabelSearchParser::new().extract_from_text(text).snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let err = LabelSearchParser::new()
            .extract_from_file(Path::new("statement.docx"), &PdfConfig::default())
            .unwrap_err();
        assert!(matches!(err, FinstatError::UnsupportedInput(ext) if ext == "docx"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LabelSearchParser::new()
            .extract_from_file(Path::new("/nonexistent/statement.txt"), &PdfConfig::default())
            .unwrap_err();
        assert!(matches!(err, FinstatError::Io(_)));
    }
}
