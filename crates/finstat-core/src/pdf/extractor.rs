//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::Result;
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Whether a loaded PDF has usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// No extractable text (scanned or blank).
    Empty,
}

/// A parsed PDF together with its extracted text layer.
#[derive(Debug, Clone)]
pub struct LoadedPdf {
    page_count: u32,
    text: String,
}

impl LoadedPdf {
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Number of non-whitespace characters in the text layer.
    pub fn text_len(&self) -> usize {
        self.text.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Classify against a minimum amount of text (at least one character).
    pub fn classify(&self, min_text_length: usize) -> PdfType {
        if self.text_len() >= min_text_length.max(1) {
            PdfType::Text
        } else {
            PdfType::Empty
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// PDF text extractor.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { min_text_length: 1 }
    }

    /// Create an extractor from the `pdf` configuration section.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new().with_min_text_length(config.min_text_length)
    }

    /// Minimum non-whitespace characters for the PDF to count as text-based.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Parse a PDF, decrypting it with an empty password if needed, and
    /// extract its text layer.
    pub fn load(&self, data: &[u8]) -> Result<LoadedPdf> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let text = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads bytes, so hand it the decrypted document
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            extract_text_layer(&decrypted)?
        } else {
            extract_text_layer(data)?
        };

        debug!("Loaded PDF with {} pages, {} characters of text", page_count, text.len());
        Ok(LoadedPdf { page_count, text })
    }

    /// Load a PDF and return its text, failing when it has too little text.
    pub fn extract_text(&self, data: &[u8]) -> Result<String> {
        let pdf = self.load(data)?;
        let pdf_type = pdf.classify(self.min_text_length);
        debug!(
            "PDF analysis: {} pages, text_len={} -> {:?}",
            pdf.page_count(),
            pdf.text_len(),
            pdf_type
        );

        match pdf_type {
            PdfType::Text => Ok(pdf.into_text()),
            PdfType::Empty => Err(PdfError::NoText {
                found: pdf.text_len(),
                required: self.min_text_length.max(1),
            }),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_text_layer(data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| PdfError::TextExtraction(e.to_string()))
}
