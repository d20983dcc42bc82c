//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FinstatError, Result};
use crate::statement::rules::Label;

/// Main configuration for the finstat pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinstatConfig {
    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// How a label behaves when its first anchor yields no amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// The first anchor is final; nothing found means absent.
    #[default]
    FirstMatch,
    /// Keep looking for later anchors until a value is found.
    UntilResolved,
}

/// Statement extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Non-blank lines scanned after a Revenue anchor.
    pub revenue_window: usize,

    /// Non-blank lines scanned after a Cost of Sales anchor.
    pub cost_of_sales_window: usize,

    /// Behavior after an anchor that yields no amount.
    pub anchor_policy: AnchorPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            revenue_window: 10,
            cost_of_sales_window: 12,
            anchor_policy: AnchorPolicy::FirstMatch,
        }
    }
}

impl ExtractionConfig {
    /// Lookahead window for a label.
    pub fn window(&self, label: Label) -> usize {
        match label {
            Label::Revenue => self.revenue_window,
            Label::CostOfSales => self.cost_of_sales_window,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum non-whitespace characters for a PDF to count as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 1 }
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl FinstatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FinstatError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FinstatError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
