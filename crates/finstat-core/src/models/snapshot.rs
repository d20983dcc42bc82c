//! Extraction outcomes for a single statement.

use serde::{Deserialize, Serialize};

use crate::error::ArithmeticError;
use crate::statement::rules::{gross_profit, Label};

/// How a label's amount was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Found on the label's own line, after the label.
    SameLine,
    /// Found on a following line within the lookahead window.
    Lookahead,
}

/// An amount resolved for a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelValue {
    /// Canonical decimal string.
    pub value: String,
    /// Token as it appeared in the text.
    pub raw: String,
    /// Line index where the amount was found.
    pub line: usize,
    /// How the amount was located.
    pub resolution: Resolution,
}

/// Result of searching for one label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Present(LabelValue),
    #[default]
    Absent,
}

impl ExtractionOutcome {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Canonical value, if present.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Present(found) => Some(&found.value),
            Self::Absent => None,
        }
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::Present(found) => Some(found.resolution),
            Self::Absent => None,
        }
    }
}

/// Figures extracted from one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub revenue: ExtractionOutcome,
    pub cost_of_sales: ExtractionOutcome,
    /// Filled only when both inputs are present and the arithmetic succeeds.
    pub gross_profit: Option<String>,
}

impl FinancialSnapshot {
    /// Build a snapshot, deriving gross profit when both values are present.
    pub fn new(revenue: ExtractionOutcome, cost_of_sales: ExtractionOutcome) -> Self {
        let mut snapshot = Self {
            revenue,
            cost_of_sales,
            gross_profit: None,
        };
        if snapshot.revenue.is_present() && snapshot.cost_of_sales.is_present() {
            snapshot.gross_profit = snapshot.compute_gross_profit().ok();
        }
        snapshot
    }

    /// Outcome for a label.
    pub fn outcome(&self, label: Label) -> &ExtractionOutcome {
        match label {
            Label::Revenue => &self.revenue,
            Label::CostOfSales => &self.cost_of_sales,
        }
    }

    /// Labels whose outcome is absent, in label order.
    pub fn missing(&self) -> Vec<Label> {
        Label::ALL
            .into_iter()
            .filter(|label| !self.outcome(*label).is_present())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Compute gross profit, reporting why it cannot be computed.
    pub fn compute_gross_profit(&self) -> Result<String, ArithmeticError> {
        gross_profit(self.revenue.value(), self.cost_of_sales.value())
    }
}
