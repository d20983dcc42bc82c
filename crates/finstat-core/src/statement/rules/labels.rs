//! Statement line labels and their anchors.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{COST_OF_SALES_LABEL, REVENUE_LABEL};

/// A labeled figure searched for in a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Revenue / Revenues.
    Revenue,
    /// Cost of Sales.
    CostOfSales,
}

impl Label {
    /// All labels in resolution order.
    pub const ALL: [Label; 2] = [Label::Revenue, Label::CostOfSales];

    /// Case-insensitive pattern identifying the label on a line.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Label::Revenue => &*REVENUE_LABEL,
            Label::CostOfSales => &*COST_OF_SALES_LABEL,
        }
    }

    /// Field name used in reports and error messages.
    pub fn field_name(&self) -> &'static str {
        match self {
            Label::Revenue => "revenue",
            Label::CostOfSales => "cost_of_sales",
        }
    }

    /// Find the label on a single line. The first match wins.
    pub fn find_in(&self, line: &str) -> Option<(usize, usize)> {
        self.pattern().find(line).map(|m| (m.start(), m.end()))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Line and byte span where a label matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAnchor {
    pub label: Label,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}
