//! Common regex patterns for financial statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Currency symbols recognised in front of an amount.
pub const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Characters that may join digit groups inside an amount.
pub const GROUPING_CHARS: [char; 3] = [',', '.', ' '];

lazy_static! {
    // Numeric token grammar:
    //   "(" ws? currency? ws? groups fraction? ws? ")"?
    // groups: 1-3 digits, then 3-digit groups all joined by the same single
    // ',', '.' or ' ', ending on a word boundary; or a plain run of digits.
    // A grouped run never absorbs part of a following number.
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"\(?\s*[$€£¥]?\s*(?:\d{1,3}(?:,\d{3})+\b|\d{1,3}(?:\.\d{3})+\b|\d{1,3}(?: \d{3})+\b|\d+)(?:\.\d+)?\s*\)?"
    ).unwrap();

    // Line labels
    pub static ref REVENUE_LABEL: Regex = Regex::new(
        r"(?i)\bRevenues?\b"
    ).unwrap();

    pub static ref COST_OF_SALES_LABEL: Regex = Regex::new(
        r"(?i)\bCost\s+of\s+Sales\b"
    ).unwrap();

    // Exact decimal literal accepted by the gross profit arithmetic
    pub static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^-?\d+(?:\.\d+)?$"
    ).unwrap();
}
