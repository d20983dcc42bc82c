//! Label-anchored statement parser.
//!
//! A single pass walks the document lines in order. When a label first
//! matches, its amount is looked up on the rest of that line using the
//! candidate scorer; failing that, a bounded window of following non-blank
//! lines is scanned with a simpler leftmost rule. The pass stops as soon as
//! every label has reached a terminal state.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::document::Document;
use crate::models::config::{AnchorPolicy, ExtractionConfig};
use crate::models::snapshot::{ExtractionOutcome, FinancialSnapshot, LabelValue, Resolution};

use super::rules::{
    is_unmarked_amount, money_like, normalize, pick_best, tokenize, tokenize_from, Label,
    LabelAnchor, NumericToken,
};

/// Result of parsing one statement.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted figures.
    pub snapshot: FinancialSnapshot,
    /// Number of lines in the document.
    pub line_count: usize,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for statement parsing.
pub trait StatementParser {
    /// Parse statement figures from flattened text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Search state of one label during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchState {
    Unresolved,
    Resolved(LabelValue),
    Absent,
}

impl SearchState {
    fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Unresolved)
    }

    fn into_outcome(self) -> ExtractionOutcome {
        match self {
            SearchState::Resolved(found) => ExtractionOutcome::Present(found),
            SearchState::Unresolved | SearchState::Absent => ExtractionOutcome::Absent,
        }
    }
}

/// Parser resolving Revenue and Cost of Sales by label anchors.
#[derive(Debug, Clone, Default)]
pub struct LabelSearchParser {
    config: ExtractionConfig,
}

impl LabelSearchParser {
    /// Create a parser with default windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the Revenue lookahead window.
    pub fn with_revenue_window(mut self, lines: usize) -> Self {
        self.config.revenue_window = lines;
        self
    }

    /// Set the Cost of Sales lookahead window.
    pub fn with_cost_of_sales_window(mut self, lines: usize) -> Self {
        self.config.cost_of_sales_window = lines;
        self
    }

    /// Set the anchor policy.
    pub fn with_anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.config.anchor_policy = policy;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract figures from a document.
    pub fn extract_document(&self, document: &Document) -> FinancialSnapshot {
        let mut states = [SearchState::Unresolved, SearchState::Unresolved];

        for (index, line) in document.lines().iter().enumerate() {
            if states.iter().all(SearchState::is_terminal) {
                trace!("All labels resolved at line {}", index);
                break;
            }

            for (state, label) in states.iter_mut().zip(Label::ALL) {
                if state.is_terminal() {
                    continue;
                }
                let Some((start, end)) = label.find_in(line) else {
                    continue;
                };

                let anchor = LabelAnchor {
                    label,
                    line: index,
                    start,
                    end,
                };
                *state = match self.resolve(document, &anchor) {
                    Some(found) => {
                        debug!(
                            "{} resolved to {} ({:?}, line {})",
                            label, found.value, found.resolution, found.line
                        );
                        SearchState::Resolved(found)
                    }
                    None if self.config.anchor_policy == AnchorPolicy::UntilResolved => {
                        debug!("{} anchor at line {} yielded no amount, continuing", label, index);
                        SearchState::Unresolved
                    }
                    None => {
                        debug!("{} anchor at line {} yielded no amount", label, index);
                        SearchState::Absent
                    }
                };
            }
        }

        let [revenue, cost_of_sales] = states;
        FinancialSnapshot::new(revenue.into_outcome(), cost_of_sales.into_outcome())
    }

    /// Resolve one anchor: same line first, then the lookahead window.
    fn resolve(&self, document: &Document, anchor: &LabelAnchor) -> Option<LabelValue> {
        let line = document.line(anchor.line)?;

        if let Some(token) = same_line_candidate(line, anchor.end) {
            return Some(label_value(token, anchor.line, Resolution::SameLine));
        }

        let window = self.config.window(anchor.label);
        document
            .lines()
            .iter()
            .enumerate()
            .skip(anchor.line + 1)
            .filter(|(_, text)| !text.is_empty())
            .take(window)
            .find_map(|(index, text)| {
                lookahead_candidate(text).map(|token| label_value(token, index, Resolution::Lookahead))
            })
    }
}

impl StatementParser for LabelSearchParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let document = Document::from_text(text);

        info!(
            "Parsing statement from {} characters ({} lines)",
            text.len(),
            document.len()
        );

        let snapshot = self.extract_document(&document);

        let warnings: Vec<String> = snapshot
            .missing()
            .into_iter()
            .map(|label| format!("Could not extract {}", label))
            .collect();

        ExtractionResult {
            snapshot,
            line_count: document.len(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Best money-like token after the label on its own line.
pub fn same_line_candidate(line: &str, label_end: usize) -> Option<NumericToken<'_>> {
    let candidates = money_like(tokenize_from(line, label_end));
    pick_best(&candidates)
}

/// Leftmost currency-marked token, else leftmost unmarked amount.
pub fn lookahead_candidate(line: &str) -> Option<NumericToken<'_>> {
    let tokens: Vec<NumericToken<'_>> = tokenize(line).collect();

    tokens
        .iter()
        .find(|token| token.has_currency_symbol())
        .or_else(|| tokens.iter().find(|token| is_unmarked_amount(token)))
        .copied()
}

fn label_value(token: NumericToken<'_>, line: usize, resolution: Resolution) -> LabelValue {
    LabelValue {
        value: normalize(token.raw),
        raw: token.raw.trim().to_string(),
        line,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(lines: &[&str]) -> FinancialSnapshot {
        LabelSearchParser::new().extract_document(&Document::from_text(&lines.join("\n")))
    }

    #[test]
    fn test_end_to_end_scenario() {
        let snapshot = extract(&["Revenues", "$ 350,018", "Cost of Sales (146,306)"]);

        assert_eq!(snapshot.revenue.value(), Some("350018"));
        assert_eq!(snapshot.revenue.resolution(), Some(Resolution::Lookahead));
        assert_eq!(snapshot.cost_of_sales.value(), Some("-146306"));
        assert_eq!(snapshot.cost_of_sales.resolution(), Some(Resolution::SameLine));
        assert_eq!(snapshot.gross_profit.as_deref(), Some("496324"));
    }

    #[test]
    fn test_year_is_skipped_on_same_line() {
        let snapshot = extract(&["Revenues 2023 $ 350,018"]);
        assert_eq!(snapshot.revenue.value(), Some("350018"));
    }

    #[test]
    fn test_same_line_tie_prefers_rightmost() {
        let snapshot = extract(&["Revenue   300,000    350,018"]);
        assert_eq!(snapshot.revenue.value(), Some("350018"));
    }

    #[test]
    fn test_amount_followed_by_year_is_not_merged() {
        let snapshot = extract(&["Revenues 350,018 2023", "Cost of Sales 146,306 2022"]);
        assert_eq!(snapshot.revenue.value(), Some("350018"));
        assert_eq!(snapshot.cost_of_sales.value(), Some("146306"));
        assert_eq!(snapshot.gross_profit.as_deref(), Some("203712"));
    }

    #[test]
    fn test_single_space_columns_stay_separate() {
        let snapshot = extract(&["Revenue 300,000 350,018"]);
        assert_eq!(snapshot.revenue.value(), Some("350018"));

        let snapshot = extract(&["Revenue 350,018 300,000"]);
        assert_eq!(snapshot.revenue.value(), Some("300000"));
    }

    #[test]
    fn test_lookahead_currency_beats_earlier_plain_amount() {
        let snapshot = extract(&["Cost of Sales", "12,000 $ 500"]);
        match &snapshot.cost_of_sales {
            ExtractionOutcome::Present(found) => {
                assert_eq!(found.value, "500");
                assert_eq!(found.raw, "$ 500");
                assert_eq!(found.resolution, Resolution::Lookahead);
            }
            ExtractionOutcome::Absent => panic!("cost of sales should resolve via lookahead"),
        }
    }

    #[test]
    fn test_tokens_before_label_are_ignored() {
        let snapshot = extract(&["$ 999,999 Revenue", "$ 1,000"]);
        assert_eq!(snapshot.revenue.value(), Some("1000"));
        assert_eq!(snapshot.revenue.resolution(), Some(Resolution::Lookahead));
    }

    #[test]
    fn test_same_line_without_qualifying_token_falls_back() {
        let snapshot = extract(&["Revenue (Note 3) 2023", "", "12,500"]);
        match &snapshot.revenue {
            ExtractionOutcome::Present(found) => {
                assert_eq!(found.value, "12500");
                assert_eq!(found.line, 2);
                assert_eq!(found.raw, "12,500");
            }
            ExtractionOutcome::Absent => panic!("revenue should resolve via lookahead"),
        }
    }

    #[test]
    fn test_lookahead_prefers_leftmost_currency() {
        assert_eq!(lookahead_candidate("12,000  $ 500  $ 700").unwrap().raw.trim(), "$ 500");
        assert_eq!(lookahead_candidate("2023  12,000  15,000").unwrap().raw.trim(), "12,000");
        assert!(lookahead_candidate("2023 2022").is_none());
        assert!(lookahead_candidate("Note 12").is_none());
    }

    #[test]
    fn test_lookahead_window_bound() {
        let mut lines = vec!["Revenue"];
        lines.extend(std::iter::repeat("filler text").take(10));
        lines.push("$ 5,000");

        let snapshot = extract(&lines);
        assert_eq!(snapshot.revenue, ExtractionOutcome::Absent);
        assert_eq!(snapshot.gross_profit, None);

        let snapshot = LabelSearchParser::new()
            .with_revenue_window(11)
            .extract_document(&Document::from_text(&lines.join("\n")));
        assert_eq!(snapshot.revenue.value(), Some("5000"));
    }

    #[test]
    fn test_blank_lines_do_not_consume_window() {
        let mut lines = vec!["Cost of Sales"];
        lines.extend(std::iter::repeat("").take(30));
        lines.push("(7,250)");

        let snapshot = extract(&lines);
        assert_eq!(snapshot.cost_of_sales.value(), Some("-7250"));
    }

    #[test]
    fn test_cost_of_sales_window_is_longer() {
        let mut lines = vec!["Cost of Sales"];
        lines.extend(std::iter::repeat("n/a").take(11));
        lines.push("4,400");

        let snapshot = extract(&lines);
        assert_eq!(snapshot.cost_of_sales.value(), Some("4400"));
    }

    #[test]
    fn test_first_anchor_is_terminal() {
        let lines = ["Revenue recognition policy", "text", "Revenues $ 1,000"];
        let parser = LabelSearchParser::new().with_revenue_window(1);

        let snapshot = parser.extract_document(&Document::from_text(&lines.join("\n")));
        assert_eq!(snapshot.revenue, ExtractionOutcome::Absent);

        let snapshot = parser
            .with_anchor_policy(AnchorPolicy::UntilResolved)
            .extract_document(&Document::from_text(&lines.join("\n")));
        assert_eq!(snapshot.revenue.value(), Some("1000"));
    }

    #[test]
    fn test_resolved_label_is_not_overwritten() {
        let snapshot = extract(&["Revenue $ 100", "Revenue $ 200", "Cost of Sales $ 40"]);
        assert_eq!(snapshot.revenue.value(), Some("100"));
        assert_eq!(snapshot.gross_profit.as_deref(), Some("60"));
    }

    #[test]
    fn test_empty_document() {
        let result = LabelSearchParser::new().parse("");
        assert_eq!(result.snapshot, FinancialSnapshot::default());
        assert_eq!(result.line_count, 0);
        assert_eq!(
            result.warnings,
            vec!["Could not extract revenue", "Could not extract cost_of_sales"]
        );
    }
}
