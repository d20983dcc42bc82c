//! Whole-document extraction tests on flattened statement text.

use finstat_core::models::config::{AnchorPolicy, PdfConfig};
use finstat_core::{
    extract_snapshot, ArithmeticError, ExtractionOutcome, FinstatError, LabelSearchParser,
    PdfError, ReportError, Resolution, StatementExtractor, StatementParser, StatementReport,
};
use pretty_assertions::assert_eq;

const INCOME_STATEMENT: &str = r#"
    ACME CORPORATION
    CONSOLIDATED STATEMENTS OF OPERATIONS
    (In thousands, except per share amounts)

                                 Year Ended December 31,
                                 2023          2022
    Revenues                 $ 350,018     $ 300,112
    Cost of sales              146,306       131,900
    Gross profit               203,712       168,212
    Operating expenses:
      Research and development  52,000        48,000
"#;

#[test]
fn test_multi_period_statement() {
    let snapshot = extract_snapshot(INCOME_STATEMENT);

    // Both period columns score the same, so the right-hand one wins.
    assert_eq!(snapshot.revenue.value(), Some("300112"));
    assert_eq!(snapshot.cost_of_sales.value(), Some("131900"));
    assert_eq!(snapshot.gross_profit.as_deref(), Some("168212"));
}

#[test]
fn test_stacked_layout_uses_lookahead() {
    let text = "Net revenues\n\n\n$ 1,204,500\nTotal cost of sales\n(612,250)\n";
    let snapshot = extract_snapshot(text);

    assert_eq!(snapshot.revenue.value(), Some("1204500"));
    assert_eq!(snapshot.revenue.resolution(), Some(Resolution::Lookahead));
    assert_eq!(snapshot.cost_of_sales.value(), Some("-612250"));
    assert_eq!(snapshot.gross_profit.as_deref(), Some("1816750"));
}

#[test]
fn test_label_without_amount_is_absent() {
    let text = "Revenue recognition\nWe recognize revenue when control transfers.\n\
                Cost of Sales $ 10,000";
    let parser = LabelSearchParser::new().with_revenue_window(1);
    let result = parser.parse(text);

    assert_eq!(result.snapshot.cost_of_sales.value(), Some("10000"));
    assert_eq!(result.snapshot.gross_profit, None);
    assert_eq!(result.warnings, vec!["Could not extract revenue"]);

    let err = StatementReport::from_snapshot(&result.snapshot, None).unwrap_err();
    assert_eq!(
        err,
        ReportError::Incomplete {
            missing: vec!["revenue".to_string()]
        }
    );
}

#[test]
fn test_until_resolved_finds_later_anchor() {
    let text = "Revenue recognition\nWe recognize revenue when control transfers.\n\
                Revenues $ 42,000\nCost of Sales $ 10,000";
    let snapshot = LabelSearchParser::new()
        .with_revenue_window(1)
        .with_anchor_policy(AnchorPolicy::UntilResolved)
        .extract_from_text(text)
        .snapshot;

    assert_eq!(snapshot.revenue.value(), Some("42000"));
    assert_eq!(snapshot.gross_profit.as_deref(), Some("32000"));
}

#[test]
fn test_degenerate_inputs() {
    for text in ["", "\n\n   \n", "No figures here at all"] {
        let snapshot = extract_snapshot(text);
        assert_eq!(snapshot.revenue, ExtractionOutcome::Absent);
        assert_eq!(snapshot.cost_of_sales, ExtractionOutcome::Absent);
        assert_eq!(snapshot.gross_profit, None);
        assert_eq!(
            snapshot.compute_gross_profit(),
            Err(ArithmeticError::MissingInput {
                field: "revenue".to_string()
            })
        );
    }
}

#[test]
fn test_report_json_shape() {
    let snapshot = extract_snapshot("Revenues\n$ 350,018\nCost of Sales (146,306)");
    let report = StatementReport::from_snapshot(&snapshot, Some("2023-12-31".to_string())).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "period_end_date": "2023-12-31",
            "results": {
                "revenue": "350018",
                "cost_of_sales": "-146306",
                "gross_profit": "496324"
            }
        })
    );
}

#[test]
fn test_extract_from_text_file() {
    let path = std::env::temp_dir().join(format!("finstat-{}.txt", std::process::id()));
    std::fs::write(&path, "Revenues 350,018 2023\nCost of Sales 146,306 2022\n").unwrap();

    let result = LabelSearchParser::new()
        .extract_from_file(&path, &PdfConfig::default())
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(result.line_count, 2);
    assert_eq!(result.snapshot.revenue.value(), Some("350018"));
    assert_eq!(result.snapshot.cost_of_sales.value(), Some("146306"));
    assert_eq!(result.snapshot.gross_profit.as_deref(), Some("203712"));
}

#[test]
fn test_invalid_pdf_bytes() {
    let err = LabelSearchParser::new()
        .extract_from_pdf(b"%PDF-broken", &PdfConfig::default())
        .unwrap_err();
    assert!(matches!(err, FinstatError::Pdf(PdfError::Parse(_))));
}
