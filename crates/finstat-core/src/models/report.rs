//! Outgoing report shape for callers of the extraction engine.

use serde::{Deserialize, Serialize};

use super::snapshot::FinancialSnapshot;
use crate::error::ReportError;

/// Extracted figures as handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementReport {
    /// Period end date, echoed back untouched.
    pub period_end_date: Option<String>,
    pub results: ReportResults,
}

/// Report figures; absent values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResults {
    pub revenue: Option<String>,
    pub cost_of_sales: Option<String>,
    pub gross_profit: Option<String>,
}

impl From<&FinancialSnapshot> for ReportResults {
    fn from(snapshot: &FinancialSnapshot) -> Self {
        Self {
            revenue: snapshot.revenue.value().map(str::to_string),
            cost_of_sales: snapshot.cost_of_sales.value().map(str::to_string),
            gross_profit: snapshot.gross_profit.clone(),
        }
    }
}

impl StatementReport {
    /// Build a complete report.
    ///
    /// Fails with [`ReportError::Incomplete`] when a label is absent and with
    /// [`ReportError::CannotCompute`] when gross profit cannot be derived.
    pub fn from_snapshot(
        snapshot: &FinancialSnapshot,
        period_end_date: Option<String>,
    ) -> Result<Self, ReportError> {
        let missing = snapshot.missing();
        if !missing.is_empty() {
            return Err(ReportError::Incomplete {
                missing: missing.iter().map(|l| l.field_name().to_string()).collect(),
            });
        }

        let gross_profit = snapshot
            .compute_gross_profit()
            .map_err(ReportError::CannotCompute)?;

        let mut results = ReportResults::from(snapshot);
        results.gross_profit = Some(gross_profit);

        Ok(Self {
            period_end_date,
            results,
        })
    }

    /// Build a report that tolerates absent values.
    pub fn partial(snapshot: &FinancialSnapshot, period_end_date: Option<String>) -> Self {
        Self {
            period_end_date,
            results: ReportResults::from(snapshot),
        }
    }
}
