//! Exact decimal arithmetic for gross profit.

use rust_decimal::Decimal;

use super::labels::Label;
use super::patterns::DECIMAL_LITERAL;
use crate::error::ArithmeticError;

/// Compute `revenue - cost_of_sales` as a canonical decimal string.
///
/// Both inputs must be present and be plain decimal literals (optional `-`,
/// digits, optional fraction). The result carries no trailing fractional
/// zeros and `-0` is reported as `0`.
pub fn gross_profit(
    revenue: Option<&str>,
    cost_of_sales: Option<&str>,
) -> Result<String, ArithmeticError> {
    let revenue = revenue.ok_or_else(|| ArithmeticError::missing(Label::Revenue.field_name()))?;
    let cost_of_sales =
        cost_of_sales.ok_or_else(|| ArithmeticError::missing(Label::CostOfSales.field_name()))?;

    let revenue = parse_decimal(Label::Revenue, revenue)?;
    let cost_of_sales = parse_decimal(Label::CostOfSales, cost_of_sales)?;

    let difference = revenue
        .checked_sub(cost_of_sales)
        .ok_or(ArithmeticError::Overflow)?;

    Ok(format_decimal(difference))
}

/// Parse a canonical decimal string without going through floating point.
///
/// Lexically bad input is `InvalidNumber`. A well-formed literal that does
/// not fit exactly (too many digits or too much precision) is `Overflow`;
/// it is never rounded.
pub fn parse_decimal(label: Label, value: &str) -> Result<Decimal, ArithmeticError> {
    if !DECIMAL_LITERAL.is_match(value) {
        return Err(ArithmeticError::invalid(label.field_name(), value));
    }

    Decimal::from_str_exact(trim_fraction(value)).map_err(|_| ArithmeticError::Overflow)
}

/// Drop trailing fractional zeros so they do not count against the scale.
fn trim_fraction(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

/// Format a decimal in plain notation, stripped of trailing fractional zeros.
pub fn format_decimal(value: Decimal) -> String {
    let value = value.normalize();
    if value.is_zero() {
        return "0".to_string();
    }
    value.to_string()
}
