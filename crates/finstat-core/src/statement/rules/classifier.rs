//! Money-like token classification.

use super::tokens::NumericToken;

/// Minimum digit count for an unmarked token to count as an amount.
pub const MIN_AMOUNT_DIGITS: usize = 4;

/// Whether a token plausibly denotes a monetary amount.
///
/// Currency-marked tokens always qualify. Unmarked tokens need at least
/// [`MIN_AMOUNT_DIGITS`] digits and must not look like a bare calendar year.
pub fn is_money_like(token: &NumericToken<'_>) -> bool {
    token.has_currency_symbol() || is_unmarked_amount(token)
}

/// An unmarked token long enough to be an amount and not a year.
pub fn is_unmarked_amount(token: &NumericToken<'_>) -> bool {
    token.digit_len() >= MIN_AMOUNT_DIGITS && !token.looks_like_year()
}

/// Keep only the money-like tokens, preserving line order.
pub fn money_like<'a, I>(tokens: I) -> Vec<NumericToken<'a>>
where
    I: IntoIterator<Item = NumericToken<'a>>,
{
    tokens.into_iter().filter(is_money_like).collect()
}
