//! Confidence scoring for same-line amount candidates.

use tracing::trace;

use super::tokens::NumericToken;

/// Score a candidate token. Higher means more likely to be the target amount.
pub fn score(token: &NumericToken<'_>) -> i32 {
    let mut score = 0;

    if token.has_currency_symbol() {
        score += 4;
    }
    if token.has_grouping_separator() {
        score += 3;
    }

    score += match token.digit_len() {
        n if n >= 6 => 3,
        4 | 5 => 2,
        _ => -2,
    };

    if token.has_parentheses() {
        score += 1;
    }
    if token.looks_like_year() {
        score -= 5;
    }

    score
}

/// Pick the highest-scoring candidate.
///
/// Ties go to the candidate further right on the line, which in multi-period
/// tables is usually the current period column.
pub fn pick_best<'a>(candidates: &[NumericToken<'a>]) -> Option<NumericToken<'a>> {
    candidates
        .iter()
        .map(|token| {
            let s = score(token);
            trace!("candidate {:?} at {} scored {}", token.raw, token.start, s);
            (s, token)
        })
        .max_by_key(|(s, token)| (*s, token.start))
        .map(|(_, token)| *token)
}
