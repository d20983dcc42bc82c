//! Canonicalization of raw amount tokens.

use super::patterns::{CURRENCY_SYMBOLS, GROUPING_CHARS};

/// Convert a raw amount token into a canonical decimal string.
///
/// Currency symbols, grouping characters and whitespace are removed. A `.` is
/// always treated as a grouping character, so `1,234.56` becomes `123456`.
/// Parentheses mark a negative amount: `(1,200)` becomes `-1200`.
///
/// The result has no leading zeros and never reads `-0`. Applying `normalize`
/// to its own output returns it unchanged.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && !GROUPING_CHARS.contains(c) && !c.is_whitespace())
        .collect();

    let (negative, body) = match stripped.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => match stripped.strip_prefix('-') {
            Some(inner) => (true, inner),
            // Unbalanced parentheses carry no sign.
            None => (false, stripped.trim_matches(|c| c == '(' || c == ')')),
        },
    };

    let digits = body.trim_start_matches('0');
    if digits.is_empty() {
        return if body.is_empty() { String::new() } else { "0".to_string() };
    }

    if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_currency_and_grouping() {
        assert_eq!(normalize("$1,234,567"), "1234567");
        assert_eq!(normalize(" $ 350,018 "), "350018");
        assert_eq!(normalize("€1 200 000"), "1200000");
        assert_eq!(normalize("4500"), "4500");
    }

    #[test]
    fn test_normalize_parentheses() {
        assert_eq!(normalize("(1,200)"), "-1200");
        assert_eq!(normalize("( $ 146,306 )"), "-146306");
        assert_eq!(normalize("(1,200"), "1200");
        assert_eq!(normalize("1,200)"), "1200");
    }

    #[test]
    fn test_normalize_period_is_grouping() {
        assert_eq!(normalize("1.234.567"), "1234567");
        assert_eq!(normalize("1,234.56"), "123456");
    }

    #[test]
    fn test_normalize_zero_forms() {
        assert_eq!(normalize("(0)"), "0");
        assert_eq!(normalize("0,000"), "0");
        assert_eq!(normalize("-0"), "0");
        assert_eq!(normalize("007"), "7");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["$1,234,567", "(1,200)", "(0)", " 2023 ", "$ 0,018"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }
}
