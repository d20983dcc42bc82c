//! Numeric token recognition within a single line.

use super::patterns::{CURRENCY_SYMBOLS, GROUPING_CHARS, NUMERIC_TOKEN};

/// A numeric-looking substring of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken<'a> {
    /// Matched text, exactly as it appears in the line.
    pub raw: &'a str,
    /// Byte offset of the match within the line.
    pub start: usize,
}

impl<'a> NumericToken<'a> {
    pub fn new(raw: &'a str, start: usize) -> Self {
        Self { raw, start }
    }

    /// Whether the token carries a currency symbol.
    pub fn has_currency_symbol(&self) -> bool {
        self.raw.contains(CURRENCY_SYMBOLS)
    }

    /// Whether a grouping character sits between two digits.
    pub fn has_grouping_separator(&self) -> bool {
        // Digits and grouping characters are ASCII, so bytes are enough.
        self.raw.as_bytes().windows(3).any(|w| {
            w[0].is_ascii_digit()
                && GROUPING_CHARS.contains(&char::from(w[1]))
                && w[2].is_ascii_digit()
        })
    }

    /// Whether the token is wrapped in parentheses (accounting negative).
    pub fn has_parentheses(&self) -> bool {
        let trimmed = self.raw.trim();
        trimmed.starts_with('(') && trimmed.ends_with(')')
    }

    /// Number of digits once grouping characters are stripped.
    pub fn digit_len(&self) -> usize {
        self.raw.chars().filter(|c| c.is_ascii_digit()).count()
    }

    /// A bare calendar year: four digits in 1900..=2100 without a currency symbol.
    pub fn looks_like_year(&self) -> bool {
        if self.has_currency_symbol() || self.digit_len() != 4 {
            return false;
        }

        let digits: String = self.raw.chars().filter(|c| c.is_ascii_digit()).collect();
        digits
            .parse::<u32>()
            .map(|year| (1900..=2100).contains(&year))
            .unwrap_or(false)
    }
}

/// Lazy iterator over the numeric tokens of a line.
///
/// Matching is leftmost-first and non-overlapping. Calling [`tokenize`] again
/// restarts the scan.
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = NumericToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.line.len() {
            return None;
        }

        let m = NUMERIC_TOKEN.find_at(self.line, self.pos)?;
        // Every match holds at least one digit, so this always advances.
        self.pos = m.end().max(self.pos + 1);
        Some(NumericToken::new(m.as_str(), m.start()))
    }
}

/// Tokenize a line from the beginning.
pub fn tokenize(line: &str) -> Tokens<'_> {
    tokenize_from(line, 0)
}

/// Tokenize a line starting at byte offset `start`.
///
/// Offsets in the produced tokens are relative to the whole line. An offset
/// past the end of the line, or inside a multi-byte character, yields nothing.
pub fn tokenize_from(line: &str, start: usize) -> Tokens<'_> {
    let pos = if line.is_char_boundary(start) {
        start
    } else {
        line.len() + 1
    };
    Tokens { line, pos }
}
