//! Line-oriented view of flattened statement text.

/// An immutable, ordered sequence of trimmed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split raw text into trimmed lines. Empty text yields an empty document.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim().to_string()).collect(),
        }
    }

    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed() {
        let doc = Document::from_text("  Revenues  \r\n\t$ 350,018\n\nCost of Sales ");
        assert_eq!(doc.lines(), &["Revenues", "$ 350,018", "", "Cost of Sales"]);
        assert_eq!(doc.line(1), Some("$ 350,018"));
        assert_eq!(doc.line(9), None);
    }

    #[test]
    fn test_empty_text() {
        let doc = Document::from_text("");
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
