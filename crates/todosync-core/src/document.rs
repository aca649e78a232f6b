//! Line-oriented document model

/// A document as an ordered sequence of lines.
///
/// The reading collaborator normalizes line terminators to `\n` before parsing.
/// The document remembers whether the source ended with a trailing newline so
/// that untouched content renders byte-identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Parse `\n`-normalized text into a document.
    pub fn parse(source: &str) -> Self {
        if source.is_empty() {
            return Self {
                lines: Vec::new(),
                trailing_newline: false,
            };
        }
        let trailing_newline = source.ends_with('\n');
        let body = if trailing_newline {
            &source[..source.len() - 1]
        } else {
            source
        };
        Self {
            lines: body.split('\n').map(str::to_string).collect(),
            trailing_newline,
        }
    }

    /// Build a document from already-split lines.
    pub fn from_lines(lines: Vec<String>, trailing_newline: bool) -> Self {
        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Render back to text. `parse(s).render() == s` for any `\n`-normalized `s`.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}
