//! Line-oriented document model

use std::ops::Range;

/// Separator used both to split and to re-join lines
pub const NEWLINE: &str = "\n";

/// Raw config text held as an ordered sequence of lines.
///
/// Lines never carry their trailing newline. Splitting follows the usual
/// "every separator yields a boundary" rule, so text ending in a newline
/// produces a final empty line and [`render`](Self::render) restores the
/// input byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    /// Split raw text into lines
    pub fn parse(source: &str) -> Self {
        Self {
            lines: source.split(NEWLINE).map(str::to_string).collect(),
        }
    }

    /// Build a document from already split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document holds no lines at all.
    ///
    /// A document parsed from the empty string still has one empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &str {
        &self.lines[index]
    }

    /// Overwrite the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = line.into();
    }

    /// Append a line at the end
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over `(index, line)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(String::as_str).enumerate()
    }

    /// Join a range of lines back into text
    pub fn slice(&self, range: Range<usize>) -> String {
        self.lines[range].join(NEWLINE)
    }

    /// Re-join every line with a single newline
    pub fn render(&self) -> String {
        self.lines.join(NEWLINE)
    }

    /// Consume the document, yielding its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<&str> for LineDocument {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}
