//! Structural comment markers and line classification

use serde::{Deserialize, Serialize};

/// Marker tokens that give a config its header structure.
///
/// A marker is only recognised as the first whitespace-delimited token of
/// a line, so `#### Prod` is a main header while `Host a #### x` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Main header marker, `####` by default
    pub main: String,
    /// Sub header marker, `##` by default
    pub sub: String,
    /// Comment marker used to disable lines, `#` by default
    pub comment: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            main: "####".to_string(),
            sub: "##".to_string(),
            comment: "#".to_string(),
        }
    }
}

/// What a single line is, structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line; terminates host blocks
    Blank,
    /// Starts with the main header marker token
    MainHeader,
    /// Starts with the sub header marker token
    SubHeader,
    /// Starts with the plain comment marker token
    Comment,
    /// Anything else, including `Host` lines and their options
    Other,
}

impl Markers {
    /// Build a marker set from explicit tokens
    pub fn new(main: impl Into<String>, sub: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            sub: sub.into(),
            comment: comment.into(),
        }
    }

    /// Classify a line by its first whitespace-delimited token
    pub fn classify(&self, line: &str) -> LineKind {
        if line.is_empty() {
            return LineKind::Blank;
        }
        match line.split_whitespace().next() {
            Some(token) if token == self.main => LineKind::MainHeader,
            Some(token) if token == self.sub => LineKind::SubHeader,
            Some(token) if token == self.comment => LineKind::Comment,
            _ => LineKind::Other,
        }
    }

    /// Header text with its marker token removed, for display
    pub fn title<'a>(&self, line: &'a str) -> &'a str {
        let trimmed = line.trim_start();
        let rest = trimmed
            .strip_prefix(self.main.as_str())
            .or_else(|| trimmed.strip_prefix(self.sub.as_str()))
            .unwrap_or(trimmed);
        rest.trim()
    }

    /// True if the line starts with the comment marker
    pub fn is_commented(&self, line: &str) -> bool {
        !self.comment.is_empty() && line.starts_with(self.comment.as_str())
    }

    /// Prepend one comment marker
    pub fn comment_out(&self, line: &str) -> String {
        format!("{}{}", self.comment, line)
    }

    /// Strip exactly one leading comment marker, if present
    pub fn uncomment<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix(self.comment.as_str()).unwrap_or(line)
    }
}
