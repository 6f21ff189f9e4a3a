//! Line diff previews for dry runs

use similar::{ChangeTag, TextDiff};

/// A single added or removed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Added(String),
    Removed(String),
}

/// Line-by-line comparison of a config before and after an edit
#[derive(Debug, Clone, PartialEq)]
pub struct TextPreview {
    /// Changed lines in document order
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f32,
    unified: String,
}

impl TextPreview {
    /// Compare two texts using the `similar` crate's line diff
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self {
                changes: Vec::new(),
                similarity: 1.0,
                unified: String::new(),
            };
        }

        let text_diff = TextDiff::from_lines(old, new);
        let changes = text_diff
            .iter_all_changes()
            .filter_map(|change| {
                let value = change.value().trim_end_matches('\n').to_string();
                match change.tag() {
                    ChangeTag::Delete => Some(LineChange::Removed(value)),
                    ChangeTag::Insert => Some(LineChange::Added(value)),
                    ChangeTag::Equal => None,
                }
            })
            .collect();

        let unified = text_diff
            .unified_diff()
            .context_radius(2)
            .header("before", "after")
            .to_string();

        Self {
            changes,
            similarity: text_diff.ratio(),
            unified,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    /// Unified diff text, empty when nothing changed
    pub fn unified(&self) -> &str {
        &self.unified
    }

    pub fn added(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Added(_)))
            .count()
    }

    pub fn removed(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Removed(_)))
            .count()
    }
}
