//! Edit records describing a single structural change

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The kind of edit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// A rendered host block spliced in over one line.
    Insert,
    /// A host block removed.
    Delete,
    /// Host block lines flipped between commented and active.
    Toggle {
        /// Lines that gained a comment marker.
        commented: usize,
        /// Lines that lost one.
        uncommented: usize,
    },
    /// Host block lines overwritten in place.
    Replace,
}

/// A line-range edit on a config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Affected lines in the document the edit was computed against.
    pub lines: Range<usize>,
    /// Text of those lines before the edit.
    pub old_content: String,
    /// Text that took their place.
    pub new_content: String,
}

impl Edit {
    /// Number of original lines affected
    pub fn line_count(&self) -> usize {
        self.lines.end - self.lines.start
    }
}
