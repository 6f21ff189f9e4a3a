//! Structural edits: insert, delete, toggle-comment and replace
//!
//! Every operation reads a [`LineDocument`] and returns the full new text
//! together with an [`Edit`] describing the touched line range. The input
//! document is never modified; lines outside the edited range come back
//! byte-identical.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{LineDocument, NEWLINE};
use crate::edit::{Edit, EditKind};
use crate::error::{Error, Result};
use crate::locate::{BlockLocator, HostMatcher, MatchRule};
use crate::markers::{LineKind, Markers};

/// How the text left after a delete is finalised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrimPolicy {
    /// The surviving lines joined with newlines, nothing else removed.
    ///
    /// Matches what the historical tool wrote: it joined a buffer padded
    /// with one empty slot per removed line and then cut exactly that many
    /// characters, which only ever removed the padding newlines.
    #[default]
    Preserve,
    /// Join the surviving lines, then cut as many trailing characters as
    /// lines were removed. Eats real content; kept for compatibility checks.
    LineCountChars,
}

/// What happens to a non-blank line at the insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertPolicy {
    /// The target line is replaced by the block, whatever it holds.
    ///
    /// This is the historical behaviour: the line before the next sub
    /// header (or the last line) is overwritten wholesale, so a host line
    /// sitting there is lost.
    #[default]
    Replace,
    /// Blank target lines are replaced; a non-blank one is kept and the
    /// block goes after it.
    KeepNonBlank,
}

/// Result of toggling a host block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub text: String,
    /// True if at least one line gained a comment marker.
    pub did_comment: bool,
    pub edit: Edit,
}

/// Applies structural edits using one marker set and one host matcher
#[derive(Debug, Default)]
pub struct MutationEngine {
    markers: Markers,
    locator: BlockLocator,
    trim: TrimPolicy,
    insert: InsertPolicy,
}

impl MutationEngine {
    pub fn new(markers: Markers, rule: MatchRule) -> Self {
        let locator = BlockLocator::new(rule.matcher(&markers));
        Self {
            markers,
            locator,
            trim: TrimPolicy::default(),
            insert: InsertPolicy::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: Box<dyn HostMatcher>) -> Self {
        self.locator = BlockLocator::new(matcher);
        self
    }

    pub fn with_trim_policy(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_insert_policy(mut self, insert: InsertPolicy) -> Self {
        self.insert = insert;
        self
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn locator(&self) -> &BlockLocator {
        &self.locator
    }

    /// Place `rendered` under the given main/sub header pair.
    ///
    /// Both headers are matched verbatim, the sub header only after the main
    /// header and before any other main header. The block lands just before
    /// the next line carrying the sub header marker, or at the last line of
    /// the document. That line is replaced by the block; with
    /// [`InsertPolicy::KeepNonBlank`] a non-blank line is kept instead and the
    /// block goes after it.
    ///
    /// A different main header seen before the sub header resets the match,
    /// so a sub header is only found inside its own main header's section.
    pub fn insert_at(
        &self,
        doc: &LineDocument,
        main_header: &str,
        sub_header: &str,
        rendered: &str,
    ) -> Result<(String, Edit)> {
        let mut main_line = None;
        let mut sub_line = None;
        let mut target = None;

        for (index, line) in doc.iter() {
            if sub_line.is_none() {
                if line == main_header {
                    main_line = Some(index);
                } else if main_line.is_some() && line == sub_header {
                    sub_line = Some(index);
                } else if main_line.is_some() && self.markers.classify(line) == LineKind::MainHeader {
                    main_line = None;
                }
                continue;
            }

            if line.contains(self.markers.sub.as_str()) {
                target = Some(index - 1);
                break;
            }
            if index + 1 == doc.len() {
                target = Some(index);
                break;
            }
        }

        let Some(sub_line) = sub_line else {
            return Err(Error::HeaderNotFound {
                main: main_header.to_string(),
                sub: sub_header.to_string(),
            });
        };

        // A sub header on the last line has nothing after it to replace.
        let target = target.unwrap_or(sub_line);
        let mut lines = doc.lines().to_vec();
        let replace = target != sub_line
            && (self.insert == InsertPolicy::Replace || lines[target].is_empty());

        let edit = if replace {
            let old = std::mem::replace(&mut lines[target], rendered.to_string());
            Edit {
                kind: EditKind::Insert,
                lines: target..target + 1,
                old_content: old,
                new_content: rendered.to_string(),
            }
        } else {
            lines.insert(target + 1, rendered.to_string());
            Edit {
                kind: EditKind::Insert,
                lines: target + 1..target + 1,
                old_content: String::new(),
                new_content: rendered.to_string(),
            }
        };

        debug!(main_header, sub_header, line = target, "inserted host block");
        Ok((lines.join(NEWLINE), edit))
    }

    /// Remove `hostname`'s block, including the blank line that closes it
    pub fn delete_block(&self, doc: &LineDocument, hostname: &str) -> Result<(String, Edit)> {
        let span = self.locator.find(doc, hostname)?;
        let lines = doc.lines();

        let kept: Vec<&str> = lines[..span.start]
            .iter()
            .chain(&lines[span.end..])
            .map(String::as_str)
            .collect();
        let joined = kept.join(NEWLINE);

        let text = match self.trim {
            TrimPolicy::Preserve => joined,
            TrimPolicy::LineCountChars => trim_trailing_chars(&joined, span.len()).to_string(),
        };

        debug!(hostname, removed = span.len(), "deleted host block");
        let edit = Edit {
            kind: EditKind::Delete,
            lines: span.start..span.end,
            old_content: doc.slice(span.start..span.end),
            new_content: String::new(),
        };
        Ok((text, edit))
    }

    /// Flip every line of `hostname`'s block between commented and active.
    ///
    /// The decision is taken per line: a line starting with the comment
    /// marker loses one marker, any other line gains one. A block in mixed
    /// state therefore ends up mixed the other way round.
    pub fn toggle_comment(&self, doc: &LineDocument, hostname: &str) -> Result<Toggled> {
        let span = self.locator.find(doc, hostname)?;
        let end = span.content_end();
        let mut lines = doc.lines().to_vec();
        let mut commented = 0;
        let mut uncommented = 0;

        for line in &mut lines[span.start..end] {
            if self.markers.is_commented(line) {
                *line = self.markers.uncomment(line).to_string();
                uncommented += 1;
            } else {
                *line = self.markers.comment_out(line);
                commented += 1;
            }
        }

        debug!(hostname, commented, uncommented, "toggled host block");
        let edit = Edit {
            kind: EditKind::Toggle {
                commented,
                uncommented,
            },
            lines: span.start..end,
            old_content: doc.slice(span.start..end),
            new_content: lines[span.start..end].join(NEWLINE),
        };

        Ok(Toggled {
            text: lines.join(NEWLINE),
            did_comment: commented > 0,
            edit,
        })
    }

    /// Overwrite lines in place, starting at the first line containing
    /// `match_substring`.
    ///
    /// `new_lines[0]` is the leading blank separator of a rendered block and
    /// is skipped. Original lines past the end of the replacement are left
    /// as they are; replacement lines past the end of the document are
    /// appended.
    pub fn replace_block_lines<S: AsRef<str>>(
        &self,
        doc: &LineDocument,
        match_substring: &str,
        new_lines: &[S],
    ) -> Result<(String, Edit)> {
        if match_substring.is_empty() {
            return Err(Error::invalid("match text must not be empty"));
        }
        let start = doc
            .iter()
            .find(|(_, line)| line.contains(match_substring))
            .map(|(index, _)| index)
            .ok_or_else(|| Error::host_not_found(match_substring))?;
        Ok(overwrite_from(doc, start, new_lines))
    }

    /// [`replace_block_lines`](Self::replace_block_lines) with a rendered block
    pub fn replace_block(
        &self,
        doc: &LineDocument,
        match_substring: &str,
        rendered: &str,
    ) -> Result<(String, Edit)> {
        let new_lines: Vec<&str> = rendered.split(NEWLINE).collect();
        self.replace_block_lines(doc, match_substring, &new_lines)
    }

    /// Overwrite `hostname`'s block with `rendered`, starting at the line the
    /// engine's host matcher picks.
    pub fn replace_host_block(
        &self,
        doc: &LineDocument,
        hostname: &str,
        rendered: &str,
    ) -> Result<(String, Edit)> {
        let start = self.locator.find_host_line(doc, hostname)?;
        let new_lines: Vec<&str> = rendered.split(NEWLINE).collect();
        Ok(overwrite_from(doc, start, &new_lines))
    }
}

/// Write `new_lines[1..]` over the document from `start` onwards
fn overwrite_from<S: AsRef<str>>(doc: &LineDocument, start: usize, new_lines: &[S]) -> (String, Edit) {
    let mut lines = doc.lines().to_vec();
    let replacement: Vec<&str> = new_lines.iter().skip(1).map(|line| line.as_ref()).collect();
    for (offset, new_line) in replacement.iter().enumerate() {
        let index = start + offset;
        if index < lines.len() {
            lines[index] = (*new_line).to_string();
        } else {
            lines.push((*new_line).to_string());
        }
    }

    let end = (start + replacement.len()).min(doc.len());
    debug!(start, replaced = replacement.len(), "replaced block lines");
    let edit = Edit {
        kind: EditKind::Replace,
        lines: start..end,
        old_content: doc.slice(start..end),
        new_content: replacement.join(NEWLINE),
    };
    (lines.join(NEWLINE), edit)
}

/// Drop `count` characters from the end of `text`
fn trim_trailing_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return text;
    }
    match text.char_indices().rev().nth(count - 1) {
        Some((index, _)) => &text[..index],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_trailing_chars() {
        assert_eq!(trim_trailing_chars("abcdef", 2), "abcd");
        assert_eq!(trim_trailing_chars("abc", 0), "abc");
        assert_eq!(trim_trailing_chars("ab", 5), "");
        assert_eq!(trim_trailing_chars("héé", 1), "hé");
    }

    #[test]
    fn test_insert_after_non_blank_last_line_keeps_it() {
        let doc = LineDocument::parse("#### A\n## B\nHost x");
        let engine = MutationEngine::default().with_insert_policy(InsertPolicy::KeepNonBlank);
        let (text, edit) = engine.insert_at(&doc, "#### A", "## B", "\nHost y").unwrap();
        assert_eq!(text, "#### A\n## B\nHost x\n\nHost y");
        assert_eq!(edit.lines, 3..3);
    }

    #[test]
    fn test_insert_when_sub_header_is_last_line() {
        let doc = LineDocument::parse("#### A\n## B");
        let engine = MutationEngine::default();
        let (text, _) = engine.insert_at(&doc, "#### A", "## B", "\nHost y\n").unwrap();
        assert_eq!(text, "#### A\n## B\n\nHost y\n");
    }

    #[test]
    fn test_sub_header_under_other_main_is_not_matched() {
        let doc = LineDocument::parse("#### A\n## x\n#### B\n## web\n");
        let engine = MutationEngine::default();
        let err = engine.insert_at(&doc, "#### A", "## web", "\nHost y\n").unwrap_err();
        assert!(matches!(err, Error::HeaderNotFound { .. }));
    }
}
