//! Host block lookup

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::LineDocument;
use crate::error::{Error, Result};
use crate::markers::Markers;

/// Decides whether a line opens the block of a given host.
///
/// Every lookup in this crate goes through a matcher, so the rule used to
/// recognise `Host <name>` lines can be swapped without touching callers.
pub trait HostMatcher: Send + Sync + std::fmt::Debug {
    fn matches(&self, line: &str, hostname: &str) -> bool;
}

/// Matches any line containing the literal text `Host <hostname>`.
///
/// Note that `Host web` is also found inside `Host webserver`; the first
/// such line top to bottom wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl HostMatcher for SubstringMatcher {
    fn matches(&self, line: &str, hostname: &str) -> bool {
        line.contains(&format!("Host {hostname}"))
    }
}

/// Matches `Host` lines whose first pattern equals `hostname` exactly.
///
/// Leading comment markers are ignored so disabled blocks stay reachable.
#[derive(Debug, Clone, Default)]
pub struct ExactFieldMatcher {
    markers: Markers,
}

impl ExactFieldMatcher {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }
}

impl HostMatcher for ExactFieldMatcher {
    fn matches(&self, line: &str, hostname: &str) -> bool {
        let mut rest = line.trim_start();
        if !self.markers.comment.is_empty() {
            while let Some(stripped) = rest.strip_prefix(self.markers.comment.as_str()) {
                rest = stripped.trim_start();
            }
        }
        let mut fields = rest.split(|c: char| c.is_whitespace() || c == '=').filter(|f| !f.is_empty());
        matches!(fields.next(), Some(keyword) if keyword.eq_ignore_ascii_case("host"))
            && fields.next() == Some(hostname)
    }
}

/// Named choice of matcher, as stored in settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    #[default]
    Substring,
    ExactField,
}

impl MatchRule {
    pub fn matcher(self, markers: &Markers) -> Box<dyn HostMatcher> {
        match self {
            Self::Substring => Box::new(SubstringMatcher),
            Self::ExactField => Box::new(ExactFieldMatcher::new(markers.clone())),
        }
    }
}

/// Line range of one host block.
///
/// `start` is the `Host` line. `end` is exclusive and, when the block was
/// closed by a blank line, that blank line is inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostBlockSpan {
    pub start: usize,
    pub end: usize,
    pub blank_terminated: bool,
}

impl HostBlockSpan {
    /// Number of lines covered, terminator included
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// End of the host's own lines, excluding the blank terminator
    pub fn content_end(&self) -> usize {
        if self.blank_terminated {
            self.end - 1
        } else {
            self.end
        }
    }
}

/// Finds host blocks by name
#[derive(Debug)]
pub struct BlockLocator {
    matcher: Box<dyn HostMatcher>,
}

impl Default for BlockLocator {
    fn default() -> Self {
        Self::new(Box::new(SubstringMatcher))
    }
}

impl BlockLocator {
    pub fn new(matcher: Box<dyn HostMatcher>) -> Self {
        Self { matcher }
    }

    /// Index of the first line opening `hostname`'s block
    pub fn find_host_line(&self, doc: &LineDocument, hostname: &str) -> Result<usize> {
        if hostname.is_empty() {
            return Err(Error::invalid("hostname must not be empty"));
        }
        doc.iter()
            .find(|(_, line)| self.matcher.matches(line, hostname))
            .map(|(index, _)| index)
            .ok_or_else(|| Error::host_not_found(hostname))
    }

    /// Locate the block of `hostname`: its `Host` line up to and including
    /// the next blank line, or to the end of the document.
    pub fn find(&self, doc: &LineDocument, hostname: &str) -> Result<HostBlockSpan> {
        let start = self.find_host_line(doc, hostname)?;
        let span = match (start..doc.len()).find(|&index| doc.get(index).is_empty()) {
            Some(blank) => HostBlockSpan {
                start,
                end: blank + 1,
                blank_terminated: true,
            },
            None => HostBlockSpan {
                start,
                end: doc.len(),
                blank_terminated: false,
            },
        };
        debug!(hostname, start = span.start, end = span.end, "located host block");
        Ok(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matcher_matches_prefix_host() {
        let matcher = SubstringMatcher;
        assert!(matcher.matches("Host webserver", "web"));
        assert!(matcher.matches("#Host web", "web"));
        assert!(!matcher.matches("HostName web", "web"));
    }

    #[test]
    fn test_exact_matcher_requires_whole_pattern() {
        let matcher = ExactFieldMatcher::default();
        assert!(matcher.matches("Host web", "web"));
        assert!(matcher.matches("  Host=web", "web"));
        assert!(matcher.matches("#Host web other", "web"));
        assert!(!matcher.matches("Host webserver", "web"));
        assert!(!matcher.matches("HostName web", "web"));
    }

    #[test]
    fn test_content_end_excludes_blank() {
        let span = HostBlockSpan {
            start: 2,
            end: 5,
            blank_terminated: true,
        };
        assert_eq!(span.len(), 3);
        assert_eq!(span.content_end(), 4);
    }
}
