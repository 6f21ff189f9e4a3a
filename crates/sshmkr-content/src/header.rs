//! Header hierarchy indexing

use serde::Serialize;
use tracing::{debug, trace};

use crate::document::LineDocument;
use crate::markers::{LineKind, Markers};

/// A main header line together with the sub header lines it owns.
///
/// Lines are kept verbatim (marker included) so they can be matched back
/// against the document when choosing an insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderGroup {
    pub main_header: String,
    pub sub_headers: Vec<String>,
}

impl HeaderGroup {
    fn new(main_header: impl Into<String>) -> Self {
        Self {
            main_header: main_header.into(),
            sub_headers: Vec::new(),
        }
    }
}

/// Scans a document for its main/sub header structure
#[derive(Debug, Clone, Default)]
pub struct HeaderIndexer {
    markers: Markers,
}

impl HeaderIndexer {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Group every sub header under its nearest preceding main header.
    ///
    /// Sub headers seen before the first main header have no owner and are
    /// dropped. A main header followed directly by another main header
    /// still yields a group, with no sub headers.
    pub fn index(&self, doc: &LineDocument) -> Vec<HeaderGroup> {
        let mut groups = Vec::new();
        let mut current: Option<HeaderGroup> = None;

        for (index, line) in doc.iter() {
            match self.markers.classify(line) {
                LineKind::MainHeader => {
                    if let Some(group) = current.take() {
                        groups.push(group);
                    }
                    trace!(line = index, header = line, "main header");
                    current = Some(HeaderGroup::new(line));
                }
                LineKind::SubHeader => match current.as_mut() {
                    Some(group) => group.sub_headers.push(line.to_string()),
                    None => debug!(line = index, header = line, "sub header before any main header, skipped"),
                },
                _ => {}
            }
        }

        if let Some(group) = current {
            groups.push(group);
        }

        debug!(groups = groups.len(), "indexed config headers");
        groups
    }
}
