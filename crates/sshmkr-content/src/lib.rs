//! Structural editing of OpenSSH host configs for sshmkr
//!
//! A config is treated as opaque lines grouped by comment headers:
//! `####` main headers own `##` sub headers, and each sub header precedes
//! a run of `Host <name>` blocks. This crate indexes that structure and
//! performs line-splice edits that leave every untouched byte in place.

pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod header;
pub mod hosts;
pub mod locate;
pub mod markers;
pub mod mutate;
pub mod template;

pub use diff::{LineChange, TextPreview};
pub use document::LineDocument;
pub use edit::{Edit, EditKind};
pub use error::{Error, Result};
pub use header::{HeaderGroup, HeaderIndexer};
pub use hosts::{HostConfig, HostEntry, HostOption};
pub use locate::{
    BlockLocator, ExactFieldMatcher, HostBlockSpan, HostMatcher, MatchRule, SubstringMatcher,
};
pub use markers::{LineKind, Markers};
pub use mutate::{InsertPolicy, MutationEngine, Toggled, TrimPolicy};
pub use template::{ConfigTemplate, RenderedBlock};
