//! Host templates and field substitution
//!
//! A template is an existing `Host` section turned into a list of
//! `(key, default)` fields plus a format string with one placeholder per
//! field. Filling the placeholders yields the block that gets inserted.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hosts::HostConfig;

/// Placeholder substituted once per field, in order
pub const PLACEHOLDER: &str = "%s";

/// Fields and layout of a host block to be filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigTemplate {
    /// `(key, default value)` in emission order; the first is always `Host`
    pub key_pairs: Vec<(String, String)>,
    format: String,
}

/// A fully substituted host block, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Block text, starting with a blank line and the `Host` line
    pub text: String,
    pub host_name: String,
}

impl ConfigTemplate {
    /// Build a template from the host named `name`.
    ///
    /// An empty name picks the first host that is not the `*` wildcard.
    pub fn from_hosts(config: &HostConfig, name: &str) -> Result<Self> {
        let entry = config
            .hosts
            .iter()
            .filter(|h| !h.is_wildcard())
            .find(|h| name.is_empty() || h.name() == name)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })?;

        let mut format = format!("\nHost {PLACEHOLDER}\n");
        let mut key_pairs = vec![("Host".to_string(), entry.name().to_string())];
        for option in &entry.options {
            format.push_str(&format!("\t{} {PLACEHOLDER}\n", option.key));
            key_pairs.push((option.key.clone(), option.value.clone()));
        }

        debug!(template = entry.name(), fields = key_pairs.len(), "built template");
        Ok(Self { key_pairs, format })
    }

    pub fn field_count(&self) -> usize {
        self.key_pairs.len()
    }

    /// Format string with one placeholder per field
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Default value of every field, in order
    pub fn defaults(&self) -> Vec<&str> {
        self.key_pairs.iter().map(|(_, v)| v.as_str()).collect()
    }

    /// Substitute `values` into the placeholders, first to last.
    ///
    /// Values are inserted literally; a value that itself contains the
    /// placeholder text is not expanded again.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<RenderedBlock> {
        if values.len() != self.key_pairs.len() {
            return Err(Error::invalid(format!(
                "template expects {} values, got {}",
                self.key_pairs.len(),
                values.len()
            )));
        }
        let host_name = values[0].as_ref().trim();
        if host_name.is_empty() {
            return Err(Error::invalid("host name must not be empty"));
        }

        let mut text = String::with_capacity(self.format.len());
        let mut segments = self.format.split(PLACEHOLDER);
        if let Some(first) = segments.next() {
            text.push_str(first);
        }
        for (segment, value) in segments.zip(values) {
            text.push_str(value.as_ref());
            text.push_str(segment);
        }

        Ok(RenderedBlock {
            text,
            host_name: host_name.to_string(),
        })
    }

    /// Render with every field at its default
    pub fn render_defaults(&self) -> Result<RenderedBlock> {
        self.render(&self.defaults())
    }
}
