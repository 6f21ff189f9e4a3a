//! Minimal read-only reader for `Host` sections
//!
//! This is not a full ssh_config implementation: it only recognises the
//! `Host` and `Match` keywords that open a section and splits every other
//! active line into a keyword and its raw value. Commented lines are
//! invisible to it, which is how disabled hosts drop out of lookups.

use serde::Serialize;

use crate::markers::Markers;

/// One option line inside a host section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostOption {
    pub key: String,
    pub value: String,
    /// The line as written, indentation included
    pub line: String,
}

/// A `Host` section and its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub patterns: Vec<String>,
    pub options: Vec<HostOption>,
}

impl HostEntry {
    /// First pattern of the `Host` line; the host's name for lookups
    pub fn name(&self) -> &str {
        self.patterns.first().map_or("", String::as_str)
    }

    pub fn is_wildcard(&self) -> bool {
        self.name() == "*"
    }

    /// Display form: the `Host` line followed by each option as written
    pub fn render(&self) -> String {
        let mut out = format!("Host {}", self.patterns.join(" "));
        for option in &self.options {
            out.push('\n');
            out.push_str(&option.line);
        }
        out
    }
}

/// Parsed view of every `Host` section in a config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostConfig {
    pub hosts: Vec<HostEntry>,
}

/// Section currently collecting options
enum Section {
    Global,
    Host(HostEntry),
    Match,
}

impl HostConfig {
    /// Read host sections, skipping blank and commented lines
    pub fn parse(source: &str, markers: &Markers) -> Self {
        let mut hosts = Vec::new();
        let mut section = Section::Global;

        for raw in source.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || (!markers.comment.is_empty() && trimmed.starts_with(markers.comment.as_str())) {
                continue;
            }
            let Some((key, value)) = split_keyword(trimmed) else {
                continue;
            };

            if key.eq_ignore_ascii_case("host") {
                if let Section::Host(entry) = std::mem::replace(&mut section, Section::Global) {
                    hosts.push(entry);
                }
                section = Section::Host(HostEntry {
                    patterns: value.split_whitespace().map(str::to_string).collect(),
                    options: Vec::new(),
                });
            } else if key.eq_ignore_ascii_case("match") {
                if let Section::Host(entry) = std::mem::replace(&mut section, Section::Match) {
                    hosts.push(entry);
                }
            } else if let Section::Host(entry) = &mut section {
                entry.options.push(HostOption {
                    key: key.to_string(),
                    value: value.to_string(),
                    line: raw.to_string(),
                });
            }
        }

        if let Section::Host(entry) = section {
            hosts.push(entry);
        }
        Self { hosts }
    }

    /// Host whose first pattern equals `name`
    pub fn get(&self, name: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|h| h.name() == name)
    }

    /// Names of every non-wildcard host, in file order
    pub fn names(&self) -> Vec<&str> {
        self.hosts
            .iter()
            .filter(|h| !h.is_wildcard())
            .map(HostEntry::name)
            .collect()
    }
}

/// Split `Key value`, `Key=value` or `Key = value` into its two parts
fn split_keyword(line: &str) -> Option<(&str, &str)> {
    let end = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let key = &line[..end];
    let rest = line[end..].trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest).trim_start();
    if key.is_empty() {
        return None;
    }
    Some((key, rest.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("HostName example.com", Some(("HostName", "example.com")))]
    #[case("Port=2222", Some(("Port", "2222")))]
    #[case("User = deploy", Some(("User", "deploy")))]
    #[case("IdentityFile ~/.ssh/id ed", Some(("IdentityFile", "~/.ssh/id ed")))]
    #[case("Compression", None)]
    fn test_split_keyword(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_keyword(line), expected);
    }

    #[test]
    fn test_match_section_options_are_not_attached() {
        let config = HostConfig::parse(
            "Host a\n  Port 1\nMatch host b\n  Port 2\n",
            &Markers::default(),
        );
        assert_eq!(config.hosts.len(), 1);
        assert_eq!(config.hosts[0].options.len(), 1);
    }
}
