//! Per-invocation state: which files to touch and how to edit them

use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use sshmkr_content::{HeaderIndexer, HostConfig, MutationEngine, TextPreview};
use sshmkr_fs::{default_config_path, read_text, templates_path, write_text};

use crate::error::Result;
use crate::settings::Settings;

/// Resolved paths and settings for one command
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub config_path: PathBuf,
}

/// What happened to the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Previewed,
    Unchanged,
}

impl Session {
    /// Load settings and resolve the config path.
    ///
    /// Precedence: `--path` (or `SSHMKR_CONFIG`), then `config_path` from
    /// settings, then `~/.ssh/config`.
    pub fn open(path_override: Option<PathBuf>) -> Result<Self> {
        Self::with_settings(Settings::load()?, path_override)
    }

    pub fn with_settings(settings: Settings, path_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match path_override.or_else(|| settings.config_path.clone()) {
            Some(path) => path,
            None => default_config_path()?,
        };
        debug!(config = %config_path.display(), "resolved config path");
        Ok(Self {
            settings,
            config_path,
        })
    }

    pub fn templates_path(&self) -> PathBuf {
        templates_path(&self.config_path, &self.settings.templates_suffix)
    }

    pub fn engine(&self) -> MutationEngine {
        self.settings.engine()
    }

    pub fn indexer(&self) -> HeaderIndexer {
        self.settings.indexer()
    }

    pub fn read_config(&self) -> Result<String> {
        Ok(read_text(&self.config_path)?)
    }

    pub fn read_templates(&self) -> Result<String> {
        Ok(read_text(&self.templates_path())?)
    }

    /// Host sections of `source`, as seen by the read-only reader
    pub fn hosts(&self, source: &str) -> HostConfig {
        HostConfig::parse(source, &self.settings.markers)
    }

    /// Write `new` over the config, or print a diff when `dry_run` is set
    pub fn commit(&self, old: &str, new: &str, dry_run: bool) -> Result<Outcome> {
        if old == new {
            println!("{} No changes to {}", "--".dimmed(), self.config_path.display());
            return Ok(Outcome::Unchanged);
        }
        if dry_run {
            print_preview(&self.config_path, &TextPreview::compute(old, new));
            return Ok(Outcome::Previewed);
        }
        write_text(&self.config_path, new)?;
        Ok(Outcome::Written)
    }
}

fn print_preview(path: &Path, preview: &TextPreview) {
    println!(
        "{} Dry run for {} (+{} -{})",
        "=>".blue().bold(),
        path.display(),
        preview.added(),
        preview.removed()
    );
    for line in preview.unified().lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
