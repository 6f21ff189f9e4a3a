//! User settings
//!
//! Read from `$SSHMKR_SETTINGS` or `<config dir>/sshmkr/settings.toml`.
//! Every key is optional:
//!
//! ```toml
//! config_path = "/home/me/.ssh/config"
//! templates_suffix = "_templates"
//! matcher = "substring"        # or "exact-field"
//! delete_trim = "preserve"     # or "line-count-chars"
//! insert = "replace"          # or "keep-non-blank"
//!
//! [markers]
//! main = "####"
//! sub = "##"
//! comment = "#"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sshmkr_content::{HeaderIndexer, InsertPolicy, Markers, MatchRule, MutationEngine, TrimPolicy};
use sshmkr_fs::paths::DEFAULT_TEMPLATES_SUFFIX;
use sshmkr_fs::{default_settings_path, ConfigStore};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ssh config to edit when no --path is given
    pub config_path: Option<PathBuf>,
    /// Appended to the config path to find the templates file
    pub templates_suffix: String,
    pub markers: Markers,
    pub matcher: MatchRule,
    pub delete_trim: TrimPolicy,
    pub insert: InsertPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: None,
            templates_suffix: DEFAULT_TEMPLATES_SUFFIX.to_string(),
            markers: Markers::default(),
            matcher: MatchRule::default(),
            delete_trim: TrimPolicy::default(),
            insert: InsertPolicy::default(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?.unwrap_or_default())
    }

    pub fn engine(&self) -> MutationEngine {
        MutationEngine::new(self.markers.clone(), self.matcher)
            .with_trim_policy(self.delete_trim)
            .with_insert_policy(self.insert)
    }

    pub fn indexer(&self) -> HeaderIndexer {
        HeaderIndexer::new(self.markers.clone())
    }
}
