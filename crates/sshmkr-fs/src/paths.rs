//! Conventional file locations

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default suffix appended to the config path to find its templates file
pub const DEFAULT_TEMPLATES_SUFFIX: &str = "_templates";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "SSHMKR_SETTINGS";

/// `~/.ssh/config`
pub fn default_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".ssh").join("config"))
        .ok_or(Error::HomeNotFound)
}

/// Templates file belonging to `config`: the same path with `suffix`
/// appended to its file name, e.g. `~/.ssh/config_templates`.
pub fn templates_path(config: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(config.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Settings file: `$SSHMKR_SETTINGS`, else `<config dir>/sshmkr/settings.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("sshmkr").join("settings.toml"))
}
