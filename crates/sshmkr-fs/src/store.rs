//! Settings file loading

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::{io, Error, Result};

/// Loads TOML settings files into typed values
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load `path` as TOML.
    ///
    /// A missing file is not an error and yields `None`; a file that exists
    /// but does not parse is.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Ok(None);
        }
        let content = io::read_text(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| Error::SettingsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}
