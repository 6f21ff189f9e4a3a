//! Filesystem access for sshmkr
//!
//! Reads ssh config files, writes them back atomically, resolves the
//! conventional paths and loads the optional settings file.

pub mod error;
pub mod io;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use paths::{default_config_path, default_settings_path, templates_path};
pub use store::ConfigStore;
