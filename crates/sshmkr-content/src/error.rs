//! Error types for sshmkr-content

/// Result type for sshmkr-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analysing or editing a host config
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Cannot find host {hostname} in config. Typo maybe?")]
    HostNotFound { hostname: String },

    #[error("Cannot find sub header {sub:?} under main header {main:?}")]
    HeaderNotFound { main: String, sub: String },

    #[error("Cannot find template {name} in templates file. Typo maybe?")]
    TemplateNotFound { name: String },
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn host_not_found(hostname: impl Into<String>) -> Self {
        Self::HostNotFound {
            hostname: hostname.into(),
        }
    }
}
