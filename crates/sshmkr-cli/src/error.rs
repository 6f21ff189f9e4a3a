//! Error types for sshmkr-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from sshmkr-content
    #[error(transparent)]
    Content(#[from] sshmkr_content::Error),

    /// Error from sshmkr-fs
    #[error(transparent)]
    Fs(#[from] sshmkr_fs::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit status for this error; each failure kind has its own.
    pub fn exit_code(&self) -> i32 {
        use sshmkr_content::Error as Content;
        match self {
            Self::Content(Content::InvalidArgument { .. }) => 2,
            Self::Content(Content::HostNotFound { .. }) => 3,
            Self::Content(Content::HeaderNotFound { .. }) => 4,
            Self::Content(Content::TemplateNotFound { .. }) => 5,
            Self::Fs(_) => 6,
            Self::Json(_) | Self::Dialoguer(_) | Self::User { .. } => 1,
        }
    }
}
