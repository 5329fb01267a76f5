//! Error types for dinghy-settings

/// Result type for dinghy-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A profile value does not have the type its settings field expects
    #[error("Cannot decode {key}: expected {expected}, found {found}")]
    Decode {
        key: String,
        expected: String,
        found: String,
    },

    /// The merged settings cannot be completed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem error from dinghy-fs
    #[error(transparent)]
    Fs(#[from] dinghy_fs::Error),
}

impl Error {
    pub(crate) fn decode(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Decode {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}
