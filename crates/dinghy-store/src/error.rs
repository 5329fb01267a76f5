//! Error types for dinghy-store

/// Result type for dinghy-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`MemoryStore`](crate::MemoryStore)
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("No raw data stored for {url}")]
    RawDataNotFound { url: String },
}
