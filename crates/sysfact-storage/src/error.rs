/// Errors that can occur within the artifact storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The caller identifier cannot be used as a filename component. The
    /// identifier is derived from the network peer address and is treated as
    /// untrusted input; anything that could escape the storage root is
    /// rejected before the path join.
    #[error("Storage: invalid caller identifier '{id}'")]
    InvalidCallerId { id: String },

    /// An underlying filesystem failure (directory creation or file write).
    #[error("Storage: I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON marshalling of the fact record failed.
    #[error("Storage: JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
