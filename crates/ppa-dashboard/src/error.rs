//! Error types for dashboard output

/// Export failure
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing failed
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
