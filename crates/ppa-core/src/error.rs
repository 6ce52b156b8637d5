//! Error types for PPA Core
//!
//! Only programmer-level misuse is an error here. Missing phase inputs
//! (no projects yet, too few projects for the matrix) are
//! [`Guidance`](crate::phase::Guidance), not faults, and a duplicate or
//! empty project name is an [`AddOutcome`](crate::registry::AddOutcome).

/// Main session error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Name does not exist in the registry
    #[error("unknown project: {0}")]
    UnknownProject(String),

    /// Registry position out of range
    #[error("no project at position {index} (registry holds {len})")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Current registry length
        len: usize,
    },

    /// Core values can only be set for projects currently offered for laddering
    #[error("'{name}' is not among the top {depth} projects by importance")]
    NotLadderable {
        /// Project name
        name: String,
        /// Current ladder depth
        depth: usize,
    },

    /// Invalid rating input
    #[error("rating error: {0}")]
    Rating(#[from] RatingError),

    /// Impact value outside {-1, 0, 1}
    #[error("impact must be -1, 0 or 1, got {0}")]
    InvalidImpact(i64),
}

impl SessionError {
    /// Check if the error refers to a project that does not exist
    #[inline]
    #[must_use]
    pub fn is_unknown_project(&self) -> bool {
        matches!(self, Self::UnknownProject(_) | Self::IndexOutOfRange { .. })
    }
}

/// Rating input errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RatingError {
    /// Score outside 0..=10
    #[error("rating must be between 0 and 10, got {0}")]
    OutOfRange(i64),

    /// Dimension name not recognized
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML did not parse
    #[error("invalid config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A value parsed but is unusable
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Explanation
        reason: String,
    },
}
