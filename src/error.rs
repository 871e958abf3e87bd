//! Error types for the theme controller and its storage seam.

/// Failure reported by a [`crate::util::persistence::PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached (no `localStorage`, private mode).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backing store rejected the operation.
    #[error("preference storage failed: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A collaborator the controller needs was never provided.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
    #[error("malformed theme config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ThemeError {
    /// Stable code surfaced to the embedding page.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDependency(_) => "E_MISSING_DEPENDENCY",
            Self::InvalidConfig(_) | Self::Config(_) => "E_INVALID_CONFIG",
            Self::Storage(StoreError::Unavailable) => "E_STORAGE_UNAVAILABLE",
            Self::Storage(StoreError::Backend(_)) => "E_STORAGE",
        }
    }
}
