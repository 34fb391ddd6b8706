/// Convenience result type used across the animator crate.
pub type AnimatorResult<T> = Result<T, AnimatorError>;

/// Top-level error type for catalogue loading, storage, configuration and provider calls.
#[derive(thiserror::Error, Debug)]
pub enum AnimatorError {
    /// Input failed a precondition (blank prompt, malformed catalogue, bad config value).
    #[error("validation error: {0}")]
    Validation(String),

    /// A provider backend failed to produce a script.
    #[error("provider error: {0}")]
    Provider(String),

    /// Key/value storage failed (quota, IO).
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimatorError {
    /// Build [`AnimatorError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`AnimatorError::Provider`].
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Build [`AnimatorError::Storage`].
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build [`AnimatorError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for AnimatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
