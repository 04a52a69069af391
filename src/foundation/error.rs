use std::path::PathBuf;

/// Convenience result type used across Fathom.
pub type FathomResult<T> = Result<T, FathomError>;

/// Top-level error taxonomy used by data-store and API operations.
///
/// Each variant maps onto exactly one HTTP status in the server layer.
#[derive(thiserror::Error, Debug)]
pub enum FathomError {
    /// Missing or malformed request parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A data or asset file does not exist.
    #[error("not found: {}", path.display())]
    NotFound {
        /// Absolute path of the file that was looked up.
        path: PathBuf,
    },

    /// A file exists but does not contain valid JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// JSON parsed fine but does not have the expected shape.
    #[error("shape error: {0}")]
    Shape(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FathomError {
    /// Build a [`FathomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FathomError::NotFound`] value.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Build a [`FathomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FathomError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Serde(_) | Self::Shape(_) | Self::Other(_) => 500,
        }
    }

    /// Client-facing message, without the display prefix.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Serde(msg) | Self::Shape(msg) => msg.clone(),
            Self::NotFound { path } => format!("File not found: {}", path.display()),
            Self::Other(err) => {
                let msg = err.to_string();
                if msg.is_empty() {
                    "Internal server error".to_string()
                } else {
                    msg
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
