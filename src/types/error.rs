//! Error types for the portal data layer
//!
//! "Not found" is not an error here: `fetch`/`discover`/`load` model it as a
//! normal `None` return. Errors are reserved for hard failures that abort the
//! in-progress save or load.

/// Main error type for portal operations
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Bearer token missing or rejected by the document host
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A required piece of local configuration is absent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success response from the document host
    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Credential file could not be read or written
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;
