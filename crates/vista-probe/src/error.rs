//! Error types for probing
//!
//! A failed probe is never an error: missing files, HTTP failures, and
//! deadlines all collapse to [`ProbeResult::NotFound`](crate::ProbeResult).
//! The errors here only cover setting up the probing machinery.

/// Errors while constructing probers and collectors
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// HTTP client could not be built
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Site root is not an absolute base URL
    #[error("invalid site root '{url}': {message}")]
    InvalidBaseUrl {
        /// Rejected site root
        url: String,
        /// Why it was rejected
        message: String,
    },

    /// Collector bounds that would never probe anything
    #[error("invalid collector bounds: {0}")]
    InvalidBounds(String),
}

impl ProbeError {
    /// Create invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for probe setup
pub type ProbeSetupResult<T> = Result<T, ProbeError>;
