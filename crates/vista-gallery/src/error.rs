//! Error types for Vista Gallery
//!
//! Nothing in the gallery fails at run time: missing images become
//! placeholders. Errors only arise while loading configuration and while
//! building the probing stack for a session.

use std::path::PathBuf;
use vista_probe::ProbeError;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config values that can never work
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create invalid config error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Main gallery error type
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Probing stack could not be built
    #[error("probe setup failed: {0}")]
    Probe(#[from] ProbeError),
}

/// Result type alias for gallery setup
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_file() {
        let err = ConfigError::Io {
            path: PathBuf::from("/etc/vista.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/etc/vista.toml"));
    }

    #[test]
    fn probe_errors_convert() {
        let err: GalleryError = ProbeError::InvalidBounds("chunk_size must be at least 1".into()).into();
        assert!(matches!(err, GalleryError::Probe(_)));
        assert!(err.to_string().contains("chunk_size"));
    }
}
