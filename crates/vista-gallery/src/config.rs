//! Site configuration
//!
//! Every field has a default, so an empty TOML file (or none at all) gives
//! the stock probing behavior:
//!
//! ```toml
//! base_url = "https://example.com/"
//!
//! [probe]
//! slide_timeout_ms = 400
//! max_index = 60
//!
//! [gallery]
//! initial_tiles = 8
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;
use vista_probe::CollectorBounds;

/// Probing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Deadline per thumbnail candidate
    pub thumb_timeout_ms: u64,
    /// Deadline per slide candidate in chunked collection
    pub slide_timeout_ms: u64,
    /// Deadline for listed-file verification
    pub default_timeout_ms: u64,
    /// Highest index probed by chunked collection
    pub max_index: u32,
    /// Indices probed together per chunk
    pub chunk_size: u32,
    /// Consecutive empty chunks that end a sequence
    pub empty_chunk_stop: u32,
    /// Upper index for a plain numbered sequence
    pub exhaustive_max: u32,
    /// Upper index when newsroom listings all miss
    pub newsroom_fallback_max: u32,
    /// Upper index for sustainability discovery
    pub sustainability_max: u32,
}

impl ProbeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With thumbnail deadline
    #[inline]
    #[must_use]
    pub fn with_thumb_timeout(mut self, timeout: Duration) -> Self {
        self.thumb_timeout_ms = duration_ms(timeout);
        self
    }

    /// With slide deadline
    #[inline]
    #[must_use]
    pub fn with_slide_timeout(mut self, timeout: Duration) -> Self {
        self.slide_timeout_ms = duration_ms(timeout);
        self
    }

    /// With collector bounds
    #[inline]
    #[must_use]
    pub fn with_bounds(mut self, bounds: CollectorBounds) -> Self {
        self.max_index = bounds.max_index;
        self.chunk_size = bounds.chunk_size;
        self.empty_chunk_stop = bounds.empty_chunk_stop;
        self
    }

    /// Thumbnail deadline
    #[inline]
    #[must_use]
    pub fn thumb_timeout(&self) -> Duration {
        Duration::from_millis(self.thumb_timeout_ms)
    }

    /// Slide deadline
    #[inline]
    #[must_use]
    pub fn slide_timeout(&self) -> Duration {
        Duration::from_millis(self.slide_timeout_ms)
    }

    /// Listed-file verification deadline
    #[inline]
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// Chunked collector bounds
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> CollectorBounds {
        CollectorBounds::new(self.max_index, self.chunk_size, self.empty_chunk_stop)
    }

    /// Check bounds and deadlines
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first bad field
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()
            .validate()
            .map_err(|e| ConfigError::invalid(e.to_string()))?;
        for (name, value) in [
            ("thumb_timeout_ms", self.thumb_timeout_ms),
            ("slide_timeout_ms", self.slide_timeout_ms),
            ("default_timeout_ms", self.default_timeout_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::invalid(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            thumb_timeout_ms: 250,
            slide_timeout_ms: 250,
            default_timeout_ms: 300,
            max_index: 80,
            chunk_size: 10,
            empty_chunk_stop: 2,
            exhaustive_max: 30,
            newsroom_fallback_max: 150,
            sustainability_max: 100,
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Gallery presentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Project tiles shown before "Show More"
    pub initial_tiles: usize,
    /// Newsroom groups shown before "Show More"
    pub newsroom_initial: usize,
    /// Client logos shown before "Show More"
    pub clients_initial: usize,
    /// Folder probed for sustainability images
    pub sustainability_base: String,
}

impl GalleryConfig {
    /// With initial project tiles
    #[inline]
    #[must_use]
    pub fn with_initial_tiles(mut self, tiles: usize) -> Self {
        self.initial_tiles = tiles;
        self
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_tiles: 12,
            newsroom_initial: 3,
            clients_initial: 25,
            sustainability_base: "Sustainability and CSR".to_string(),
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root that relative asset paths are joined onto
    pub base_url: Option<String>,
    /// Probing
    pub probe: ProbeConfig,
    /// Presentation
    pub gallery: GalleryConfig,
}

impl SiteConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` or `ConfigError::Invalid`
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`SiteConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load a TOML file, falling back to defaults if it does not exist
    ///
    /// # Errors
    /// Read errors other than not-found, and parse or validation errors
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// With site root
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Check every section
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first bad field
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.probe.validate()?;
        if self.gallery.sustainability_base.trim().is_empty() {
            return Err(ConfigError::invalid("sustainability_base must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_stock_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.probe.bounds(), CollectorBounds::new(80, 10, 2));
        assert_eq!(config.probe.thumb_timeout(), Duration::from_millis(250));
        assert_eq!(config.probe.default_timeout(), Duration::from_millis(300));
        assert_eq!(config.gallery.initial_tiles, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            base_url = "https://example.com/"

            [probe]
            chunk_size = 5

            [gallery]
            newsroom_initial = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("https://example.com/"));
        assert_eq!(config.probe.chunk_size, 5);
        assert_eq!(config.probe.max_index, 80);
        assert_eq!(config.gallery.newsroom_initial, 6);
        assert_eq!(config.gallery.clients_initial, 25);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = SiteConfig::from_toml_str("[probe]\nchunk_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = SiteConfig::default().with_base_url("https://example.com/");
        config.probe.thumb_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thumb_timeout_ms"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("[probe\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[probe]\nslide_timeout_ms = 400").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.probe.slide_timeout(), Duration::from_millis(400));
    }

    #[test]
    fn missing_file_falls_back_only_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(SiteConfig::load(&path), Err(ConfigError::Io { .. })));
        assert_eq!(SiteConfig::load_or_default(&path).unwrap(), SiteConfig::default());
    }

    #[test]
    fn builders_round_trip_through_bounds() {
        let probe = ProbeConfig::new()
            .with_bounds(CollectorBounds::new(40, 5, 3))
            .with_thumb_timeout(Duration::from_millis(100))
            .with_slide_timeout(Duration::from_secs(1));
        assert_eq!(probe.bounds(), CollectorBounds::new(40, 5, 3));
        assert_eq!(probe.thumb_timeout_ms, 100);
        assert_eq!(probe.slide_timeout_ms, 1000);
    }
}
