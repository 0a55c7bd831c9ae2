//! Existence prober seam
//!
//! Provides the [`ExistenceProber`] trait: one speculative load of one
//! candidate URL, resolving to [`ProbeResult`]. Probes never fail; every
//! kind of failure is reported as [`ProbeResult::NotFound`].

use async_trait::async_trait;

/// Outcome of a single probe
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    /// The candidate loaded; carries the URL that was probed
    Found(String),
    /// Missing, unreadable, not an image, or timed out
    NotFound,
}

impl ProbeResult {
    /// Create found result
    #[inline]
    #[must_use]
    pub fn found(url: impl Into<String>) -> Self {
        Self::Found(url.into())
    }

    /// Check if the candidate exists
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Resolved URL (if found)
    #[inline]
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }

    /// Convert into the resolved URL
    #[inline]
    #[must_use]
    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }
}

impl From<Option<String>> for ProbeResult {
    fn from(url: Option<String>) -> Self {
        url.map_or(Self::NotFound, Self::Found)
    }
}

/// Single-shot existence check for one candidate URL
///
/// Implementations resolve exactly once and never retry; fallback across
/// extensions belongs to the resolver. Dropping the returned future must
/// abandon the underlying load without leaking it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceProber: Send + Sync {
    /// Attempt to load `url` as an image
    async fn probe(&self, url: &str) -> ProbeResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_accessors() {
        let found = ProbeResult::found("a/1.jpg");
        assert!(found.is_found());
        assert_eq!(found.url(), Some("a/1.jpg"));
        assert_eq!(found.into_url(), Some("a/1.jpg".to_string()));

        assert!(!ProbeResult::NotFound.is_found());
        assert_eq!(ProbeResult::NotFound.url(), None);
    }

    #[test]
    fn from_option() {
        assert_eq!(ProbeResult::from(None), ProbeResult::NotFound);
        assert_eq!(
            ProbeResult::from(Some("x.png".to_string())),
            ProbeResult::found("x.png")
        );
    }

    #[tokio::test]
    async fn mock_prober_is_object_safe() {
        let mut mock = MockExistenceProber::new();
        mock.expect_probe()
            .times(1)
            .returning(|url| ProbeResult::found(url));

        let prober: &dyn ExistenceProber = &mock;
        assert_eq!(prober.probe("b/2.png").await, ProbeResult::found("b/2.png"));
    }
}
