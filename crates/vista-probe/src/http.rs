//! HTTP existence prober
//!
//! Probes candidates with a plain GET against the site root. Success means
//! a 2xx status with an image (or unspecified) content type. Everything
//! else, transport errors included, is reported as not found.

use crate::error::{ProbeError, ProbeSetupResult};
use crate::prober::{ExistenceProber, ProbeResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::trace;

/// Default User-Agent string for probe requests
const DEFAULT_USER_AGENT: &str = concat!("vista-probe/", env!("CARGO_PKG_VERSION"));

/// Upper bound for one request when no race deadline cuts it short
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections kept per host between probe batches
const DEFAULT_IDLE_PER_HOST: usize = 16;

/// Prober issuing real HTTP requests
///
/// Candidate URLs are relative paths joined onto the site root. The body
/// is never read; dropping the probe future (for example when it loses a
/// timeout race) drops the in-flight request and its connection.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    root: Url,
}

impl HttpProber {
    /// Create prober for a site root such as `https://example.com/`
    ///
    /// # Errors
    /// - `ProbeError::InvalidBaseUrl` if `site_root` is not an absolute URL
    /// - `ProbeError::ClientBuild` if the HTTP client cannot be created
    pub fn new(site_root: &str) -> ProbeSetupResult<Self> {
        Self::with_timeout(site_root, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create prober with a custom per-request timeout
    ///
    /// # Errors
    /// Same as [`HttpProber::new`].
    pub fn with_timeout(site_root: &str, timeout: Duration) -> ProbeSetupResult<Self> {
        let root = parse_root(site_root)?;
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(DEFAULT_IDLE_PER_HOST)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(ProbeError::ClientBuild)?;

        Ok(Self { client, root })
    }

    /// Site root every candidate is resolved against
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Absolute URL for a relative candidate path
    #[must_use]
    pub fn absolute(&self, url: &str) -> Option<Url> {
        self.root.join(url).ok()
    }
}

#[async_trait]
impl ExistenceProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let Some(target) = self.absolute(url) else {
            trace!(url, "candidate does not form a valid URL");
            return ProbeResult::NotFound;
        };

        let response = match self.client.get(target).send().await {
            Ok(response) => response,
            Err(e) => {
                trace!(url, error = %e, "probe request failed");
                return ProbeResult::NotFound;
            }
        };

        let status = response.status();
        if !status.is_success() {
            trace!(url, %status, "probe miss");
            return ProbeResult::NotFound;
        }
        if !is_image(response.headers()) {
            trace!(url, "probe hit a non-image resource");
            return ProbeResult::NotFound;
        }

        trace!(url, "probe hit");
        ProbeResult::found(url)
    }
}

/// Parse the site root, forcing a trailing slash so joins stay inside it
fn parse_root(site_root: &str) -> ProbeSetupResult<Url> {
    let mut root =
        Url::parse(site_root).map_err(|e| ProbeError::invalid_base_url(site_root, e.to_string()))?;
    if root.cannot_be_a_base() {
        return Err(ProbeError::invalid_base_url(site_root, "cannot be a base URL"));
    }
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    Ok(root)
}

fn is_image(headers: &HeaderMap) -> bool {
    match headers.get(CONTENT_TYPE) {
        None => true,
        Some(value) => value
            .to_str()
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn root_gets_trailing_slash() {
        let prober = HttpProber::new("https://example.com/site").unwrap();
        assert_eq!(prober.root().as_str(), "https://example.com/site/");
    }

    #[test]
    fn relative_candidates_join_under_root() {
        let prober = HttpProber::new("https://example.com/site/").unwrap();
        let url = prober
            .absolute("Projects/Industrial/4.%20Brimax/1.jpg")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/site/Projects/Industrial/4.%20Brimax/1.jpg"
        );
    }

    #[test]
    fn relative_root_is_rejected() {
        let err = HttpProber::new("Projects/Industrial").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn non_base_root_is_rejected() {
        let err = HttpProber::new("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/jpeg"));
        assert!(is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("Image/PNG"));
        assert!(is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert!(!is_image(&headers));
    }

    #[tokio::test]
    async fn unreachable_host_is_not_found() {
        // Port 9 (discard) on localhost is closed in test environments
        let prober =
            HttpProber::with_timeout("http://127.0.0.1:9/", Duration::from_millis(200)).unwrap();
        assert_eq!(prober.probe("1.jpg").await, ProbeResult::NotFound);
    }
}
