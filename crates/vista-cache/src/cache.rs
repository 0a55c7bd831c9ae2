//! Per-folder probe result cache using moka
//!
//! Two independent tables keyed by encoded base folder path: one for
//! thumbnails, one for slide lists. A cached absent thumbnail or empty slide
//! list is a real entry ("known not to exist"), distinct from a missing
//! entry ("not yet probed").
//!
//! Entries live as long as the cache. There is no capacity bound, no TTL
//! and no invalidation: the file set behind a site is taken as fixed for
//! the lifetime of a session.
//!
//! Concurrent misses on the same key are coalesced: only one caller runs
//! the probe future, the others wait for its value.

use moka::future::Cache;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;
use vista_probe::SlideList;

/// Statistics for cache performance monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups through either table
    pub lookups: u64,
    /// Lookups that ran a probe
    pub misses: u64,
}

impl CacheStats {
    /// Lookups answered without probing
    #[inline]
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.lookups.saturating_sub(self.misses)
    }
}

#[derive(Debug, Default)]
struct Counters {
    lookups: AtomicU64,
    misses: AtomicU64,
}

/// Thumbnail and slide-list memoization tables
///
/// Cheap to clone; clones share the same tables.
#[derive(Debug, Clone)]
pub struct ProbeCache {
    thumbs: Cache<String, Option<String>>,
    slides: Cache<String, SlideList>,
    counters: Arc<Counters>,
}

impl ProbeCache {
    /// Create empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            thumbs: Cache::builder().name("thumbnails").build(),
            slides: Cache::builder().name("slides").build(),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Cached thumbnail of `base`, probing with `probe` on first lookup
    ///
    /// An absent result is stored too, so a folder without a thumbnail is
    /// probed once.
    pub async fn thumbnail_or_probe<F, Fut>(&self, base: &str, probe: F) -> Option<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<String>>,
    {
        self.counters.lookups.fetch_add(1, Ordering::Relaxed);
        self.thumbs
            .get_with(base.to_owned(), async {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                debug!(base, table = "thumbnails", "cache miss");
                probe().await
            })
            .await
    }

    /// Cached slide list of `base`, collecting with `collect` on first lookup
    pub async fn slides_or_probe<F, Fut>(&self, base: &str, collect: F) -> SlideList
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SlideList>,
    {
        self.counters.lookups.fetch_add(1, Ordering::Relaxed);
        self.slides
            .get_with(base.to_owned(), async {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                debug!(base, table = "slides", "cache miss");
                collect().await
            })
            .await
    }

    /// Thumbnail entry without probing
    ///
    /// `None` means not yet probed; `Some(None)` means known absent.
    pub async fn peek_thumbnail(&self, base: &str) -> Option<Option<String>> {
        self.thumbs.get(base).await
    }

    /// Slide-list entry without probing
    pub async fn peek_slides(&self, base: &str) -> Option<SlideList> {
        self.slides.get(base).await
    }

    /// Lookup and miss counters
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookups: self.counters.lookups.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ProbeCache {
    fn default() -> Self {
        Self::new()
    }
}
