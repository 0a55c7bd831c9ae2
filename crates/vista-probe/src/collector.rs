//! Chunked slide collection
//!
//! Discovers the numbered images of a gallery folder without a manifest.
//! The index range is walked in fixed-size chunks; every index of a chunk
//! is resolved concurrently and the next chunk starts only after the whole
//! chunk has settled.
//!
//! # Termination
//!
//! ```text
//! chunk 1 empty                               → stop, folder is empty
//! slides found && empty chunks in a row ≥ N   → stop, sequence ended
//! max_index reached                           → stop
//! ```
//!
//! Gaps inside a sequence are skipped, never treated as a stop signal.

use crate::error::{ProbeError, ProbeSetupResult};
use crate::prober::{ExistenceProber, ProbeResult};
use crate::resolver::{AssetResolver, FanOut, SequenceResolver};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use vista_path::ExtensionSet;

/// Bounds for one chunked collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorBounds {
    /// Highest index ever probed
    pub max_index: u32,
    /// Indices resolved together per chunk
    pub chunk_size: u32,
    /// Consecutive empty chunks that end a non-empty sequence
    pub empty_chunk_stop: u32,
}

impl CollectorBounds {
    /// Create bounds
    #[inline]
    #[must_use]
    pub fn new(max_index: u32, chunk_size: u32, empty_chunk_stop: u32) -> Self {
        Self {
            max_index,
            chunk_size,
            empty_chunk_stop,
        }
    }

    /// Check that every bound is at least 1
    ///
    /// # Errors
    /// `ProbeError::InvalidBounds` naming the first offending field
    pub fn validate(&self) -> ProbeSetupResult<()> {
        for (name, value) in [
            ("max_index", self.max_index),
            ("chunk_size", self.chunk_size),
            ("empty_chunk_stop", self.empty_chunk_stop),
        ] {
            if value == 0 {
                return Err(ProbeError::InvalidBounds(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }
}

impl Default for CollectorBounds {
    fn default() -> Self {
        Self {
            max_index: 80,
            chunk_size: 10,
            empty_chunk_stop: 2,
        }
    }
}

/// Ordered list of resolved slide URLs for one folder
///
/// Only holds found entries; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideList(Vec<String>);

impl SlideList {
    /// Empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the found results, in order
    #[must_use]
    pub fn from_results(results: impl IntoIterator<Item = ProbeResult>) -> Self {
        Self(results.into_iter().filter_map(ProbeResult::into_url).collect())
    }

    /// List of sources known to exist without probing
    #[must_use]
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(urls.into_iter().map(Into::into).collect())
    }

    /// Number of slides
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no slide was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slides as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over slide URLs
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// First slide
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Convert into the URL vector
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    fn extend(&mut self, urls: Vec<String>) {
        self.0.extend(urls);
    }
}

impl From<SlideList> for Vec<String> {
    fn from(list: SlideList) -> Self {
        list.0
    }
}

/// Collector of numbered slides through an [`AssetResolver`]
#[derive(Clone)]
pub struct SlideCollector {
    resolver: Arc<dyn AssetResolver>,
    bounds: CollectorBounds,
}

impl SlideCollector {
    /// Create collector
    ///
    /// Bounds are taken as given; a zero chunk size is treated as 1.
    #[inline]
    #[must_use]
    pub fn new(resolver: Arc<dyn AssetResolver>, bounds: CollectorBounds) -> Self {
        Self { resolver, bounds }
    }

    /// Create collector after validating bounds
    ///
    /// # Errors
    /// `ProbeError::InvalidBounds` if any bound is zero
    pub fn try_new(
        resolver: Arc<dyn AssetResolver>,
        bounds: CollectorBounds,
    ) -> ProbeSetupResult<Self> {
        bounds.validate()?;
        Ok(Self::new(resolver, bounds))
    }

    /// Project collector: project extensions, parallel fan-out, `deadline` per candidate
    #[must_use]
    pub fn for_projects(
        prober: Arc<dyn ExistenceProber>,
        bounds: CollectorBounds,
        deadline: Duration,
    ) -> Self {
        let resolver = SequenceResolver::new(prober, ExtensionSet::project())
            .with_deadline(deadline)
            .with_fan_out(FanOut::Parallel);
        Self::new(Arc::new(resolver), bounds)
    }

    /// Exhaustive collector: every image extension, tried one at a time, no deadline
    #[must_use]
    pub fn exhaustive(prober: Arc<dyn ExistenceProber>) -> Self {
        let resolver = SequenceResolver::new(prober, ExtensionSet::all_images())
            .without_deadline()
            .with_fan_out(FanOut::Sequential);
        Self::new(Arc::new(resolver), CollectorBounds::default())
    }

    /// Configured bounds
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> CollectorBounds {
        self.bounds
    }

    /// Collect the slide list of `base` in chunks with early stop
    pub async fn collect(&self, base: &str) -> SlideList {
        let chunk_size = self.bounds.chunk_size.max(1);
        let max_index = self.bounds.max_index;
        let mut slides = SlideList::new();
        let mut empty_chunks = 0u32;
        let mut start = 1u32;

        while start <= max_index {
            let end = start.saturating_add(chunk_size - 1).min(max_index);
            let results = join_all((start..=end).map(|i| self.resolver.resolve(base, i))).await;
            let found: Vec<String> = results.into_iter().filter_map(ProbeResult::into_url).collect();
            let found_count = found.len();
            slides.extend(found);

            if found_count == 0 {
                empty_chunks += 1;
            } else {
                empty_chunks = 0;
            }
            debug!(
                base,
                resolver = self.resolver.name(),
                start,
                end,
                found = found_count,
                empty_chunks,
                "chunk settled"
            );

            if start == 1 && found_count == 0 {
                debug!(base, "first chunk empty, treating folder as empty");
                break;
            }
            if !slides.is_empty() && empty_chunks >= self.bounds.empty_chunk_stop {
                debug!(base, total = slides.len(), "sequence ended");
                break;
            }

            match end.checked_add(1) {
                Some(next) => start = next,
                None => break,
            }
        }

        slides
    }

    /// Resolve every index in `1..=max` one after another
    ///
    /// No chunking and no early stop: every index is tried.
    pub async fn collect_exhaustive(&self, base: &str, max: u32) -> SlideList {
        let mut slides = Vec::new();
        for index in 1..=max {
            if let Some(url) = self.resolver.resolve(base, index).await.into_url() {
                slides.push(url);
            }
        }
        debug!(base, max, total = slides.len(), "exhaustive collection finished");
        SlideList(slides)
    }
}

impl fmt::Debug for SlideCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideCollector")
            .field("resolver", &self.resolver.name())
            .field("bounds", &self.bounds)
            .finish()
    }
}
