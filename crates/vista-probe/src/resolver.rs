//! Asset resolvers
//!
//! An [`AssetResolver`] answers one question: which file, if any, sits at
//! position `index` of a gallery folder. The collector only talks to this
//! seam, so its chunking and early-stop policy stays the same whether the
//! answer comes from speculative probing ([`SequenceResolver`]) or from a
//! known file listing ([`ManifestResolver`]).

use crate::prober::{ExistenceProber, ProbeResult};
use crate::timeout::{probe_within, DEFAULT_PROBE_TIMEOUT};
use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use vista_path::{Candidate, ExtensionSet};

/// Resolve a numbered position of a gallery folder
#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// Resolve `<base>/<index>.*` to a concrete file
    async fn resolve(&self, base: &str, index: u32) -> ProbeResult;

    /// Resolver name (for logging)
    fn name(&self) -> &'static str;
}

/// How a [`SequenceResolver`] spreads probes across extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanOut {
    /// Every extension at once; first hit in priority order wins
    #[default]
    Parallel,
    /// Primary extension alone, then the rest at once if it misses
    PrimaryFirst,
    /// One extension at a time, stopping at the first hit
    Sequential,
}

/// Resolver probing `<base>/<index>.<ext>` for each configured extension
#[derive(Clone)]
pub struct SequenceResolver {
    prober: Arc<dyn ExistenceProber>,
    extensions: ExtensionSet,
    deadline: Option<Duration>,
    fan_out: FanOut,
}

impl SequenceResolver {
    /// Create resolver with parallel fan-out and the default deadline
    #[must_use]
    pub fn new(prober: Arc<dyn ExistenceProber>, extensions: ExtensionSet) -> Self {
        Self {
            prober,
            extensions,
            deadline: Some(DEFAULT_PROBE_TIMEOUT),
            fan_out: FanOut::Parallel,
        }
    }

    /// With per-candidate deadline
    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Without deadline (wait for each probe to settle)
    #[inline]
    #[must_use]
    pub fn without_deadline(mut self) -> Self {
        self.deadline = None;
        self
    }

    /// With fan-out mode
    #[inline]
    #[must_use]
    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Extensions in priority order
    #[inline]
    #[must_use]
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Fan-out mode
    #[inline]
    #[must_use]
    pub fn fan_out(&self) -> FanOut {
        self.fan_out
    }

    async fn probe_one(&self, url: &str) -> ProbeResult {
        probe_within(self.prober.as_ref(), url, self.deadline).await
    }

    /// Probe all URLs concurrently and pick the first hit by position
    async fn probe_all(&self, urls: &[String]) -> ProbeResult {
        join_all(urls.iter().map(|url| self.probe_one(url)))
            .await
            .into_iter()
            .find(ProbeResult::is_found)
            .unwrap_or(ProbeResult::NotFound)
    }
}

impl fmt::Debug for SequenceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceResolver")
            .field("extensions", &self.extensions)
            .field("deadline", &self.deadline)
            .field("fan_out", &self.fan_out)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AssetResolver for SequenceResolver {
    async fn resolve(&self, base: &str, index: u32) -> ProbeResult {
        let urls: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| Candidate::new(base, index, ext).url())
            .collect();

        match self.fan_out {
            FanOut::Parallel => self.probe_all(&urls).await,
            FanOut::PrimaryFirst => {
                let Some((primary, rest)) = urls.split_first() else {
                    return ProbeResult::NotFound;
                };
                let result = self.probe_one(primary).await;
                if result.is_found() {
                    return result;
                }
                self.probe_all(rest).await
            }
            FanOut::Sequential => {
                for url in &urls {
                    let result = self.probe_one(url).await;
                    if result.is_found() {
                        return result;
                    }
                }
                ProbeResult::NotFound
            }
        }
    }

    fn name(&self) -> &'static str {
        "sequence"
    }
}

/// Resolver backed by a known listing of numbered files
///
/// Never touches the network. Files whose stem is not a plain number are
/// ignored; when two files share an index the first listed wins.
#[derive(Debug, Clone, Default)]
pub struct ManifestResolver {
    entries: HashMap<String, BTreeMap<u32, String>>,
}

impl ManifestResolver {
    /// Create empty manifest
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the files of one folder
    pub fn insert_listing<S: AsRef<str>>(&mut self, base: &str, files: &[S]) {
        let folder = self.entries.entry(base.to_owned()).or_default();
        for file in files {
            if let Some(candidate) = Candidate::parse(base, file.as_ref()) {
                folder.entry(candidate.index).or_insert_with(|| candidate.url());
            }
        }
    }

    /// With the files of one folder
    #[must_use]
    pub fn with_listing<S: AsRef<str>>(mut self, base: &str, files: &[S]) -> Self {
        self.insert_listing(base, files);
        self
    }

    /// Highest index known for a folder
    #[must_use]
    pub fn max_index(&self, base: &str) -> Option<u32> {
        self.entries
            .get(base)
            .and_then(|folder| folder.keys().next_back().copied())
    }
}

#[async_trait]
impl AssetResolver for ManifestResolver {
    async fn resolve(&self, base: &str, index: u32) -> ProbeResult {
        self.entries
            .get(base)
            .and_then(|folder| folder.get(&index))
            .cloned()
            .into()
    }

    fn name(&self) -> &'static str {
        "manifest"
    }
}
