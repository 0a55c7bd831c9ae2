//! Testing utilities for Vista workspace
//!
//! Shared scripted probers and fixtures.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use vista_path::Candidate;
use vista_probe::{ExistenceProber, ProbeResult};

/// Scripted outcome for one URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Found,
    FoundAfter(Duration),
    NotFoundAfter(Duration),
    Hang,
}

/// Prober answering from a script and recording every call
///
/// Unscripted URLs resolve immediately to `NotFound`.
#[derive(Debug, Default)]
pub struct ScriptedProber {
    script: HashMap<String, Behavior>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, behavior: Behavior) -> Self {
        self.script.insert(url.into(), behavior);
        self
    }

    pub fn with_file(self, url: impl Into<String>) -> Self {
        self.with(url, Behavior::Found)
    }

    /// Script `<base>/<index>.<ext>` as found for every index
    pub fn with_folder(mut self, base: &str, indices: impl IntoIterator<Item = u32>, ext: &str) -> Self {
        for index in indices {
            self.script
                .insert(Candidate::new(base, index, ext).url(), Behavior::Found);
        }
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls_under(&self, base: &str) -> usize {
        let prefix = format!("{base}/");
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .count()
    }

    /// Highest numbered index probed directly under `base`
    pub fn max_index_probed(&self, base: &str) -> Option<u32> {
        let prefix = format!("{base}/");
        self.calls
            .lock()
            .iter()
            .filter_map(|c| c.strip_prefix(&prefix))
            .filter_map(|file| file.split_once('.').and_then(|(stem, _)| stem.parse().ok()))
            .max()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl ExistenceProber for ScriptedProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        self.calls.lock().push(url.to_string());
        let behavior = self.script.get(url).copied();
        match behavior {
            None => ProbeResult::NotFound,
            Some(Behavior::Found) => ProbeResult::found(url),
            Some(Behavior::FoundAfter(delay)) => {
                tokio::time::sleep(delay).await;
                ProbeResult::found(url)
            }
            Some(Behavior::NotFoundAfter(delay)) => {
                tokio::time::sleep(delay).await;
                ProbeResult::NotFound
            }
            Some(Behavior::Hang) => {
                std::future::pending::<()>().await;
                ProbeResult::NotFound
            }
        }
    }
}

pub fn project_base(category: &str, item: &str) -> String {
    vista_path::encode_path(["Projects", category, item])
}
