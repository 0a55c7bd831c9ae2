//! Verification of listed files
//!
//! Some galleries come with an explicit file list that may be stale. Each
//! listed file is probed in list order and only the ones that load are
//! kept.

use crate::collector::SlideList;
use crate::prober::ExistenceProber;
use crate::timeout::probe_within;
use std::time::Duration;
use tracing::debug;
use vista_path::encode_path;

/// Probe `base/file` for every listed file, keeping hits in list order
///
/// `base` and the file names are raw; they are encoded here.
pub async fn verify_listed<S: AsRef<str>>(
    prober: &dyn ExistenceProber,
    base: &str,
    files: &[S],
    deadline: Option<Duration>,
) -> SlideList {
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let url = encode_path([base, file.as_ref()]);
        results.push(probe_within(prober, &url, deadline).await);
    }
    let slides = SlideList::from_results(results);
    debug!(base, listed = files.len(), found = slides.len(), "listed files verified");
    slides
}
