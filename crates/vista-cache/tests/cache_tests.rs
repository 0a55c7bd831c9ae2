//! Cached lookups driving real collectors over a scripted prober

use futures::future::join_all;
use std::time::Duration;
use vista_cache::ProbeCache;
use vista_probe::{CollectorBounds, SlideCollector, ThumbnailFinder, PROJECT_PROBE_TIMEOUT};
use vista_test_utils::{project_base, Behavior, ScriptedProber};

/// Second lookup of the same folder issues no probes at all.
#[tokio::test(start_paused = true)]
async fn slide_lookup_probes_once() {
    let base = project_base("Industrial", "1. Asian Granito Limited");
    let prober = ScriptedProber::new().with_folder(&base, 1..=3, "jpg").into_arc();
    let collector =
        SlideCollector::for_projects(prober.clone(), CollectorBounds::default(), PROJECT_PROBE_TIMEOUT);
    let cache = ProbeCache::new();

    let first = cache.slides_or_probe(&base, || collector.collect(&base)).await;
    let probes_after_first = prober.call_count();
    let second = cache.slides_or_probe(&base, || collector.collect(&base)).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(probes_after_first > 0);
    assert_eq!(prober.call_count(), probes_after_first);
}

#[tokio::test(start_paused = true)]
async fn missing_thumbnail_probes_once() {
    let base = project_base("Institutional and Public Buildings", "2. Empty");
    let prober = ScriptedProber::new().into_arc();
    let finder = ThumbnailFinder::for_projects(prober.clone(), PROJECT_PROBE_TIMEOUT);
    let cache = ProbeCache::new();

    assert_eq!(cache.thumbnail_or_probe(&base, || finder.find(&base)).await, None);
    assert_eq!(cache.thumbnail_or_probe(&base, || finder.find(&base)).await, None);

    assert_eq!(prober.call_count(), 6);
    assert_eq!(cache.stats().misses, 1);
}

/// Near-simultaneous callers of one uncached folder share a single probe run.
#[tokio::test(start_paused = true)]
async fn concurrent_misses_are_coalesced() {
    let base = project_base("Industrial", "4. Brimax");
    let prober = ScriptedProber::new()
        .with(format!("{base}/1.jpg"), Behavior::FoundAfter(Duration::from_millis(50)))
        .into_arc();
    let finder = ThumbnailFinder::for_projects(prober.clone(), PROJECT_PROBE_TIMEOUT);
    let cache = ProbeCache::new();

    let results = join_all(
        (0..5).map(|_| cache.thumbnail_or_probe(&base, || finder.find(&base))),
    )
    .await;

    assert!(results.iter().all(|r| r.as_deref() == Some(format!("{base}/1.jpg").as_str())));
    assert_eq!(prober.call_count(), 1);
    assert_eq!(cache.stats().lookups, 5);
    assert_eq!(cache.stats().misses, 1);
}
