//! Behavior tests for probing, collection, and thumbnails against a
//! scripted prober with a paused clock.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use vista_probe::{
    CollectorBounds, ProbeResult, SlideCollector, ThumbnailFinder, PROJECT_PROBE_TIMEOUT,
};
use vista_test_utils::{Behavior, ScriptedProber};

const BASE: &str = "Projects/Industrial/4.%20Brimax";

fn project_collector(prober: Arc<ScriptedProber>, bounds: CollectorBounds) -> SlideCollector {
    SlideCollector::for_projects(prober, bounds, PROJECT_PROBE_TIMEOUT)
}

/// Slides come back in index order even when later indices resolve first.
#[tokio::test(start_paused = true)]
async fn slide_order_ignores_completion_order() {
    let prober = ScriptedProber::new()
        .with(format!("{BASE}/3.jpg"), Behavior::FoundAfter(Duration::from_millis(5)))
        .with(format!("{BASE}/1.png"), Behavior::FoundAfter(Duration::from_millis(200)))
        .with(format!("{BASE}/2.JPG"), Behavior::FoundAfter(Duration::from_millis(90)))
        .into_arc();

    let slides = project_collector(prober, CollectorBounds::default())
        .collect(BASE)
        .await;

    assert_eq!(
        slides.into_vec(),
        vec![
            format!("{BASE}/1.png"),
            format!("{BASE}/2.JPG"),
            format!("{BASE}/3.jpg"),
        ]
    );
}

/// Files at 1..=5 with nothing up to 40: two empty chunks after the first
/// end the walk, so nothing past index 30 is ever probed.
#[tokio::test(start_paused = true)]
async fn early_stop_after_two_empty_chunks() {
    let prober = ScriptedProber::new().with_folder(BASE, 1..=5, "jpg").into_arc();

    let slides = project_collector(prober.clone(), CollectorBounds::new(40, 10, 2))
        .collect(BASE)
        .await;

    assert_eq!(slides.len(), 5);
    assert_eq!(prober.max_index_probed(BASE), Some(30));
    // 30 indices × 6 project extensions
    assert_eq!(prober.call_count(), 180);
}

/// An empty folder costs exactly one chunk of probes.
#[tokio::test(start_paused = true)]
async fn empty_folder_probes_only_first_chunk() {
    let prober = ScriptedProber::new().into_arc();

    let slides = project_collector(prober.clone(), CollectorBounds::default())
        .collect(BASE)
        .await;

    assert!(slides.is_empty());
    assert_eq!(prober.max_index_probed(BASE), Some(10));
    assert_eq!(prober.call_count(), 10 * 6);
}

/// A hanging candidate never stalls the chunk past the deadline.
#[tokio::test(start_paused = true)]
async fn hanging_candidates_are_bounded_by_deadline() {
    let prober = ScriptedProber::new()
        .with_file(format!("{BASE}/1.jpg"))
        .with(format!("{BASE}/2.jpg"), Behavior::Hang)
        .with(format!("{BASE}/2.png"), Behavior::Found)
        .into_arc();

    let started = Instant::now();
    let slides = project_collector(prober, CollectorBounds::new(10, 10, 2))
        .collect(BASE)
        .await;

    assert_eq!(
        slides.into_vec(),
        vec![format!("{BASE}/1.jpg"), format!("{BASE}/2.png")]
    );
    let elapsed = started.elapsed();
    assert!(elapsed >= PROJECT_PROBE_TIMEOUT);
    assert!(elapsed < PROJECT_PROBE_TIMEOUT * 2);
}

/// A real file slower than the deadline is lost: the accepted tradeoff.
#[tokio::test(start_paused = true)]
async fn slow_file_is_dropped_by_deadline() {
    let prober = ScriptedProber::new()
        .with_file(format!("{BASE}/1.jpg"))
        .with(format!("{BASE}/2.jpg"), Behavior::FoundAfter(Duration::from_secs(2)))
        .into_arc();

    let slides = project_collector(prober, CollectorBounds::new(10, 10, 2))
        .collect(BASE)
        .await;

    assert_eq!(slides.into_vec(), vec![format!("{BASE}/1.jpg")]);
}

#[tokio::test(start_paused = true)]
async fn thumbnail_missing_everywhere_is_absent() {
    let prober = ScriptedProber::new().into_arc();
    let finder = ThumbnailFinder::for_projects(prober.clone(), PROJECT_PROBE_TIMEOUT);

    assert_eq!(finder.find(BASE).await, None);
    assert_eq!(prober.call_count(), 6);
    assert_eq!(prober.max_index_probed(BASE), Some(1));
}

#[tokio::test(start_paused = true)]
async fn thumbnail_jpg_hit_probes_once() {
    let prober = ScriptedProber::new()
        .with_file(format!("{BASE}/1.jpg"))
        .with_file(format!("{BASE}/1.png"))
        .into_arc();
    let finder = ThumbnailFinder::for_projects(prober.clone(), PROJECT_PROBE_TIMEOUT);

    assert_eq!(finder.find(BASE).await, Some(format!("{BASE}/1.jpg")));
    assert_eq!(prober.calls(), vec![format!("{BASE}/1.jpg")]);
}

#[tokio::test(start_paused = true)]
async fn hanging_thumbnail_is_absent_within_two_deadlines() {
    let prober = ScriptedProber::new()
        .with(format!("{BASE}/1.jpg"), Behavior::Hang)
        .with(format!("{BASE}/1.jpeg"), Behavior::Hang)
        .into_arc();
    let finder = ThumbnailFinder::for_projects(prober, PROJECT_PROBE_TIMEOUT);

    let started = Instant::now();
    assert_eq!(finder.find(BASE).await, None);
    // Primary race, then one race for the rest
    assert!(started.elapsed() < PROJECT_PROBE_TIMEOUT * 2 + Duration::from_millis(10));
}

#[tokio::test]
async fn exhaustive_collector_tries_all_case_variants() {
    let base = "News%20Room/IGBC%20Vadodara";
    let prober = ScriptedProber::new()
        .with_file(format!("{base}/1.JPEG"))
        .with_file(format!("{base}/3.webp"))
        .into_arc();

    let slides = SlideCollector::exhaustive(prober.clone())
        .collect_exhaustive(base, 3)
        .await;

    assert_eq!(
        slides.into_vec(),
        vec![format!("{base}/1.JPEG"), format!("{base}/3.webp")]
    );
    // 1.JPEG is the 4th variant, index 2 misses all 24, 3.webp is the 7th
    assert_eq!(prober.calls_under(base), 4 + 24 + 7);
}

#[tokio::test]
async fn probe_result_round_trip_through_scripted_prober() {
    use vista_probe::ExistenceProber;

    let prober = ScriptedProber::new().with_file("a.png");
    assert_eq!(prober.probe("a.png").await, ProbeResult::found("a.png"));
    assert_eq!(prober.probe("b.png").await, ProbeResult::NotFound);
}
