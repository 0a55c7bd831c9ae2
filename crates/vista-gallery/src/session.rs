//! Page-session controller
//!
//! Owns the prober, the collectors and one [`ProbeCache`] for the lifetime
//! of a browsing session. Every folder lookup goes through the cache, so a
//! folder is probed at most once per session.
//!
//! # Opening a project
//!
//! ```text
//! open_project(tile)
//!   ├─ viewer.open(title, [tile.src])        immediately
//!   ├─ slides(folder).await                  cached collection
//!   └─ viewer.upgrade(ticket, slides)        only if still the same opening
//! ```
//!
//! The viewer lock is never held across an await.
//!
//! # Slide cache keys
//!
//! ```text
//! slides            <folder>
//! numbered slides   numbered:<max>:<folder>
//! newsroom slides   newsroom:<folder>
//! ```

use crate::catalog::NewsroomGroup;
use crate::config::SiteConfig;
use crate::error::{ConfigError, GalleryResult};
use crate::project_gallery::{ProjectGallery, ProjectTile, TileState};
use crate::viewer::{SlideViewer, NEUTRAL_PLACEHOLDER};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use vista_cache::{CacheStats, ProbeCache};
use vista_probe::{
    verify_listed, ExistenceProber, HttpProber, SlideCollector, SlideList, ThumbnailFinder,
};

/// Session over one site
pub struct GallerySession {
    prober: Arc<dyn ExistenceProber>,
    cache: ProbeCache,
    thumbnails: ThumbnailFinder,
    collector: SlideCollector,
    exhaustive: SlideCollector,
    config: SiteConfig,
}

impl GallerySession {
    /// Create session with an explicit prober and cache
    ///
    /// # Errors
    /// `GalleryError::Config` if the configuration is invalid
    pub fn new(
        prober: Arc<dyn ExistenceProber>,
        cache: ProbeCache,
        config: SiteConfig,
    ) -> GalleryResult<Self> {
        config.validate()?;
        let probe = &config.probe;
        let thumbnails = ThumbnailFinder::for_projects(prober.clone(), probe.thumb_timeout());
        let collector =
            SlideCollector::for_projects(prober.clone(), probe.bounds(), probe.slide_timeout());
        let exhaustive = SlideCollector::exhaustive(prober.clone());

        Ok(Self {
            prober,
            cache,
            thumbnails,
            collector,
            exhaustive,
            config,
        })
    }

    /// Create session probing the configured site over HTTP
    ///
    /// # Errors
    /// `GalleryError::Config` without a `base_url`, `GalleryError::Probe`
    /// if the HTTP prober cannot be built
    pub fn connect(config: SiteConfig) -> GalleryResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| ConfigError::invalid("base_url is required to probe a site"))?;
        let prober = HttpProber::new(&base_url)?;
        Self::new(Arc::new(prober), ProbeCache::new(), config)
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Cache counters
    #[inline]
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Cached thumbnail of an encoded folder
    pub async fn thumbnail(&self, folder: &str) -> Option<String> {
        self.cache
            .thumbnail_or_probe(folder, || self.thumbnails.find(folder))
            .await
    }

    /// Cached chunked slide list of an encoded folder
    pub async fn slides(&self, folder: &str) -> SlideList {
        self.cache
            .slides_or_probe(folder, || self.collector.collect(folder))
            .await
    }

    /// Cached plain numbered sequence up to `exhaustive_max`
    ///
    /// Cached apart from [`GallerySession::slides`], so each lookup returns
    /// what its own collection found.
    pub async fn numbered_slides(&self, folder: &str) -> SlideList {
        self.numbered_up_to(folder, self.config.probe.exhaustive_max).await
    }

    async fn numbered_up_to(&self, folder: &str, max: u32) -> SlideList {
        let key = format!("numbered:{max}:{folder}");
        self.cache
            .slides_or_probe(&key, || self.exhaustive.collect_exhaustive(folder, max))
            .await
    }

    /// Tile `index` scrolled into view; settles its thumbnail
    ///
    /// Returns the tile's state afterwards.
    pub async fn load_tile(&self, gallery: &mut ProjectGallery, index: usize) -> Option<TileState> {
        if let Some(folder) = gallery.mark_visible(index) {
            let thumbnail = self.thumbnail(&folder).await;
            gallery.resolve_thumbnail(&folder, thumbnail);
        }
        gallery.tile(index).map(|tile| tile.state.clone())
    }

    /// Open `tile` in `viewer`, then upgrade to the full slide list
    ///
    /// The viewer opens at once with whatever the tile shows, or with the
    /// image itself for a flat tile. Returns whether the collected slides
    /// replaced it.
    pub async fn open_project(&self, tile: &ProjectTile, viewer: &Mutex<SlideViewer>) -> bool {
        let initial = tile.item.file().unwrap_or_else(|| tile.src().to_string());
        let ticket = viewer.lock().open(tile.title(), vec![initial]);

        let Some(folder) = tile.folder() else {
            return false;
        };
        let slides = self.slides(&folder).await;
        let applied = viewer.lock().upgrade(ticket, slides.into_vec());
        debug!(folder = %folder, applied, "project slides settled");
        applied
    }

    /// Slides for a newsroom story; never empty
    ///
    /// Listed files that exist, else a numbered sequence up to
    /// `newsroom_fallback_max`, else the placeholder.
    pub async fn newsroom_slides(&self, group: &NewsroomGroup) -> Vec<String> {
        let base = group.encoded_base();
        let deadline = self.config.probe.default_timeout();
        let max = self.config.probe.newsroom_fallback_max;

        let key = format!("newsroom:{base}");
        let slides = self
            .cache
            .slides_or_probe(&key, || async {
                let listed =
                    verify_listed(self.prober.as_ref(), &group.base, &group.images, Some(deadline))
                        .await;
                if !listed.is_empty() {
                    return listed;
                }
                debug!(base = %base, "no listed newsroom file found, probing numbered sequence");
                self.exhaustive.collect_exhaustive(&base, max).await
            })
            .await;

        if slides.is_empty() {
            vec![NEUTRAL_PLACEHOLDER.to_string()]
        } else {
            slides.into_vec()
        }
    }

    /// Sustainability slides, falling back to `static_sources`
    ///
    /// May be empty; an opened viewer shows the placeholder then.
    pub async fn sustainability_slides(&self, static_sources: &[String]) -> Vec<String> {
        let gallery = &self.config.gallery;
        let base = vista_path::encode_path([gallery.sustainability_base.as_str()]);
        let max = self.config.probe.sustainability_max;

        let slides = self.numbered_up_to(&base, max).await;

        if slides.is_empty() {
            static_sources.to_vec()
        } else {
            slides.into_vec()
        }
    }
}

impl fmt::Debug for GallerySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GallerySession")
            .field("thumbnails", &self.thumbnails)
            .field("collector", &self.collector)
            .field("exhaustive", &self.exhaustive)
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
