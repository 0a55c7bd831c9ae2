//! Thumbnail discovery
//!
//! A gallery tile shows `<base>/1.<ext>`. Only index 1 is searched, so
//! there is no chunking and no early stop.

use crate::prober::ExistenceProber;
use crate::resolver::{AssetResolver, FanOut, SequenceResolver};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use vista_path::ExtensionSet;

/// Index probed for a folder thumbnail
pub const THUMBNAIL_INDEX: u32 = 1;

/// Finds the first image of a folder
#[derive(Clone)]
pub struct ThumbnailFinder {
    resolver: Arc<dyn AssetResolver>,
}

impl ThumbnailFinder {
    /// Create finder over any resolver
    #[inline]
    #[must_use]
    pub fn new(resolver: Arc<dyn AssetResolver>) -> Self {
        Self { resolver }
    }

    /// Project thumbnail finder
    ///
    /// Tries `1.jpg` first and only fans out over the remaining project
    /// extensions if it is missing. Each candidate gets `deadline`.
    #[must_use]
    pub fn for_projects(prober: Arc<dyn ExistenceProber>, deadline: Duration) -> Self {
        let resolver = SequenceResolver::new(prober, ExtensionSet::project())
            .with_deadline(deadline)
            .with_fan_out(FanOut::PrimaryFirst);
        Self::new(Arc::new(resolver))
    }

    /// Thumbnail URL for `base`, or `None` if no candidate exists
    pub async fn find(&self, base: &str) -> Option<String> {
        self.resolver.resolve(base, THUMBNAIL_INDEX).await.into_url()
    }
}

impl fmt::Debug for ThumbnailFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbnailFinder")
            .field("resolver", &self.resolver.name())
            .finish()
    }
}
