//! Vista Probe
//!
//! Discovers which images of a numbered naming convention actually exist
//! on the server, without any manifest.
//!
//! # Architecture
//!
//! ```text
//! SlideCollector / ThumbnailFinder
//!        │  (chunking, early stop)
//!        ▼
//!  AssetResolver ── SequenceResolver ──► probe_with_timeout ──► ExistenceProber
//!        │                                 (deadline race)        (HttpProber)
//!        └──────── ManifestResolver (static listing, no network)
//! ```
//!
//! Probing never fails: a missing file, an HTTP error, and an elapsed
//! deadline all come back as [`ProbeResult::NotFound`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vista_probe::{CollectorBounds, HttpProber, SlideCollector, PROJECT_PROBE_TIMEOUT};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let prober = Arc::new(HttpProber::new("https://example.com/")?);
//! let collector =
//!     SlideCollector::for_projects(prober, CollectorBounds::default(), PROJECT_PROBE_TIMEOUT);
//!
//! let slides = collector.collect("Projects/Industrial/4.%20Brimax").await;
//! println!("{} slides", slides.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod collector;
pub mod error;
pub mod http;
pub mod listed;
pub mod prober;
pub mod resolver;
pub mod thumbnail;
pub mod timeout;

pub use collector::{CollectorBounds, SlideCollector, SlideList};
pub use error::{ProbeError, ProbeSetupResult};
pub use http::HttpProber;
pub use listed::verify_listed;
pub use prober::{ExistenceProber, ProbeResult};
pub use resolver::{AssetResolver, FanOut, ManifestResolver, SequenceResolver};
pub use thumbnail::{ThumbnailFinder, THUMBNAIL_INDEX};
pub use timeout::{
    probe_with_timeout, probe_within, TimeoutProber, DEFAULT_PROBE_TIMEOUT, PROJECT_PROBE_TIMEOUT,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for probing
    pub use crate::collector::{CollectorBounds, SlideCollector, SlideList};
    pub use crate::prober::{ExistenceProber, ProbeResult};
    pub use crate::resolver::{AssetResolver, FanOut, SequenceResolver};
    pub use crate::thumbnail::ThumbnailFinder;
}
