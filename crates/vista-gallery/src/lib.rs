//! Vista Gallery
//!
//! The browsing side of a portfolio site: what the catalog lists, how
//! tiles and modals behave, and a [`GallerySession`] that connects them to
//! cached probing.
//!
//! # Architecture
//!
//! ```text
//! catalog (static input)
//!    │
//!    ▼
//! ProjectGallery / NewsroomGallery / ClientWall / ServiceBrowser
//!    │  tile visible, tile activated
//!    ▼
//! GallerySession ──► ProbeCache ──► ThumbnailFinder / SlideCollector ──► ExistenceProber
//!    │
//!    ▼
//! SlideViewer (open now, upgrade when slides settle)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use parking_lot::Mutex;
//! use vista_gallery::{GallerySession, ProjectGallery, SiteConfig, SlideViewer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = GallerySession::connect(SiteConfig::default().with_base_url("https://example.com/"))?;
//! let mut gallery = ProjectGallery::new(session.config().gallery.initial_tiles);
//! let viewer = Mutex::new(SlideViewer::for_projects());
//!
//! session.load_tile(&mut gallery, 0).await;
//! if let Some(tile) = gallery.tile(0) {
//!     session.open_project(tile, &viewer).await;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod client_wall;
pub mod config;
pub mod error;
pub mod naming;
pub mod newsroom_gallery;
pub mod project_gallery;
pub mod service_browser;
pub mod session;
pub mod viewer;

pub use client_wall::ClientWall;
pub use config::{GalleryConfig, ProbeConfig, SiteConfig};
pub use error::{ConfigError, GalleryError, GalleryResult};
pub use newsroom_gallery::NewsroomGallery;
pub use project_gallery::{ProjectFilter, ProjectGallery, ProjectTile, TileState};
pub use service_browser::ServiceBrowser;
pub use session::GallerySession;
pub use viewer::{RenderedSlide, SlideViewer, ViewerKey, ViewerTicket, NEUTRAL_PLACEHOLDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for gallery front-ends
    pub use crate::catalog::{CategoryKind, ProjectItem};
    pub use crate::config::SiteConfig;
    pub use crate::project_gallery::{ProjectGallery, TileState};
    pub use crate::session::GallerySession;
    pub use crate::viewer::{SlideViewer, ViewerKey};
}
