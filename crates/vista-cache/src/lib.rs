//! Vista Cache
//!
//! Memoizes probe results per gallery folder so reopening a gallery or
//! scrolling a tile back into view never probes the network twice.
//!
//! The cache is an explicit object: create one per session and pass it to
//! whatever drives the collectors. Nothing here is global.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;

pub use cache::{CacheStats, ProbeCache};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
