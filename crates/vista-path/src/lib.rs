//! Vista request paths
//!
//! Building blocks for naming site assets:
//!
//! - [`AssetPath`] / [`encode_path`]: percent-encode human-readable folder and
//!   file names while keeping `/` separators literal
//! - [`ExtensionSet`]: image extensions in probing priority order
//! - [`Candidate`]: one `<base>/<index>.<ext>` file to probe
//!
//! # Example
//!
//! ```rust
//! use vista_path::{encode_path, Candidate, ExtensionSet};
//!
//! let base = encode_path(["Projects/Industrial", "4. Brimax"]);
//! assert_eq!(base, "Projects/Industrial/4.%20Brimax");
//!
//! let first = ExtensionSet::project().primary().map(|ext| Candidate::new(&base, 1, ext));
//! assert_eq!(first.unwrap().url(), "Projects/Industrial/4.%20Brimax/1.jpg");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod candidate;
pub mod encode;
pub mod extension;

pub use candidate::Candidate;
pub use encode::{encode_path, AssetPath};
pub use extension::{ExtensionSet, BASE_IMAGE_EXTENSIONS, PROJECT_IMAGE_EXTENSIONS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
