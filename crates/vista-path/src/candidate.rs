//! Probe candidates
//!
//! A [`Candidate`] names one file a gallery folder might contain under the
//! numbered naming convention: `<base>/<index>.<extension>`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One (base, index, extension) triple to probe
///
/// `base` is an already-encoded relative folder path; it is not encoded
/// again when the URL is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Encoded base folder
    pub base: String,
    /// Position in the numbered sequence (1-based)
    pub index: u32,
    /// File extension without the dot
    pub extension: String,
}

impl Candidate {
    /// Create candidate
    #[inline]
    #[must_use]
    pub fn new(base: impl Into<String>, index: u32, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            index,
            extension: extension.into(),
        }
    }

    /// Parse a listed file name such as `"3.png"` into a candidate
    ///
    /// Returns `None` unless the stem is a plain decimal number and an
    /// extension is present.
    #[must_use]
    pub fn parse(base: impl Into<String>, file: &str) -> Option<Self> {
        let (stem, extension) = file.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index = stem.parse().ok()?;
        Some(Self::new(base, index, extension))
    }

    /// Relative request path for this candidate
    #[must_use]
    pub fn url(&self) -> String {
        if self.base.is_empty() {
            format!("{}.{}", self.index, self.extension)
        } else {
            format!("{}/{}.{}", self.base.trim_end_matches('/'), self.index, self.extension)
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
