//! Image extension sets in probing priority order

use serde::{Deserialize, Serialize};

/// Base image extensions, highest priority first
pub const BASE_IMAGE_EXTENSIONS: [&str; 12] = [
    "jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff", "avif", "heic", "heif", "jfif",
];

/// Extensions used for project galleries and thumbnails
pub const PROJECT_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// Ordered, de-duplicated list of file extensions
///
/// Order is the probing priority. It is never sorted: when both `2.jpg`
/// and `2.JPG` exist the earlier entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    /// Create set from extensions, dropping duplicates and leading dots
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.');
            if !ext.is_empty() && !out.iter().any(|e| e == ext) {
                out.push(ext.to_owned());
            }
        }
        Self(out)
    }

    /// Project extension set (`jpg, jpeg, png, JPG, JPEG, PNG`)
    #[must_use]
    pub fn project() -> Self {
        Self::new(PROJECT_IMAGE_EXTENSIONS)
    }

    /// Every base extension followed by its upper-case form
    #[must_use]
    pub fn all_images() -> Self {
        Self::new(
            BASE_IMAGE_EXTENSIONS
                .iter()
                .flat_map(|e| [(*e).to_owned(), e.to_uppercase()]),
        )
    }

    /// Highest-priority extension
    #[inline]
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Extensions after the primary one
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    /// Iterate in priority order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of extensions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::project()
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(set: ExtensionSet) -> Self {
        set.0
    }
}
