//! Request paths for site assets
//!
//! Provides [`AssetPath`] for building relative request paths out of
//! human-readable folder and file names. Each literal component is
//! percent-encoded on its own; directory separators stay literal.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Bytes escaped inside a single path component
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`, the same
/// unreserved set browsers keep when encoding a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Relative path to an asset on the site
///
/// Stores the raw (unencoded) components. Inputs may arrive pre-joined
/// (`"Projects/Industrial"`) or with backslashes; both are re-split so a
/// separator is never encoded and empty components are dropped.
///
/// # Examples
/// - `["Projects/Industrial", "1. Asian Granito"]` → `Projects/Industrial/1.%20Asian%20Granito`
/// - `["a//b", "", "c"]` → `a/b/c`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetPath(Vec<String>);

impl AssetPath {
    /// Build a path from parts, splitting on separators
    #[must_use]
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = Vec::new();
        for part in parts {
            push_split(&mut segments, part.as_ref());
        }
        Self(segments)
    }

    /// Empty path (site root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Raw components
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of components
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is the site root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last raw component (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a part, returning new path
    ///
    /// The part is split on separators like in [`AssetPath::from_parts`].
    #[must_use]
    pub fn child(&self, part: impl AsRef<str>) -> Self {
        let mut new = self.clone();
        push_split(&mut new.0, part.as_ref());
        new
    }

    /// Encoded relative path, components joined by `/`
    #[must_use]
    pub fn encoded(&self) -> String {
        self.0
            .iter()
            .map(|seg| utf8_percent_encode(seg, COMPONENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Display for AssetPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl Default for AssetPath {
    fn default() -> Self {
        Self::root()
    }
}

fn push_split(segments: &mut Vec<String>, part: &str) {
    let cleaned = part.replace('\\', "/");
    segments.extend(
        cleaned
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
    );
}

/// Encode parts into a relative request path
///
/// Shorthand for `AssetPath::from_parts(parts).encoded()`.
#[must_use]
pub fn encode_path<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AssetPath::from_parts(parts).encoded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_spaces_and_punctuation() {
        let path = encode_path(["Projects/Industrial", "28. ZORBA  Aluminium Processing Unit"]);
        assert_eq!(
            path,
            "Projects/Industrial/28.%20ZORBA%20%20Aluminium%20Processing%20Unit"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let path = encode_path(["Projects", "3. SSIPL FB-2 & 3", "O&G, #1?"]);
        assert_eq!(path, "Projects/3.%20SSIPL%20FB-2%20%26%203/O%26G%2C%20%231%3F");
    }

    #[test]
    fn unreserved_marks_are_kept() {
        assert_eq!(encode_path(["a-b_c.d!e~f*g'h(i)"]), "a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn repeated_and_backslash_separators_collapse() {
        assert_eq!(encode_path(["a//b", "", "\\c\\d\\"]), "a/b/c/d");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_path(["Café"]), "Caf%C3%A9");
    }

    #[test]
    fn child_appends_split_parts() {
        let base = AssetPath::from_parts(["News Room"]);
        let path = base.child("IGBC Vadodara/1.jpeg");
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some("1.jpeg"));
        assert_eq!(path.to_string(), "News%20Room/IGBC%20Vadodara/1.jpeg");
    }

    #[test]
    fn empty_input_is_root() {
        let path = AssetPath::from_parts(Vec::<String>::new());
        assert!(path.is_empty());
        assert_eq!(path.encoded(), "");
        assert_eq!(AssetPath::default(), AssetPath::root());
    }

    proptest! {
        #[test]
        fn encoded_path_has_no_empty_components(parts in prop::collection::vec(".{0,12}", 0..5)) {
            let encoded = encode_path(&parts);
            if !encoded.is_empty() {
                prop_assert!(encoded.split('/').all(|c| !c.is_empty()));
            }
            prop_assert!(!encoded.contains('\\'));
            prop_assert!(!encoded.contains(' '));
        }

        #[test]
        fn component_count_matches_nonempty_pieces(parts in prop::collection::vec("[a-z /]{0,10}", 0..5)) {
            let expected = parts
                .iter()
                .flat_map(|p| p.split('/'))
                .filter(|s| !s.is_empty())
                .count();
            prop_assert_eq!(AssetPath::from_parts(&parts).len(), expected);
        }
    }
}
