//! Project gallery: filter tabs, paging, and lazy tiles
//!
//! Tiles start `Pending` and only enter the probing pipeline when they
//! first become visible:
//!
//! ```text
//! Pending ──visible──► Probing ──thumbnail──► Ready(url)
//!    │                     └──────absent────► Placeholder
//!    └──visible (flat)──► Ready(file)
//! ```

use crate::catalog::{all_items, CategoryKind, ProjectItem};
use crate::viewer::NEUTRAL_PLACEHOLDER;
use serde::Serialize;
use std::fmt;

/// Project filter tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    /// Every category
    #[default]
    All,
    /// One category by name
    Category(String),
}

impl ProjectFilter {
    /// Check whether `item` passes the filter
    #[must_use]
    pub fn matches(&self, item: &ProjectItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => item.category == name.as_str(),
        }
    }
}

impl From<&str> for ProjectFilter {
    fn from(label: &str) -> Self {
        if label == "All" {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Category(name) => f.write_str(name),
        }
    }
}

/// Lazy thumbnail state of one tile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "src", rename_all = "snake_case")]
pub enum TileState {
    /// Not yet visible
    #[default]
    Pending,
    /// Thumbnail lookup in flight
    Probing,
    /// Image known to exist
    Ready(String),
    /// No image found
    Placeholder,
}

/// One rendered project tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTile {
    /// Catalog entry
    pub item: ProjectItem,
    /// Thumbnail state
    pub state: TileState,
}

impl ProjectTile {
    /// Create pending tile
    #[must_use]
    pub fn new(item: ProjectItem) -> Self {
        Self {
            item,
            state: TileState::Pending,
        }
    }

    /// Image source to show right now
    #[must_use]
    pub fn src(&self) -> &str {
        match &self.state {
            TileState::Ready(url) => url,
            _ => NEUTRAL_PLACEHOLDER,
        }
    }

    /// Project folder (subfolder tiles only)
    #[must_use]
    pub fn folder(&self) -> Option<String> {
        self.item.folder()
    }

    /// Tile title
    #[must_use]
    pub fn title(&self) -> String {
        self.item.title()
    }
}

/// Filtered, paged list of project tiles
#[derive(Debug, Clone)]
pub struct ProjectGallery {
    items: Vec<ProjectItem>,
    filter: ProjectFilter,
    filtered: Vec<ProjectItem>,
    tiles: Vec<ProjectTile>,
    initial_tiles: usize,
    expanded: bool,
}

impl ProjectGallery {
    /// Gallery over the site catalog
    #[must_use]
    pub fn new(initial_tiles: usize) -> Self {
        Self::with_items(all_items(), initial_tiles)
    }

    /// Gallery over given items
    #[must_use]
    pub fn with_items(items: Vec<ProjectItem>, initial_tiles: usize) -> Self {
        let mut gallery = Self {
            items,
            filter: ProjectFilter::All,
            filtered: Vec::new(),
            tiles: Vec::new(),
            initial_tiles,
            expanded: false,
        };
        gallery.render();
        gallery
    }

    /// Switch filter tab; collapses to the first page
    pub fn set_filter(&mut self, filter: impl Into<ProjectFilter>) {
        self.filter = filter.into();
        self.render();
    }

    fn render(&mut self) {
        self.filtered = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item))
            .copied()
            .collect();
        self.expanded = false;
        self.tiles = self
            .filtered
            .iter()
            .take(self.initial_tiles)
            .copied()
            .map(ProjectTile::new)
            .collect();
    }

    /// Active filter
    #[inline]
    #[must_use]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Items passing the filter
    #[inline]
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rendered tiles
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[ProjectTile] {
        &self.tiles
    }

    /// Tile at `index`
    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&ProjectTile> {
        self.tiles.get(index)
    }

    /// Check if every filtered item is shown
    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the Show More/Less toggle is offered
    ///
    /// Only for a single category with more items than the first page.
    #[must_use]
    pub fn toggle_offered(&self) -> bool {
        self.filter != ProjectFilter::All && self.filtered.len() > self.initial_tiles
    }

    /// Toggle label, if offered
    #[must_use]
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.toggle_offered()
            .then_some(if self.expanded { "Show Less" } else { "Show More" })
    }

    /// Expand to every item or collapse to the first page
    ///
    /// Tiles already on screen keep their state.
    pub fn toggle(&mut self) {
        if !self.toggle_offered() {
            return;
        }
        if self.expanded {
            self.tiles.truncate(self.initial_tiles);
            self.expanded = false;
        } else {
            let shown = self.tiles.len();
            self.tiles
                .extend(self.filtered[shown..].iter().copied().map(ProjectTile::new));
            self.expanded = true;
        }
    }

    /// Tile `index` scrolled into view
    ///
    /// A pending subfolder tile moves to `Probing` and its folder is
    /// returned for a thumbnail lookup. A pending flat tile becomes
    /// `Ready` with its own file. Any other tile returns `None`.
    pub fn mark_visible(&mut self, index: usize) -> Option<String> {
        let tile = self.tiles.get_mut(index)?;
        if tile.state != TileState::Pending {
            return None;
        }
        match tile.item.kind {
            CategoryKind::Subfolders => {
                tile.state = TileState::Probing;
                tile.item.folder()
            }
            CategoryKind::Flat => {
                tile.state = tile.item.file().map_or(TileState::Placeholder, TileState::Ready);
                None
            }
        }
    }

    /// Settle every probing tile of `folder` with a thumbnail result
    pub fn resolve_thumbnail(&mut self, folder: &str, thumbnail: Option<String>) {
        for tile in &mut self.tiles {
            if tile.state == TileState::Probing && tile.item.folder().as_deref() == Some(folder) {
                tile.state = thumbnail
                    .clone()
                    .map_or(TileState::Placeholder, TileState::Ready);
            }
        }
    }
}

impl Default for ProjectGallery {
    fn default() -> Self {
        Self::new(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_first_page_without_toggle() {
        let gallery = ProjectGallery::new(12);
        assert_eq!(gallery.tiles().len(), 12);
        assert!(!gallery.toggle_offered());
        assert_eq!(gallery.toggle_label(), None);
    }

    #[test]
    fn category_toggle_expands_and_collapses() {
        let mut gallery = ProjectGallery::new(12);
        gallery.set_filter("Industrial");
        assert_eq!(gallery.toggle_label(), Some("Show More"));

        gallery.toggle();
        assert_eq!(gallery.tiles().len(), 38);
        assert_eq!(gallery.toggle_label(), Some("Show Less"));

        gallery.toggle();
        assert_eq!(gallery.tiles().len(), 12);
        assert!(!gallery.is_expanded());
    }

    #[test]
    fn short_category_offers_no_toggle() {
        let mut gallery = ProjectGallery::new(12);
        gallery.set_filter("Recreational and Hospitality");
        assert_eq!(gallery.tiles().len(), 7);
        assert!(!gallery.toggle_offered());
        gallery.toggle();
        assert_eq!(gallery.tiles().len(), 7);
    }

    #[test]
    fn filter_change_resets_to_collapsed() {
        let mut gallery = ProjectGallery::new(12);
        gallery.set_filter("Industrial");
        gallery.toggle();
        gallery.set_filter(ProjectFilter::Category("Institutional and Public Buildings".into()));
        assert!(!gallery.is_expanded());
        assert_eq!(gallery.tiles().len(), 12);
        assert_eq!(gallery.filter().to_string(), "Institutional and Public Buildings");
    }

    #[test]
    fn subfolder_tile_probes_once() {
        let mut gallery = ProjectGallery::new(12);
        let folder = gallery.mark_visible(0).unwrap();
        assert_eq!(folder, "Projects/Industrial/1.%20Asian%20Granito%20Limited");
        assert_eq!(gallery.tile(0).unwrap().state, TileState::Probing);
        assert_eq!(gallery.mark_visible(0), None);

        gallery.resolve_thumbnail(&folder, Some(format!("{folder}/1.jpg")));
        assert_eq!(gallery.tile(0).unwrap().src(), format!("{folder}/1.jpg"));
    }

    #[test]
    fn absent_thumbnail_becomes_placeholder() {
        let mut gallery = ProjectGallery::new(12);
        let folder = gallery.mark_visible(3).unwrap();
        gallery.resolve_thumbnail(&folder, None);

        let tile = gallery.tile(3).unwrap();
        assert_eq!(tile.state, TileState::Placeholder);
        assert_eq!(tile.src(), NEUTRAL_PLACEHOLDER);
    }

    #[test]
    fn flat_tile_resolves_without_probing() {
        let mut gallery = ProjectGallery::new(12);
        gallery.set_filter("Unique Projects");

        assert_eq!(gallery.mark_visible(0), None);
        assert_eq!(
            gallery.tile(0).unwrap().state,
            TileState::Ready("Projects/Unique%20Projects/1.png".into())
        );
    }

    #[test]
    fn pending_tiles_show_placeholder() {
        let gallery = ProjectGallery::default();
        assert_eq!(gallery.tile(0).unwrap().src(), NEUTRAL_PLACEHOLDER);
        assert_eq!(gallery.tile(99), None);
    }
}
