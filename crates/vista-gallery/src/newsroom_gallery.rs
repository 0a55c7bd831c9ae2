//! Newsroom gallery paging

use crate::catalog::{newsroom_groups, NewsroomGroup};
use crate::viewer::NEUTRAL_PLACEHOLDER;

/// Newsroom story tiles with a Show More/Less toggle
#[derive(Debug, Clone)]
pub struct NewsroomGallery {
    groups: Vec<NewsroomGroup>,
    initial: usize,
    expanded: bool,
}

impl NewsroomGallery {
    /// Gallery over the site newsroom
    #[must_use]
    pub fn new(initial: usize) -> Self {
        Self::with_groups(newsroom_groups(), initial)
    }

    /// Gallery over given groups
    #[must_use]
    pub fn with_groups(groups: Vec<NewsroomGroup>, initial: usize) -> Self {
        Self {
            groups,
            initial,
            expanded: false,
        }
    }

    /// Groups currently shown
    #[must_use]
    pub fn visible(&self) -> &[NewsroomGroup] {
        if self.expanded {
            &self.groups
        } else {
            &self.groups[..self.initial.min(self.groups.len())]
        }
    }

    /// Group by position in the full list
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&NewsroomGroup> {
        self.groups.get(index)
    }

    /// Whether the Show More/Less toggle is offered
    #[must_use]
    pub fn toggle_offered(&self) -> bool {
        self.groups.len() > self.initial
    }

    /// Toggle label, if offered
    #[must_use]
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.toggle_offered()
            .then_some(if self.expanded { "Show Less" } else { "Show More" })
    }

    /// Expand or collapse
    pub fn toggle(&mut self) {
        if self.toggle_offered() {
            self.expanded = !self.expanded;
        }
    }

    /// Tile image for a group: its first listed file, unverified
    #[must_use]
    pub fn thumbnail(group: &NewsroomGroup) -> String {
        group
            .thumbnail()
            .unwrap_or_else(|| NEUTRAL_PLACEHOLDER.to_string())
    }
}
