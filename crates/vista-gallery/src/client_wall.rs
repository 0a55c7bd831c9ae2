//! Client logo wall
//!
//! One category at a time. The first page is shown on every filter change;
//! "Show More" reveals the rest and then disappears.

use crate::catalog::{client_logos, ClientCategory, ClientLogo};

/// Filtered client logos
#[derive(Debug, Clone)]
pub struct ClientWall {
    logos: Vec<ClientLogo>,
    filter: ClientCategory,
    initial: usize,
    revealed: bool,
}

impl ClientWall {
    /// Wall over the site logos, filtered to the default category
    #[must_use]
    pub fn new(initial: usize) -> Self {
        Self {
            logos: client_logos(),
            filter: ClientCategory::default(),
            initial,
            revealed: false,
        }
    }

    /// Switch category; hides the revealed rest again
    pub fn set_filter(&mut self, filter: ClientCategory) {
        self.filter = filter;
        self.revealed = false;
    }

    /// Active category
    #[inline]
    #[must_use]
    pub fn filter(&self) -> ClientCategory {
        self.filter
    }

    fn filtered(&self) -> impl Iterator<Item = &ClientLogo> {
        self.logos.iter().filter(move |l| l.category == self.filter)
    }

    /// Logos currently shown
    #[must_use]
    pub fn visible(&self) -> Vec<&ClientLogo> {
        let limit = if self.revealed { usize::MAX } else { self.initial };
        self.filtered().take(limit).collect()
    }

    /// Whether "Show More" is offered
    #[must_use]
    pub fn show_more_offered(&self) -> bool {
        !self.revealed && self.filtered().count() > self.initial
    }

    /// Reveal every logo of the category
    pub fn show_more(&mut self) {
        self.revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_public_companies() {
        let wall = ClientWall::new(25);
        assert_eq!(wall.filter(), ClientCategory::PublicCompanies);
        assert_eq!(wall.visible().len(), 25);
        assert!(!wall.show_more_offered());
    }

    #[test]
    fn show_more_is_one_way() {
        let mut wall = ClientWall::new(5);
        wall.set_filter(ClientCategory::GovernmentOrganizations);
        assert_eq!(wall.visible().len(), 5);
        assert!(wall.show_more_offered());

        wall.show_more();
        assert_eq!(wall.visible().len(), 6);
        assert!(!wall.show_more_offered());

        wall.set_filter(ClientCategory::GovernmentOrganizations);
        assert_eq!(wall.visible().len(), 5);
    }

    #[test]
    fn associates_include_override() {
        let mut wall = ClientWall::new(25);
        wall.set_filter(ClientCategory::AssociateConsultants);
        let indices: Vec<u32> = wall.visible().iter().map(|l| l.index).collect();
        assert_eq!(indices, [81, 82, 83, 84]);
    }
}
