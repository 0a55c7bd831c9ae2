//! Service detail browser
//!
//! Unlike the slide viewer, navigation is linear: prev stops at the first
//! service and next at the last.

use crate::catalog::{Service, ServiceDescription, SERVICES};
use crate::viewer::ViewerKey;
use vista_path::encode_path;

/// Modal over the service list
#[derive(Debug, Clone)]
pub struct ServiceBrowser {
    services: &'static [Service],
    current: usize,
    open: bool,
}

impl ServiceBrowser {
    /// Browser over the site services
    #[must_use]
    pub fn new() -> Self {
        Self::with_services(&SERVICES)
    }

    /// Browser over given services
    #[must_use]
    pub fn with_services(services: &'static [Service]) -> Self {
        Self {
            services,
            current: 0,
            open: false,
        }
    }

    /// Open at `index`, clamped into range
    pub fn open(&mut self, index: usize) {
        self.current = index.min(self.services.len().saturating_sub(1));
        self.open = !self.services.is_empty();
    }

    /// Close
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Check if open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Position of the shown service
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.current
    }

    /// Shown service
    #[must_use]
    pub fn current(&self) -> Option<&'static Service> {
        self.services.get(self.current)
    }

    /// Whether prev is enabled
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    /// Whether next is enabled
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.current + 1 < self.services.len()
    }

    /// Previous service, if any
    pub fn prev(&mut self) {
        if self.can_prev() {
            self.current -= 1;
        }
    }

    /// Next service, if any
    pub fn next(&mut self) {
        if self.can_next() {
            self.current += 1;
        }
    }

    /// Apply a key; ignored while closed
    pub fn handle_key(&mut self, key: ViewerKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            ViewerKey::ArrowLeft => self.prev(),
            ViewerKey::ArrowRight => self.next(),
            ViewerKey::Escape => self.close(),
        }
        true
    }

    /// Modal title
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        self.current().map(Service::heading)
    }

    /// Encoded banner path
    #[must_use]
    pub fn banner_src(&self) -> Option<String> {
        self.current().map(|s| encode_path([s.banner]))
    }

    /// Description of the shown service
    #[must_use]
    pub fn description(&self) -> Option<ServiceDescription> {
        self.current().map(Service::description)
    }
}

impl Default for ServiceBrowser {
    fn default() -> Self {
        Self::new()
    }
}
