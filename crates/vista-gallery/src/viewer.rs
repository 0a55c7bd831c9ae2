//! Modal slide viewer
//!
//! ```text
//! closed ──open(title, slides)──► open, index 0 ──prev/next──► open, index ± 1 (mod len)
//!    ▲                                  │
//!    └──────────── close / Escape ──────┘
//! ```
//!
//! An open viewer always has at least one slide: an empty list is replaced
//! by [`NEUTRAL_PLACEHOLDER`]. Navigation wraps around in both directions.
//!
//! Opening returns a [`ViewerTicket`]. A slide list that arrives later is
//! applied with [`SlideViewer::upgrade`] only while that ticket is current,
//! so a slow collection never overwrites a viewer that was closed or
//! reopened for another tile in the meantime.

use serde::Serialize;

/// 1x1 transparent PNG shown when nothing better exists
pub const NEUTRAL_PLACEHOLDER: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mP8/x8AAwMB/ekmOmoAAAAASUVORK5CYII=";

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Previous slide
    ArrowLeft,
    /// Next slide
    ArrowRight,
    /// Close
    Escape,
}

impl ViewerKey {
    /// Map a DOM-style key name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Identifies one opening of a viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerTicket(u64);

/// What the viewer currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlide {
    /// Image source
    pub src: String,
    /// Image alt text
    pub alt: String,
    /// `"Image {pos} of {total}"`
    pub counter: String,
}

/// Modal carousel over one slide list
#[derive(Debug, Clone)]
pub struct SlideViewer {
    title: String,
    default_alt: &'static str,
    slides: Vec<String>,
    index: usize,
    open: bool,
    generation: u64,
}

impl SlideViewer {
    /// Create closed viewer
    #[must_use]
    pub fn new(default_alt: &'static str) -> Self {
        Self {
            title: String::new(),
            default_alt,
            slides: Vec::new(),
            index: 0,
            open: false,
            generation: 0,
        }
    }

    /// Viewer for project galleries
    #[must_use]
    pub fn for_projects() -> Self {
        Self::new("Project image")
    }

    /// Viewer for newsroom stories
    #[must_use]
    pub fn for_newsroom() -> Self {
        Self::new("Newsroom image")
    }

    /// Viewer for the sustainability gallery
    #[must_use]
    pub fn for_sustainability() -> Self {
        Self::new("Sustainability image")
    }

    /// Open on the first slide
    pub fn open(&mut self, title: impl Into<String>, slides: Vec<String>) -> ViewerTicket {
        self.title = title.into();
        self.slides = if slides.is_empty() {
            vec![NEUTRAL_PLACEHOLDER.to_string()]
        } else {
            slides
        };
        self.index = 0;
        self.open = true;
        self.generation += 1;
        ViewerTicket(self.generation)
    }

    /// Close; pending upgrades for the last opening are dropped
    pub fn close(&mut self) {
        self.open = false;
        self.generation += 1;
    }

    /// Replace the slides if `ticket` is still current and `slides` is non-empty
    ///
    /// Returns whether the slides were replaced.
    pub fn upgrade(&mut self, ticket: ViewerTicket, slides: Vec<String>) -> bool {
        if !self.is_current(ticket) || slides.is_empty() {
            return false;
        }
        self.slides = slides;
        self.index = 0;
        true
    }

    /// Check if `ticket` belongs to the open viewer
    #[inline]
    #[must_use]
    pub fn is_current(&self, ticket: ViewerTicket) -> bool {
        self.open && ticket.0 == self.generation
    }

    /// Next slide, wrapping to the first
    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    /// Previous slide, wrapping to the last
    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
    }

    /// Apply a key; ignored while closed
    ///
    /// Returns whether the key was handled.
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

    /// Check if the viewer is open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current slide position (0-based)
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check if there are no slides (only before the first open)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide sources
    #[inline]
    #[must_use]
    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    /// Modal title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current slide with alt text and counter
    #[must_use]
    pub fn render(&self) -> Option<RenderedSlide> {
        let src = self.slides.get(self.index)?;
        let alt = if self.title.is_empty() {
            self.default_alt.to_string()
        } else {
            self.title.clone()
        };
        Some(RenderedSlide {
            src: src.clone(),
            alt,
            counter: format!("Image {} of {}", self.index + 1, self.slides.len()),
        })
    }
}

impl Default for SlideViewer {
    fn default() -> Self {
        Self::for_projects()
    }
}
