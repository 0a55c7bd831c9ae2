//! Static site catalog
//!
//! Read-only input describing what the site claims to have. None of it is
//! trusted: folder contents are discovered or verified by probing.

pub mod clients;
pub mod newsroom;
pub mod projects;
pub mod services;

pub use clients::{client_logos, ClientCategory, ClientLogo, CLIENT_LOGO_COUNT};
pub use newsroom::{newsroom_groups, NewsroomGroup};
pub use projects::{
    all_items, category, category_items, CategoryKind, ProjectCategory, ProjectItem,
    PROJECT_CATEGORIES,
};
pub use services::{Service, ServiceDescription, DESCRIPTION_FALLBACK, SERVICES};
