//! URL routing: template expansion, slug generation, pagination resolution.
//!
//! The configuration stores Pelican-style URL templates (`/{date:%Y}/{slug}/`).
//! This module turns them into concrete URL paths and save-as targets.

pub mod paginate;
pub mod slug;
pub mod template;

pub use slug::slugify;
pub use template::{ArticleDate, RouteContext, UrlTemplate};
