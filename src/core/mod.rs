//! Core types shared across routing and share-link generation.

pub mod url;

pub use url::UrlPath;
