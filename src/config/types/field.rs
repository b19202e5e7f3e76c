//! Type-safe config field path.

use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections expose their field paths as constants so diagnostics always
/// reference a spelling that exists in `pluma.toml`.
///
/// # Example
///
/// ```ignore
/// diag.error(fields::SITE_URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field paths referenced by validation diagnostics.
pub mod fields {
    use super::FieldPath;

    pub const SITE_URL: FieldPath = FieldPath::new("site.url");
    pub const SITE_NAME: FieldPath = FieldPath::new("site.name");
    pub const SOCIAL_HANDLE: FieldPath = FieldPath::new("social.handle");
    pub const SOCIAL_DOMAIN: FieldPath = FieldPath::new("social.domain");
    pub const PAGINATION_PATTERNS: FieldPath = FieldPath::new("pagination.patterns");
}
