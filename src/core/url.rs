//! URL path type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Output boundary: encode per segment when emitting into HTML/hrefs

use std::sync::Arc;

/// Decoded page URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/` and ends with `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        // Add leading slash if missing
        let with_leading = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        // Add trailing slash if missing (for page URLs)
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{with_leading}/")
        };

        Self(Arc::from(normalized))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        let url = UrlPath::from_page("/posts/hello/");
        assert_eq!(url.as_str(), "/posts/hello/");
    }

    #[test]
    fn test_from_page_adds_leading_slash() {
        let url = UrlPath::from_page("posts/hello/");
        assert_eq!(url.as_str(), "/posts/hello/");
    }

    #[test]
    fn test_from_page_adds_trailing_slash() {
        let url = UrlPath::from_page("/posts/hello");
        assert_eq!(url.as_str(), "/posts/hello/");
    }

    #[test]
    fn test_from_page_root() {
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::from_page("  ").as_str(), "/");
    }

    #[test]
    fn test_to_encoded_space() {
        let url = UrlPath::from_page("/posts/hello world/");
        assert_eq!(url.to_encoded(), "/posts/hello%20world/");
    }

    #[test]
    fn test_to_encoded_non_ascii() {
        let url = UrlPath::from_page("/posts/中文/");
        assert_eq!(url.to_encoded(), "/posts/%E4%B8%AD%E6%96%87/");
    }

    #[test]
    fn test_to_encoded_plain_ascii_unchanged() {
        let url = UrlPath::from_page("/2020/01/hello/");
        assert_eq!(url.to_encoded(), url.as_str());
    }

    #[test]
    fn test_equality() {
        let url1 = UrlPath::from_page("/posts/hello/");
        let url2 = UrlPath::from_page("posts/hello");
        assert_eq!(url1, url2);
        assert_eq!(url1, "/posts/hello/");
    }

    #[test]
    fn test_display() {
        let url = UrlPath::from_page("/posts/hello/");
        assert_eq!(format!("{url}"), "/posts/hello/");
    }
}
