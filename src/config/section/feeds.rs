//! `[feeds]` configuration.
//!
//! Output paths for the feeds the generator renders. An empty path disables
//! that feed. Per-tag feed paths are templates with a `{slug}` placeholder.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// RSS feed with all articles.
    pub all_rss: String,
    /// Atom feed with all articles (disabled by default).
    pub atom: String,
    /// Per-tag Atom feed template.
    pub tag_atom: String,
    /// Per-tag RSS feed template.
    pub tag_rss: String,
    /// Per-translation Atom feed template (disabled by default).
    pub translation_atom: String,
    /// Per-category Atom feed template (disabled by default).
    pub category_atom: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            all_rss: "feeds/all.rss.xml".into(),
            atom: String::new(),
            tag_atom: "feeds/{slug}.atom.xml".into(),
            tag_rss: "feeds/{slug}.rss.xml".into(),
            translation_atom: String::new(),
            category_atom: String::new(),
        }
    }
}

impl FeedsConfig {
    /// Whether any feed output is enabled.
    pub fn any_enabled(&self) -> bool {
        [
            &self.all_rss,
            &self.atom,
            &self.tag_atom,
            &self.tag_rss,
            &self.translation_atom,
            &self.category_atom,
        ]
        .iter()
        .any(|path| !path.is_empty())
    }

    /// Validate feed paths.
    ///
    /// # Checks
    /// - per-item feed templates must contain `{slug}` so outputs don't collide
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let per_item = [
            (FieldPath::new("feeds.tag_atom"), &self.tag_atom),
            (FieldPath::new("feeds.tag_rss"), &self.tag_rss),
            (FieldPath::new("feeds.translation_atom"), &self.translation_atom),
            (FieldPath::new("feeds.category_atom"), &self.category_atom),
        ];
        for (field, path) in per_item {
            if !path.is_empty() && !path.contains("{slug}") {
                diag.error_with_hint(
                    field,
                    format!("per-item feed path '{path}' has no {{slug}} placeholder"),
                    "use format like \"feeds/{slug}.atom.xml\"",
                );
            }
        }
    }

    /// Concrete path of a per-tag feed for the given slug.
    pub fn tag_feed_path(template: &str, slug: &str) -> Option<String> {
        if template.is_empty() {
            return None;
        }
        Some(template.replace("{slug}", slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.feeds.all_rss, "feeds/all.rss.xml");
        assert_eq!(config.feeds.atom, "");
        assert_eq!(config.feeds.tag_atom, "feeds/{slug}.atom.xml");
        assert_eq!(config.feeds.tag_rss, "feeds/{slug}.rss.xml");
        assert_eq!(config.feeds.translation_atom, "");
        assert_eq!(config.feeds.category_atom, "");
        assert!(config.feeds.any_enabled());
    }

    #[test]
    fn test_all_disabled() {
        let config = test_parse_config(
            "[feeds]\nall_rss = \"\"\ntag_atom = \"\"\ntag_rss = \"\"",
        );
        assert!(!config.feeds.any_enabled());
    }

    #[test]
    fn test_validate_requires_slug_placeholder() {
        let config = test_parse_config("[feeds]\ntag_rss = \"feeds/tags.rss.xml\"");
        let mut diag = ConfigDiagnostics::new();
        config.feeds.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "feeds.tag_rss");
    }

    #[test]
    fn test_tag_feed_path() {
        assert_eq!(
            FeedsConfig::tag_feed_path("feeds/{slug}.atom.xml", "rust"),
            Some("feeds/rust.atom.xml".to_string())
        );
        assert_eq!(FeedsConfig::tag_feed_path("", "rust"), None);
    }
}
