//! `[urls]` configuration.
//!
//! URL and save-as templates for every generated page kind. An empty
//! template disables that output entirely.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::route::UrlTemplate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// URL of a standalone page.
    pub page: UrlTemplate,
    /// Output file of a standalone page.
    pub page_save_as: UrlTemplate,

    /// URL of an article.
    pub article: UrlTemplate,
    /// Output file of an article.
    pub article_save_as: UrlTemplate,

    /// URL of a single tag listing.
    pub tag: UrlTemplate,
    /// Output file of a single tag listing.
    pub tag_save_as: UrlTemplate,

    /// URL of the tag index.
    pub tags: UrlTemplate,
    /// Output file of the tag index.
    pub tags_save_as: UrlTemplate,

    /// URL of a category listing (disabled by default).
    pub category: UrlTemplate,
    /// Output file of a category listing (disabled by default).
    pub category_save_as: UrlTemplate,

    /// Output file of an author listing (disabled by default).
    pub author_save_as: UrlTemplate,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            page: "/{slug}/".into(),
            page_save_as: "{slug}/index.html".into(),
            article: "/{date:%Y}/{date:%m}/{slug}/".into(),
            article_save_as: "{date:%Y}/{date:%m}/{slug}/index.html".into(),
            tag: "/tag/{slug}/".into(),
            tag_save_as: "tag/{slug}/index.html".into(),
            tags: "/tags/".into(),
            tags_save_as: "tags/index.html".into(),
            category: "".into(),
            category_save_as: "".into(),
            author_save_as: "".into(),
        }
    }
}

impl UrlsConfig {
    /// Validate every template's placeholder syntax.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, template) in self.iter() {
            if let Err(e) = template.check() {
                diag.error(field, e.to_string());
            }
        }
    }

    /// All templates with their config field paths.
    fn iter(&self) -> [(FieldPath, &UrlTemplate); 11] {
        [
            (FieldPath::new("urls.page"), &self.page),
            (FieldPath::new("urls.page_save_as"), &self.page_save_as),
            (FieldPath::new("urls.article"), &self.article),
            (FieldPath::new("urls.article_save_as"), &self.article_save_as),
            (FieldPath::new("urls.tag"), &self.tag),
            (FieldPath::new("urls.tag_save_as"), &self.tag_save_as),
            (FieldPath::new("urls.tags"), &self.tags),
            (FieldPath::new("urls.tags_save_as"), &self.tags_save_as),
            (FieldPath::new("urls.category"), &self.category),
            (FieldPath::new("urls.category_save_as"), &self.category_save_as),
            (FieldPath::new("urls.author_save_as"), &self.author_save_as),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::route::{ArticleDate, RouteContext};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.urls.page.as_str(), "/{slug}/");
        assert_eq!(config.urls.article.as_str(), "/{date:%Y}/{date:%m}/{slug}/");
        assert_eq!(
            config.urls.article_save_as.as_str(),
            "{date:%Y}/{date:%m}/{slug}/index.html"
        );
        assert_eq!(config.urls.tags.as_str(), "/tags/");
        assert!(config.urls.category.is_disabled());
        assert!(config.urls.author_save_as.is_disabled());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[urls]\narticle = \"/posts/{slug}/\"\narticle_save_as = \"posts/{slug}/index.html\"",
        );
        assert_eq!(config.urls.article.as_str(), "/posts/{slug}/");
        // Other templates keep their defaults
        assert_eq!(config.urls.page.as_str(), "/{slug}/");
    }

    #[test]
    fn test_default_article_expansion() {
        let config = test_parse_config("");
        let ctx = RouteContext::for_slug("hello").with_date(ArticleDate::new(2020, 1, 5));
        assert_eq!(config.urls.article.expand(&ctx).unwrap(), "/2020/01/hello/");
        assert_eq!(
            config.urls.article_save_as.expand(&ctx).unwrap(),
            "2020/01/hello/index.html"
        );
    }

    #[test]
    fn test_validate_flags_unknown_placeholder() {
        let config = test_parse_config("[urls]\narticle = \"/{bogus}/\"");
        let mut diag = ConfigDiagnostics::new();
        config.urls.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "urls.article");
    }

    #[test]
    fn test_validate_defaults_clean() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.urls.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
