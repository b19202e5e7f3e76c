//! `[site]` configuration.
//!
//! Basic site information: name, base URL, author, timezone, theme. These
//! values are consumed by the external generator and by the share-link
//! builder (`site.url` only).

use crate::config::types::{ConfigDiagnostics, fields};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site metadata.
/// For custom fields, use `[site.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigSection {
    /// Site name shown in titles and feeds.
    pub name: String,

    /// Base URL (e.g., "https://example.com"). Required when feeds are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Site description.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Author email.
    pub email: String,

    /// IANA timezone name (e.g., "Europe/Warsaw").
    pub timezone: String,

    /// Language code (e.g., "en", "pl").
    pub language: String,

    /// Theme directory name.
    pub theme: String,

    /// Generate relative URLs instead of absolute ones.
    pub relative_urls: bool,

    /// Remove the output directory before generating.
    pub delete_output: bool,

    /// Content directory (relative to project root).
    pub content: PathBuf,

    /// Output directory (relative to project root).
    pub output: PathBuf,

    /// Custom fields passed through to the generator unchanged.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteConfigSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: None,
            description: String::new(),
            author: String::new(),
            email: String::new(),
            timezone: "UTC".into(),
            language: "en".into(),
            theme: "notmyidea".into(),
            relative_urls: false,
            delete_output: false,
            content: "content".into(),
            output: "output".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteConfigSection {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feeds_enabled`, `url` must be set
    /// - `url` must be a valid URL with an http(s) scheme and a host
    pub fn validate(&self, feeds_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.warn(fields::SITE_NAME, "site name is empty");
        }

        // Feeds require url
        if feeds_enabled && self.url.is_none() {
            diag.error_with_hint(
                fields::SITE_URL,
                "feeds are enabled but site.url is not configured",
                "set site.url, e.g.: \"https://example.com\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            fields::SITE_URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            fields::SITE_URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        fields::SITE_URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }

    /// Base URL with any trailing slash removed, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or("").trim_end_matches('/')
    }
}
