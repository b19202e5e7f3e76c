//! Site configuration management for `pluma.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── social     # [social]
//! │   ├── urls       # [urls]
//! │   ├── feeds      # [feeds]
//! │   └── pagination # [pagination]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[site]`       | Site metadata (name, url, author, theme, extra)  |
//! | `[social]`     | Share-link account (handle, intent domain)       |
//! | `[urls]`       | URL / save-as templates per page kind            |
//! | `[feeds]`      | Feed output paths                                |
//! | `[pagination]` | Listing page size and URL patterns               |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{FeedsConfig, PaginationConfig, SiteConfigSection, SocialConfig, UrlsConfig};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pluma.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteConfigSection,

    /// Share-link account settings
    #[serde(default)]
    pub social: SocialConfig,

    /// URL and save-as templates
    #[serde(default)]
    pub urls: UrlsConfig,

    /// Feed output paths
    #[serde(default)]
    pub feeds: FeedsConfig,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteConfigSection::default(),
            social: SocialConfig::default(),
            urls: UrlsConfig::default(),
            feeds: FeedsConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            log!(
                "error";
                "Config file '{}' not found in this directory or any parent.",
                cli.config.display()
            );
            std::process::exit(1);
        };

        let mut config = Self::from_path(&config_path)?;

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (pluma.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.feeds.any_enabled(), &mut diag);
        self.social.validate(&mut diag);
        self.urls.validate(&mut diag);
        self.feeds.validate(&mut diag);
        self.pagination.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section plus the given TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nname = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\nname = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.theme, "notmyidea");
        assert_eq!(config.social.domain, "twitter.com");
        assert_eq!(config.pagination.per_page, 10);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.name, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_multiple_errors() {
        let config = test_parse_config(
            "url = \"ftp://example.com\"\n\
             [social]\nhandle = \"bad handle\"\n\
             [urls]\narticle = \"/{bogus}/\"",
        );
        let err = config.validate().unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("site.url"));
        assert!(display.contains("social.handle"));
        assert!(display.contains("urls.article"));
    }

    #[test]
    fn test_validate_original_blog_config() {
        // The configuration this crate was built around
        let config = test_parse_config(
            "url = \"https://pfertyk.me\"\n\
             description = \"Pawel's blog on programming\"\n\
             author = \"Pawel\"\n\
             timezone = \"Europe/Warsaw\"\n\
             theme = \"my-theme\"\n\
             relative_urls = true\n\
             delete_output = true\n\
             [social]\nhandle = \"pfertyk\"",
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pluma.toml");
        std::fs::write(
            &path,
            "[site]\nname = \"Test\"\nurl = \"https://example.com\"",
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
    }
}
