//! Check command implementation.
//!
//! Validation itself runs during config load; by the time this executes the
//! config is known good, so the command prints a summary of the effective
//! settings.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

/// Execute check command
pub fn run_check(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} is valid", config.config_path.display());

    let url = config.site.url.as_deref().unwrap_or("(unset)");
    log!("check"; "site: {} <{}>", config.site.name, url);
    log!("check"; "theme: {}, language: {}, timezone: {}",
        config.site.theme, config.site.language, config.site.timezone);
    log!("check"; "content: {}, output: {}",
        config.root.join(&config.site.content).display(),
        config.root.join(&config.site.output).display());

    if config.social.handle.is_empty() {
        log!("check"; "share links: disabled (no social.handle)");
    } else {
        log!("check"; "share links: via @{} on {}", config.social.handle, config.social.domain);
    }

    if config.pagination.enabled() {
        log!("check"; "pagination: {} articles per page, {} patterns",
            config.pagination.per_page, config.pagination.patterns.len());
    } else {
        log!("check"; "pagination: disabled");
    }

    if !config.feeds.any_enabled() {
        log!("check"; "feeds: disabled");
    } else if !config.feeds.all_rss.is_empty() {
        log!("check"; "feeds: enabled, main feed at {}", config.feeds.all_rss);
    } else {
        log!("check"; "feeds: enabled");
    }

    Ok(())
}
