//! Pagination resolution.
//!
//! Listing pages past the first get their own URL shape, configured as an
//! ordered rule table in `[pagination]`. Rule patterns use `{url}`,
//! `{save_as}`, `{base}` and `{number}` placeholders.

use crate::config::section::{PaginationConfig, PaginationPattern};

/// Concrete output location of one paginated listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    /// URL path of the page (e.g., `/tags/page/2/`).
    pub url: String,
    /// Save-as path relative to the output dir (e.g., `tags/page/2/index.html`).
    pub save_as: String,
}

/// Resolve the concrete location of listing page `number`.
///
/// Every page number goes through the rule table, page 1 included: a custom
/// page-1 rule moves where the first page lives. Returns `None` when no rule
/// matches (empty table).
pub fn resolve(
    pagination: &PaginationConfig,
    number: u32,
    url: &str,
    save_as: &str,
) -> Option<PageTarget> {
    pagination
        .pattern_for(number)
        .map(|pattern| expand_pattern(pattern, number, url, save_as))
}

/// Expand a pagination rule for page `number` of a listing whose unpaginated
/// location is `url` / `save_as`.
///
/// `{base}` resolves to the listing URL for URL patterns and to the save-as
/// directory (save-as with a trailing `index.html` stripped) for save-as
/// patterns.
pub fn expand_pattern(
    pattern: &PaginationPattern,
    number: u32,
    url: &str,
    save_as: &str,
) -> PageTarget {
    let url_base = with_trailing_slash(url);
    let save_base = with_trailing_slash(save_as.trim_end_matches("index.html"));

    PageTarget {
        url: substitute(&pattern.url, number, url, save_as, &url_base),
        save_as: substitute(&pattern.save_as, number, url, save_as, &save_base),
    }
}

fn substitute(pattern: &str, number: u32, url: &str, save_as: &str, base: &str) -> String {
    pattern
        .replace("{url}", url)
        .replace("{save_as}", save_as)
        .replace("{base}", base)
        .replace("{number}", &number.to_string())
}

fn with_trailing_slash(s: &str) -> String {
    if s.is_empty() || s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}
