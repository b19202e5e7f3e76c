//! `[pagination]` configuration.
//!
//! Listing pages are split into groups of `per_page` articles. The `patterns`
//! table decides the URL shape of each page: rules are ordered by ascending
//! `from` threshold and the rule with the greatest threshold at or below the
//! page number applies. Page 1 keeps the listing's own location by default;
//! later pages move under `page/{number}/`.

use crate::config::types::{ConfigDiagnostics, fields};
use serde::{Deserialize, Serialize};

/// One pagination rule: applies to pages numbered `from` and above,
/// until a later rule takes over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPattern {
    /// First page number this rule applies to.
    pub from: u32,
    /// URL pattern (`{url}`, `{base}`, `{number}`).
    pub url: String,
    /// Save-as pattern (`{save_as}`, `{base}`, `{number}`).
    pub save_as: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Articles per listing page. 0 disables pagination.
    pub per_page: u32,

    /// Ordered rule table, ascending by `from`.
    pub patterns: Vec<PaginationPattern>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: 10,
            patterns: vec![
                PaginationPattern {
                    from: 1,
                    url: "{url}".into(),
                    save_as: "{save_as}".into(),
                },
                PaginationPattern {
                    from: 2,
                    url: "{base}page/{number}/".into(),
                    save_as: "{base}page/{number}/index.html".into(),
                },
            ],
        }
    }
}

impl PaginationConfig {
    /// Whether pagination is enabled at all.
    pub fn enabled(&self) -> bool {
        self.per_page > 0
    }

    /// Find the rule for the given 1-based page number.
    ///
    /// Rules are checked in ascending order; the last rule whose threshold
    /// is at or below `number` wins. Returns `None` only when the table is
    /// empty or `number` is below the first threshold.
    pub fn pattern_for(&self, number: u32) -> Option<&PaginationPattern> {
        self.patterns
            .iter()
            .take_while(|rule| rule.from <= number)
            .last()
    }

    /// Validate the rule table.
    ///
    /// # Checks
    /// - table is non-empty and starts at page 1
    /// - thresholds strictly ascending
    /// - the page-1 rule produces a different URL shape than the next rule
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.patterns.is_empty() {
            diag.error_with_hint(
                fields::PAGINATION_PATTERNS,
                "pattern table is empty",
                "remove [pagination] to use the default patterns",
            );
            return;
        }

        if self.patterns[0].from != 1 {
            diag.error(
                fields::PAGINATION_PATTERNS,
                format!(
                    "first rule must start at page 1, found {}",
                    self.patterns[0].from
                ),
            );
        }

        for pair in self.patterns.windows(2) {
            if pair[1].from <= pair[0].from {
                diag.error(
                    fields::PAGINATION_PATTERNS,
                    format!(
                        "thresholds must be strictly ascending, found {} after {}",
                        pair[1].from, pair[0].from
                    ),
                );
            }
        }

        if let [first, second, ..] = self.patterns.as_slice()
            && first.url == second.url
        {
            diag.error_with_hint(
                fields::PAGINATION_PATTERNS,
                "page 1 must have a different URL shape than later pages",
                "keep '{url}' for page 1 and '{base}page/{number}/' for the rest",
            );
        }
    }
}
