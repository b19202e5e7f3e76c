//! URL template expansion.
//!
//! Templates use `{placeholder}` syntax with an optional strftime-style date
//! format: `{slug}`, `{lang}`, `{name}`, `{date:%Y}`, `{date:%m}`, `{date:%d}`,
//! `{date:%y}`. Expansion is strict: unknown placeholders and missing values
//! are errors, caught at config validation or at expansion time.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches `{name}` and `{date:%X}` placeholders.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)(?::%([A-Za-z]))?\}").unwrap());

// ============================================================================
// RouteError
// ============================================================================

/// Template expansion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown placeholder `{{{name}}}` in template `{template}`")]
    UnknownPlaceholder { template: String, name: String },

    #[error("template `{template}` needs a value for `{{{name}}}`")]
    MissingValue { template: String, name: String },

    #[error("unsupported date format `%{spec}` in template `{template}`")]
    BadDateFormat { template: String, spec: char },

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

// ============================================================================
// ArticleDate
// ============================================================================

/// Calendar date of an article, used by `{date:...}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ArticleDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Format a single strftime-style spec (`Y`, `y`, `m`, `d`).
    fn format(&self, spec: char) -> Option<String> {
        match spec {
            'Y' => Some(format!("{:04}", self.year)),
            'y' => Some(format!("{:02}", self.year % 100)),
            'm' => Some(format!("{:02}", self.month)),
            'd' => Some(format!("{:02}", self.day)),
            _ => None,
        }
    }
}

impl FromStr for ArticleDate {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RouteError::InvalidDate(s.to_string());

        let mut parts = s.splitn(3, '-');
        let year: u16 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let month: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let day: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }
        Ok(Self::new(year, month, day))
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ============================================================================
// RouteContext
// ============================================================================

/// Values available to template placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteContext<'a> {
    /// URL slug (`{slug}`).
    pub slug: &'a str,
    /// Language code (`{lang}`).
    pub lang: &'a str,
    /// Source file basename (`{name}`), when it differs from the slug.
    pub name: Option<&'a str>,
    /// Article date (`{date:...}`). Pages and tags have none.
    pub date: Option<ArticleDate>,
}

impl<'a> RouteContext<'a> {
    pub fn for_slug(slug: &'a str) -> Self {
        Self {
            slug,
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: ArticleDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_lang(mut self, lang: &'a str) -> Self {
        self.lang = lang;
        self
    }
}

// ============================================================================
// UrlTemplate
// ============================================================================

/// A Pelican-style URL or save-as template.
///
/// The empty template disables the corresponding output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Raw template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty template disables the output (Pelican `SAVE_AS = ''`).
    pub fn is_disabled(&self) -> bool {
        self.0.is_empty()
    }

    /// Check template syntax without expanding: every placeholder must be
    /// recognized and every date format supported.
    pub fn check(&self) -> Result<(), RouteError> {
        for caps in PLACEHOLDER.captures_iter(&self.0) {
            let name = &caps[1];
            match name {
                "slug" | "lang" | "name" => {}
                "date" => {
                    let spec = caps
                        .get(2)
                        .and_then(|m| m.as_str().chars().next())
                        .unwrap_or('Y');
                    if !matches!(spec, 'Y' | 'y' | 'm' | 'd') {
                        return Err(RouteError::BadDateFormat {
                            template: self.0.clone(),
                            spec,
                        });
                    }
                }
                _ => {
                    return Err(RouteError::UnknownPlaceholder {
                        template: self.0.clone(),
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Expand the template against the given context.
    pub fn expand(&self, ctx: &RouteContext<'_>) -> Result<String, RouteError> {
        let mut out = String::with_capacity(self.0.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.0) {
            let whole = caps.get(0).unwrap();
            out.push_str(&self.0[last..whole.start()]);
            last = whole.end();

            let name = &caps[1];
            match name {
                "slug" => out.push_str(ctx.slug),
                "lang" => out.push_str(ctx.lang),
                "name" => match ctx.name {
                    Some(n) => out.push_str(n),
                    None => out.push_str(ctx.slug),
                },
                "date" => {
                    let date = ctx.date.ok_or_else(|| RouteError::MissingValue {
                        template: self.0.clone(),
                        name: name.to_string(),
                    })?;
                    let spec = caps
                        .get(2)
                        .and_then(|m| m.as_str().chars().next())
                        .unwrap_or('Y');
                    let formatted =
                        date.format(spec).ok_or(RouteError::BadDateFormat {
                            template: self.0.clone(),
                            spec,
                        })?;
                    out.push_str(&formatted);
                }
                _ => {
                    return Err(RouteError::UnknownPlaceholder {
                        template: self.0.clone(),
                        name: name.to_string(),
                    });
                }
            }
        }

        out.push_str(&self.0[last..]);
        Ok(out)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UrlTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> ArticleDate {
        ArticleDate::new(2020, 1, 5)
    }

    #[test]
    fn test_expand_article_template() {
        let template = UrlTemplate::new("/{date:%Y}/{date:%m}/{slug}/");
        let ctx = RouteContext::for_slug("hello").with_date(date());
        assert_eq!(template.expand(&ctx).unwrap(), "/2020/01/hello/");
    }

    #[test]
    fn test_expand_save_as_template() {
        let template = UrlTemplate::new("{date:%Y}/{date:%m}/{slug}/index.html");
        let ctx = RouteContext::for_slug("hello").with_date(date());
        assert_eq!(template.expand(&ctx).unwrap(), "2020/01/hello/index.html");
    }

    #[test]
    fn test_expand_page_template_without_date() {
        let template = UrlTemplate::new("/{slug}/");
        let ctx = RouteContext::for_slug("about");
        assert_eq!(template.expand(&ctx).unwrap(), "/about/");
    }

    #[test]
    fn test_expand_literal_template() {
        let template = UrlTemplate::new("/tags/");
        let ctx = RouteContext::default();
        assert_eq!(template.expand(&ctx).unwrap(), "/tags/");
    }

    #[test]
    fn test_expand_lang_and_name() {
        let template = UrlTemplate::new("/{lang}/{name}/");
        let ctx = RouteContext {
            slug: "hello",
            lang: "pl",
            name: Some("hello-world"),
            date: None,
        };
        assert_eq!(template.expand(&ctx).unwrap(), "/pl/hello-world/");

        // {name} falls back to slug when unset
        let template = UrlTemplate::new("/{name}/");
        let ctx = RouteContext::for_slug("hello");
        assert_eq!(template.expand(&ctx).unwrap(), "/hello/");
    }

    #[test]
    fn test_expand_missing_date_fails() {
        let template = UrlTemplate::new("/{date:%Y}/{slug}/");
        let err = template.expand(&RouteContext::for_slug("hello")).unwrap_err();
        assert!(matches!(err, RouteError::MissingValue { .. }));
    }

    #[test]
    fn test_expand_two_digit_year_and_day() {
        let template = UrlTemplate::new("{date:%y}/{date:%d}/");
        let ctx = RouteContext::for_slug("x").with_date(date());
        assert_eq!(template.expand(&ctx).unwrap(), "20/05/");
    }

    #[test]
    fn test_check_rejects_unknown_placeholder() {
        let err = UrlTemplate::new("/{category}/{slug}/").check().unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownPlaceholder {
                template: "/{category}/{slug}/".into(),
                name: "category".into()
            }
        );
    }

    #[test]
    fn test_check_rejects_bad_date_format() {
        let err = UrlTemplate::new("/{date:%B}/").check().unwrap_err();
        assert!(matches!(err, RouteError::BadDateFormat { spec: 'B', .. }));
    }

    #[test]
    fn test_check_accepts_defaults() {
        for t in [
            "/{slug}/",
            "{slug}/index.html",
            "/{date:%Y}/{date:%m}/{slug}/",
            "{date:%Y}/{date:%m}/{slug}/index.html",
            "/tag/{slug}/",
            "/tags/",
            "",
        ] {
            assert!(UrlTemplate::new(t).check().is_ok(), "check failed for {t}");
        }
    }

    #[test]
    fn test_disabled_template() {
        assert!(UrlTemplate::new("").is_disabled());
        assert!(!UrlTemplate::new("/{slug}/").is_disabled());
    }

    #[test]
    fn test_date_parsing() {
        let date: ArticleDate = "2020-01-05".parse().unwrap();
        assert_eq!(date, ArticleDate::new(2020, 1, 5));
        assert_eq!(date.to_string(), "2020-01-05");

        assert!("2020-13-01".parse::<ArticleDate>().is_err());
        assert!("2020-01".parse::<ArticleDate>().is_err());
        assert!("not-a-date".parse::<ArticleDate>().is_err());
    }
}
