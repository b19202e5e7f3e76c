//! Social share-link generation.
//!
//! Builds a pre-filled "intent" URL for an article: the platform opens a
//! post dialog with the article title, its full URL and the site's account
//! handle. The output lands verbatim in an `href` attribute, so both query
//! components are percent-encoded independently.

use crate::config::SiteConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query-component encode set.
///
/// Everything outside ASCII alphanumerics and `_ . - ~ /` is escaped; space
/// becomes `%20`, non-ASCII becomes UTF-8 byte escapes. `/` stays literal so
/// encoded article URLs remain readable.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode one query component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

/// Join a base URL and a relative path with exactly one `/` between them.
fn join_url(base_url: &str, relative_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let relative = relative_url.trim_start_matches('/');
    format!("{base}/{relative}")
}

/// Build a share intent URL for an article.
///
/// `title` and the joined article URL are encoded independently, so
/// characters in one field can never act as delimiters of another. `handle`
/// is inserted unescaped: it is a configuration-controlled identifier,
/// validated at config load, never arbitrary input.
///
/// Total over all text inputs; empty title or path just produce empty
/// encoded components.
pub fn tweet_intent(
    title: &str,
    relative_url: &str,
    base_url: &str,
    handle: &str,
    domain: &str,
) -> String {
    format!(
        "https://{domain}/intent/tweet?text={text}&url={url}&via={handle}",
        text = encode_component(title),
        url = encode_component(&join_url(base_url, relative_url)),
    )
}

/// Build the intent URL for an article using site configuration.
pub fn intent_for(config: &SiteConfig, title: &str, relative_url: &str) -> String {
    tweet_intent(
        title,
        relative_url,
        config.site.base_url(),
        &config.social.handle,
        &config.social.domain,
    )
}
