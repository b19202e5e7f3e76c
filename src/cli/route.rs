//! Route command implementation.
//!
//! Expands the configured URL / save-as templates for a slug, optionally
//! applying the pagination patterns for listing pages past the first.

use anyhow::{Context, Result, bail};

use crate::cli::{RouteArgs, RouteKind};
use crate::config::{FeedsConfig, SiteConfig};
use crate::core::UrlPath;
use crate::route::paginate::resolve;
use crate::route::{ArticleDate, RouteContext, UrlTemplate, slugify};

/// Execute route command
pub fn run_route(args: &RouteArgs, config: &SiteConfig) -> Result<()> {
    let derived = args.title.as_deref().map(slugify);
    let slug = derived.as_deref().or(args.slug.as_deref()).unwrap_or_default();
    if slug.is_empty() && !matches!(args.kind, RouteKind::Tags) {
        bail!("a slug is required for this route kind");
    }

    let date = args
        .date
        .as_deref()
        .map(str::parse::<ArticleDate>)
        .transpose()?;

    let mut ctx = RouteContext::for_slug(slug).with_lang(&config.site.language);
    ctx.date = date;

    let (url_template, save_as_template) = templates_for(args.kind, config)?;

    let url = url_template
        .expand(&ctx)
        .with_context(|| format!("expanding url template for {slug}"))?;
    let save_as = save_as_template
        .expand(&ctx)
        .with_context(|| format!("expanding save-as template for {slug}"))?;

    match args.page {
        None => {
            print_target(&UrlPath::from_page(&url), &save_as);
        }
        // Page 1 goes through the rule table too: a custom page-1 rule
        // changes where the first page lives.
        Some(number) => {
            if !config.pagination.enabled() {
                bail!("pagination is disabled (pagination.per_page = 0)");
            }
            let Some(target) = resolve(&config.pagination, number, &url, &save_as) else {
                bail!("no pagination pattern matches page {number}");
            };
            print_target(&UrlPath::from_page(&target.url), &target.save_as);
        }
    }

    // Tag listings also carry per-tag feeds
    if matches!(args.kind, RouteKind::Tag) {
        for (label, template) in [
            ("atom", &config.feeds.tag_atom),
            ("rss", &config.feeds.tag_rss),
        ] {
            if let Some(path) = FeedsConfig::tag_feed_path(template, slug) {
                println!("feed_{label} {path}");
            }
        }
    }

    Ok(())
}

/// Print a resolved route, adding the percent-encoded form when it differs.
fn print_target(url: &UrlPath, save_as: &str) {
    println!("url      {url}");
    let encoded = url.to_encoded();
    if encoded != url.as_str() {
        println!("encoded  {encoded}");
    }
    println!("save_as  {save_as}");
}

/// Pick the URL / save-as template pair for a route kind.
fn templates_for(kind: RouteKind, config: &SiteConfig) -> Result<(&UrlTemplate, &UrlTemplate)> {
    let (url, save_as) = match kind {
        RouteKind::Article => (&config.urls.article, &config.urls.article_save_as),
        RouteKind::Page => (&config.urls.page, &config.urls.page_save_as),
        RouteKind::Tag => (&config.urls.tag, &config.urls.tag_save_as),
        RouteKind::Tags => (&config.urls.tags, &config.urls.tags_save_as),
    };

    if url.is_disabled() || save_as.is_disabled() {
        bail!("this output is disabled in [urls]");
    }
    Ok((url, save_as))
}
