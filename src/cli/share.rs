//! Share command implementation.

use anyhow::{Result, bail};

use crate::cli::ShareArgs;
use crate::config::SiteConfig;
use crate::share;

/// Execute share command
pub fn run_share(args: &ShareArgs, config: &SiteConfig) -> Result<()> {
    if config.social.handle.is_empty() {
        bail!("social.handle is not configured, share links would have an empty 'via' parameter");
    }
    if config.site.url.is_none() {
        bail!("site.url is not configured, share links need an absolute article URL");
    }

    // The path is passed through as given; the builder is total over any
    // text and file-style paths (hello.html) must survive untouched.
    let link = share::intent_for(config, &args.title, &args.path);
    println!("{link}");
    Ok(())
}
