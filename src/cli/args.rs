//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pluma blog configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pluma.toml)
    #[arg(short = 'C', long, default_value = "pluma.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the share intent URL for an article
    Share {
        #[command(flatten)]
        args: ShareArgs,
    },

    /// Expand the configured URL templates for a slug
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Print the effective configuration
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

/// Share command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShareArgs {
    /// Article title, exactly as rendered
    pub title: String,

    /// Article URL path relative to the site root (e.g., 2020/01/hello/)
    pub path: String,
}

/// Kind of route to expand.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Article URL and save-as path
    Article,
    /// Standalone page
    Page,
    /// Single tag listing
    Tag,
    /// Tag index
    Tags,
}

/// Route command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// What to expand
    #[arg(value_enum)]
    pub kind: RouteKind,

    /// URL slug (not used for the tag index)
    pub slug: Option<String>,

    /// Derive the slug from a title instead of passing it directly
    #[arg(short, long, conflicts_with = "slug")]
    pub title: Option<String>,

    /// Article date as YYYY-MM-DD (articles only)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Listing page number; applies the pagination patterns
    #[arg(short, long)]
    pub page: Option<u32>,
}
