//! Pluma - typed configuration, routing and share-link tooling for a
//! Pelican-style blog.

mod cli;
mod config;
mod core;
mod logger;
mod route;
mod share;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Check => cli::check::run_check(&config),
        Commands::Share { args } => cli::share::run_share(args, &config),
        Commands::Route { args } => cli::route::run_route(args, &config),
        Commands::Show { json } => cli::show::run_show(*json, &config),
    }
}
