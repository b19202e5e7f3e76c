//! Command-line interface module.

mod args;
pub mod check;
pub mod route;
pub mod share;
pub mod show;

pub use args::{Cli, Commands, RouteArgs, RouteKind, ShareArgs};
