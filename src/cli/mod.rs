//! Command-line interface for the feed engine.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// CivicLens: browse and engage with the community issue feed.
#[derive(Debug, Parser)]
#[command(name = "civiclens", version, about)]
pub struct Cli {
    /// Emit JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Viewer identity (account email); overrides config
    #[arg(long, global = true, env = "CIVICLENS_VIEWER")]
    pub viewer: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the filtered, ordered, paginated issue feed
    Feed(commands::feed::FeedArgs),
    /// Upvote an issue
    Upvote(commands::engage::UpvoteArgs),
    /// Start a boost for an issue you own
    Boost(commands::engage::BoostArgs),
}

/// Print a top-level error and exit nonzero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let output = serde_json::json!({ "error": err.to_string() });
        eprintln!("{output}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
