//! CivicLens CLI entry point.

use clap::Parser;

use civiclens::cli::{Cli, Commands};
use civiclens::infrastructure::config::ConfigLoader;
use civiclens::infrastructure::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => civiclens::cli::handle_error(err, cli.json),
    };

    logging::init(&config.logging);

    let result = match cli.command {
        Commands::Feed(args) => {
            civiclens::cli::commands::feed::execute(args, &config, cli.viewer.as_deref(), cli.json)
                .await
        }
        Commands::Upvote(args) => {
            civiclens::cli::commands::engage::upvote(args, &config, cli.viewer.as_deref(), cli.json)
                .await
        }
        Commands::Boost(args) => {
            civiclens::cli::commands::engage::boost(args, &config, cli.viewer.as_deref(), cli.json)
                .await
        }
    };

    if let Err(err) = result {
        civiclens::cli::handle_error(err, cli.json);
    }
}
