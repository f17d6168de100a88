//! `civiclens feed` command.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::adapters::http::HttpIssueRepository;
use crate::adapters::sqlite::{open_ledger, SqliteLedgerRepository};
use crate::cli::output::{format_feed_table, format_page_summary};
use crate::domain::models::{Config, FilterTag, IssueId, SortKey};
use crate::domain::ports::EngagementLedger;
use crate::services::FeedController;

/// Arguments for the feed command.
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Filter tag: all, boosted, or a status (pending, in-progress,
    /// assigned, resolved, rejected)
    #[arg(long, default_value = "all")]
    pub filter: String,

    /// Free-text search across title, description, category, location,
    /// and submitter
    #[arg(long, default_value = "")]
    pub search: String,

    /// Feed ordering: boosted-first, latest, oldest, upvotes, or priority
    #[arg(long, default_value = "boosted-first", value_parser = parse_sort_key)]
    pub sort: SortKey,

    /// Page to show, 1-indexed; out-of-range values clamp
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Override the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::from_str(s).ok_or_else(|| {
        format!("unknown sort key '{s}' (expected boosted-first, latest, oldest, upvotes, or priority)")
    })
}


/// Union of the server's upvoter lists and the local ledger for one viewer.
async fn voted_issue_ids(config: &Config, viewer_id: &str) -> Result<HashSet<IssueId>> {
    let pool = open_ledger(&config.database)
        .await
        .context("Failed to open the engagement ledger database")?;
    let ledger = SqliteLedgerRepository::new(pool);
    Ok(ledger.load(viewer_id).await?)
}

/// Fetch the feed, apply the query, and render one page.
pub async fn execute(
    args: FeedArgs,
    config: &Config,
    viewer_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let repo = Arc::new(HttpIssueRepository::new(config.api.base_url.clone()));
    let page_size = args.page_size.unwrap_or(config.feed.page_size);
    let mut feed = FeedController::new(repo, page_size);

    feed.reload()
        .await
        .context("Failed to fetch the issue feed")?;

    feed.set_filter(FilterTag::parse(&args.filter));
    feed.set_search(args.search);
    feed.set_sort(args.sort);
    feed.set_page(args.page);

    let view = feed.page();

    // The server's upvoter list takes precedence; the local ledger
    // supplements it for confirmations the server has not echoed yet.
    let viewer_id = viewer_override
        .map(str::to_string)
        .or_else(|| config.viewer.clone());
    let voted = match viewer_id {
        Some(viewer_id) => {
            let mut voted = voted_issue_ids(config, &viewer_id).await?;
            for issue in &view.items {
                if issue.has_upvote_from(&viewer_id) {
                    voted.insert(issue.id.clone());
                }
            }
            Some(voted)
        }
        None => None,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        if view.items.is_empty() {
            println!("No issues found.");
            return Ok(());
        }
        println!(
            "{}",
            format_feed_table(&view, voted.as_ref(), console::colors_enabled())
        );
        println!("{}", format_page_summary(&view));
    }

    Ok(())
}
