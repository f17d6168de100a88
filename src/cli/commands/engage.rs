//! `civiclens upvote` and `civiclens boost` commands.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use crate::adapters::http::HttpIssueRepository;
use crate::adapters::sqlite::{open_ledger, SqliteLedgerRepository};
use crate::domain::models::{BoostOutcome, Config, Issue, IssueId, UpvoteOutcome, Viewer};
use crate::domain::ports::IssueRepository;
use crate::services::EngagementService;

/// Arguments for the upvote command.
#[derive(Debug, Args)]
pub struct UpvoteArgs {
    /// Issue to upvote
    pub issue_id: String,
}

/// Arguments for the boost command.
#[derive(Debug, Args)]
pub struct BoostArgs {
    /// Issue to boost
    pub issue_id: String,
}

async fn build_service(
    config: &Config,
) -> Result<EngagementService<HttpIssueRepository, SqliteLedgerRepository>> {
    let repo = Arc::new(HttpIssueRepository::new(config.api.base_url.clone()));
    let pool = open_ledger(&config.database)
        .await
        .context("Failed to open the engagement ledger database")?;
    let ledger = Arc::new(SqliteLedgerRepository::new(pool));
    Ok(EngagementService::new(repo, ledger))
}

async fn fetch_issue(config: &Config, id: &IssueId) -> Result<Issue> {
    let repo = HttpIssueRepository::new(config.api.base_url.clone());
    let issues = repo
        .list_issues()
        .await
        .context("Failed to fetch the issue feed")?;
    issues
        .into_iter()
        .find(|issue| &issue.id == id)
        .ok_or_else(|| anyhow!("Issue {id} not found. Use 'civiclens feed' to browse issues."))
}

fn resolve_viewer(config: &Config, override_id: Option<&str>) -> Option<Viewer> {
    override_id
        .map(str::to_string)
        .or_else(|| config.viewer.clone())
        .map(Viewer::new)
}

/// Drive the upvote flow for one issue.
pub async fn upvote(
    args: UpvoteArgs,
    config: &Config,
    viewer_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let id = IssueId::new(args.issue_id);
    let viewer = resolve_viewer(config, viewer_override);
    let mut issue = fetch_issue(config, &id).await?;
    let service = build_service(config).await?;

    let outcome = service
        .upvote(viewer.as_ref(), &mut issue)
        .await
        .context("Upvote flow failed")?;

    match outcome {
        UpvoteOutcome::Denied(reason) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "denied": reason.as_str(), "message": reason.message() })
                );
            } else {
                println!("{}", reason.message());
            }
        }
        UpvoteOutcome::Confirmed => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "confirmed": true, "upvotes": issue.upvotes })
                );
            } else {
                println!("Upvoted! {} now has {} votes.", issue.id, issue.upvotes);
            }
        }
        UpvoteOutcome::ConfirmFailed => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "confirmed": false, "upvotes": issue.upvotes })
                );
            } else {
                println!(
                    "Your vote was recorded locally, but the server could not be reached. \
                     It will be reconciled on the next reload."
                );
            }
        }
    }

    Ok(())
}

/// Drive the boost flow for one issue.
pub async fn boost(
    args: BoostArgs,
    config: &Config,
    viewer_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let id = IssueId::new(args.issue_id);
    let viewer = resolve_viewer(config, viewer_override);
    let issue = fetch_issue(config, &id).await?;
    let service = build_service(config).await?;

    match service.boost(viewer.as_ref(), &issue) {
        BoostOutcome::Denied(reason) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "denied": reason.as_str(), "message": reason.message() })
                );
            } else {
                println!("{}", reason.message());
            }
        }
        BoostOutcome::Initiated(intent) => {
            // The payment collaborator consumes this record; the engine's
            // part ends here.
            if json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!(
                    "Boost initiated for \"{}\" ({} credits). Complete payment to activate.",
                    intent.issue_title, intent.amount
                );
            }
        }
    }

    Ok(())
}
