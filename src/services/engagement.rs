//! Engagement mutator: the optimistic upvote flow and the boost hand-off.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{BoostIntent, BoostOutcome, Issue, UpvoteOutcome, Viewer};
use crate::domain::ports::{EngagementLedger, IssuePatch, IssueRepository};
use crate::services::authorizer;

/// Orchestrates engagement mutations against the ledger and the remote
/// issue store.
///
/// The upvote flow is a small state machine:
/// `Idle -> Optimistic -> Confirmed | ConfirmFailed`. The optimistic phase
/// (ledger write, counter bump, upvoter append) happens before the remote
/// confirm so the caller can surface success immediately; only the one
/// target issue is touched. On confirm failure the optimistic state is
/// deliberately retained: dropping the ledger entry would reopen the
/// double-vote race when the server applied the write but the response
/// was lost. The next full feed reload reconciles.
pub struct EngagementService<R: IssueRepository, L: EngagementLedger> {
    issues: Arc<R>,
    ledger: Arc<L>,
}

impl<R: IssueRepository, L: EngagementLedger> EngagementService<R, L> {
    pub fn new(issues: Arc<R>, ledger: Arc<L>) -> Self {
        Self { issues, ledger }
    }

    /// Drive the upvote flow once for `(viewer, issue)`.
    ///
    /// Idempotent per pair: the authorizer gate runs against the persisted
    /// ledger before any mutation, so a second invocation — including after
    /// a reload that re-reads the ledger from storage — is denied with
    /// exactly one increment having happened.
    pub async fn upvote(
        &self,
        viewer: Option<&Viewer>,
        issue: &mut Issue,
    ) -> DomainResult<UpvoteOutcome> {
        let ledger_set: HashSet<_> = match viewer {
            Some(viewer) => self.ledger.load(&viewer.id).await?,
            None => HashSet::new(),
        };

        if let Some(denial) = authorizer::upvote_denial(viewer, issue, &ledger_set) {
            tracing::debug!(
                issue_id = %issue.id,
                reason = denial.as_str(),
                "upvote denied"
            );
            return Ok(UpvoteOutcome::Denied(denial));
        }
        // The authorizer requires a viewer, so this cannot fail here.
        let Some(viewer) = viewer else {
            return Ok(UpvoteOutcome::Denied(
                crate::domain::models::UpvoteDenial::Anonymous,
            ));
        };

        // Optimistic phase: intent is persisted first so a crash between
        // ledger write and confirm still blocks a duplicate attempt.
        self.ledger.record(&viewer.id, &issue.id).await?;
        issue.upvotes += 1;
        issue.upvoted_by.push(viewer.id.clone());

        let patch = IssuePatch {
            upvotes: Some(issue.upvotes),
            upvoted_by: Some(issue.upvoted_by.clone()),
            updated_at: Some(Utc::now()),
        };

        match self.issues.patch_issue(&issue.id, &patch).await {
            Ok(_) => {
                tracing::info!(issue_id = %issue.id, upvotes = issue.upvotes, "upvote confirmed");
                Ok(UpvoteOutcome::Confirmed)
            }
            Err(err) => {
                // Ledger entry and local counter are kept; reconciled on
                // the next full feed load.
                tracing::warn!(
                    issue_id = %issue.id,
                    error = %err,
                    "upvote confirm failed, keeping optimistic state"
                );
                Ok(UpvoteOutcome::ConfirmFailed)
            }
        }
    }

    /// Drive the boost flow once.
    ///
    /// Boost is a hand-off, not a mutation: on approval the only output is
    /// a well-formed [`BoostIntent`] for the external payment collaborator.
    /// `is_boosted`/`boosted_at` are only ever set by that collaborator's
    /// confirmation path, never here.
    pub fn boost(&self, viewer: Option<&Viewer>, issue: &Issue) -> BoostOutcome {
        if let Some(denial) = authorizer::boost_denial(viewer, issue) {
            tracing::debug!(
                issue_id = %issue.id,
                reason = denial.as_str(),
                "boost denied"
            );
            return BoostOutcome::Denied(denial);
        }
        tracing::info!(issue_id = %issue.id, "boost initiated");
        BoostOutcome::Initiated(BoostIntent::new(issue.id.clone(), issue.title.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::models::{BoostDenial, IssueId, UpvoteDenial, BOOST_AMOUNT};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// In-memory ledger double.
    #[derive(Default)]
    struct MemLedger {
        entries: Mutex<HashSet<(String, IssueId)>>,
    }

    #[async_trait]
    impl EngagementLedger for MemLedger {
        async fn load(&self, viewer_id: &str) -> DomainResult<HashSet<IssueId>> {
            Ok(self
                .entries
                .lock()
                .await
                .iter()
                .filter(|(v, _)| v == viewer_id)
                .map(|(_, id)| id.clone())
                .collect())
        }

        async fn record(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<()> {
            self.entries
                .lock()
                .await
                .insert((viewer_id.to_string(), issue_id.clone()));
            Ok(())
        }

        async fn contains(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<bool> {
            Ok(self
                .entries
                .lock()
                .await
                .contains(&(viewer_id.to_string(), issue_id.clone())))
        }
    }

    /// Repository double with a switchable failure mode.
    #[derive(Default)]
    struct MemRepo {
        fail_patch: AtomicBool,
        patch_calls: AtomicUsize,
    }

    #[async_trait]
    impl IssueRepository for MemRepo {
        async fn list_issues(&self) -> DomainResult<Vec<Issue>> {
            Ok(Vec::new())
        }

        async fn patch_issue(&self, id: &IssueId, patch: &IssuePatch) -> DomainResult<Issue> {
            self.patch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_patch.load(Ordering::SeqCst) {
                return Err(DomainError::Remote("connection reset".to_string()));
            }
            let mut issue = Issue::new(id.as_str(), "patched");
            issue.upvotes = patch.upvotes.unwrap_or(0);
            issue.upvoted_by = patch.upvoted_by.clone().unwrap_or_default();
            Ok(issue)
        }
    }

    fn service() -> EngagementService<MemRepo, MemLedger> {
        EngagementService::new(Arc::new(MemRepo::default()), Arc::new(MemLedger::default()))
    }

    fn fresh_issue() -> Issue {
        let mut issue = Issue::new("i-1", "Pothole on Main St");
        issue.submitted_by = Some("owner@example.com".to_string());
        issue.upvotes = 5;
        issue
    }

    #[tokio::test]
    async fn test_upvote_happy_path_confirms() {
        let svc = service();
        let viewer = Viewer::new("alice@example.com");
        let mut issue = fresh_issue();

        let outcome = svc.upvote(Some(&viewer), &mut issue).await.unwrap();
        assert_eq!(outcome, UpvoteOutcome::Confirmed);
        assert_eq!(issue.upvotes, 6);
        assert!(issue.has_upvote_from("alice@example.com"));
        assert!(svc.ledger.contains("alice@example.com", &issue.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_second_upvote_denied_counter_unchanged() {
        let svc = service();
        let viewer = Viewer::new("alice@example.com");
        let mut issue = fresh_issue();

        svc.upvote(Some(&viewer), &mut issue).await.unwrap();
        let second = svc.upvote(Some(&viewer), &mut issue).await.unwrap();

        assert_eq!(second, UpvoteOutcome::Denied(UpvoteDenial::AlreadyUpvoted));
        assert_eq!(issue.upvotes, 6);
        // The denied attempt never reached the remote store.
        assert_eq!(svc.issues.patch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_confirm_failure_keeps_optimistic_state() {
        let svc = service();
        svc.issues.fail_patch.store(true, Ordering::SeqCst);
        let viewer = Viewer::new("alice@example.com");
        let mut issue = fresh_issue();

        let outcome = svc.upvote(Some(&viewer), &mut issue).await.unwrap();
        assert_eq!(outcome, UpvoteOutcome::ConfirmFailed);
        // Counter and ledger entry stay: pending reconciliation, not rollback.
        assert_eq!(issue.upvotes, 6);
        assert!(svc.ledger.contains("alice@example.com", &issue.id).await.unwrap());

        // And the ledger entry still blocks a retry even though the
        // server never acknowledged.
        let retry = svc.upvote(Some(&viewer), &mut issue).await.unwrap();
        assert_eq!(retry, UpvoteOutcome::Denied(UpvoteDenial::AlreadyUpvoted));
        assert_eq!(issue.upvotes, 6);
    }

    #[tokio::test]
    async fn test_owner_denied_before_any_mutation() {
        let svc = service();
        let owner = Viewer::new("owner@example.com");
        let mut issue = fresh_issue();

        let outcome = svc.upvote(Some(&owner), &mut issue).await.unwrap();
        assert_eq!(outcome, UpvoteOutcome::Denied(UpvoteDenial::OwnIssue));
        assert_eq!(issue.upvotes, 5);
        assert!(!svc.ledger.contains("owner@example.com", &issue.id).await.unwrap());
        assert_eq!(svc.issues.patch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_denied() {
        let svc = service();
        let mut issue = fresh_issue();
        let outcome = svc.upvote(None, &mut issue).await.unwrap();
        assert_eq!(outcome, UpvoteOutcome::Denied(UpvoteDenial::Anonymous));
    }

    #[tokio::test]
    async fn test_boost_hand_off_shape() {
        let svc = service();
        let owner = Viewer::new("owner@example.com");
        let issue = fresh_issue();

        match svc.boost(Some(&owner), &issue) {
            BoostOutcome::Initiated(intent) => {
                assert_eq!(intent.issue_id, issue.id);
                assert_eq!(intent.issue_title, issue.title);
                assert_eq!(intent.kind, "boost");
                assert_eq!(intent.amount, BOOST_AMOUNT);
            }
            BoostOutcome::Denied(reason) => panic!("unexpected denial: {reason:?}"),
        }
    }

    #[tokio::test]
    async fn test_boost_never_mutates_issue() {
        let svc = service();
        let owner = Viewer::new("owner@example.com");
        let issue = fresh_issue();
        let before = issue.clone();
        let _ = svc.boost(Some(&owner), &issue);
        assert_eq!(issue, before);
        assert!(!issue.is_boosted);
    }

    #[tokio::test]
    async fn test_boost_denied_for_non_owner() {
        let svc = service();
        let viewer = Viewer::new("alice@example.com");
        let issue = fresh_issue();
        assert_eq!(
            svc.boost(Some(&viewer), &issue),
            BoostOutcome::Denied(BoostDenial::NotOwner)
        );
    }
}
