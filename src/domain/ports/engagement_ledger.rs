//! Port for the per-viewer engagement ledger.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::IssueId;

/// Persisted, per-viewer record of upvote intent.
///
/// Supplementary evidence, not authoritative: the server's `upvoted_by`
/// list takes precedence for rendering, but the ledger must still block a
/// second optimistic upvote while the server list is stale. Entries grow
/// monotonically; nothing un-upvotes, nothing is purged. Keys are opaque
/// viewer identifiers, local to this store's scope.
#[async_trait]
pub trait EngagementLedger: Send + Sync {
    /// Load every issue id this viewer has recorded an upvote for.
    async fn load(&self, viewer_id: &str) -> DomainResult<HashSet<IssueId>>;

    /// Record an upvote intent. Recording an id that is already present
    /// is a no-op, not an error.
    async fn record(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<()>;

    /// Whether this viewer already recorded an upvote for the issue.
    async fn contains(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<bool>;
}
