//! Port for the remote issue store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, IssueId};

/// Partial update sent on the PATCH-equivalent call.
///
/// Only fields the engagement flow touches are present; `None` fields are
/// omitted from the wire body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePatch {
    /// New display counter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u64>,
    /// New upvoter list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upvoted_by: Option<Vec<String>>,
    /// Client-side update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Repository port for the remote issue store.
///
/// Treated as an opaque remote call with network-failure semantics; no
/// retry, no cancellation, no timeout beyond transport defaults. Missing
/// optional fields in server records default rather than error.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Fetch all issues. Malformed optional fields in individual records
    /// must degrade to defaults, not fail the whole fetch.
    async fn list_issues(&self) -> DomainResult<Vec<Issue>>;

    /// Apply a partial update to one issue, returning the updated record.
    async fn patch_issue(&self, id: &IssueId, patch: &IssuePatch) -> DomainResult<Issue>;
}
