//! HTTP client for the issue-reporting platform API.
//!
//! Implements the [`IssueRepository`] port over the platform's REST
//! endpoints. Failures map to [`DomainError::Remote`]; there is no retry,
//! cancellation, or timeout beyond transport defaults — every failure is
//! surfaced once and retried only by explicit caller action.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Issue, IssueId};
use crate::domain::ports::{IssuePatch, IssueRepository};

use super::models::RawIssue;

/// HTTP implementation of the issue store port.
#[derive(Debug, Clone)]
pub struct HttpIssueRepository {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL of the platform API, without a trailing slash.
    base_url: String,
}

impl HttpIssueRepository {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn issues_url(&self) -> String {
        format!("{}/issues", self.base_url)
    }

    fn issue_url(&self, id: &IssueId) -> String {
        format!("{}/issues/{}", self.base_url, id)
    }
}

#[async_trait]
impl IssueRepository for HttpIssueRepository {
    async fn list_issues(&self) -> DomainResult<Vec<Issue>> {
        let url = self.issues_url();
        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("list_issues request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Remote(format!(
                "list_issues returned {status}: {body}"
            )));
        }

        let raw = resp
            .json::<Vec<RawIssue>>()
            .await
            .map_err(|e| DomainError::Remote(format!("list_issues parse failed: {e}")))?;

        Ok(raw.into_iter().map(RawIssue::into_domain).collect())
    }

    async fn patch_issue(&self, id: &IssueId, patch: &IssuePatch) -> DomainResult<Issue> {
        let url = self.issue_url(id);
        let resp = self
            .http
            .patch(&url)
            .header("Accept", "application/json")
            .json(patch)
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("patch_issue request failed: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::IssueNotFound(id.clone()));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Remote(format!(
                "patch_issue returned {status}: {body}"
            )));
        }

        let raw = resp
            .json::<RawIssue>()
            .await
            .map_err(|e| DomainError::Remote(format!("patch_issue parse failed: {e}")))?;

        Ok(raw.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let repo = HttpIssueRepository::new("http://localhost:4000/api/");
        assert_eq!(repo.issues_url(), "http://localhost:4000/api/issues");
        assert_eq!(
            repo.issue_url(&IssueId::from("i-5")),
            "http://localhost:4000/api/issues/i-5"
        );
    }
}
