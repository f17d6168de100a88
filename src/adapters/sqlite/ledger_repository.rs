//! SQLite implementation of the EngagementLedger.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::IssueId;
use crate::domain::ports::EngagementLedger;

/// Per-viewer upvote-intent store backed by the `upvote_ledger` table.
#[derive(Clone)]
pub struct SqliteLedgerRepository {
    pool: SqlitePool,
}

impl SqliteLedgerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementLedger for SqliteLedgerRepository {
    async fn load(&self, viewer_id: &str) -> DomainResult<HashSet<IssueId>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT issue_id FROM upvote_ledger WHERE viewer_id = ?")
                .bind(viewer_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| IssueId::new(id)).collect())
    }

    async fn record(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<()> {
        // OR IGNORE keeps re-recording an existing intent a no-op.
        sqlx::query(
            "INSERT OR IGNORE INTO upvote_ledger (viewer_id, issue_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(viewer_id)
        .bind(issue_id.as_str())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn contains(&self, viewer_id: &str, issue_id: &IssueId) -> DomainResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM upvote_ledger WHERE viewer_id = ? AND issue_id = ? LIMIT 1",
        )
        .bind(viewer_id)
        .bind(issue_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::connection::{create_pool, ensure_schema};

    async fn ledger() -> SqliteLedgerRepository {
        let pool = create_pool("sqlite::memory:", None).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        SqliteLedgerRepository::new(pool)
    }

    #[tokio::test]
    async fn test_record_and_load() {
        let ledger = ledger().await;
        let issue = IssueId::from("i-1");

        assert!(!ledger.contains("alice", &issue).await.unwrap());
        ledger.record("alice", &issue).await.unwrap();
        assert!(ledger.contains("alice", &issue).await.unwrap());

        let set = ledger.load("alice").await.unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&issue));
    }

    #[tokio::test]
    async fn test_re_record_is_a_noop() {
        let ledger = ledger().await;
        let issue = IssueId::from("i-1");

        ledger.record("alice", &issue).await.unwrap();
        ledger.record("alice", &issue).await.unwrap();

        let set = ledger.load("alice").await.unwrap();
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_ledger_is_keyed_per_viewer() {
        let ledger = ledger().await;
        let issue = IssueId::from("i-1");

        ledger.record("alice", &issue).await.unwrap();
        assert!(!ledger.contains("bob", &issue).await.unwrap());
        assert!(ledger.load("bob").await.unwrap().is_empty());
    }
}
