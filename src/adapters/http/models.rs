//! Issue API wire models.
//!
//! These structs map to the platform's REST JSON payloads. They are used
//! internally by the HTTP adapter and are not part of the public domain
//! model. Every optional field defaults rather than failing the decode:
//! the server is free to omit or garble optional fields and the feed must
//! still render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{Issue, IssueId, IssuePriority, IssueStatus};

/// An issue record as returned by the platform API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    /// Server-assigned identifier.
    pub id: String,
    /// Issue title.
    #[serde(default)]
    pub title: String,
    /// Full report text.
    #[serde(default)]
    pub description: String,
    /// Category tag.
    #[serde(default)]
    pub category: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// Owner identifier; absent for anonymous reports.
    #[serde(default)]
    pub submitted_by: Option<String>,
    /// Raw status tag; normalized during conversion.
    #[serde(default)]
    pub status: String,
    /// Raw priority tag; case-insensitive, may be absent.
    #[serde(default)]
    pub priority: Option<String>,
    /// Display counter.
    #[serde(default)]
    pub upvotes: u64,
    /// Upvoter identifiers; duplicates from the server are tolerated.
    #[serde(default)]
    pub upvoted_by: Vec<String>,
    /// Whether a paid boost is active.
    #[serde(default)]
    pub is_boosted: bool,
    /// When the boost was applied.
    #[serde(default)]
    pub boosted_at: Option<String>,
    /// ISO 8601 creation timestamp; lenient parse.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RawIssue {
    /// Convert to the domain model, normalizing tags and parsing dates
    /// leniently. Never fails: unparseable values degrade to defaults.
    pub fn into_domain(self) -> Issue {
        Issue {
            id: IssueId::new(self.id),
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            submitted_by: self.submitted_by,
            status: IssueStatus::from_wire(&self.status),
            priority: IssuePriority::from_wire(self.priority.as_deref()),
            upvotes: self.upvotes,
            upvoted_by: self.upvoted_by,
            is_boosted: self.is_boosted,
            boosted_at: self.boosted_at.as_deref().and_then(parse_timestamp),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Lenient ISO 8601 parse; anything unparseable becomes `None`.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_decodes_with_defaults() {
        let raw: RawIssue = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        let issue = raw.into_domain();
        assert_eq!(issue.id.as_str(), "abc123");
        assert_eq!(issue.upvotes, 0);
        assert!(issue.upvoted_by.is_empty());
        assert!(!issue.is_boosted);
        assert!(issue.created_at.is_none());
        assert_eq!(issue.status, IssueStatus::Unknown);
        assert_eq!(issue.priority, IssuePriority::Unranked);
    }

    #[test]
    fn test_full_record_decodes() {
        let json = r#"{
            "id": "i-9",
            "title": "Pothole",
            "description": "Deep pothole on Main St",
            "category": "Roads",
            "location": "Main St & 4th",
            "submittedBy": "alice@example.com",
            "status": "In-Progress",
            "priority": "HIGH",
            "upvotes": 7,
            "upvotedBy": ["b@x.com", "b@x.com"],
            "isBoosted": true,
            "boostedAt": "2024-03-01T12:00:00Z",
            "createdAt": "2024-01-15T08:30:00Z"
        }"#;
        let issue: Issue = serde_json::from_str::<RawIssue>(json).unwrap().into_domain();
        assert_eq!(issue.status, IssueStatus::InProgress);
        assert_eq!(issue.priority, IssuePriority::High);
        assert_eq!(issue.upvotes, 7);
        assert_eq!(issue.upvoted_by.len(), 2);
        assert!(issue.is_boosted);
        assert!(issue.boosted_at.is_some());
        assert_eq!(
            issue.created_at.unwrap().timestamp_millis(),
            1_705_307_400_000
        );
    }

    #[test]
    fn test_garbage_dates_degrade_to_none() {
        let json = r#"{"id": "i-1", "createdAt": "not-a-date", "boostedAt": "also-bad"}"#;
        let issue = serde_json::from_str::<RawIssue>(json).unwrap().into_domain();
        assert!(issue.created_at.is_none());
        assert!(issue.boosted_at.is_none());
    }
}
