//! Issue domain model.
//!
//! Issues are citizen-submitted infrastructure reports. The engine holds
//! read-mostly snapshots of them plus optimistic engagement deltas; the
//! remote repository owns the records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque server-assigned issue identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(pub String);

impl IssueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IssueId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The viewer on whose behalf the engine acts. Absent viewer = anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Opaque viewer identifier (the platform uses the account email).
    pub id: String,
}

impl Viewer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Triage status of an issue.
///
/// The tag set is an external contract; anything outside it lands in
/// `Unknown` and still renders. Comparison is always against the
/// normalized lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    /// Newly reported, not yet triaged
    Pending,
    /// Staff are working on it
    InProgress,
    /// Assigned to a crew or department
    Assigned,
    /// Fixed and closed
    Resolved,
    /// Closed without action
    Rejected,
    /// Unrecognized tag from the server
    Unknown,
}

impl Default for IssueStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire/UI tag. Case-insensitive; underscores and spaces are
    /// treated as hyphens so `In Progress` and `in_progress` both resolve.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "assigned" => Some(Self::Assigned),
            "resolved" => Some(Self::Resolved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Parse like [`from_str`](Self::from_str) but fall back to `Unknown`
    /// instead of `None`, for tolerant wire decoding.
    pub fn from_wire(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity reported by the submitter. Only the priority ordering uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Emergency,
    High,
    Normal,
    Low,
    /// Absent or unrecognized; ranks below everything else
    Unranked,
}

impl Default for IssuePriority {
    fn default() -> Self {
        Self::Unranked
    }
}

impl IssuePriority {
    /// Ordering rank: Emergency 4 down to Low 1, Unranked 0.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Emergency => 4,
            Self::High => 3,
            Self::Normal => 2,
            Self::Low => 1,
            Self::Unranked => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
            Self::Unranked => "unranked",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "emergency" => Some(Self::Emergency),
            "high" => Some(Self::High),
            "normal" => Some(Self::Normal),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Tolerant wire parse: absent or unrecognized becomes `Unranked`.
    pub fn from_wire(s: Option<&str>) -> Self {
        s.and_then(Self::from_str).unwrap_or(Self::Unranked)
    }
}

impl std::fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citizen-reported infrastructure problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Server-assigned identifier
    pub id: IssueId,
    /// Short headline
    pub title: String,
    /// Full report text
    pub description: String,
    /// Category tag (e.g. "Roads", "Lighting")
    pub category: String,
    /// Free-text location
    pub location: String,
    /// Owner identifier; None for anonymous reports
    pub submitted_by: Option<String>,
    /// Triage status
    pub status: IssueStatus,
    /// Reported severity
    pub priority: IssuePriority,
    /// Display counter; never the authority on "already upvoted"
    pub upvotes: u64,
    /// Viewer ids that upvoted, per the server. May contain duplicates.
    pub upvoted_by: Vec<String>,
    /// Whether a paid boost is active
    pub is_boosted: bool,
    /// When the boost was applied
    pub boosted_at: Option<DateTime<Utc>>,
    /// Submission time; None when the server sent nothing parseable
    pub created_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Create a minimal issue for building up in tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: IssueId::new(id),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            location: String::new(),
            submitted_by: None,
            status: IssueStatus::default(),
            priority: IssuePriority::default(),
            upvotes: 0,
            upvoted_by: Vec::new(),
            is_boosted: false,
            boosted_at: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Whether `viewer_id` owns this issue.
    pub fn is_owned_by(&self, viewer_id: &str) -> bool {
        self.submitted_by.as_deref() == Some(viewer_id)
    }

    /// Whether the server-reported upvoter list contains `viewer_id`.
    /// Duplicate entries are tolerated; this is a membership test only.
    pub fn has_upvote_from(&self, viewer_id: &str) -> bool {
        self.upvoted_by.iter().any(|v| v == viewer_id)
    }

    /// Millisecond timestamp used by the chronological orderings.
    /// Missing or unparseable dates sort as the earliest possible value.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.map_or(i64::MIN, |t| t.timestamp_millis())
    }
}

/// Display descriptor for a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Human-facing label
    pub label: &'static str,
    /// Terminal color for the tag
    pub color: console::Color,
}

/// Total mapping from status to its display descriptor. The `Unknown`
/// arm is the explicit fallback for unrecognized server tags.
pub fn status_style(status: IssueStatus) -> StatusStyle {
    use console::Color;
    match status {
        IssueStatus::Pending => StatusStyle { label: "Pending", color: Color::Yellow },
        IssueStatus::InProgress => StatusStyle { label: "In Progress", color: Color::Cyan },
        IssueStatus::Assigned => StatusStyle { label: "Assigned", color: Color::Blue },
        IssueStatus::Resolved => StatusStyle { label: "Resolved", color: Color::Green },
        IssueStatus::Rejected => StatusStyle { label: "Rejected", color: Color::Red },
        IssueStatus::Unknown => StatusStyle { label: "Unknown", color: Color::White },
    }
}

/// Total mapping from priority to its display descriptor.
pub fn priority_style(priority: IssuePriority) -> StatusStyle {
    use console::Color;
    match priority {
        IssuePriority::Emergency => StatusStyle { label: "Emergency", color: Color::Red },
        IssuePriority::High => StatusStyle { label: "High", color: Color::Magenta },
        IssuePriority::Normal => StatusStyle { label: "Normal", color: Color::Yellow },
        IssuePriority::Low => StatusStyle { label: "Low", color: Color::Green },
        IssuePriority::Unranked => StatusStyle { label: "-", color: Color::White },
    }
}
