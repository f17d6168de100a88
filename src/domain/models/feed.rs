//! Feed query and page-window types.

use serde::{Deserialize, Serialize};

use super::issue::{Issue, IssueStatus};

/// Status/boost filter applied to the raw feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterTag {
    /// No status/boost filtering
    All,
    /// Only issues with an active boost
    Boosted,
    /// Only issues whose normalized status matches
    Status(IssueStatus),
    /// Unrecognized tag; matches nothing
    Unmatched,
}

impl Default for FilterTag {
    fn default() -> Self {
        Self::All
    }
}

impl FilterTag {
    /// Parse a UI filter tag. Unrecognized tags become [`Unmatched`]
    /// (an empty result) rather than an error; in particular they must
    /// not collide with issues whose server status was itself
    /// unrecognized.
    ///
    /// [`Unmatched`]: Self::Unmatched
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "all" | "" => Self::All,
            "boosted" => Self::Boosted,
            other => IssueStatus::from_str(other).map_or(Self::Unmatched, Self::Status),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Boosted => "boosted",
            Self::Status(s) => s.as_str(),
            Self::Unmatched => "unmatched",
        }
    }
}

/// Supported feed orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Boosted first, then newest first
    BoostedFirst,
    /// Newest first; boost status ignored
    Latest,
    /// Oldest first; boost status ignored
    Oldest,
    /// Boosted first, then upvote count descending
    Upvotes,
    /// Boosted first, then priority rank descending
    Priority,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::BoostedFirst
    }
}

impl SortKey {
    /// Whether this ordering pins boosted issues ahead of unboosted ones.
    /// The two pure chronological orderings are exempt by design.
    pub fn boosts_first(&self) -> bool {
        !matches!(self, Self::Latest | Self::Oldest)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoostedFirst => "boosted-first",
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Upvotes => "upvotes",
            Self::Priority => "priority",
        }
    }

    /// Parse a UI sort tag. Case-insensitive; underscores and spaces are
    /// treated as hyphens, like [`IssueStatus::from_str`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "boosted-first" => Some(Self::BoostedFirst),
            "latest" => Some(Self::Latest),
            "oldest" => Some(Self::Oldest),
            "upvotes" => Some(Self::Upvotes),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Active feed query state.
///
/// `page` is 1-indexed. The setters on
/// [`FeedController`](crate::services::FeedController) reset it to 1 whenever
/// filter, search, or sort changes; build queries through those rather than
/// by field mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedQuery {
    /// Status/boost filter
    pub filter: FilterTag,
    /// Free-text search; blank means no search
    pub search: String,
    /// Active ordering
    pub sort: SortKey,
    /// Requested page, 1-indexed
    pub page: usize,
    /// Items per page
    pub page_size: usize,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            filter: FilterTag::All,
            search: String::new(),
            sort: SortKey::BoostedFirst,
            page: 1,
            page_size: 12,
        }
    }
}

/// One window of the ordered feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    /// Issues in this window, feed order preserved
    pub items: Vec<Issue>,
    /// Effective page after clamping, 1-indexed
    pub page: usize,
    /// Total pages; at least 1 even for an empty feed
    pub total_pages: usize,
    /// 1-based index of the first item shown; 0 when empty
    pub first_index: usize,
    /// 1-based index of the last item shown; 0 when empty
    pub last_index: usize,
    /// Size of the filtered/sorted set the window was cut from
    pub total_items: usize,
}
