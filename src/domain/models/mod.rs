pub mod config;
pub mod engagement;
pub mod feed;
pub mod issue;

pub use config::{ApiConfig, Config, DatabaseConfig, FeedConfig, LoggingConfig};
pub use engagement::{
    BoostDenial, BoostIntent, BoostOutcome, UpvoteDenial, UpvoteOutcome, BOOST_AMOUNT,
};
pub use feed::{FeedQuery, FilterTag, PageView, SortKey};
pub use issue::{
    priority_style, status_style, Issue, IssueId, IssuePriority, IssueStatus, StatusStyle, Viewer,
};
