//! Service layer: the pure feed engines and the engagement flows.

pub mod authorizer;
pub mod engagement;
pub mod feed;
pub mod ordering;
pub mod pagination;
pub mod predicate;

pub use engagement::EngagementService;
pub use feed::{build_page, FeedController};
pub use ordering::sort_issues;
pub use pagination::paginate;
pub use predicate::filter_issues;
