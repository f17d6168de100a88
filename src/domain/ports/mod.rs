pub mod engagement_ledger;
pub mod issue_repository;

pub use engagement_ledger::EngagementLedger;
pub use issue_repository::{IssuePatch, IssueRepository};
