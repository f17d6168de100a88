//! HTTP adapter for the remote issue store.

pub mod issue_client;
pub mod models;

pub use issue_client::HttpIssueRepository;
pub use models::RawIssue;
