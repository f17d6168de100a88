//! CivicLens - Issue Feed & Engagement Engine
//!
//! CivicLens turns a raw collection of citizen-reported issues and a
//! viewer identity into a deterministically ordered, filtered, searched,
//! and paginated feed, and keeps engagement state (upvotes, boosts)
//! consistent and idempotent across reloads and concurrent attempts.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure models, ports, and errors
//! - **Service Layer** (`services`): The feed engines and engagement flows
//! - **Adapters** (`adapters`): HTTP issue store and SQLite ledger
//! - **Infrastructure** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use civiclens::services::{build_page, EngagementService};
//!
//! let view = build_page(&issues, &query);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BoostDenial, BoostIntent, BoostOutcome, Config, FeedQuery, FilterTag, Issue, IssueId,
    IssuePriority, IssueStatus, PageView, SortKey, UpvoteDenial, UpvoteOutcome, Viewer,
};
pub use domain::ports::{EngagementLedger, IssuePatch, IssueRepository};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{EngagementService, FeedController};
