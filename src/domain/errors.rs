//! Domain errors for the CivicLens engine.

use thiserror::Error;

use crate::domain::models::IssueId;

/// Domain-level errors that can occur in the engine.
///
/// Authorization denials are not errors; they travel as reason codes in
/// the `Ok` path of the engagement flows.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Issue not found: {0}")]
    IssueNotFound(IssueId),

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
