//! Engagement policy and outcome types.
//!
//! Denial reasons are policy outcomes carried in the `Ok` path, never
//! errors. Their ordering is part of the contract: user-facing messaging
//! differs per reason, so the first applicable reason wins.

use serde::{Deserialize, Serialize};

use super::issue::IssueId;

/// Fixed boost price handed to the payment collaborator. Business-policy
/// constant, not computed.
pub const BOOST_AMOUNT: u32 = 100;

/// Why an upvote was refused.
///
/// Checked in declaration order: ownership before duplicate-vote, so an
/// owner who somehow appears in `upvoted_by` is still reported as the
/// ownership case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpvoteDenial {
    /// No viewer identity present
    Anonymous,
    /// Viewer submitted this issue
    OwnIssue,
    /// Server upvoter list or the local ledger already has this viewer
    AlreadyUpvoted,
}

impl UpvoteDenial {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::OwnIssue => "own-issue",
            Self::AlreadyUpvoted => "already-upvoted",
        }
    }

    /// Message shown to the viewer when the action is refused.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Anonymous => "Sign in to upvote issues",
            Self::OwnIssue => "You cannot upvote your own issue",
            Self::AlreadyUpvoted => "You have already upvoted this issue",
        }
    }
}

/// Why a boost was refused.
///
/// Precedence when several apply: `AlreadyBoosted` over `NotOwner` over
/// `NotPending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoostDenial {
    /// A boost is already active
    AlreadyBoosted,
    /// Viewer is anonymous or did not submit the issue
    NotOwner,
    /// Only pending issues can be boosted
    NotPending,
}

impl BoostDenial {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyBoosted => "already-boosted",
            Self::NotOwner => "not-owner",
            Self::NotPending => "not-pending",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AlreadyBoosted => "This issue is already boosted",
            Self::NotOwner => "Only the issue owner can boost it",
            Self::NotPending => "Only pending issues can be boosted",
        }
    }
}

/// Result of driving the upvote flow once.
///
/// `ConfirmFailed` means the optimistic local state (counter bump and
/// ledger entry) was kept even though the remote confirm failed; the
/// mismatch is reconciled on the next full feed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpvoteOutcome {
    /// Authorizer refused before any mutation
    Denied(UpvoteDenial),
    /// Optimistic update applied and confirmed remotely
    Confirmed,
    /// Optimistic update applied but the remote confirm failed
    ConfirmFailed,
}

impl UpvoteOutcome {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}

/// Navigation intent handed to the external payment collaborator.
/// The engine authorizes and initiates boosts; it never finalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostIntent {
    /// Target issue
    pub issue_id: IssueId,
    /// Title carried along for the payment page
    pub issue_title: String,
    /// Intent discriminator, always `"boost"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Charge amount in the platform's currency unit
    pub amount: u32,
}

impl BoostIntent {
    pub fn new(issue_id: IssueId, issue_title: impl Into<String>) -> Self {
        Self {
            issue_id,
            issue_title: issue_title.into(),
            kind: "boost".to_string(),
            amount: BOOST_AMOUNT,
        }
    }
}

/// Result of driving the boost flow once.
#[derive(Debug, Clone, PartialEq)]
pub enum BoostOutcome {
    /// Authorizer refused
    Denied(BoostDenial),
    /// Hand-off record for the payment collaborator
    Initiated(BoostIntent),
}
