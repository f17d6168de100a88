//! Engagement authorizer: pure upvote/boost policy decisions.
//!
//! Decisions are computed from a (viewer, issue) pair plus a ledger
//! snapshot loaded beforehand, so the functions stay synchronous and
//! reentrant. Denials are reason codes, never errors.

use std::collections::HashSet;

use crate::domain::models::{BoostDenial, Issue, IssueId, IssueStatus, UpvoteDenial, Viewer};

/// First applicable reason an upvote would be refused, or `None` if the
/// action is permitted.
///
/// Reason order is contractual: ownership is checked before
/// already-upvoted, so an owner who somehow appears in `upvoted_by` is
/// still refused for the ownership reason. The ledger check runs even
/// when the server list is stale; once a viewer recorded an intent, a
/// second attempt is refused.
pub fn upvote_denial(
    viewer: Option<&Viewer>,
    issue: &Issue,
    ledger: &HashSet<IssueId>,
) -> Option<UpvoteDenial> {
    let Some(viewer) = viewer else {
        return Some(UpvoteDenial::Anonymous);
    };
    if issue.is_owned_by(&viewer.id) {
        return Some(UpvoteDenial::OwnIssue);
    }
    if issue.has_upvote_from(&viewer.id) {
        return Some(UpvoteDenial::AlreadyUpvoted);
    }
    if ledger.contains(&issue.id) {
        return Some(UpvoteDenial::AlreadyUpvoted);
    }
    None
}

/// Whether the viewer may upvote the issue.
pub fn can_upvote(viewer: Option<&Viewer>, issue: &Issue, ledger: &HashSet<IssueId>) -> bool {
    upvote_denial(viewer, issue, ledger).is_none()
}

/// First applicable reason a boost would be refused, or `None`.
///
/// Precedence when several apply: already-boosted over not-owner over
/// not-pending. The caller's messaging differs per reason.
pub fn boost_denial(viewer: Option<&Viewer>, issue: &Issue) -> Option<BoostDenial> {
    if issue.is_boosted {
        return Some(BoostDenial::AlreadyBoosted);
    }
    match viewer {
        Some(viewer) if issue.is_owned_by(&viewer.id) => {}
        _ => return Some(BoostDenial::NotOwner),
    }
    if issue.status != IssueStatus::Pending {
        return Some(BoostDenial::NotPending);
    }
    None
}

/// Whether the viewer may boost the issue.
pub fn can_boost(viewer: Option<&Viewer>, issue: &Issue) -> bool {
    boost_denial(viewer, issue).is_none()
}
