//! Predicate engine: status/boost filtering and free-text search.
//!
//! Pure and reentrant; safe to rerun on every input change. Filtering and
//! searching compose by AND. Inputs are never mutated.

use crate::domain::models::{FilterTag, Issue};

/// Apply filter tag and search term to a raw issue collection.
pub fn filter_issues(issues: &[Issue], filter: &FilterTag, search: &str) -> Vec<Issue> {
    let term = search.trim().to_lowercase();
    issues
        .iter()
        .filter(|issue| passes_filter(issue, filter))
        .filter(|issue| term.is_empty() || matches_search(issue, &term))
        .cloned()
        .collect()
}

fn passes_filter(issue: &Issue, filter: &FilterTag) -> bool {
    match filter {
        FilterTag::All => true,
        FilterTag::Boosted => issue.is_boosted,
        FilterTag::Status(status) => issue.status == *status,
        FilterTag::Unmatched => false,
    }
}

/// Case-insensitive substring match across the searchable text fields,
/// OR across fields. `term` must already be lowercased and non-empty.
fn matches_search(issue: &Issue, term: &str) -> bool {
    let fields = [
        issue.title.as_str(),
        issue.description.as_str(),
        issue.category.as_str(),
        issue.location.as_str(),
        issue.submitted_by.as_deref().unwrap_or(""),
    ];
    fields.iter().any(|f| f.to_lowercase().contains(term))
}
