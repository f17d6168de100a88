//! Feed controller: query state and the fetch-filter-sort-paginate
//! pipeline.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{FeedQuery, FilterTag, Issue, PageView, SortKey};
use crate::domain::ports::IssueRepository;
use crate::services::{ordering, pagination, predicate};

/// Run the pure pipeline over an already-fetched snapshot.
pub fn build_page(issues: &[Issue], query: &FeedQuery) -> PageView {
    let filtered = predicate::filter_issues(issues, &query.filter, &query.search);
    let ordered = ordering::sort_issues(&filtered, query.sort);
    pagination::paginate(&ordered, query.page_size, query.page)
}

/// Holds the active feed query and the last-fetched snapshot.
///
/// The window is never shown empty due to a stale page: every query
/// change that can shrink the result set (filter, search, sort) resets
/// the page to 1, and pagination clamps whatever remains.
pub struct FeedController<R: IssueRepository> {
    issues: Arc<R>,
    query: FeedQuery,
    snapshot: Vec<Issue>,
}

impl<R: IssueRepository> FeedController<R> {
    pub fn new(issues: Arc<R>, page_size: usize) -> Self {
        Self {
            issues,
            query: FeedQuery {
                page_size: page_size.max(1),
                ..FeedQuery::default()
            },
            snapshot: Vec::new(),
        }
    }

    /// Current query state.
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    /// The raw snapshot from the last successful fetch.
    pub fn snapshot(&self) -> &[Issue] {
        &self.snapshot
    }

    /// Mutable access for feeding engagement deltas back into the
    /// snapshot between reloads.
    pub fn snapshot_mut(&mut self) -> &mut Vec<Issue> {
        &mut self.snapshot
    }

    /// Change the status/boost filter; resets to page 1.
    pub fn set_filter(&mut self, filter: FilterTag) {
        if self.query.filter != filter {
            self.query.filter = filter;
            self.query.page = 1;
        }
    }

    /// Change the search term; resets to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.query.search != search {
            self.query.search = search;
            self.query.page = 1;
        }
    }

    /// Change the ordering; resets to page 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        if self.query.sort != sort {
            self.query.sort = sort;
            self.query.page = 1;
        }
    }

    /// Request a page. Any value is accepted; pagination clamps and the
    /// effective page comes back in the next [`PageView`].
    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    /// Refetch the snapshot from the remote store.
    ///
    /// On failure the previous snapshot is cleared so the caller renders
    /// an empty-but-recoverable state; the error is surfaced once and a
    /// retry is the caller's explicit action.
    pub async fn reload(&mut self) -> DomainResult<()> {
        match self.issues.list_issues().await {
            Ok(issues) => {
                tracing::debug!(count = issues.len(), "feed snapshot loaded");
                self.snapshot = issues;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "feed fetch failed");
                self.snapshot.clear();
                Err(err)
            }
        }
    }

    /// Current page of the filtered, ordered feed.
    pub fn page(&self) -> PageView {
        build_page(&self.snapshot, &self.query)
    }
}
