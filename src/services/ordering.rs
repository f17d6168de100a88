//! Ordering engine: the five total feed orderings.
//!
//! All comparators are deterministic and rely on `sort_by` stability for
//! tie-breaking, so equal keys keep their original relative order. Date
//! comparison uses millisecond timestamps; missing or unparseable dates
//! sort as the earliest possible value and never panic.

use std::cmp::Ordering;

use crate::domain::models::{Issue, SortKey};

/// Return a new sequence ordered by `key`. The input is not mutated.
pub fn sort_issues(issues: &[Issue], key: SortKey) -> Vec<Issue> {
    let mut out = issues.to_vec();
    out.sort_by(comparator(key));
    out
}

/// Comparator for the given sort key.
fn comparator(key: SortKey) -> impl FnMut(&Issue, &Issue) -> Ordering {
    move |a, b| {
        if key.boosts_first() {
            // Boosted ahead of unboosted; equal boost status falls through.
            match b.is_boosted.cmp(&a.is_boosted) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        match key {
            SortKey::BoostedFirst | SortKey::Latest => {
                b.created_at_millis().cmp(&a.created_at_millis())
            }
            SortKey::Oldest => a.created_at_millis().cmp(&b.created_at_millis()),
            SortKey::Upvotes => b.upvotes.cmp(&a.upvotes),
            SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::IssuePriority;
    use chrono::{TimeZone, Utc};

    fn issue(id: &str, boosted: bool, year: i32) -> Issue {
        let mut issue = Issue::new(id, format!("Issue {id}"));
        issue.is_boosted = boosted;
        issue.created_at = Some(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
        issue
    }

    fn ids(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_boosted_first_wins_over_recency() {
        // An older boosted issue must precede a newer unboosted one.
        let mut a = issue("1", false, 2024);
        a.upvotes = 5;
        let mut b = issue("2", true, 2023);
        b.upvotes = 1;

        let out = sort_issues(&[a, b], SortKey::BoostedFirst);
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_boosted_first_newest_within_same_boost_status() {
        let out = sort_issues(
            &[issue("1", false, 2022), issue("2", false, 2024), issue("3", false, 2023)],
            SortKey::BoostedFirst,
        );
        assert_eq!(ids(&out), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_latest_ignores_boost() {
        let out = sort_issues(
            &[issue("1", true, 2022), issue("2", false, 2024)],
            SortKey::Latest,
        );
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_oldest_ignores_boost() {
        let out = sort_issues(
            &[issue("1", true, 2024), issue("2", false, 2022)],
            SortKey::Oldest,
        );
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_upvotes_descending_with_boost_pinned() {
        let mut a = issue("1", false, 2024);
        a.upvotes = 50;
        let mut b = issue("2", true, 2024);
        b.upvotes = 2;
        let mut c = issue("3", false, 2024);
        c.upvotes = 10;

        let out = sort_issues(&[a, b, c], SortKey::Upvotes);
        assert_eq!(ids(&out), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_upvote_ties_keep_original_order() {
        let mut a = issue("1", false, 2022);
        a.upvotes = 5;
        let mut b = issue("2", false, 2024);
        b.upvotes = 5;

        let out = sort_issues(&[a, b], SortKey::Upvotes);
        // Stability, not a secondary key.
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[test]
    fn test_priority_rank_descending() {
        let mut a = issue("1", false, 2024);
        a.priority = IssuePriority::Low;
        let mut b = issue("2", false, 2024);
        b.priority = IssuePriority::Emergency;
        let mut c = issue("3", false, 2024);
        c.priority = IssuePriority::Unranked;
        let mut d = issue("4", false, 2024);
        d.priority = IssuePriority::High;

        let out = sort_issues(&[a, b, c, d], SortKey::Priority);
        assert_eq!(ids(&out), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_missing_dates_sort_oldest_without_panic() {
        let mut undated = issue("1", false, 2024);
        undated.created_at = None;
        let dated = issue("2", false, 2000);

        let latest = sort_issues(&[undated.clone(), dated.clone()], SortKey::Latest);
        assert_eq!(ids(&latest), vec!["2", "1"]);

        let oldest = sort_issues(&[dated, undated], SortKey::Oldest);
        assert_eq!(ids(&oldest), vec!["1", "2"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let issues = vec![issue("1", false, 2024), issue("2", true, 2020)];
        let before = issues.clone();
        let _ = sort_issues(&issues, SortKey::BoostedFirst);
        assert_eq!(issues, before);
    }
}
