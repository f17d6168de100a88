//! Pagination engine: windowing over an ordered sequence.

use crate::domain::models::{Issue, PageView};

/// Cut one page out of an ordered sequence.
///
/// Pages are 1-indexed with half-open windows
/// `[(page-1)*size, page*size)`, clipped at the end. `total_pages` is at
/// least 1 even for an empty input. An out-of-range page request clamps
/// to the last valid page (a stale page number after a filter shrinks the
/// result set must never render an empty window); the effective page is
/// reported back in `PageView::page`.
pub fn paginate(ordered: &[Issue], page_size: usize, page: usize) -> PageView {
    let page_size = page_size.max(1);
    let total_items = ordered.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items: Vec<Issue> = ordered.get(start..end).unwrap_or(&[]).to_vec();

    let (first_index, last_index) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageView {
        items,
        page,
        total_pages,
        first_index,
        last_index,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Issue;

    fn issues(n: usize) -> Vec<Issue> {
        (1..=n).map(|i| Issue::new(i.to_string(), format!("Issue {i}"))).collect()
    }

    #[test]
    fn test_last_partial_page() {
        // 14 items at size 12: page 2 holds items 13-14.
        let view = paginate(&issues(14), 12, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.first_index, 13);
        assert_eq!(view.last_index, 14);
        assert_eq!(view.items[0].id.as_str(), "13");
        assert_eq!(view.items[1].id.as_str(), "14");
    }

    #[test]
    fn test_empty_input_has_one_page() {
        let view = paginate(&[], 12, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
        assert_eq!(view.first_index, 0);
        assert_eq!(view.last_index, 0);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let view = paginate(&issues(5), 2, 99);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 3);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id.as_str(), "5");
    }

    #[test]
    fn test_zero_page_clamps_to_first() {
        let view = paginate(&issues(5), 2, 0);
        assert_eq!(view.page, 1);
        assert_eq!(view.items[0].id.as_str(), "1");
    }

    #[test]
    fn test_pages_partition_the_sequence() {
        let all = issues(14);
        let mut seen = Vec::new();
        let total_pages = paginate(&all, 4, 1).total_pages;
        for page in 1..=total_pages {
            let view = paginate(&all, 4, page);
            seen.extend(view.items.iter().map(|i| i.id.clone()));
        }
        // Disjoint, contiguous, order-preserving.
        let expected: Vec<_> = all.iter().map(|i| i.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let view = paginate(&issues(24), 12, 1);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 12);
    }
}
