//! Table output formatting for CLI commands
//!
//! Renders feed pages with comfy-table, color-coding status and priority
//! cells through the display descriptors.

use std::collections::HashSet;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::{
    priority_style, status_style, Issue, IssueId, IssuePriority, IssueStatus, PageView,
};

/// Map a display-descriptor color onto comfy-table's palette.
fn table_color(color: console::Color) -> Color {
    match color {
        console::Color::Red => Color::Red,
        console::Color::Green => Color::Green,
        console::Color::Yellow => Color::Yellow,
        console::Color::Blue => Color::Blue,
        console::Color::Magenta => Color::Magenta,
        console::Color::Cyan => Color::Cyan,
        _ => Color::White,
    }
}

fn status_cell(status: IssueStatus, use_colors: bool) -> Cell {
    let style = status_style(status);
    if use_colors {
        Cell::new(style.label).fg(table_color(style.color))
    } else {
        Cell::new(style.label)
    }
}

fn priority_cell(priority: IssuePriority, use_colors: bool) -> Cell {
    let style = priority_style(priority);
    if use_colors {
        Cell::new(style.label).fg(table_color(style.color))
    } else {
        Cell::new(style.label)
    }
}

fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Format one feed page as a table. When `voted` is given, an extra
/// column marks issues the viewer has already upvoted.
pub fn format_feed_table(
    view: &PageView,
    voted: Option<&HashSet<IssueId>>,
    use_colors: bool,
) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Location").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new("Priority").add_attribute(Attribute::Bold),
        Cell::new("Votes").add_attribute(Attribute::Bold),
        Cell::new("Boost").add_attribute(Attribute::Bold),
    ];
    if voted.is_some() {
        header.push(Cell::new("Voted").add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    for issue in &view.items {
        let mut row = build_row(issue, use_colors);
        if let Some(voted) = voted {
            row.push(Cell::new(if voted.contains(&issue.id) { "*" } else { "" }));
        }
        table.add_row(row);
    }

    table.to_string()
}

fn build_row(issue: &Issue, use_colors: bool) -> Vec<Cell> {
    vec![
        Cell::new(issue.id.as_str()),
        Cell::new(truncate_text(&issue.title, 40)),
        Cell::new(truncate_text(&issue.category, 16)),
        Cell::new(truncate_text(&issue.location, 24)),
        status_cell(issue.status, use_colors),
        priority_cell(issue.priority, use_colors),
        Cell::new(issue.upvotes.to_string()),
        Cell::new(if issue.is_boosted { "*" } else { "" }),
    ]
}

/// One-line window summary shown below the table.
pub fn format_page_summary(view: &PageView) -> String {
    if view.items.is_empty() {
        "No issues to show.".to_string()
    } else {
        format!(
            "Showing {}-{} of {} (page {}/{})",
            view.first_index, view.last_index, view.total_items, view.page, view.total_pages
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::paginate;

    #[test]
    fn test_summary_for_partial_last_page() {
        let issues: Vec<Issue> = (1..=14)
            .map(|i| Issue::new(i.to_string(), format!("Issue {i}")))
            .collect();
        let view = paginate(&issues, 12, 2);
        assert_eq!(format_page_summary(&view), "Showing 13-14 of 14 (page 2/2)");
    }

    #[test]
    fn test_summary_for_empty_feed() {
        let view = paginate(&[], 12, 1);
        assert_eq!(format_page_summary(&view), "No issues to show.");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a very long title here", 10), "a very ...");
    }

    #[test]
    fn test_table_renders_all_rows() {
        let issues: Vec<Issue> = (1..=3)
            .map(|i| Issue::new(i.to_string(), format!("Issue {i}")))
            .collect();
        let view = paginate(&issues, 12, 1);
        let rendered = format_feed_table(&view, None, false);
        for i in 1..=3 {
            assert!(rendered.contains(&format!("Issue {i}")));
        }
    }

    #[test]
    fn test_voted_column_marks_viewer_upvotes() {
        let issues: Vec<Issue> = (1..=2)
            .map(|i| Issue::new(i.to_string(), format!("Issue {i}")))
            .collect();
        let view = paginate(&issues, 12, 1);
        let voted: HashSet<IssueId> = [IssueId::from("2")].into_iter().collect();
        let rendered = format_feed_table(&view, Some(&voted), false);
        assert!(rendered.contains("Voted"));
    }
}
