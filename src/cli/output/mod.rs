//! CLI output helpers.

pub mod table;

pub use table::{format_feed_table, format_page_summary};
