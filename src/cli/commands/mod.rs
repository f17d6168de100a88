//! CLI command handlers.

pub mod engage;
pub mod feed;
