//! Library for parsing a WordPress export feed and converting posts to Markdown

pub mod error;
pub mod markdown;
pub mod models;
pub mod parser;
pub mod rewrite;
pub mod utils;
pub mod writer;

// Re-export main types and functions for convenient access
pub use error::{Error, Result};
pub use markdown::generate_markdown;
pub use models::{Category, CategoryKind, Entry, Feed};
pub use parser::parse_feed;
pub use rewrite::rewrite_body;
pub use utils::parse_pubdate_or_epoch;
pub use writer::write_posts;
