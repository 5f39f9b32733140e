//! Data models for the exported feed

use chrono::{DateTime, FixedOffset};

use crate::utils::parse_pubdate_or_epoch;

#[derive(Debug, Default, Clone)]
pub struct Feed {
    pub channel_title: String,
    pub channel_link: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Default, Clone)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub pubdate: String,
    pub slug: String,
    pub body_html: String,
    pub categories: Vec<Category>,
}

impl Entry {
    /// Publication time, falling back to the Unix epoch when the export
    /// carries an unparsable `pubDate`.
    pub fn published(&self) -> DateTime<FixedOffset> {
        parse_pubdate_or_epoch(&self.pubdate)
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub kind: CategoryKind,
    pub label: String,
}

/// Taxonomy of a `<category>` element, from its `domain` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Category,
    PostTag,
    /// Any other taxonomy (nav menus, link categories, a missing domain).
    /// Carried through parsing but ignored by the front matter formatter.
    Other,
}

impl CategoryKind {
    pub fn from_domain(domain: Option<&str>) -> CategoryKind {
        match domain {
            Some("category") => CategoryKind::Category,
            Some("post_tag") => CategoryKind::PostTag,
            _ => CategoryKind::Other,
        }
    }
}
