//! Front matter and Markdown document generation

use crate::models::{Category, CategoryKind, Entry};
use crate::rewrite::rewrite_body;

/// Category substituted when a post has none assigned in the export.
const DEFAULT_CATEGORY: &str = "blog";

/// Render the `tag:`/`category:` front matter fragment for one post.
///
/// Tags and categories keep their export order. A post with no categories
/// gets the default one. A post with no tags still renders the dangling
/// `  - ` bullet under the `tag:` key, matching the published site output.
pub fn format_taxonomy(categories: &[Category]) -> String {
    let mut tags: Vec<&str> = Vec::new();
    let mut cats: Vec<&str> = Vec::new();
    for category in categories {
        match category.kind {
            CategoryKind::PostTag => tags.push(&category.label),
            CategoryKind::Category => cats.push(&category.label),
            CategoryKind::Other => {}
        }
    }
    if cats.is_empty() {
        cats.push(DEFAULT_CATEGORY);
    }
    format!(
        "\ntag:\n  - {}\ncategory:\n  - {}",
        tags.join("\n  - "),
        cats.join("\n  - ")
    )
}

/// Generate the full output document for one entry: a front matter block
/// followed by the rewritten body.
///
/// The title is quoted but not escaped; it appears exactly as exported.
pub fn generate_markdown(entry: &Entry) -> String {
    format!(
        "---\ndate: {}\nslug: {}\ntitle: \"{}\"\n{}\n---\n{}\n",
        entry.published().to_rfc3339(),
        entry.slug,
        entry.title,
        format_taxonomy(&entry.categories),
        rewrite_body(&entry.body_html),
    )
}
