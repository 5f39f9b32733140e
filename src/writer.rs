//! Writing converted posts into the content tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::markdown::generate_markdown;
use crate::models::Feed;

/// Destination file for one post: `<dest_dir>/<slug>.md`.
fn post_path(dest_dir: &Path, slug: &str) -> PathBuf {
    dest_dir.join(format!("{slug}.md"))
}

/// Write one Markdown file per entry with a non-empty body.
///
/// Entries are processed in document order, so of two entries sharing a slug
/// the later one's file is what remains on disk. Each document is written in
/// a single operation (create or truncate). The first write failure aborts
/// the run; files already written stay in place.
///
/// Returns the number of files written.
pub fn write_posts(feed: &Feed, dest_dir: &Path) -> Result<usize> {
    let mut written = 0;
    for entry in &feed.entries {
        if entry.body_html.is_empty() {
            continue;
        }
        let path = post_path(dest_dir, &entry.slug);
        fs::write(&path, generate_markdown(entry)).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        println!("wrote {}", path.display());
        written += 1;
    }
    Ok(written)
}
