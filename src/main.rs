use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use wordpress_posts_converter::{parse_feed, write_posts};

// Fixed locations: the export sits in the working directory and posts land
// in the site's content tree.
const EXPORT_FILE: &str = "export.xml";
const OUTPUT_DIR: &str = "content/blog";

fn main() -> Result<()> {
    let export =
        File::open(EXPORT_FILE).with_context(|| format!("couldn't open {EXPORT_FILE}"))?;
    let feed = parse_feed(BufReader::new(export))
        .with_context(|| format!("couldn't parse {EXPORT_FILE}"))?;
    println!("{} entries in {:?}", feed.entries.len(), feed.channel_title);

    let written = write_posts(&feed, Path::new(OUTPUT_DIR))?;
    println!("wrote {written} posts to {OUTPUT_DIR}");
    Ok(())
}
