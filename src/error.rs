//! Error types for the conversion run

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort the whole run. Per-entry conditions (an empty body,
/// an unparsable date) are degraded inline and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed export feed: {0}")]
    Feed(#[from] rss::Error),
    #[error("couldn't write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}
