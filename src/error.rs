use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the corpus at startup.
///
/// There is no search without a corpus, so callers treat this as fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for corpus loading.
pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Path of the corpus source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Read { path, .. } => path,
        }
    }
}
