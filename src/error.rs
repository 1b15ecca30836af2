//! Error handling for flatten_fixtures

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for flatten_fixtures operations
pub type Result<T> = core::result::Result<T, Error>;

/// Simple error enum that wraps common error types
#[derive(Debug, Error)]
pub enum Error {
        /// Base directory is missing (or is not a directory). Fatal for the whole run.
        #[error("{} is not an existing directory", .0.display())]
        DirectoryNotFound(PathBuf),

        /// A single rename pair could not be applied. Recoverable; the batch continues.
        #[error("Error renaming {}: {source}", from.display())]
        RenameFailed {
                from: PathBuf,
                to: PathBuf,
                #[source]
                source: std::io::Error,
        },

        /// File system operation failed
        #[error("File system error: {0}")]
        Io(#[from] std::io::Error),

        /// Directory walking failed
        #[error("Directory walking error: {0}")]
        WalkDir(#[from] walkdir::Error),
}
