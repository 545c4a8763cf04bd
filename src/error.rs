use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickError>;

#[derive(Debug, Error)]
pub enum PickError {
    /// The source root could not be stat'ed when the picker was built.
    #[error("invalid source {}: {source}", path.display())]
    InvalidSource { path: PathBuf, source: io::Error },

    #[error("invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),
}

impl PickError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PickError::Io {
            path: path.into(),
            source,
        }
    }
}
