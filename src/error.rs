//! Error types for loading and parsing `.fds` files

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FdError>;

#[derive(Error, Debug)]
pub enum FdError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file missing {0}{{...}}")]
    MissingBlock(&'static str),

    #[error("unterminated {0}{{...}} block")]
    UnterminatedBlock(&'static str),
}
