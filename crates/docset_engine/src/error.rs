use std::io;

use thiserror::Error;

/// Failure to load a stored page. The only way `entries` or `format` can fail.
#[derive(Debug, Error)]
pub enum DocsetError {
    #[error("stored file not found: {0}")]
    NotFound(String),
    #[error("failed to read stored file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DocsetError {
    pub(crate) fn from_io(path: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            DocsetError::NotFound(path.to_string())
        } else {
            DocsetError::Io {
                path: path.to_string(),
                source: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DocsetError::NotFound(_))
    }
}
