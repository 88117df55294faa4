use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::DocsetError;

/// Read access to stored pages, addressed by `/`-separated storage paths.
pub trait Storage: Send + Sync {
    fn read(&self, path: &str) -> Result<Vec<u8>, DocsetError>;
}

/// Storage backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<Vec<u8>, DocsetError> {
        fs::read(self.resolve(path)).map_err(|err| DocsetError::from_io(path, err))
    }
}

/// In-memory storage for callers that already hold the page bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &str) -> Result<Vec<u8>, DocsetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| DocsetError::NotFound(path.to_string()))
    }
}
