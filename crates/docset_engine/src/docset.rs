use docset_core::Entry;
use docset_logging::docset_debug;

use crate::{decode_stored, extract_entries, format_page, DocsetConfig, DocsetError, Storage};

/// A docset definition as consumed by a docset-builder orchestrator.
///
/// Both operations read the stored page, never write it back, and can be
/// called for different files concurrently.
pub trait Docset: Send + Sync {
    fn config(&self) -> &DocsetConfig;

    /// Search-index entries for a stored page.
    fn entries(&self, file: &str) -> Result<Vec<Entry>, DocsetError>;

    /// Rewritten HTML for a stored page.
    fn format(&self, file: &str) -> Result<String, DocsetError>;
}

/// The laravel-zero.com docset.
#[derive(Debug, Clone)]
pub struct LaravelZero<S> {
    config: DocsetConfig,
    storage: S,
}

impl<S: Storage> LaravelZero<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(DocsetConfig::default(), storage)
    }

    pub fn with_config(config: DocsetConfig, storage: S) -> Self {
        Self { config, storage }
    }

    fn load(&self, file: &str) -> Result<String, DocsetError> {
        let bytes = self.storage.read(file)?;
        let decoded = decode_stored(&bytes);
        docset_debug!(
            "Loaded {file} ({} bytes, {})",
            bytes.len(),
            decoded.encoding_label
        );
        Ok(decoded.html)
    }
}

impl<S: Storage> Docset for LaravelZero<S> {
    fn config(&self) -> &DocsetConfig {
        &self.config
    }

    fn entries(&self, file: &str) -> Result<Vec<Entry>, DocsetError> {
        let html = self.load(file)?;
        Ok(extract_entries(&self.config, file, &html))
    }

    fn format(&self, file: &str) -> Result<String, DocsetError> {
        let html = self.load(file)?;
        Ok(format_page(&self.config, file, &html))
    }
}
