//! Docset engine: stored-page loading, DOM rewriting and entry extraction.
mod config;
mod decode;
mod docset;
mod document;
mod error;
mod extract;
mod revision;
mod storage;
mod transform;

pub use config::{ConfigError, DocsetConfig};
pub use decode::{decode_stored, DecodedHtml};
pub use docset::{Docset, LaravelZero};
pub use document::Document;
pub use error::DocsetError;
pub use extract::extract_entries;
pub use revision::{RuleTable, SiteRevision};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use transform::format_page;

pub use docset_core::{slug, Entry, EntryKind};
