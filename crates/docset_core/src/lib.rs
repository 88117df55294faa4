//! Docset core: entries, slugs and path rewriting shared by extraction and formatting.
mod anchor;
mod entry;
pub mod paths;
mod slug;

pub use anchor::{dash_anchor_name, TOP_ANCHOR_TITLE};
pub use entry::{Entry, EntryKind};
pub use slug::slug;
