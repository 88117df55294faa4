use std::fmt;

use serde::Serialize;

/// Kind of a search-index row, rendered with the docset type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    Guide,
    Section,
    Category,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Guide => "Guide",
            EntryKind::Section => "Section",
            EntryKind::Category => "Category",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable target to be inserted into a docset search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            path: path.into(),
        }
    }

    pub fn guide(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Guide, path)
    }

    pub fn section(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Section, path)
    }

    /// Fragment part of the path, without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.path.split_once('#').map(|(_, fragment)| fragment)
    }
}
