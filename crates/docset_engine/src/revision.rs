use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Document;

/// Markup layout of laravel-zero.com, before and after the site redesign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteRevision {
    Legacy,
    Current,
}

/// Selectors and class names the page pipeline needs for one revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Present only on pages of this revision.
    pub marker: &'static str,
    pub guide_links: &'static str,
    pub header: &'static str,
    pub navigation: &'static [&'static str],
    /// Chrome that only some deployments of the revision carry.
    pub incidental: &'static [&'static str],
    pub footer: &'static str,
    pub main_heading: &'static str,
    pub top_margin: (&'static str, &'static str),
    pub container: &'static str,
    pub container_remove_classes: &'static [&'static str],
    pub container_add_classes: &'static [&'static str],
    pub content_wrapper: &'static str,
    pub content_remove_classes: &'static [&'static str],
    pub bottom_spacing: (&'static str, &'static str),
    /// Search widget and analytics names whose assets are stripped.
    pub asset_needles: &'static [&'static str],
}

const LEGACY: RuleTable = RuleTable {
    marker: ".DocSearch-content",
    guide_links: ".docs-nav a",
    header: "body > header",
    navigation: &[".docs-nav", "nav.hidden.mt-1"],
    incidental: &[".DocSearch-content > div"],
    footer: "footer",
    main_heading: "h1",
    top_margin: ("margin-top", "1rem"),
    container: ".DocSearch-content",
    container_remove_classes: &["lg:ml-10", "lg:px-0", "xl:ml-16", "px-3"],
    container_add_classes: &["px-6"],
    content_wrapper: "section > div > div",
    content_remove_classes: &["mb-20"],
    bottom_spacing: ("margin-bottom", "4rem"),
    asset_needles: &[],
};

const CURRENT: RuleTable = RuleTable {
    marker: ".docs-content",
    guide_links: ".docs-sidebar a",
    header: "body > header",
    navigation: &[".docs-sidebar", "nav.docs-mobile-nav"],
    incidental: &[],
    footer: "footer",
    main_heading: "h1",
    top_margin: ("margin-top", "1rem"),
    container: ".docs-content",
    container_remove_classes: &["lg:pl-72", "xl:pl-80", "max-w-3xl"],
    container_add_classes: &["px-6", "max-w-none"],
    content_wrapper: "main > div",
    content_remove_classes: &["pb-24", "lg:pb-32"],
    bottom_spacing: ("padding-bottom", "4rem"),
    asset_needles: &["docsearch", "algolia", "googletagmanager", "gtag"],
};

impl SiteRevision {
    pub const ALL: [SiteRevision; 2] = [SiteRevision::Current, SiteRevision::Legacy];

    pub fn rules(self) -> &'static RuleTable {
        match self {
            SiteRevision::Legacy => &LEGACY,
            SiteRevision::Current => &CURRENT,
        }
    }

    /// First revision whose marker is present; pages without any marker are
    /// treated as legacy.
    pub fn detect(doc: &Document) -> Self {
        Self::ALL
            .into_iter()
            .find(|revision| doc.matches(revision.rules().marker))
            .unwrap_or(SiteRevision::Legacy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteRevision::Legacy => "legacy",
            SiteRevision::Current => "current",
        }
    }
}

impl fmt::Display for SiteRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteRevision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SiteRevision::Legacy),
            "current" => Ok(SiteRevision::Current),
            other => Err(format!("unknown site revision {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_current_by_marker() {
        let doc = Document::parse(r#"<body><div class="docs-content"></div></body>"#);
        assert_eq!(SiteRevision::detect(&doc), SiteRevision::Current);
    }

    #[test]
    fn falls_back_to_legacy() {
        let doc = Document::parse(r#"<body><div class="DocSearch-content"></div></body>"#);
        assert_eq!(SiteRevision::detect(&doc), SiteRevision::Legacy);
        let bare = Document::parse("<body><p>nothing</p></body>");
        assert_eq!(SiteRevision::detect(&bare), SiteRevision::Legacy);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Current".parse::<SiteRevision>(), Ok(SiteRevision::Current));
        assert_eq!(" legacy ".parse::<SiteRevision>(), Ok(SiteRevision::Legacy));
        assert!("v3".parse::<SiteRevision>().is_err());
    }

    #[test]
    fn only_current_strips_assets() {
        assert!(SiteRevision::Legacy.rules().asset_needles.is_empty());
        assert!(SiteRevision::Current.rules().asset_needles.contains(&"algolia"));
    }
}
