use docset_core::paths::{join_url, relative_document_path};
use docset_core::{slug, Entry};
use docset_logging::docset_trace;

use crate::document::element_text;
use crate::{DocsetConfig, Document, SiteRevision};

/// Headings turned into `Section` entries and dash anchors.
pub(crate) const SECTION_HEADINGS: &str = "h2, h3, h4";

const DOCS_SEGMENT: &str = "docs";

/// Search-index entries of one stored page: guide entries (index page only)
/// followed by section entries, each in document order.
pub fn extract_entries(config: &DocsetConfig, file: &str, html: &str) -> Vec<Entry> {
    let doc = Document::parse(html);
    let revision = config.revision.unwrap_or_else(|| SiteRevision::detect(&doc));

    let mut entries = guide_entries(config, revision, &doc, file);
    entries.extend(section_entries(config, &doc, file));
    docset_trace!("{} entries extracted from {file} ({revision})", entries.len());
    entries
}

fn guide_entries(
    config: &DocsetConfig,
    revision: SiteRevision,
    doc: &Document,
    file: &str,
) -> Vec<Entry> {
    if !is_index(config, file) {
        return Vec::new();
    }

    doc.select_map(revision.rules().guide_links, |link| {
        link.value().attr("href").map(|href| {
            Entry::guide(
                element_text(link).trim(),
                join_url(&config.url, DOCS_SEGMENT, href),
            )
        })
    })
    .into_iter()
    .flatten()
    .collect()
}

fn section_entries(config: &DocsetConfig, doc: &Document, file: &str) -> Vec<Entry> {
    if is_404_or_home(config, file) {
        return Vec::new();
    }

    // Strip the storage root before appending the fragment.
    let page = relative_document_path(file, &config.inner_directory()).to_string();
    doc.texts(SECTION_HEADINGS)
        .into_iter()
        .map(|text| Entry::section(text.trim(), format!("{page}#{}", slug(&text))))
        .collect()
}

pub(crate) fn is_index(config: &DocsetConfig, file: &str) -> bool {
    file.contains(&format!("{}/{}", config.url, config.index))
}

pub(crate) fn is_404_or_home(config: &DocsetConfig, file: &str) -> bool {
    file.contains(&format!("{}/index.html", config.url))
        || file.contains(&format!("{}/404/index.html", config.url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DocsetConfig {
        DocsetConfig::default()
    }

    #[test]
    fn index_detection_uses_configured_index() {
        let config = config();
        assert!(is_index(&config, &config.inner_index()));
        assert!(!is_index(&config, "laravel-zero.com/docs/logging.html"));
    }

    #[test]
    fn home_and_404_pages_have_no_sections() {
        let config = config();
        assert!(is_404_or_home(&config, "x/laravel-zero.com/index.html"));
        assert!(is_404_or_home(&config, "x/laravel-zero.com/404/index.html"));
        assert!(!is_404_or_home(&config, "x/laravel-zero.com/docs/index-of-things.html"));
    }

    #[test]
    fn guide_links_without_href_are_skipped() {
        let config = config();
        let html = r#"<body><div class="docs-nav"><a href="logging.html"> Logging </a><a>Broken</a></div></body>"#;
        let entries = extract_entries(&config, &config.inner_index(), html);
        assert_eq!(
            entries.first(),
            Some(&Entry::guide("Logging", "laravel-zero.com/docs/logging.html"))
        );
        assert!(entries.iter().all(|e| e.name != "Broken"));
    }

    #[test]
    fn absolute_guide_href_is_appended_as_written() {
        let config = config();
        let html = r#"<body><div class="docs-nav"><a href="/docs/logging">Logging</a></div></body>"#;
        let entries = extract_entries(&config, &config.inner_index(), html);
        assert_eq!(
            entries.first(),
            Some(&Entry::guide("Logging", "laravel-zero.com/docs//docs/logging"))
        );
    }
}
