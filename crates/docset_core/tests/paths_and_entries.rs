use docset_core::paths::{online_url, relative_document_path};
use docset_core::{slug, Entry, EntryKind};
use pretty_assertions::assert_eq;

const ROOT: &str = "laravel-zero/laravel-zero.docset/Contents/Resources/Documents";

#[test]
fn online_url_strips_storage_root_and_extension() {
    let file = format!("{ROOT}/laravel-zero.com/docs/logging.html");
    assert_eq!(online_url(&file, ROOT), "laravel-zero.com/docs/logging");
}

#[test]
fn online_url_of_file_outside_root_keeps_full_path() {
    let file = "laravel-zero/downloaded/laravel-zero.com/docs/logging.html";
    assert_eq!(
        online_url(file, ROOT),
        "laravel-zero/downloaded/laravel-zero.com/docs/logging"
    );
}

#[test]
fn section_path_is_relative_then_fragment() {
    let file = format!("{ROOT}/laravel-zero.com/docs/logging.html");
    let path = format!(
        "{}#{}",
        relative_document_path(&file, ROOT),
        slug("Getting Started")
    );
    assert_eq!(path, "laravel-zero.com/docs/logging.html#getting-started");
}

#[test]
fn entry_serializes_kind_as_type() {
    let entry = Entry::section("Usage", "laravel-zero.com/docs/logging.html#usage");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Usage",
            "type": "Section",
            "path": "laravel-zero.com/docs/logging.html#usage",
        })
    );
}

#[test]
fn entry_fragment_is_everything_after_hash() {
    let entry = Entry::section("Usage", "a/b.html#usage");
    assert_eq!(entry.fragment(), Some("usage"));
    assert_eq!(Entry::guide("Intro", "a/b.html").fragment(), None);
    assert_eq!(EntryKind::Guide.to_string(), "Guide");
}
