//! Path rewriting between stored files, docset-relative paths and public URLs.
//!
//! Stored files live under a storage root such as
//! `laravel-zero/laravel-zero.docset/Contents/Resources/Documents`, followed by
//! the site's host and the page path. Everything here is plain string work on
//! `/`-separated storage paths; nothing touches the filesystem.

/// Substring after the first occurrence of `marker`.
///
/// Returns the whole `haystack` when the marker is absent or empty.
pub fn after<'a>(haystack: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return haystack;
    }
    match haystack.find(marker) {
        Some(idx) => &haystack[idx + marker.len()..],
        None => haystack,
    }
}

/// Drops a single leading `/`, if any.
pub fn strip_leading_separator(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Drops a trailing `.{extension}`; other paths are returned unchanged.
pub fn trim_extension<'a>(path: &'a str, extension: &str) -> &'a str {
    let extension = extension.trim_start_matches('.');
    path.strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(path)
}

/// Path of a stored file relative to the storage root, e.g.
/// `laravel-zero.com/docs/logging.html`.
pub fn relative_document_path<'a>(file: &'a str, storage_root: &str) -> &'a str {
    strip_leading_separator(after(file, storage_root))
}

/// Public location of a stored page, without scheme or `.html` extension,
/// e.g. `laravel-zero.com/docs/logging`.
pub fn online_url<'a>(file: &'a str, storage_root: &str) -> &'a str {
    trim_extension(relative_document_path(file, storage_root), "html")
}

/// `{base}/{segment}/{href}`, concatenated verbatim.
///
/// Guide hrefs are stored as the site wrote them, so an absolute href keeps
/// its leading `/` and yields a doubled separator.
pub fn join_url(base: &str, segment: &str, href: &str) -> String {
    format!("{base}/{segment}/{href}")
}
