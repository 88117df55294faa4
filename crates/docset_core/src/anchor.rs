use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::EntryKind;

/// Title of the anchor placed before a page's main heading.
pub const TOP_ANCHOR_TITLE: &str = "Top";

// RFC 3986 unreserved characters stay as-is, everything else is escaped.
const RAW_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `name` attribute of a docset table-of-contents anchor.
pub fn dash_anchor_name(kind: EntryKind, title: &str) -> String {
    format!(
        "//apple_ref/cpp/{}/{}",
        kind,
        utf8_percent_encode(title, RAW_URL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_anchor_is_plain() {
        assert_eq!(
            dash_anchor_name(EntryKind::Section, TOP_ANCHOR_TITLE),
            "//apple_ref/cpp/Section/Top"
        );
    }

    #[test]
    fn title_is_raw_url_encoded() {
        assert_eq!(
            dash_anchor_name(EntryKind::Section, "Tasks & Scheduling"),
            "//apple_ref/cpp/Section/Tasks%20%26%20Scheduling"
        );
        assert_eq!(
            dash_anchor_name(EntryKind::Section, "app:build-v1.0_x~"),
            "//apple_ref/cpp/Section/app%3Abuild-v1.0_x~"
        );
    }
}
