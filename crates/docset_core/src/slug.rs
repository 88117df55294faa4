/// URL-safe anchor id for a heading.
///
/// Lower-cases ASCII letters, collapses every run of other characters
/// (whitespace, punctuation, non-ASCII) into a single `-`, and trims the
/// separators at both ends. Headings with the same visible text collide.
///
/// Apostrophes and colons are separators too (`Don't` gives `don-t`), so ids
/// can differ from the live site's anchors, where Laravel's `Str::slug` drops
/// those characters (`dont`).
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = true;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slug("Getting Started"), "getting-started");
        assert_eq!(slug("getting started"), "getting-started");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slug("Build & Compile -- Standalone"), "build-compile-standalone");
        assert_eq!(slug("app:build"), "app-build");
    }

    #[test]
    fn trims_separators_at_both_ends() {
        assert_eq!(slug("  #Logging!  "), "logging");
        assert_eq!(slug("\n\tDatabase\n"), "database");
    }

    #[test]
    fn apostrophes_and_colons_separate_words() {
        assert_eq!(slug("Don't Panic"), "don-t-panic");
        assert_eq!(slug("The app:build command"), "the-app-build-command");
    }

    #[test]
    fn non_ascii_counts_as_separator() {
        assert_eq!(slug("Café Menu"), "caf-menu");
    }

    #[test]
    fn empty_and_symbol_only_text_gives_empty_slug() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("?!"), "");
    }
}
