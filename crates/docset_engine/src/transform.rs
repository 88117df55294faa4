//! Page pipeline: strip site chrome and add docset table-of-contents anchors.

use docset_core::paths::online_url;
use docset_core::{dash_anchor_name, slug, EntryKind, TOP_ANCHOR_TITLE};
use docset_logging::docset_trace;

use crate::document::{element_text, escape_attr};
use crate::extract::SECTION_HEADINGS;
use crate::{DocsetConfig, Document, RuleTable, SiteRevision};

const HIDDEN_CLASS: &str = "hidden";
const DASH_ANCHOR_CLASS: &str = "dashAnchor";

/// Rewrites one stored page for offline display inside a docset viewer.
pub fn format_page(config: &DocsetConfig, file: &str, html: &str) -> String {
    let mut doc = Document::parse(html);
    let revision = config.revision.unwrap_or_else(|| SiteRevision::detect(&doc));
    let rules = revision.rules();
    docset_trace!("Formatting {file} with {revision} rules");

    hide_header(&mut doc, rules);
    remove_navigation(&mut doc, rules);
    remove_incidental_chrome(&mut doc, rules);
    remove_footer(&mut doc, rules);

    update_top_margin(&mut doc, rules);
    update_container_width(&mut doc, rules);
    update_bottom_margin(&mut doc, rules);
    strip_unwanted_assets(&mut doc, rules);

    insert_online_redirection(&mut doc, config, file);
    insert_dash_table_of_contents(&mut doc, rules);

    doc.to_html()
}

/// Hidden rather than removed: code highlighting on these pages stops
/// working once the header leaves the tree.
fn hide_header(doc: &mut Document, rules: &RuleTable) {
    let hidden = doc.add_class(rules.header, HIDDEN_CLASS);
    docset_trace!("header hidden: {hidden}");
}

fn remove_navigation(doc: &mut Document, rules: &RuleTable) {
    for selector in rules.navigation {
        let removed = doc.remove(selector);
        docset_trace!("navigation {selector:?} removed: {removed}");
    }
}

fn remove_incidental_chrome(doc: &mut Document, rules: &RuleTable) {
    for selector in rules.incidental {
        let removed = doc.remove(selector);
        docset_trace!("incidental {selector:?} removed: {removed}");
    }
}

fn remove_footer(doc: &mut Document, rules: &RuleTable) {
    let removed = doc.remove(rules.footer);
    docset_trace!("footer removed: {removed}");
}

fn update_top_margin(doc: &mut Document, rules: &RuleTable) {
    let (property, value) = rules.top_margin;
    doc.set_style(rules.main_heading, property, value);
}

fn update_container_width(doc: &mut Document, rules: &RuleTable) {
    for class in rules.container_remove_classes {
        doc.remove_class(rules.container, class);
    }
    for class in rules.container_add_classes {
        doc.add_class(rules.container, class);
    }
}

fn update_bottom_margin(doc: &mut Document, rules: &RuleTable) {
    for class in rules.content_remove_classes {
        doc.remove_class(rules.content_wrapper, class);
    }
    let (property, value) = rules.bottom_spacing;
    doc.set_style(rules.content_wrapper, property, value);
}

fn strip_unwanted_assets(doc: &mut Document, rules: &RuleTable) {
    if rules.asset_needles.is_empty() {
        return;
    }
    let mentions_needle = |text: &str| {
        let text = text.to_ascii_lowercase();
        rules.asset_needles.iter().any(|needle| text.contains(needle))
    };

    let scripts = doc.remove_where("script[src]", |el| {
        el.value().attr("src").is_some_and(mentions_needle)
    });
    let links = doc.remove_where("link[href]", |el| {
        el.value().attr("href").is_some_and(mentions_needle)
    });
    let inline = doc.remove_where("script:not([src])", |el| mentions_needle(&element_text(el)));
    docset_trace!("assets removed: {scripts} scripts, {links} links, {inline} inline scripts");
}

fn insert_online_redirection(doc: &mut Document, config: &DocsetConfig, file: &str) {
    let online = online_url(file, &config.inner_directory());
    doc.prepend("html", &format!("<!-- Online page at https://{online} -->"));
}

fn insert_dash_table_of_contents(doc: &mut Document, rules: &RuleTable) {
    doc.insert_before(rules.main_heading, |_| {
        anchor_markup(None, &dash_anchor_name(EntryKind::Section, TOP_ANCHOR_TITLE))
    });

    doc.insert_before(SECTION_HEADINGS, |heading| {
        let text = element_text(heading);
        anchor_markup(
            Some(&slug(&text)),
            &dash_anchor_name(EntryKind::Section, &text),
        )
    });
}

fn anchor_markup(id: Option<&str>, name: &str) -> String {
    let id = id
        .map(|id| format!(r#"id="{}" "#, escape_attr(id)))
        .unwrap_or_default();
    format!(
        r#"<a {id}name="{}" class="{DASH_ANCHOR_CLASS}"></a>"#,
        escape_attr(name)
    )
}
