//! Mutable HTML document used by the page transformer and the entry extractor.
//!
//! The page is parsed once with `scraper` and its `ego_tree` arena is edited in
//! place. Every operation takes a CSS selector; a selector that matches nothing
//! is a no-op, and a selector that fails to parse is logged and treated the same
//! way. Elements whose attributes change are rebuilt from a parsed start tag so
//! scraper's cached id/class lookups always reflect the new attributes.

use docset_logging::{docset_debug, docset_warn};
use ego_tree::{NodeId, NodeRef, Tree};
use scraper::{ElementRef, Html, Node, Selector};

type Attributes = Vec<(String, String)>;

#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Permissive parse; malformed markup yields a best-effort tree.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// Maps every element matching `selector`, in document order.
    pub fn select_map<T, F>(&self, selector: &str, f: F) -> Vec<T>
    where
        F: FnMut(ElementRef<'_>) -> T,
    {
        match parse_selector(selector) {
            Some(sel) => self.html.select(&sel).map(f).collect(),
            None => Vec::new(),
        }
    }

    /// Raw (untrimmed) text content of every match.
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.select_map(selector, element_text)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.select_map(selector, |_| ()).len()
    }

    pub fn matches(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }

    /// True when any match carries `class`.
    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.select_map(selector, |el| {
            el.value()
                .attr("class")
                .is_some_and(|value| value.split_whitespace().any(|c| c == class))
        })
        .into_iter()
        .any(|found| found)
    }

    /// Inline style `property` of the first match.
    pub fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.select_map(selector, |el| el.value().attr("style").map(str::to_string))
            .into_iter()
            .next()
            .flatten()
            .and_then(|style| {
                parse_style(&style)
                    .into_iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(property))
                    .map(|(_, value)| value)
            })
    }

    pub fn remove(&mut self, selector: &str) -> usize {
        self.remove_where(selector, |_| true)
    }

    /// Detaches every match for which `predicate` holds, with its subtree.
    pub fn remove_where<F>(&mut self, selector: &str, predicate: F) -> usize
    where
        F: FnMut(ElementRef<'_>) -> bool,
    {
        let ids = self.select_ids(selector, predicate);
        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }
        ids.len()
    }

    pub fn add_class(&mut self, selector: &str, class: &str) -> usize {
        self.edit_attributes(selector, |attrs| {
            let mut classes = class_list(attrs);
            if classes.iter().any(|c| c == class) {
                return false;
            }
            classes.push(class.to_string());
            set_attr(attrs, "class", classes.join(" "));
            true
        })
    }

    pub fn remove_class(&mut self, selector: &str, class: &str) -> usize {
        self.edit_attributes(selector, |attrs| {
            let classes = class_list(attrs);
            if !classes.iter().any(|c| c == class) {
                return false;
            }
            let kept: Vec<String> = classes.into_iter().filter(|c| c != class).collect();
            set_attr(attrs, "class", kept.join(" "));
            true
        })
    }

    /// Sets one inline style property, keeping the element's other declarations.
    pub fn set_style(&mut self, selector: &str, property: &str, value: &str) -> usize {
        self.edit_attributes(selector, |attrs| {
            let current = attrs
                .iter()
                .find(|(name, _)| name == "style")
                .map(|(_, v)| v.as_str())
                .unwrap_or_default();
            let mut declarations = parse_style(current);
            match declarations
                .iter_mut()
                .find(|(name, _)| name.eq_ignore_ascii_case(property))
            {
                Some(existing) => existing.1 = value.to_string(),
                None => declarations.push((property.to_string(), value.to_string())),
            }
            set_attr(attrs, "style", serialize_style(&declarations));
            true
        })
    }

    /// Inserts the markup produced for each match as its preceding sibling(s).
    pub fn insert_before<F>(&mut self, selector: &str, mut markup: F) -> usize
    where
        F: FnMut(ElementRef<'_>) -> String,
    {
        let targets: Vec<(NodeId, String)> = self.select_map(selector, |el| (el.id(), markup(el)));
        for (id, fragment) in &targets {
            let fragment = Html::parse_fragment(fragment);
            for child in fragment.root_element().children() {
                graft_before(&mut self.html.tree, *id, child);
            }
        }
        targets.len()
    }

    /// Inserts `markup` as the first child(ren) of each match.
    pub fn prepend(&mut self, selector: &str, markup: &str) -> usize {
        let ids = self.select_ids(selector, |_| true);
        let fragment = Html::parse_fragment(markup);
        for id in &ids {
            let first_child = self
                .html
                .tree
                .get(*id)
                .and_then(|node| node.first_child())
                .map(|child| child.id());
            for child in fragment.root_element().children() {
                match first_child {
                    Some(sibling) => graft_before(&mut self.html.tree, sibling, child),
                    None => graft_append(&mut self.html.tree, *id, child),
                }
            }
        }
        ids.len()
    }

    fn select_ids<F>(&self, selector: &str, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(ElementRef<'_>) -> bool,
    {
        let ids: Vec<NodeId> = self
            .select_map(selector, |el| predicate(el).then(|| el.id()))
            .into_iter()
            .flatten()
            .collect();
        if ids.is_empty() {
            docset_debug!("Selector {selector:?} matched nothing");
        }
        ids
    }

    fn edit_attributes<F>(&mut self, selector: &str, mut edit: F) -> usize
    where
        F: FnMut(&mut Attributes) -> bool,
    {
        let ids = self.select_ids(selector, |_| true);
        for id in &ids {
            self.rebuild_element(*id, &mut edit);
        }
        ids.len()
    }

    fn rebuild_element<F>(&mut self, id: NodeId, edit: &mut F)
    where
        F: FnMut(&mut Attributes) -> bool,
    {
        let Some((name, mut attrs)) = self.html.tree.get(id).and_then(|node| {
            node.value().as_element().map(|el| {
                let attrs: Attributes = el
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (el.name().to_string(), attrs)
            })
        }) else {
            return;
        };

        if !edit(&mut attrs) {
            return;
        }

        let fragment = Html::parse_fragment(&start_tag(&name, &attrs));
        let replacement = fragment.root_element().children().find_map(|child| {
            child
                .value()
                .as_element()
                .filter(|el| el.name() == name)
                .map(|_| child.value().clone())
        });

        match (replacement, self.html.tree.get_mut(id)) {
            (Some(node), Some(mut target)) => *target.value() = node,
            _ => docset_warn!("Could not rebuild <{name}>; attributes left unchanged"),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(err) => {
            docset_warn!("Ignoring invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn graft_before(tree: &mut Tree<Node>, sibling: NodeId, source: NodeRef<'_, Node>) {
    let id = match tree.get_mut(sibling) {
        Some(mut node) => node.insert_before(source.value().clone()).id(),
        None => return,
    };
    copy_children(tree, id, source);
}

fn graft_append(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
    let id = match tree.get_mut(parent) {
        Some(mut node) => node.append(source.value().clone()).id(),
        None => return,
    };
    copy_children(tree, id, source);
}

fn copy_children(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
    for child in source.children() {
        graft_append(tree, parent, child);
    }
}

fn class_list(attrs: &Attributes) -> Vec<String> {
    attrs
        .iter()
        .find(|(name, _)| name == "class")
        .map(|(_, value)| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

fn set_attr(attrs: &mut Attributes, name: &str, value: String) {
    match attrs.iter_mut().find(|(n, _)| n == name) {
        Some(existing) => existing.1 = value,
        None => attrs.push((name.to_string(), value)),
    }
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn serialize_style(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn start_tag(name: &str, attrs: &Attributes) -> String {
    let mut tag = format!("<{name}");
    for (key, value) in attrs {
        tag.push_str(&format!(" {key}=\"{}\"", escape_attr(value)));
    }
    tag.push('>');
    tag
}

pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head><title>T</title></head><body>
        <header class="top bar"><a href="/">Home</a></header>
        <div class="content px-3" data-x="1"><h1>Title</h1><p>Body</p></div>
        <footer>bye</footer>
    </body></html>"#;

    #[test]
    fn remove_detaches_subtree() {
        let mut doc = Document::parse(PAGE);
        assert_eq!(doc.remove("footer"), 1);
        assert!(!doc.to_html().contains("<footer"));
        assert_eq!(doc.remove("footer"), 0);
    }

    #[test]
    fn invalid_selector_is_a_no_op() {
        let mut doc = Document::parse(PAGE);
        let before = doc.to_html();
        assert_eq!(doc.remove("div[[["), 0);
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn class_edits_keep_children_and_other_attributes() {
        let mut doc = Document::parse(PAGE);
        doc.add_class(".content", "px-6");
        doc.remove_class(".content", "px-3");
        assert!(doc.has_class(".content", "px-6"));
        assert!(!doc.has_class(".content", "px-3"));
        assert_eq!(doc.count("div[data-x='1'] > h1"), 1);
        // rebuilt element is matched by its new class
        assert_eq!(doc.count("div.px-6 p"), 1);
    }

    #[test]
    fn add_class_is_not_duplicated() {
        let mut doc = Document::parse(PAGE);
        doc.add_class("header", "hidden");
        doc.add_class("header", "hidden");
        let html = doc.to_html();
        assert!(html.contains(r#"class="top bar hidden""#), "{html}");
    }

    #[test]
    fn set_style_merges_declarations() {
        let mut doc = Document::parse(r#"<h1 style="color: red; margin-top:0">T</h1>"#);
        doc.set_style("h1", "margin-top", "1rem");
        assert_eq!(doc.style("h1", "margin-top").as_deref(), Some("1rem"));
        assert_eq!(doc.style("h1", "color").as_deref(), Some("red"));
    }

    #[test]
    fn insert_before_and_prepend_graft_markup() {
        let mut doc = Document::parse(PAGE);
        doc.insert_before("h1", |el| format!(r#"<a id="{}"></a>"#, element_text(el).to_lowercase()));
        doc.prepend("html", "<!-- note -->");
        let html = doc.to_html();
        assert!(html.contains(r#"<a id="title"></a><h1>Title</h1>"#), "{html}");
        assert!(html.contains("<html><!-- note --><head>"), "{html}");
    }
}
