//! Adapter over the HTML parser.
//!
//! Parsing is delegated to `scraper` (html5ever). The parsed tree is
//! converted once into a small tagged tree so the rest of the engine never
//! inspects parser node kinds.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::borrow::Cow;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document node: either an element or anything the engine skips
/// (text, comments, doctype, processing instructions).
pub enum Node {
    Element(Element),
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An element with the attributes the linter cares about.
pub struct Element {
    pub tag: String,
    /// Empty when the element has no `id` attribute.
    pub id: String,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets classes from a raw `class` attribute value.
    pub fn with_class(mut self, raw: &str) -> Self {
        self.classes = split_classes(raw);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Element children in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        elements(&self.children)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parsed document: the ordered top-level nodes.
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        elements(&self.nodes)
    }
}

fn elements(nodes: &[Node]) -> impl Iterator<Item = &Element> {
    nodes.iter().filter_map(|n| match n {
        Node::Element(e) => Some(e),
        Node::Other => None,
    })
}

/// Split a `class` attribute on runs of whitespace, dropping empty segments.
pub fn split_classes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

fn full_document_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<(!doctype|html|head|body)[\s>]").expect("valid regex"))
}

fn first_start_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)").expect("valid regex"))
}

/// Whether `content` is a whole page rather than a fragment.
pub fn is_full_document(content: &str) -> bool {
    full_document_tag().is_match(content)
}

/// Elements a table-part fragment has to be nested in to survive parsing,
/// keyed by the fragment's first start tag.
fn table_context(first_tag: &str) -> &'static [&'static str] {
    match first_tag {
        "caption" | "colgroup" | "thead" | "tbody" | "tfoot" => &["table"],
        "col" => &["table", "colgroup"],
        "tr" => &["table", "tbody"],
        "td" | "th" => &["table", "tbody", "tr"],
        _ => &[],
    }
}

/// Parse markup into a [`Document`].
///
/// Input carrying a doctype or an `html`/`head`/`body` tag is parsed as a
/// page, so its only top-level element is `html`. Anything else is parsed as
/// a fragment and keeps its own top-level elements. html5ever recovers from
/// every malformed input, so this never fails.
pub fn parse_document(content: &str) -> Document {
    if is_full_document(content) {
        parse_page(content)
    } else {
        parse_fragment(content)
    }
}

fn parse_page(content: &str) -> Document {
    let html = Html::parse_document(content);
    let nodes = html.tree.root().children().map(|c| convert_node(ElementRef::wrap(c))).collect();
    Document { nodes }
}

fn parse_fragment(content: &str) -> Document {
    let wrappers: &[&str] = first_start_tag()
        .captures(content)
        .map(|c| table_context(&c[1].to_ascii_lowercase()))
        .unwrap_or(&[]);
    let source = if wrappers.is_empty() {
        Cow::Borrowed(content)
    } else {
        let open: String = wrappers.iter().map(|t| format!("<{t}>")).collect();
        let close: String = wrappers.iter().rev().map(|t| format!("</{t}>")).collect();
        Cow::Owned(format!("{open}{content}{close}"))
    };
    let html = Html::parse_fragment(&source);
    // Fragment nodes live under a synthetic `html` element, plus any table
    // wrappers added above.
    let mut scope = html.root_element();
    for tag in wrappers {
        match scope
            .children()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == *tag)
        {
            Some(inner) => scope = inner,
            None => break,
        }
    }
    let nodes = scope.children().map(|c| convert_node(ElementRef::wrap(c))).collect();
    Document { nodes }
}

fn convert_node(node: Option<ElementRef<'_>>) -> Node {
    match node {
        Some(el) => Node::Element(convert(el)),
        None => Node::Other,
    }
}

fn convert(el: ElementRef<'_>) -> Element {
    let value = el.value();
    let children = el.children().map(|c| convert_node(ElementRef::wrap(c))).collect();
    Element {
        tag: value.name().to_string(),
        id: value.attr("id").unwrap_or_default().to_string(),
        classes: value.attr("class").map(split_classes).unwrap_or_default(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_classes_handles_mixed_whitespace() {
        assert_eq!(
            split_classes("  block\n\tblock__el   block "),
            vec!["block", "block__el", "block"]
        );
        assert!(split_classes("   ").is_empty());
    }

    #[test]
    fn test_fragment_keeps_its_top_level_elements() {
        let doc = parse_document(
            r#"<div id="main" class="card card--wide">hi</div><span class="b"></span>"#,
        );
        let tags: Vec<&str> = doc.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "span"]);
        let div = doc.elements().next().unwrap();
        assert_eq!(div.id, "main");
        assert_eq!(div.classes, vec!["card", "card--wide"]);
        assert!(div.children.iter().all(|n| *n == Node::Other));
    }

    #[test]
    fn test_full_document_has_single_html_root() {
        let doc = parse_document(r#"<!DOCTYPE html><html><body><div class="a"></div></body></html>"#);
        let html = doc.elements().next().unwrap();
        assert_eq!(html.tag, "html");
        assert_eq!(doc.elements().count(), 1);
        let tags: Vec<&str> = html.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["head", "body"]);
    }

    #[test]
    fn test_full_document_detection() {
        assert!(is_full_document("<!doctype html><p></p>"));
        assert!(is_full_document("<BODY class=\"x\">"));
        assert!(is_full_document("<html>"));
        assert!(!is_full_document("<header class=\"site\"></header>"));
        assert!(!is_full_document("<div></div>"));
    }

    #[test]
    fn test_parse_document_keeps_non_elements_as_other() {
        let doc = parse_document("<!DOCTYPE html><!-- note --><html><body></body></html>");
        assert!(doc.nodes.iter().any(|n| *n == Node::Other));
        assert_eq!(doc.elements().count(), 1);

        let doc = parse_document("<!-- note --><p></p>text");
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.elements().count(), 1);
    }

    #[test]
    fn test_table_row_fragment_survives() {
        let doc = parse_document(r#"<tr class="row"><td class="cell">x</td></tr>"#);
        let tr = doc.elements().next().unwrap();
        assert_eq!(tr.tag, "tr");
        assert_eq!(tr.classes, vec!["row"]);
        let td = tr.elements().next().unwrap();
        assert_eq!(td.tag, "td");
        assert_eq!(td.classes, vec!["cell"]);
    }

    #[test]
    fn test_table_cell_fragment_survives() {
        let doc = parse_document(r#"<td class="a"></td><td class="b"></td>"#);
        let classes: Vec<&str> = doc.elements().map(|e| e.classes[0].as_str()).collect();
        assert_eq!(classes, vec!["a", "b"]);
    }

    #[test]
    fn test_tag_names_are_lowercase() {
        let doc = parse_document("<DIV CLASS=\"Block\"></DIV>");
        let div = doc.elements().next().unwrap();
        assert_eq!(div.tag, "div");
        assert_eq!(div.classes, vec!["Block"]);
    }

    #[test]
    fn test_empty_input_has_no_nodes() {
        assert_eq!(parse_document("").elements().count(), 0);
    }
}
