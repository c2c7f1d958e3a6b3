//! Builds the annotated display tree for a parsed document.
//!
//! The walk is depth-first and pre-order: an element's prefixes and
//! violations are settled before any of its children are visited, and each
//! child receives a copy of its parent's prefix set.

use crate::checks::check_element;
use crate::markup::{Document, Element};
use crate::models::{ElementContext, LabelNode, ViolationCount, Violations};
use crate::prefixes::compute_prefixes;
use owo_colors::OwoColorize;
use std::collections::BTreeSet;

/// Marker placed between an element description and its violations.
pub const VIOLATION_MARKER: &str = "❌";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How labels are painted.
pub enum LabelStyle {
    #[default]
    Plain,
    Colored,
}

/// Label for an element: `tag#id.class1.class2 ❌ messages`.
pub fn create_label(element: &Element, violations: &Violations, style: LabelStyle) -> String {
    let colored = style == LabelStyle::Colored;
    let mut label = if colored {
        element.tag.bright_cyan().to_string()
    } else {
        element.tag.clone()
    };
    if !element.id.is_empty() {
        let id = format!("#{}", element.id.replacen(' ', "#", 1));
        label.push_str(&if colored { id.yellow().to_string() } else { id });
    }
    if !element.classes.is_empty() {
        let classes = format!(".{}", element.classes.join("."));
        label.push_str(&if colored {
            classes.bright_green().to_string()
        } else {
            classes
        });
    }
    if !violations.is_empty() {
        let messages = violations.joined();
        let messages = if colored {
            messages.bold().to_string()
        } else {
            messages
        };
        label.push_str(&format!(" {} {}", VIOLATION_MARKER, messages));
    }
    label
}

/// Prefixes and violations for one element given its inherited prefixes.
pub fn element_context(
    element: &Element,
    inherited: &BTreeSet<String>,
    count: &mut ViolationCount,
) -> ElementContext {
    let prefixes = compute_prefixes(&element.classes, inherited);
    let violations = if element.classes.is_empty() {
        Violations::default()
    } else {
        check_element(element, &prefixes, count)
    };
    ElementContext {
        prefixes,
        violations,
    }
}

/// Build the label subtree rooted at `element`.
pub fn build_tree(
    element: &Element,
    inherited: &BTreeSet<String>,
    count: &mut ViolationCount,
    style: LabelStyle,
) -> LabelNode {
    let ctx = element_context(element, inherited, count);
    let mut node = LabelNode::new(create_label(element, &ctx.violations, style));
    node.nodes = element
        .elements()
        .map(|child| build_tree(child, &ctx.prefixes, count, style))
        .collect();
    node
}

/// Build the tree for a whole document.
///
/// Top-level elements only seed prefixes from their own classes and are not
/// rule-checked. Each of them overwrites the root label, so the last one
/// wins, while the subtrees of all their children are appended to one flat
/// root node list.
pub fn build_document(
    document: &Document,
    count: &mut ViolationCount,
    style: LabelStyle,
) -> LabelNode {
    let mut root = LabelNode::default();
    for top in document.elements() {
        root.label = Some(create_label(top, &Violations::default(), style));
        let prefixes = compute_prefixes(&top.classes, &BTreeSet::new());
        for child in top.elements() {
            root.nodes.push(build_tree(child, &prefixes, count, style));
        }
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Node;
    use crate::models::Violation;

    fn div(class: &str, children: Vec<Node>) -> Node {
        Node::Element(Element::new("div").with_class(class).with_children(children))
    }

    #[test]
    fn test_label_with_tag_only() {
        let label = create_label(&Element::new("div"), &Violations::default(), LabelStyle::Plain);
        assert_eq!(label, "div");
    }

    #[test]
    fn test_label_with_id_classes_and_violations() {
        let el = Element::new("article")
            .with_id("post 1 x")
            .with_class("post post--featured");
        let mut violations = Violations::default();
        violations.insert(Violation::ElementOfElement);
        violations.insert(Violation::ModifierWithoutModifiable);
        assert_eq!(
            create_label(&el, &violations, LabelStyle::Plain),
            "article#post#1 x.post.post--featured ❌ Element of element! Modifier without modifiable!"
        );
    }

    #[test]
    fn test_colored_label_keeps_text() {
        let el = Element::new("span").with_class("a");
        let label = create_label(&el, &Violations::default(), LabelStyle::Colored);
        assert!(label.contains("span"));
        assert!(label.contains(".a"));
        assert!(label.contains('\u{1b}'));
    }

    #[test]
    fn test_build_tree_inherits_prefixes() {
        let Node::Element(root) = div("block", vec![div("block__element", vec![])]) else {
            unreachable!()
        };
        let mut count = ViolationCount::new();
        let tree = build_tree(&root, &BTreeSet::new(), &mut count, LabelStyle::Plain);
        assert_eq!(count.get(), 0);
        assert_eq!(tree.label.as_deref(), Some("div.block"));
        assert_eq!(tree.nodes[0].label.as_deref(), Some("div.block__element"));
    }

    #[test]
    fn test_build_tree_skips_other_nodes_and_keeps_order() {
        let Node::Element(root) = div(
            "list",
            vec![div("a", vec![]), Node::Other, div("b", vec![]), Node::Other],
        ) else {
            unreachable!()
        };
        let mut count = ViolationCount::new();
        let tree = build_tree(&root, &BTreeSet::new(), &mut count, LabelStyle::Plain);
        let labels: Vec<_> = tree.nodes.iter().map(|n| n.label.clone().unwrap()).collect();
        assert_eq!(labels, vec!["div.a", "div.b"]);
    }

    #[test]
    fn test_siblings_do_not_share_prefixes() {
        let Node::Element(root) = div(
            "page",
            vec![div("card", vec![]), div("card__title", vec![])],
        ) else {
            unreachable!()
        };
        let mut count = ViolationCount::new();
        let tree = build_tree(&root, &BTreeSet::new(), &mut count, LabelStyle::Plain);
        assert_eq!(count.get(), 1);
        assert_eq!(
            tree.nodes[1].label.as_deref(),
            Some("div.card__title ❌ Element outside its block!")
        );
    }

    #[test]
    fn test_document_root_label_is_last_top_level_element() {
        let document = Document {
            nodes: vec![
                Node::Element(Element::new("div").with_class("block1")),
                Node::Other,
                Node::Element(
                    Element::new("p")
                        .with_class("block3")
                        .with_children(vec![div("block3__x", vec![])]),
                ),
            ],
        };
        let mut count = ViolationCount::new();
        let tree = build_document(&document, &mut count, LabelStyle::Plain);
        assert_eq!(tree.label.as_deref(), Some("p.block3"));
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_top_level_element_is_not_checked() {
        let document = Document {
            nodes: vec![div("orphan__el", vec![div("x__y", vec![])])],
        };
        let mut count = ViolationCount::new();
        let tree = build_document(&document, &mut count, LabelStyle::Plain);
        assert_eq!(tree.label.as_deref(), Some("div.orphan__el"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_empty_document_has_no_label() {
        let mut count = ViolationCount::new();
        let tree = build_document(&Document::default(), &mut count, LabelStyle::Plain);
        assert_eq!(tree, LabelNode::default());
    }
}
