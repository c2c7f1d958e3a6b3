//! Box-drawing rendering of a [`LabelNode`] tree.

use crate::models::LabelNode;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const BLANK: &str = "   ";

/// Render `node` and its descendants, one label per line.
pub fn render(node: &LabelNode) -> String {
    let mut out = String::new();
    render_into(node, "", "", &mut out);
    out
}

fn render_into(node: &LabelNode, indent: &str, connector: &str, out: &mut String) {
    out.push_str(indent);
    out.push_str(connector);
    out.push_str(node.label.as_deref().unwrap_or_default());
    // Descendants of a root (no connector) are not indented further.
    let child_indent = match connector {
        "" => indent.to_string(),
        LAST_BRANCH => format!("{indent}{BLANK}"),
        _ => format!("{indent}{PIPE}"),
    };
    let last = node.nodes.len().saturating_sub(1);
    for (i, child) in node.nodes.iter().enumerate() {
        out.push('\n');
        let connector = if i == last { LAST_BRANCH } else { BRANCH };
        render_into(child, &child_indent, connector, out);
    }
}
