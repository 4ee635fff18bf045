//! Shared position and text helpers over mdast nodes.
//!
//! Every rule funnels its position handling through these functions so the
//! "generated nodes are skipped" contract lives in one place.

use markdown::mdast::Node;
use markdown::unist::Point;

/// Whether a node was produced by a transform rather than parsed from
/// source text. Generated nodes carry no position and are never reported on.
pub fn is_generated(node: &Node) -> bool {
    node.position().is_none()
}

/// Start point of a node. `None` for generated nodes.
pub fn start(node: &Node) -> Option<&Point> {
    node.position().map(|p| &p.start)
}

/// End point of a node. `None` for generated nodes.
pub fn end(node: &Node) -> Option<&Point> {
    node.position().map(|p| &p.end)
}

/// Flattened plain-text content of a node.
///
/// Descends through inline formatting, concatenating value-bearing leaves.
/// Images and image references contribute their alt text.
pub fn to_plain_text(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::InlineCode(code) => out.push_str(&code.value),
        Node::InlineMath(math) => out.push_str(&math.value),
        Node::Html(html) => out.push_str(&html.value),
        Node::Image(image) => out.push_str(&image.alt),
        Node::ImageReference(image) => out.push_str(&image.alt),
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    collect_text(child, out);
                }
            }
        }
    }
}
