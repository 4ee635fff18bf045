use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::node_utils::to_plain_text;
use markdown::mdast::Node;

pub struct HeadingLengthRule;

impl Rule for HeadingLengthRule {
    fn name(&self) -> &str {
        "heading-length"
    }

    fn check(&self, tree: &Node, config: &Config) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        walk(tree, config.heading_length.max_length, &mut diagnostics);
        diagnostics
    }
}

fn walk(node: &Node, max_length: usize, diagnostics: &mut Vec<Diagnostic>) {
    if let Node::Heading(_) = node
        && let Some(location) = Location::from_node(node)
        && to_plain_text(node).chars().count() > max_length
    {
        diagnostics.push(Diagnostic::warning(
            location,
            "heading-length",
            format!("Use headings shorter than `{max_length}`"),
        ));
    }

    if let Some(children) = node.children() {
        for child in children {
            walk(child, max_length, diagnostics);
        }
    }
}
