use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::node_utils::{end, is_generated, start};
use markdown::mdast::Node;

pub struct ListItemSpacingRule;

impl Rule for ListItemSpacingRule {
    fn name(&self) -> &str {
        "list-item-spacing"
    }

    fn check(&self, tree: &Node, config: &Config) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        walk(tree, config.list_item_spacing.check_blanks, &mut diagnostics);
        diagnostics
    }
}

fn walk(node: &Node, check_blanks: bool, diagnostics: &mut Vec<Diagnostic>) {
    if let Node::List(_) = node
        && !is_generated(node)
    {
        check_list(node, check_blanks, diagnostics);
    }

    if let Some(children) = node.children() {
        for child in children {
            walk(child, check_blanks, diagnostics);
        }
    }
}

/// Classify the whole list as loose or tight from the strongest signal among
/// its items, then flag every internal boundary that disagrees with the
/// classification. The boundary after the last item is never checked.
fn check_list(list: &Node, check_blanks: bool, diagnostics: &mut Vec<Diagnostic>) {
    let Some(indent) = start(list).map(|p| p.column) else {
        return;
    };
    let items = list.children().map(Vec::as_slice).unwrap_or(&[]);

    let loose = items.iter().any(|item| {
        if check_blanks {
            has_internal_blank_line(item)
        } else {
            is_multiline(item)
        }
    });

    for pair in items.windows(2) {
        let (item, next) = (&pair[0], &pair[1]);
        let (Some(item_end), Some(next_start)) = (end(item), start(next)) else {
            continue;
        };

        // An item whose span swallowed a following blank line ends at the
        // list's indent column; one that didn't ends past it.
        let tight_boundary = item_end.column > indent;

        if loose && tight_boundary {
            diagnostics.push(Diagnostic::warning(
                Location::from_points(item_end, next_start),
                "list-item-spacing",
                "Missing new line after list item",
            ));
        } else if !loose && !tight_boundary {
            diagnostics.push(Diagnostic::warning(
                Location::from_points(item_end, next_start),
                "list-item-spacing",
                "Extraneous new line after list item",
            ));
        }
    }
}

/// Default predicate: the item's content spans more than one source line.
fn is_multiline(item: &Node) -> bool {
    let Some(children) = item.children() else {
        return false;
    };
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return false;
    };
    match (start(first), end(last)) {
        (Some(first_start), Some(last_end)) => last_end.line > first_start.line,
        _ => false,
    }
}

/// Blank-line predicate: two adjacent children of the item are separated by
/// at least one fully blank line.
fn has_internal_blank_line(item: &Node) -> bool {
    let Some(children) = item.children() else {
        return false;
    };
    children.windows(2).any(|pair| match (end(&pair[0]), start(&pair[1])) {
        (Some(child_end), Some(next_start)) => next_start.line.saturating_sub(child_end.line) > 1,
        _ => false,
    })
}
