pub mod diagnostics;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Location, Severity};
pub use rules::{Rule, RuleRegistry};
pub use runner::LintRunner;

use crate::config::Config;
use markdown::mdast::Node;

/// Lint a document tree and return diagnostics.
pub fn lint(tree: &Node, config: &Config) -> Vec<Diagnostic> {
    let registry = default_registry();
    let runner = LintRunner::new(registry);
    runner.run(tree, config)
}

/// Create the default rule registry with all built-in rules.
fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rules::heading_length::HeadingLengthRule));
    registry.register(Box::new(rules::list_item_spacing::ListItemSpacingRule));
    registry
}
