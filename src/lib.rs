pub mod config;
pub mod linter;
pub mod node_utils;

pub use config::Config;
pub use config::ConfigBuilder;
pub use linter::lint;

use markdown::ParseOptions;
use markdown::mdast::Node;
use markdown::message::Message;

/// Parses a Markdown document string into an mdast tree.
///
/// This function normalizes line endings and parses with GFM extensions
/// enabled, so positions in the resulting tree are consistent regardless
/// of the input's original line endings.
///
/// # Examples
///
/// ```rust
/// use mdstyle::parse;
///
/// let input = "# Heading\n\nParagraph text.";
/// let tree = parse(input).unwrap();
/// println!("{:#?}", tree);
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown document content to parse
pub fn parse(input: &str) -> Result<Node, Box<Message>> {
    let normalized_input = input.replace("\r\n", "\n");
    markdown::to_mdast(&normalized_input, &ParseOptions::gfm()).map_err(Box::new)
}

/// Parses and lints a document in one step, using the given configuration.
///
/// # Arguments
///
/// * `input` - The Markdown document content to check
/// * `config` - Optional configuration (defaults to default config)
pub fn check(input: &str, config: Option<Config>) -> Result<Vec<linter::Diagnostic>, Box<Message>> {
    let tree = parse(input)?;
    let config = config.unwrap_or_default();
    Ok(lint(&tree, &config))
}
