use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdstyle")]
#[command(author, version)]
#[command(about = "A style linter for Markdown headings and list spacing")]
#[command(
    long_about = "Mdstyle is a CLI linter for Markdown and CommonMark documents. It checks \
    that headings stay under a configurable length and that blank lines between list items \
    are consistent with the looseness of the surrounding list."
)]
#[command(after_help = "\
EXAMPLES:

    # Lint a file
    mdstyle lint document.md

    # Lint from stdin
    cat document.md | mdstyle lint

    # Fail with exit code 1 when issues are found
    mdstyle lint --check document.md

    # Use custom config
    mdstyle lint --config custom.toml document.md

    # Parse and inspect the mdast tree
    mdstyle parse document.md

CONFIGURATION:

Mdstyle looks for configuration files in this order:
  1. Explicit --config path
  2. mdstyle.toml or .mdstyle.toml in current/parent directories
  3. ~/.config/mdstyle/config.toml (XDG)
  4. Built-in defaults

Example .mdstyle.toml:

    [heading-length]
    max-length = 60

    [list-item-spacing]
    check-blanks = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdstyle will \
        search for .mdstyle.toml or mdstyle.toml in the current directory and its parents, \
        then fall back to ~/.config/mdstyle/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a Markdown document
    #[command(
        long_about = "Lint a Markdown document and print any style issues found. Reads from \
        stdin when no file is given. Use --check to exit with code 1 when issues are found, \
        which is useful in CI pipelines."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Lint a file
    mdstyle lint document.md

    # Lint from stdin
    echo '# Heading' | mdstyle lint

    # Exit code 1 on findings
    mdstyle lint --check document.md

RULES:

  - heading-length: headings whose plain text exceeds the configured
    maximum length (default 60 characters)
  - list-item-spacing: blank lines between list items that are inconsistent
    with the looseness of the list")]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Exit with code 1 when issues are found
        #[arg(long)]
        #[arg(help = "Exit with code 1 when issues are found")]
        check: bool,
    },
    /// Parse and display the mdast tree for debugging
    #[command(
        long_about = "Parse a document and display its Markdown Abstract Syntax Tree (mdast) \
        for debugging and understanding how mdstyle interprets the document structure."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
