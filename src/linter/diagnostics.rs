use markdown::mdast::Node;
use markdown::unist::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A source span in 1-indexed lines and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
    pub code: String,
}

impl Diagnostic {
    pub fn error(location: Location, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location,
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn warning(
        location: Location,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            location,
            message: message.into(),
            code: code.into(),
        }
    }
}

impl Location {
    /// Full span of a node. `None` for generated nodes, which are never
    /// reported on.
    pub fn from_node(node: &Node) -> Option<Self> {
        node.position().map(|p| Self::from_points(&p.start, &p.end))
    }

    /// Span between two points, e.g. from the end of one list item to the
    /// start of the next.
    pub fn from_points(start: &Point, end: &Point) -> Self {
        Self {
            line: start.line,
            column: start.column,
            end_line: end.line,
            end_column: end.column,
        }
    }
}
