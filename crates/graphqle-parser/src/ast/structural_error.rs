use crate::syntax::NodeKind;
use crate::ByteSpan;

/// A required child is missing from a node.
///
/// Returned by required getters on [`ast`](crate::ast) wrappers. The parser
/// produces every required child for well-formed input, so this error means
/// either a `malformed` node (check the accompanying
/// [`ParseError`](crate::ParseError)s) or a tree assembled by hand.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{parent:?} node at {}..{} has no {missing}", .span.start, .span.end)]
pub struct StructuralError {
    /// Kind of the node that lacks the child.
    pub parent: NodeKind,

    /// What was expected, e.g. "type name" or "value".
    pub missing: &'static str,

    /// Span of the parent node.
    pub span: ByteSpan,
}

impl StructuralError {
    pub fn new(parent: NodeKind, missing: &'static str, span: ByteSpan) -> Self {
        Self {
            parent,
            missing,
            span,
        }
    }
}
