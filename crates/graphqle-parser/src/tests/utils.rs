//! Various test utils.

use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;
use crate::ParseErrorKind;
use crate::ParseResult;

/// The kinds of all nodes under `tree`, in pre-order, root excluded.
pub fn node_kinds(tree: &SyntaxNode<'_>) -> Vec<NodeKind> {
    tree.descendants().skip(1).map(|node| node.kind).collect()
}

/// The kinds of the root's direct child nodes.
pub fn top_level_kinds(tree: &SyntaxNode<'_>) -> Vec<NodeKind> {
    tree.child_nodes().map(|node| node.kind).collect()
}

/// The first node of `kind` under `tree`, in pre-order.
pub fn find_node<'a, 'src>(
    tree: &'a SyntaxNode<'src>,
    kind: NodeKind,
) -> &'a SyntaxNode<'src> {
    tree.descendants()
        .find(|node| node.kind == kind)
        .unwrap_or_else(|| panic!("no {kind:?} node in tree"))
}

/// The messages of all errors, in order.
pub fn error_messages(result: &ParseResult<'_>) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|error| error.message().to_string())
        .collect()
}

/// The kinds of all errors, in order.
pub fn error_kinds(result: &ParseResult<'_>) -> Vec<ParseErrorKind> {
    result
        .errors
        .iter()
        .map(|error| error.kind().clone())
        .collect()
}

/// Asserts that the tree reproduces `source` exactly and that the root
/// covers all of it.
pub fn assert_lossless(source: &str, result: &ParseResult<'_>) {
    assert_eq!(result.tree().to_text(), source, "tree is not lossless");
    assert_eq!(result.tree().span.start, 0);
    assert_eq!(result.tree().span.end as usize, source.len());
}
