//! Child lookups shared by the wrapper getters.

use crate::ast::AstNode;
use crate::ast::StructuralError;
use crate::syntax::SyntaxNode;
use crate::token::Token;
use crate::token::TokenKind;

/// The first direct child that casts to `N`.
pub(crate) fn child<'a, 'src, N: AstNode<'a, 'src>>(
    parent: &'a SyntaxNode<'src>,
) -> Option<N> {
    parent.child_nodes().find_map(N::cast)
}

/// All direct children that cast to `N`.
pub(crate) fn children<'a, 'src, N: AstNode<'a, 'src>>(
    parent: &'a SyntaxNode<'src>,
) -> impl Iterator<Item = N> + use<'a, 'src, N> {
    parent.child_nodes().filter_map(N::cast)
}

/// The first direct child that casts to `N`, or a [`StructuralError`]
/// naming `missing`.
pub(crate) fn required<'a, 'src, N: AstNode<'a, 'src>>(
    parent: &'a SyntaxNode<'src>,
    missing: &'static str,
) -> Result<N, StructuralError> {
    child(parent).ok_or_else(|| missing_child(parent, missing))
}

/// The first direct, non-trivia child token of `kind`.
pub(crate) fn token<'a, 'src>(
    parent: &'a SyntaxNode<'src>,
    kind: TokenKind,
) -> Option<&'a Token<'src>> {
    parent.significant_child_tokens().find(|token| token.kind == kind)
}

/// The text of the first direct child token that can be a name (an
/// identifier or a keyword).
pub(crate) fn name<'src>(
    parent: &SyntaxNode<'src>,
    missing: &'static str,
) -> Result<&'src str, StructuralError> {
    parent
        .significant_child_tokens()
        .find(|token| token.kind.is_name_like())
        .map(|token| token.text)
        .ok_or_else(|| missing_child(parent, missing))
}

/// The text of the only significant child token of a leaf node.
pub(crate) fn leaf_text<'src>(
    parent: &SyntaxNode<'src>,
    missing: &'static str,
) -> Result<&'src str, StructuralError> {
    parent
        .significant_child_tokens()
        .next()
        .map(|token| token.text)
        .ok_or_else(|| missing_child(parent, missing))
}

pub(crate) fn missing_child(
    parent: &SyntaxNode<'_>,
    missing: &'static str,
) -> StructuralError {
    StructuralError::new(parent.kind, missing, parent.span)
}
