//! Shared helpers for the typed-accessor tests.

use crate::ast::Definition;
use crate::ast::Document;
use crate::syntax::SyntaxNode;
use crate::ParseResult;

/// Parses `source`, asserting that it has no errors.
pub fn parse_ok(source: &str) -> ParseResult<'_> {
    let result = crate::parse(source);
    assert!(
        result.is_ok(),
        "unexpected errors for {source:?}:\n{}",
        result.format_errors(source, None),
    );
    result
}

/// The `n`th definition of a parsed document.
pub fn nth_definition<'a, 'src>(tree: &'a SyntaxNode<'src>, n: usize) -> Definition<'a, 'src> {
    Document::cast(tree)
        .expect("root should be a Document")
        .definitions()
        .nth(n)
        .expect("definition index out of range")
}
