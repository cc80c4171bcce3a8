//! Result type for parsing operations that always produce a tree.

use crate::syntax::SyntaxNode;
use crate::token::Token;
use crate::ParseError;
use std::path::Path;

/// The result of a parsing operation.
///
/// Unlike `Result<T, E>`, `ParseResult` always contains a tree, possibly
/// alongside errors. Malformed input yields `Error` nodes and `malformed`
/// nodes inside an otherwise complete tree, so editor tooling can keep
/// working with the structure of a half-typed document.
///
/// # Accessing the tree
///
/// - [`valid_tree()`](Self::valid_tree) - Returns the tree only if parsing
///   was completely successful (no errors).
/// - [`tree()`](Self::tree) - Returns the tree regardless of errors.
///
/// # Example
///
/// ```
/// use graphqle_parser::syntax::NodeKind;
///
/// let source = "type Query { foo: String }";
/// let result = graphqle_parser::parse(source);
///
/// assert!(result.is_ok());
/// assert_eq!(result.tree().kind, NodeKind::Document);
///
/// if result.has_errors() {
///     eprintln!("{}", result.format_errors(source, None));
/// }
/// ```
#[derive(Debug)]
pub struct ParseResult<'src> {
    tree: SyntaxNode<'src>,

    /// Every token of the input (trivia and `Invalid` tokens included), in
    /// source order.
    tokens: Vec<Token<'src>>,

    /// Errors encountered during parsing.
    ///
    /// Empty if parsing was completely successful.
    pub errors: Vec<ParseError>,
}

impl<'src> ParseResult<'src> {
    pub(crate) fn new(
        tree: SyntaxNode<'src>,
        tokens: Vec<Token<'src>>,
        errors: Vec<ParseError>,
    ) -> Self {
        Self {
            tree,
            tokens,
            errors,
        }
    }

    /// Returns the tree only if parsing was completely successful (no
    /// errors).
    pub fn valid_tree(&self) -> Option<&SyntaxNode<'src>> {
        if self.errors.is_empty() {
            Some(&self.tree)
        } else {
            None
        }
    }

    /// Returns the tree, regardless of whether errors occurred.
    ///
    /// Check [`has_errors()`](Self::has_errors) to determine if the tree
    /// contains recovered nodes.
    pub fn tree(&self) -> &SyntaxNode<'src> {
        &self.tree
    }

    /// Takes ownership of the tree only if parsing was completely
    /// successful.
    pub fn into_valid_tree(self) -> Option<SyntaxNode<'src>> {
        if self.errors.is_empty() {
            Some(self.tree)
        } else {
            None
        }
    }

    /// Takes ownership of the tree regardless of errors.
    pub fn into_tree(self) -> SyntaxNode<'src> {
        self.tree
    }

    /// Every lexed token, in source order.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Returns `true` if parsing produced no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if any errors were encountered during parsing.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Formats all errors as a single string for display.
    pub fn format_errors(&self, source: &str, file_path: Option<&Path>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source, file_path))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'src> From<ParseResult<'src>> for Result<SyntaxNode<'src>, Vec<ParseError>> {
    /// Converts to a standard `Result`, treating recovered trees as errors.
    fn from(result: ParseResult<'src>) -> Self {
        if result.errors.is_empty() {
            Ok(result.tree)
        } else {
            Err(result.errors)
        }
    }
}
