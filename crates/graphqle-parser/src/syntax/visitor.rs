use crate::syntax::SyntaxElement;
use crate::syntax::SyntaxNode;
use crate::token::Token;
use crate::token::TokenKind;

/// What [`accept()`] should do after [`SyntaxVisitor::enter_node()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitFlow {
    /// Visit the node's children, then call `leave_node()`.
    Continue,
    /// Skip the node's children; `leave_node()` is still called.
    SkipChildren,
}

/// Callbacks for [`accept()`]. All methods default to doing nothing.
pub trait SyntaxVisitor<'src> {
    fn enter_node(&mut self, _node: &SyntaxNode<'src>) -> VisitFlow {
        VisitFlow::Continue
    }

    fn leave_node(&mut self, _node: &SyntaxNode<'src>) {}

    fn visit_token(&mut self, _token: &Token<'src>) {}
}

/// Walks `node` depth-first in source order, calling `visitor` for every
/// node and token.
pub fn accept<'src>(node: &SyntaxNode<'src>, visitor: &mut impl SyntaxVisitor<'src>) {
    if visitor.enter_node(node) == VisitFlow::Continue {
        for child in &node.children {
            match child {
                SyntaxElement::Node(child_node) => accept(child_node, visitor),
                SyntaxElement::Token(token) => visitor.visit_token(token),
            }
        }
    }
    visitor.leave_node(node);
}

/// The comment tokens directly attached before `child` within `parent`.
///
/// Walks backwards over the trivia preceding `child` and collects the
/// comments of that run. A blank line (a whitespace token containing two or
/// more line breaks) ends the run, as does any non-trivia element. Returns
/// the comments in source order; empty if `child` is not a child of
/// `parent`.
pub fn preceding_comments<'a, 'src>(
    parent: &'a SyntaxNode<'src>,
    child: &SyntaxNode<'src>,
) -> Vec<&'a Token<'src>> {
    let Some(child_idx) = parent.children.iter().position(|element| {
        element
            .as_node()
            .is_some_and(|node| std::ptr::eq(node, child))
    }) else {
        return Vec::new();
    };

    let mut comments = Vec::new();
    for element in parent.children[..child_idx].iter().rev() {
        let Some(token) = element.as_token() else {
            break;
        };
        match token.kind {
            TokenKind::Comment => comments.push(token),
            TokenKind::Whitespace if count_line_breaks(token.text) < 2 => {},
            _ => break,
        }
    }
    comments.reverse();
    comments
}

/// Counts line breaks, treating `\r\n` as one.
fn count_line_breaks(text: &str) -> usize {
    let crlf = text.matches("\r\n").count();
    text.matches(['\n', '\r']).count() - crlf
}
