use crate::syntax::NodeKind;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;

/// A child of a [`SyntaxNode`]: either a nested node or a token.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum SyntaxElement<'src> {
    Node(SyntaxNode<'src>),
    Token(Token<'src>),
}

impl<'src> SyntaxElement<'src> {
    pub fn span(&self) -> ByteSpan {
        match self {
            SyntaxElement::Node(node) => node.span,
            SyntaxElement::Token(token) => token.span,
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode<'src>> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token<'src>> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }
}

/// A node of the concrete syntax tree.
///
/// The tree is lossless: every token of the input, trivia included, is a
/// child of exactly one node, so the concatenated token texts of the root
/// reproduce the source. A node is exclusively owned by its parent.
///
/// `malformed` is set on nodes whose rule started (its leading token
/// matched) but failed to complete. Such nodes are present in the tree and
/// cover what was consumed.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SyntaxNode<'src> {
    pub kind: NodeKind,
    pub span: ByteSpan,
    pub malformed: bool,
    pub children: Vec<SyntaxElement<'src>>,
}

impl<'src> SyntaxNode<'src> {
    /// Creates a node. The parser builds trees through the marker API; this
    /// constructor is for tests and tools that assemble trees by hand.
    pub fn new(
        kind: NodeKind,
        span: ByteSpan,
        malformed: bool,
        children: Vec<SyntaxElement<'src>>,
    ) -> Self {
        Self {
            kind,
            span,
            malformed,
            children,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Returns `true` if this node or any descendant is malformed or an
    /// `Error` node.
    pub fn has_errors(&self) -> bool {
        self.descendants()
            .any(|node| node.malformed || node.kind == NodeKind::Error)
    }

    /// Direct child nodes, in order.
    pub fn child_nodes(&self) -> impl DoubleEndedIterator<Item = &SyntaxNode<'src>> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    /// Direct child tokens (trivia included), in order.
    pub fn child_tokens(&self) -> impl Iterator<Item = &Token<'src>> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// Direct child tokens, trivia excluded.
    pub fn significant_child_tokens(&self) -> impl Iterator<Item = &Token<'src>> {
        self.child_tokens().filter(|token| !token.is_trivia())
    }

    pub fn first_child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode<'src>> {
        self.child_nodes().find(|node| node.kind == kind)
    }

    pub fn children_of_kind(
        &self,
        kind: NodeKind,
    ) -> impl Iterator<Item = &SyntaxNode<'src>> {
        self.child_nodes().filter(move |node| node.kind == kind)
    }

    /// The first direct child token of `kind`.
    pub fn first_token_of_kind(&self, kind: TokenKind) -> Option<&Token<'src>> {
        self.child_tokens().find(|token| token.kind == kind)
    }

    /// This node and all nodes below it, in pre-order.
    pub fn descendants(&self) -> Descendants<'_, 'src> {
        Descendants { stack: vec![self] }
    }

    /// All tokens under this node, in source order.
    pub fn tokens(&self) -> Tokens<'_, 'src> {
        Tokens {
            stack: vec![self.children.iter()],
        }
    }

    /// The source text covered by this node.
    ///
    /// Returns an empty string if the span does not belong to `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source).unwrap_or_default()
    }

    /// Reassembles the text of this node from its tokens.
    pub fn to_text(&self) -> String {
        self.tokens().map(|token| token.text).collect()
    }
}

/// Pre-order iterator returned by [`SyntaxNode::descendants()`].
pub struct Descendants<'a, 'src> {
    stack: Vec<&'a SyntaxNode<'src>>,
}

impl<'a, 'src> Iterator for Descendants<'a, 'src> {
    type Item = &'a SyntaxNode<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().rev());
        Some(node)
    }
}

/// In-order token iterator returned by [`SyntaxNode::tokens()`].
pub struct Tokens<'a, 'src> {
    stack: Vec<std::slice::Iter<'a, SyntaxElement<'src>>>,
}

impl<'a, 'src> Iterator for Tokens<'a, 'src> {
    type Item = &'a Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(SyntaxElement::Token(token)) => return Some(token),
                Some(SyntaxElement::Node(node)) => self.stack.push(node.children.iter()),
                None => {
                    self.stack.pop();
                },
            }
        }
    }
}
