//! Replays parser [`Event`]s over the token list to build a [`SyntaxNode`].
//!
//! Trivia placement:
//! - trivia before a node's first token belongs to the enclosing node, so
//!   nodes start and end at significant tokens;
//! - trivia between two tokens of the same node belongs to that node;
//! - trivia after the last significant token belongs to the root.

use crate::event::Event;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxElement;
use crate::syntax::SyntaxNode;
use crate::token::Token;
use crate::ByteSpan;

struct PendingNode<'src> {
    kind: NodeKind,
    malformed: bool,
    children: Vec<SyntaxElement<'src>>,
}

impl<'src> PendingNode<'src> {
    fn into_node(self, fallback_offset: u32) -> SyntaxNode<'src> {
        let span = match (self.children.first(), self.children.last()) {
            (Some(first), Some(last)) => first.span().cover(last.span()),
            _ => ByteSpan::empty_at(fallback_offset),
        };
        SyntaxNode::new(self.kind, span, self.malformed, self.children)
    }
}

struct TreeSink<'a, 'src> {
    tokens: &'a [Token<'src>],
    cursor: usize,
    stack: Vec<PendingNode<'src>>,
    root_span: ByteSpan,
}

impl<'a, 'src> TreeSink<'a, 'src> {
    fn attach_trivia(&mut self) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        while let Some(token) = self.tokens.get(self.cursor)
            && token.is_trivia()
        {
            top.children.push(SyntaxElement::Token(*token));
            self.cursor += 1;
        }
    }

    fn attach_token(&mut self) {
        self.attach_trivia();
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if let Some(token) = self.tokens.get(self.cursor) {
            top.children.push(SyntaxElement::Token(*token));
            self.cursor += 1;
        }
    }

    /// Offset of the next unattached token, used as the position of nodes
    /// that contain nothing.
    fn next_offset(&self) -> u32 {
        self.tokens
            .get(self.cursor)
            .map_or(self.root_span.end, |token| token.span.start)
    }

    fn close_top(&mut self) {
        let offset = self.next_offset();
        if let Some(pending) = self.stack.pop() {
            let node = pending.into_node(offset);
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(SyntaxElement::Node(node));
            }
        }
    }
}

/// Materializes the tree recorded by `events`.
///
/// The first `Start` event opens the root. The root collects trailing trivia
/// and any tokens no event consumed, and its span is always `root_span`.
pub fn build_tree<'src>(
    tokens: &[Token<'src>],
    events: &[Event],
    root_span: ByteSpan,
) -> SyntaxNode<'src> {
    let mut sink = TreeSink {
        tokens,
        cursor: 0,
        stack: Vec::new(),
        root_span,
    };

    for event in events {
        match *event {
            Event::Start { kind, malformed } => {
                sink.attach_trivia();
                sink.stack.push(PendingNode {
                    kind,
                    malformed,
                    children: Vec::new(),
                });
            },
            Event::Token => sink.attach_token(),
            // The root stays open until all tokens are attached.
            Event::Finish if sink.stack.len() == 1 => {},
            Event::Finish => sink.close_top(),
            Event::Tombstone => {},
        }
    }

    while sink.stack.len() > 1 {
        sink.close_top();
    }

    let mut root = sink.stack.pop().map_or_else(
        || SyntaxNode::new(NodeKind::Error, root_span, false, Vec::new()),
        |pending| pending.into_node(root_span.end),
    );
    root.children.extend(
        tokens[sink.cursor..]
            .iter()
            .map(|token| SyntaxElement::Token(*token)),
    );
    root.span = root_span;
    root
}
