use crate::event::Event;
use crate::syntax::NodeKind;
use crate::SyntaxTokenStream;

/// A handle for a node being constructed, returned by
/// [`SyntaxTokenStream::mark()`].
///
/// Open markers form a stack: `complete*()` and `abandon()` must be called
/// on the most recently opened marker that is still open. A marker that goes
/// out of scope without being completed or abandoned is a parser bug and
/// panics.
#[must_use = "a Marker must be completed or abandoned"]
#[derive(Debug)]
pub struct Marker {
    pos: usize,
    closed: bool,
}

impl Marker {
    pub(crate) fn new(pos: usize) -> Self {
        Self { pos, closed: false }
    }

    /// Completes the node with the given kind.
    pub fn complete(
        self,
        stream: &mut SyntaxTokenStream<'_>,
        kind: NodeKind,
    ) -> CompletedMarker {
        self.close_as(stream, kind, false)
    }

    /// Completes the node of a pinned rule.
    ///
    /// A pinned rule matched its leading token, so the node is kept even when
    /// the rest of the rule failed. With `success == false` the node is
    /// flagged as `malformed` and still covers everything the rule consumed.
    pub fn complete_pinned(
        self,
        stream: &mut SyntaxTokenStream<'_>,
        kind: NodeKind,
        success: bool,
    ) -> CompletedMarker {
        self.close_as(stream, kind, !success)
    }

    /// Discards the marker without creating a node.
    ///
    /// Anything consumed since the marker was opened becomes part of the
    /// enclosing node.
    pub fn abandon(mut self, stream: &mut SyntaxTokenStream<'_>) {
        self.pop_open_marker(stream);
        if self.pos == stream.events.len() - 1 {
            stream.events.pop();
        }
    }

    fn close_as(
        mut self,
        stream: &mut SyntaxTokenStream<'_>,
        kind: NodeKind,
        malformed: bool,
    ) -> CompletedMarker {
        self.pop_open_marker(stream);
        let slot = &mut stream.events[self.pos];
        debug_assert_eq!(*slot, Event::Tombstone, "marker slot already filled");
        *slot = Event::Start { kind, malformed };
        stream.events.push(Event::Finish);
        CompletedMarker {
            pos: self.pos,
            kind,
            malformed,
        }
    }

    fn pop_open_marker(&mut self, stream: &mut SyntaxTokenStream<'_>) {
        self.closed = true;
        let top = stream.open_markers.pop();
        debug_assert_eq!(
            top,
            Some(self.pos),
            "markers must be closed in reverse order of opening",
        );
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.closed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// A marker for a completed node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompletedMarker {
    pos: usize,
    kind: NodeKind,
    malformed: bool,
}

impl CompletedMarker {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Index of this node's `Start` event.
    pub fn event_pos(&self) -> usize {
        self.pos
    }
}
