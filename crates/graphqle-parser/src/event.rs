use crate::syntax::NodeKind;

/// A flat record of what the parser did, replayed by
/// [`build_tree()`](crate::syntax::build_tree) to materialize the tree.
///
/// Parsers never build nodes directly. A [`Marker`](crate::Marker) reserves
/// a slot for a `Start` event and fills it in when the node is completed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// Opens a node. Matched by a later [`Event::Finish`].
    Start { kind: NodeKind, malformed: bool },

    /// Consumes the next significant token (and the trivia before it).
    Token,

    /// Closes the most recently opened node.
    Finish,

    /// A reserved slot whose marker is still open or was abandoned.
    /// Skipped during tree building.
    Tombstone,
}
