use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;
use crate::ByteSpan;

/// Trait implemented by all typed wrappers over [`SyntaxNode`].
///
/// Wrapper types implement this trait via `#[inherent] impl AstNode`, so
/// the methods are callable without importing the trait. The trait itself
/// is for generic code, e.g. the `child::<N>()` lookups used by getters.
pub trait AstNode<'a, 'src>: Sized {
    /// Returns `true` if nodes of `kind` can be viewed as `Self`.
    fn can_cast(kind: NodeKind) -> bool;

    /// Views `node` as `Self`, or returns `None` if its kind does not match.
    fn cast(node: &'a SyntaxNode<'src>) -> Option<Self>;

    /// The underlying syntax node.
    fn syntax(&self) -> &'a SyntaxNode<'src>;

    fn span(&self) -> ByteSpan;

    /// Returns `true` if the node's rule started but did not complete.
    fn is_malformed(&self) -> bool;

    /// The source text covered by this node.
    ///
    /// Slices `source` directly (zero-copy, lossless). Returns an empty
    /// string if the node's span does not belong to `source`.
    fn to_source<'s>(&self, source: &'s str) -> &'s str;
}
