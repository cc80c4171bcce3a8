//! The generic, lossless concrete syntax tree and the free functions that
//! operate on it.

mod node_kind;
mod syntax_node;
mod tree_sink;
mod visitor;

pub use node_kind::NodeKind;
pub use syntax_node::Descendants;
pub use syntax_node::SyntaxElement;
pub use syntax_node::SyntaxNode;
pub use syntax_node::Tokens;
pub use tree_sink::build_tree;
pub use visitor::accept;
pub use visitor::preceding_comments;
pub use visitor::SyntaxVisitor;
pub use visitor::VisitFlow;
