//! An error-tolerant, lossless parser for the GraphQL Endpoint IDL and the
//! doc-comment micro-language used inside its comments.
//!
//! Parsing never fails: every call returns a [`ParseResult`] holding a
//! complete [`SyntaxNode`](syntax::SyntaxNode) tree that covers the whole
//! input (whitespace, comments and commas included) plus any
//! [`ParseError`]s. Typed accessors over the generic tree live in [`ast`].
//!
//! ```
//! use graphqle_parser::ast;
//!
//! let source = "type Query { user(id: ID!): User }";
//! let result = graphqle_parser::parse(source);
//! assert!(result.is_ok());
//!
//! let document = ast::Document::cast(result.tree()).unwrap();
//! let ast::Definition::ObjectType(query) =
//!     document.definitions().next().unwrap()
//! else {
//!     panic!("expected an object type");
//! };
//! assert_eq!(query.name(), Ok("Query"));
//! ```

pub mod ast;
mod byte_span;
mod doc_comment_parser;
mod error_note;
mod event;
mod idl_parser;
mod marker;
mod parse_error;
mod parse_error_kind;
mod parse_result;
mod source_position;
pub mod syntax;
mod syntax_token_stream;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use doc_comment_parser::parse_doc_comment;
pub use doc_comment_parser::parse_doc_comment_range;
pub use doc_comment_parser::DocCommentParser;
pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use event::Event;
pub use idl_parser::parse;
pub use idl_parser::IdlParser;
pub use marker::CompletedMarker;
pub use marker::Marker;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parse_result::ParseResult;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use syntax_token_stream::SyntaxTokenStream;
pub use token_source::lex;
pub use token_source::lex_all;

#[cfg(test)]
mod tests;
