//! Token source trait and implementations.

mod doc_comment_token_source;
mod str_idl_token_source;
#[allow(clippy::module_inception)]
mod token_source;

pub use doc_comment_token_source::lex_doc_comment;
pub use doc_comment_token_source::lex_doc_comment_range;
pub use doc_comment_token_source::DocCommentTokenSource;
pub use str_idl_token_source::lex;
pub use str_idl_token_source::lex_all;
pub use str_idl_token_source::StrIdlTokenSource;
pub use token_source::TokenSource;
