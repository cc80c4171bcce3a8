//! This module provides the core token types used by the lexers and the
//! parsers.

mod keyword_table;
#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use keyword_table::KeywordTable;
pub use keyword_table::IDL_KEYWORDS;
pub(crate) use token::find_block_string_end;
pub use token::Token;
pub use token_kind::TokenKind;

#[cfg(test)]
mod tests;
