use crate::token::Token;

/// Marker trait for [`Token`] lexers (iterators that generate [`Token`]).
///
/// [`StrIdlTokenSource`](crate::token_source::StrIdlTokenSource) lexes the
/// IDL and [`DocCommentTokenSource`](crate::token_source::DocCommentTokenSource)
/// lexes the doc-comment micro-language; both feed the same
/// [`SyntaxTokenStream`](crate::SyntaxTokenStream).
///
/// Lexers are responsible for:
/// - Emitting every byte of their input as part of exactly one token
///   (trivia included)
/// - Emitting [`TokenKind::Invalid`](crate::token::TokenKind::Invalid) for
///   characters that match no rule, instead of failing
/// - Returning `None` at end of input (the end-of-input sentinel is produced
///   by the token stream, not by lexers)
///
/// # Lifetime Parameter
///
/// The `'src` lifetime is the source text that token text is borrowed from.
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}
