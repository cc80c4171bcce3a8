use crate::ast::support;
use crate::ast::StructuralError;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;
use crate::ParseResult;

ast_node!(
    /// The root of a parsed doc comment.
    DocComment
);

impl<'a, 'src> DocComment<'a, 'src> {
    pub fn tags(&self) -> impl Iterator<Item = Tag<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    /// The first tag named `name` (with its `@`), e.g. `"@deprecated"`.
    pub fn tag(&self, name: &str) -> Option<Tag<'a, 'src>> {
        self.tags()
            .find(|tag| tag.doc_name().is_ok_and(|n| n == name))
    }

    /// The free-text words outside tags, in order.
    pub fn text_words(&self) -> impl Iterator<Item = &'src str> + use<'a, 'src> {
        self.syntax
            .child_tokens()
            .filter(|token| token.kind == TokenKind::DocText)
            .map(|token| token.text)
    }
}

ast_node!(
    /// `@name value`
    Tag
);

impl<'src> Tag<'_, 'src> {
    /// The tag name, `@` included.
    pub fn doc_name(&self) -> Result<&'src str, StructuralError> {
        support::token(self.syntax, TokenKind::DocName)
            .map(|token| token.text)
            .ok_or_else(|| support::missing_child(self.syntax, "tag name"))
    }

    /// The tag's value. `None` on a malformed tag written without one.
    pub fn doc_value(&self) -> Option<&'src str> {
        support::token(self.syntax, TokenKind::DocValue).map(|token| token.text)
    }
}

/// A `#` comment token of an IDL document.
///
/// Comments are trivia, so they are tokens rather than nodes; find them
/// with [`Document::comments()`](crate::ast::Document::comments) or
/// [`preceding_comments()`](crate::syntax::preceding_comments).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Comment<'a, 'src> {
    token: &'a Token<'src>,
}

impl<'a, 'src> Comment<'a, 'src> {
    /// Views `token` as a comment, or returns `None` for other kinds.
    pub fn cast(token: &'a Token<'src>) -> Option<Self> {
        (token.kind == TokenKind::Comment).then_some(Self { token })
    }

    pub fn token(&self) -> &'a Token<'src> {
        self.token
    }

    pub fn span(&self) -> ByteSpan {
        self.token.span
    }

    /// The full comment text, `#` included.
    pub fn text(&self) -> &'src str {
        self.token.text
    }

    /// The comment text after the leading `#`.
    pub fn body(&self) -> &'src str {
        self.token.comment_body().unwrap_or_default()
    }

    /// The span of [`body()`](Self::body).
    pub fn body_span(&self) -> ByteSpan {
        let body_len = self.body().len() as u32;
        ByteSpan::new(self.token.span.end - body_len, self.token.span.end)
    }

    /// Parses the comment body as a doc comment.
    ///
    /// `source` must be the buffer the comment was lexed from; the spans of
    /// the returned tree are offsets into it.
    pub fn doc(&self, source: &'src str) -> ParseResult<'src> {
        crate::parse_doc_comment_range(source, self.body_span())
    }
}
