use crate::syntax::NodeKind;
use crate::token::TokenKind;
use crate::token_source::DocCommentTokenSource;
use crate::ByteSpan;
use crate::ParseResult;
use crate::SyntaxTokenStream;

/// Parser for the text of a doc comment.
///
/// The grammar is flat:
///
/// ```text
/// DocComment := (Tag | DocText)*
/// Tag        := DocName DocValue
/// ```
///
/// A `Tag` pins on its name, so `@deprecated` with no value still produces a
/// (malformed) `Tag` node. Free text stays as `DocText` tokens directly under
/// the `DocComment` root.
///
/// ```
/// use graphqle_parser::syntax::NodeKind;
/// use graphqle_parser::DocCommentParser;
///
/// let result = DocCommentParser::new("Fetches a user. @since v2").parse();
///
/// assert!(result.is_ok());
/// assert_eq!(result.tree().kind, NodeKind::DocComment);
/// assert_eq!(
///     result.tree().children_of_kind(NodeKind::Tag).count(),
///     1,
/// );
/// ```
pub struct DocCommentParser<'src> {
    stream: SyntaxTokenStream<'src>,
}

impl<'src> DocCommentParser<'src> {
    /// Creates a parser over the whole of `text`.
    pub fn new(text: &'src str) -> Self {
        Self {
            stream: SyntaxTokenStream::new(text, DocCommentTokenSource::new(text)),
        }
    }

    /// Creates a parser over `span` of `source`. Spans in the result are
    /// offsets into `source`, and the root covers exactly `span`.
    pub fn for_range(source: &'src str, span: ByteSpan) -> Self {
        Self {
            stream: SyntaxTokenStream::with_root_span(
                span,
                DocCommentTokenSource::with_range(source, span),
            ),
        }
    }

    pub fn parse(mut self) -> ParseResult<'src> {
        let m = self.stream.mark();
        while !self.stream.at_end() {
            let before = self.stream.position();
            let matched = self.tag() || self.doc_text();
            if !matched || self.stream.position() == before {
                self.error_token();
            }
        }
        m.complete(&mut self.stream, NodeKind::DocComment);
        self.stream.finish()
    }

    /// `DocName DocValue`
    fn tag(&mut self) -> bool {
        if !self.stream.at(TokenKind::DocName) {
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        let ok = self.stream.eat(TokenKind::DocValue);
        if !ok {
            self.stream.error_expected(&[TokenKind::DocValue.display_name()]);
        }
        m.complete_pinned(&mut self.stream, NodeKind::Tag, ok);
        true
    }

    fn doc_text(&mut self) -> bool {
        self.stream.eat(TokenKind::DocText)
    }

    fn error_token(&mut self) {
        let m = self.stream.mark();
        self.stream.error_expected(&[
            TokenKind::DocName.display_name(),
            TokenKind::DocText.display_name(),
        ]);
        self.stream.advance();
        m.complete(&mut self.stream, NodeKind::Error);
    }
}

/// Parses the text of a doc comment.
pub fn parse_doc_comment(text: &str) -> ParseResult<'_> {
    DocCommentParser::new(text).parse()
}

/// Parses `span` of `source` as a doc comment, keeping offsets absolute.
pub fn parse_doc_comment_range(source: &str, span: ByteSpan) -> ParseResult<'_> {
    DocCommentParser::for_range(source, span).parse()
}
