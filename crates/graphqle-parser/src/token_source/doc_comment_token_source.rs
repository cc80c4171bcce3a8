//! A [`TokenSource`](crate::token_source::TokenSource) for the doc-comment
//! micro-language (`@tag value free text ...`).

use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;

/// Lexer state. A tag name switches to [`DocLexState::AfterTagName`] so the
/// next word on the same line lexes as the tag's value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DocLexState {
    Initial,
    AfterTagName,
}

/// A lexer over the text of a single doc comment.
///
/// Produces [`TokenKind::Whitespace`], [`TokenKind::DocName`],
/// [`TokenKind::DocValue`] and [`TokenKind::DocText`] tokens. Every
/// non-whitespace character belongs to one of the word kinds, so this lexer
/// never produces [`TokenKind::Invalid`].
///
/// ```rust
/// use graphqle_parser::token::TokenKind;
/// use graphqle_parser::token_source::DocCommentTokenSource;
///
/// let kinds: Vec<TokenKind> = DocCommentTokenSource::new("@param foo bar")
///     .filter(|token| token.kind != TokenKind::Whitespace)
///     .map(|token| token.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::DocName, TokenKind::DocValue, TokenKind::DocText],
/// );
/// ```
pub struct DocCommentTokenSource<'src> {
    source: &'src str,
    curr_byte_offset: usize,
    end_byte_offset: usize,
    state: DocLexState,
}

impl<'src> DocCommentTokenSource<'src> {
    /// Creates a token source over all of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            end_byte_offset: source.len(),
            state: DocLexState::Initial,
        }
    }

    /// Creates a token source over the bytes of `source` covered by `span`.
    ///
    /// Spans of the produced tokens are offsets into `source`. A span that
    /// does not fall on character boundaries yields no tokens.
    pub fn with_range(source: &'src str, span: ByteSpan) -> Self {
        let mut lexer = Self::new(source);
        let start = span.start as usize;
        let end = span.end as usize;
        if start <= end && source.get(start..end).is_some() {
            lexer.curr_byte_offset = start;
            lexer.end_byte_offset = end;
        } else {
            lexer.curr_byte_offset = lexer.end_byte_offset;
        }
        lexer
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..self.end_byte_offset]
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        let end = self.curr_byte_offset;
        Token::new(
            kind,
            &self.source[start..end],
            ByteSpan::from_offsets(start, end),
        )
    }

    fn next_token(&mut self) -> Option<Token<'src>> {
        let start = self.curr_byte_offset;
        let first = self.remaining().chars().next()?;

        if is_doc_whitespace(first) {
            let run_len = self
                .remaining()
                .find(|ch: char| !is_doc_whitespace(ch))
                .unwrap_or(self.remaining().len());
            let run = &self.remaining()[..run_len];
            self.curr_byte_offset += run_len;
            if run.contains(['\n', '\r']) {
                self.state = DocLexState::Initial;
            }
            return Some(self.make_token(TokenKind::Whitespace, start));
        }

        let word_len = self
            .remaining()
            .find(is_doc_whitespace)
            .unwrap_or(self.remaining().len());
        let word = &self.remaining()[..word_len];
        self.curr_byte_offset += word_len;

        let kind = if is_tag_name(word) {
            self.state = DocLexState::AfterTagName;
            TokenKind::DocName
        } else {
            match self.state {
                DocLexState::AfterTagName => {
                    self.state = DocLexState::Initial;
                    TokenKind::DocValue
                },
                DocLexState::Initial => TokenKind::DocText,
            }
        };

        Some(self.make_token(kind, start))
    }
}

impl<'src> Iterator for DocCommentTokenSource<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for DocCommentTokenSource<'_> {}

fn is_doc_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// `@` followed by a GraphQL name start.
fn is_tag_name(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some('@')
        && chars.next().is_some_and(|ch| ch == '_' || ch.is_ascii_alphabetic())
}

/// Lexes the text of one doc comment.
pub fn lex_doc_comment(text: &str) -> Vec<Token<'_>> {
    DocCommentTokenSource::new(text).collect()
}

/// Lexes the doc comment covered by `span` within `source`.
pub fn lex_doc_comment_range(source: &str, span: ByteSpan) -> Vec<Token<'_>> {
    DocCommentTokenSource::with_range(source, span).collect()
}
