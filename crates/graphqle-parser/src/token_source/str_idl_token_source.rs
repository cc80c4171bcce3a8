//! A [`TokenSource`](crate::token_source::TokenSource) that lexes GraphQL
//! Endpoint IDL from a `&str` input.
//!
//! This lexer is lossless: whitespace, commas and comments are emitted as
//! trivia tokens, and characters that match no lexical rule become
//! single-character [`TokenKind::Invalid`] tokens. Concatenating the text of
//! every emitted token reproduces the lexed input exactly.
//!
//! # Usage
//!
//! ```rust
//! use graphqle_parser::token::TokenKind;
//! use graphqle_parser::token_source::StrIdlTokenSource;
//!
//! let kinds: Vec<TokenKind> = StrIdlTokenSource::new("type Foo")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Type, TokenKind::Whitespace, TokenKind::Identifier],
//! );
//! ```

use crate::token::find_block_string_end;
use crate::token::KeywordTable;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token::IDL_KEYWORDS;
use crate::ByteSpan;

/// A lexer over a `&str` of GraphQL Endpoint IDL.
///
/// Token spans are byte offsets into the full `source`, even when lexing
/// starts at an offset or is limited to a sub-range.
pub struct StrIdlTokenSource<'src> {
    /// The full source text. Never re-sliced, so spans stay absolute.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Byte offset at which lexing stops (exclusive).
    end_byte_offset: usize,

    keywords: &'static KeywordTable,
}

impl<'src> StrIdlTokenSource<'src> {
    /// Creates a token source over all of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            end_byte_offset: source.len(),
            keywords: &IDL_KEYWORDS,
        }
    }

    /// Creates a token source that starts lexing at `offset`.
    ///
    /// An offset past the end of `source` or inside a multi-byte character
    /// yields an empty token source.
    pub fn starting_at(source: &'src str, offset: usize) -> Self {
        let mut lexer = Self::new(source);
        if source.is_char_boundary(offset) {
            lexer.curr_byte_offset = offset;
        } else {
            lexer.curr_byte_offset = source.len();
        }
        lexer
    }

    /// Creates a token source limited to the bytes covered by `span`.
    ///
    /// Keyword lookahead never looks past the end of `span`.
    pub fn with_range(source: &'src str, span: ByteSpan) -> Self {
        let mut lexer = Self::new(source);
        let start = span.start as usize;
        let end = span.end as usize;
        if start <= end && source.get(start..end).is_some() {
            lexer.curr_byte_offset = start;
            lexer.end_byte_offset = end;
        } else {
            lexer.curr_byte_offset = source.len();
        }
        lexer
    }

    /// Replaces the keyword table used to classify names.
    pub fn with_keywords(mut self, keywords: &'static KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// Returns the current byte offset into the source.
    pub fn offset(&self) -> usize {
        self.curr_byte_offset
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..self.end_byte_offset]
    }

    /// Peeks at the next character without consuming it.
    ///
    /// Returns `None` if at end of input.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the byte at the current offset.
    ///
    /// Every character that can start or continue a non-`Invalid` token is
    /// ASCII, so most decisions only need to look at bytes.
    fn peek_byte(&self) -> Option<u8> {
        self.remaining().as_bytes().first().copied()
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.remaining().as_bytes().get(n).copied()
    }

    /// Consumes the next character.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes ASCII bytes while `pred` holds.
    fn consume_ascii_while(&mut self, pred: impl Fn(u8) -> bool) {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| b.is_ascii() && pred(*b))
            .count();
        self.curr_byte_offset += len;
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        let end = self.curr_byte_offset;
        Token::new(
            kind,
            &self.source[start..end],
            ByteSpan::from_offsets(start, end),
        )
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Lexes the next token, or returns `None` at end of input.
    fn next_token(&mut self) -> Option<Token<'src>> {
        let start = self.curr_byte_offset;
        let ch = self.peek_char()?;

        let token = match ch {
            ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => self.lex_whitespace(start),

            '#' => self.lex_comment(start),

            ',' => self.lex_punctuator(start, TokenKind::Comma),

            '&' => self.lex_punctuator(start, TokenKind::Ampersand),
            '@' => self.lex_punctuator(start, TokenKind::At),
            '!' => self.lex_punctuator(start, TokenKind::Bang),
            ':' => self.lex_punctuator(start, TokenKind::Colon),
            '}' => self.lex_punctuator(start, TokenKind::CurlyBraceClose),
            '{' => self.lex_punctuator(start, TokenKind::CurlyBraceOpen),
            '=' => self.lex_punctuator(start, TokenKind::Equals),
            ')' => self.lex_punctuator(start, TokenKind::ParenClose),
            '(' => self.lex_punctuator(start, TokenKind::ParenOpen),
            '|' => self.lex_punctuator(start, TokenKind::Pipe),
            ']' => self.lex_punctuator(start, TokenKind::SquareBracketClose),
            '[' => self.lex_punctuator(start, TokenKind::SquareBracketOpen),

            '"' => self.lex_string(start),

            c if is_name_start(c) => self.lex_name(start),

            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),

            _ => self.lex_invalid_character(start),
        };

        Some(token)
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    /// Lexes a run of whitespace into a single token.
    ///
    /// Whitespace is space, tab, the line terminators LF and CR, and the
    /// Unicode BOM (U+FEFF), which GraphQL ignores anywhere in a document.
    fn lex_whitespace(&mut self, start: usize) -> Token<'src> {
        while let Some(ch) = self.peek_char() {
            if !is_whitespace(ch) {
                break;
            }
            self.consume();
        }
        self.make_token(TokenKind::Whitespace, start)
    }

    /// Lexes a `#` comment up to, but excluding, the line terminator.
    fn lex_comment(&mut self, start: usize) -> Token<'src> {
        let rest = self.remaining().as_bytes();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.curr_byte_offset += len;
        self.make_token(TokenKind::Comment, start)
    }

    fn lex_punctuator(&mut self, start: usize, kind: TokenKind) -> Token<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name, keyword or keyword demoted to a name.
    ///
    /// Names match the pattern `/[_A-Za-z][_0-9A-Za-z]*/`. A name that is a
    /// reserved word keeps its keyword kind unless the next non-whitespace
    /// character is `:` or `(`, in which case it is a field or argument
    /// name and is emitted as [`TokenKind::Identifier`].
    fn lex_name(&mut self, start: usize) -> Token<'src> {
        self.consume_ascii_while(|b| b == b'_' || b.is_ascii_alphanumeric());
        let name = &self.source[start..self.curr_byte_offset];

        let kind = match self.keywords.lookup(name) {
            Some(_) if self.followed_by_name_suffix() => TokenKind::Identifier,
            Some(keyword) => keyword,
            None => TokenKind::Identifier,
        };

        self.make_token(kind, start)
    }

    /// Looks past whitespace for a `:` or `(`. Consumes nothing.
    fn followed_by_name_suffix(&self) -> bool {
        let next = self.remaining().chars().find(|ch| !is_whitespace(*ch));
        matches!(next, Some(':') | Some('('))
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Accepts `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`. Leading zeros are
    /// accepted. A `.` or exponent marker that is not followed by digits is
    /// left for the next token, and a `-` without digits is `Invalid`.
    fn lex_number(&mut self, start: usize) -> Token<'src> {
        let mut is_float = false;

        if self.peek_byte() == Some(b'-') {
            if !matches!(self.peek_byte_nth(1), Some(b) if b.is_ascii_digit()) {
                return self.lex_invalid_character(start);
            }
            self.consume();
        }

        self.consume_ascii_while(|b| b.is_ascii_digit());

        if self.peek_byte() == Some(b'.')
            && matches!(self.peek_byte_nth(1), Some(b) if b.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_ascii_while(|b| b.is_ascii_digit());
        }

        if matches!(self.peek_byte(), Some(b'e') | Some(b'E')) {
            let digits_at = match self.peek_byte_nth(1) {
                Some(b'+') | Some(b'-') => 2,
                _ => 1,
            };
            if matches!(self.peek_byte_nth(digits_at), Some(b) if b.is_ascii_digit()) {
                is_float = true;
                self.curr_byte_offset += digits_at;
                self.consume_ascii_while(|b| b.is_ascii_digit());
            }
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    ///
    /// An unterminated single-line string ends before the line terminator;
    /// an unterminated block string runs to the end of input. Both are still
    /// emitted as [`TokenKind::StringLiteral`] and reported by the parser.
    fn lex_string(&mut self, start: usize) -> Token<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => break,
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        self.make_token(TokenKind::StringLiteral, start)
    }

    fn lex_block_string(&mut self, start: usize) -> Token<'src> {
        let body_start = self.curr_byte_offset + 3;
        let scanned = &self.source[..self.end_byte_offset];
        self.curr_byte_offset = find_block_string_end(scanned, body_start)
            .unwrap_or(self.end_byte_offset);

        self.make_token(TokenKind::StringLiteral, start)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    /// Consumes one character as an [`TokenKind::Invalid`] token.
    fn lex_invalid_character(&mut self, start: usize) -> Token<'src> {
        self.consume();
        self.make_token(TokenKind::Invalid, start)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrIdlTokenSource<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for StrIdlTokenSource<'_> {}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` for the characters that form [`TokenKind::Whitespace`].
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}')
}

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Lexes the token that starts at `start_offset`, or returns `None` at end
/// of input.
///
/// Restarting at the start of any token returned by [`lex_all()`] yields
/// that same token.
pub fn lex(text: &str, start_offset: usize) -> Option<Token<'_>> {
    StrIdlTokenSource::starting_at(text, start_offset).next()
}

/// Lexes all of `text`, trivia and `Invalid` tokens included.
pub fn lex_all(text: &str) -> Vec<Token<'_>> {
    StrIdlTokenSource::new(text).collect()
}
