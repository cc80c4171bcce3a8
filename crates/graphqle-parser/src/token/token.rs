use crate::token::TokenKind;
use crate::ByteSpan;

/// A lexed token: its kind, the exact source text it covers and its span.
///
/// `text` borrows from the source buffer handed to the lexer, so tokens are
/// zero-copy. Tokens are immutable once produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Token<'src> {
    /// The kind of token (including `Invalid` for lexer errors).
    pub kind: TokenKind,

    /// The source text of this token.
    pub text: &'src str,

    /// The byte span of this token in the source buffer.
    pub span: ByteSpan,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'src str, span: ByteSpan) -> Self {
        debug_assert_eq!(
            text.len(),
            span.len() as usize,
            "token text does not match its span",
        );
        Self { kind, text, span }
    }

    /// Byte offset of the first byte of this token.
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// Byte offset one past the last byte of this token.
    pub fn end(&self) -> u32 {
        self.span.end
    }

    /// Returns `true` for whitespace, comments and commas.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Returns `true` if this is a string literal missing its closing
    /// quote(s).
    pub fn is_unterminated_string(&self) -> bool {
        if self.kind != TokenKind::StringLiteral {
            return false;
        }
        if self.text.starts_with("\"\"\"") {
            find_block_string_end(self.text, 3) != Some(self.text.len())
        } else {
            self.text.len() < 2
                || !self.text.ends_with('"')
                || ends_with_escaped_quote(self.text)
        }
    }

    /// For comment tokens, the comment body after the leading `#`.
    pub fn comment_body(&self) -> Option<&'src str> {
        match self.kind {
            TokenKind::Comment => self.text.strip_prefix('#'),
            _ => None,
        }
    }
}

/// Returns the offset just past the first unescaped `"""` in `text` at or
/// after `from`, or `None` if the block string is never closed.
///
/// Inside a block string only `\"""` is an escape.
pub(crate) fn find_block_string_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut offset = from;
    loop {
        offset += memchr::memchr2(b'\\', b'"', bytes.get(offset..)?)?;
        let rest = &bytes[offset..];
        if rest.starts_with(b"\\\"\"\"") {
            offset += 4;
        } else if rest.starts_with(b"\"\"\"") {
            return Some(offset + 3);
        } else {
            offset += 1;
        }
    }
}

/// Returns `true` if the trailing `"` of `text` is escaped by an odd number
/// of backslashes.
fn ends_with_escaped_quote(text: &str) -> bool {
    let without_quote = &text[..text.len() - 1];
    let backslashes = without_quote
        .bytes()
        .rev()
        .take_while(|b| *b == b'\\')
        .count();
    backslashes % 2 == 1
}
