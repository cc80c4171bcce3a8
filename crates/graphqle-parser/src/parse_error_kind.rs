/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` field of
/// [`ParseError`](crate::ParseError).
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `ParseError::message()`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
pub enum ParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. `[":", "{"]`).
        expected: Vec<String>,
        /// The text of the token that was found.
        found: String,
    },

    /// The input ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// type User
    ///          ^ expected `{`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the input ended.
        expected: Vec<String>,
    },

    /// An `Invalid` token or an unterminated string literal.
    ///
    /// The lexer never fails; the parser reports these tokens when it meets
    /// them.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `(` or `[` that was never closed.
    ///
    /// The opening location is included in the error's notes.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g., `"{"`, `"["`, `"("`).
        delimiter: String,
    },

    /// A schema definition entry whose operation name is not `query`,
    /// `mutation` or `subscription`.
    ///
    /// # Example
    /// ```text
    /// schema { read: Query }
    ///          ^^^^ expected `query`, `mutation` or `subscription`
    /// ```
    #[error("invalid operation type: `{name}`")]
    InvalidOperationType {
        /// The name that was used instead.
        name: String,
    },

    /// Nesting exceeded the parser's depth limit.
    ///
    /// The construct at the limit is left unparsed so that deeply nested
    /// input cannot overflow the stack.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}
