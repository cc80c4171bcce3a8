/// The kind of a token.
///
/// A single closed enumeration covers both the IDL lexer and the doc-comment
/// lexer. Kinds carry no payload: the token text is always a slice of the
/// source (see [`Token`](crate::token::Token)), so values are parsed from the
/// text when needed.
///
/// # Keywords
///
/// Reserved words are only produced when the lexer's trailing-context
/// lookahead does not see a `:` or `(` after them. `type: String` lexes
/// `type` as [`TokenKind::Identifier`]; `type Foo` lexes it as
/// [`TokenKind::Type`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TokenKind {
    // =========================================================================
    // Trivia (preserved in the tree, skipped by the parser)
    // =========================================================================
    /// A run of spaces, tabs, line terminators and byte-order marks.
    Whitespace,
    /// A `#` comment up to (excluding) the end of the line.
    Comment,
    /// `,` which GraphQL treats as insignificant.
    Comma,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Keywords
    // =========================================================================
    /// `enum`
    Enum,
    /// `implements`
    Implements,
    /// `import`
    Import,
    /// `input`
    Input,
    /// `interface`
    Interface,
    /// `scalar`
    Scalar,
    /// `schema`
    Schema,
    /// `type`
    Type,
    /// `union`
    Union,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name that is not a keyword (or a keyword demoted by lookahead).
    Identifier,
    /// A `"..."` or `"""..."""` string, quotes included. May be unterminated.
    StringLiteral,
    /// An integer literal, including an optional leading `-`.
    IntLiteral,
    /// A float literal, including an optional leading `-`.
    FloatLiteral,

    // =========================================================================
    // Doc-comment micro-language
    // =========================================================================
    /// `@name` at the start of a doc-comment tag.
    DocName,
    /// The word following a [`TokenKind::DocName`].
    DocValue,
    /// Any other word of doc-comment text.
    DocText,

    // =========================================================================
    // Errors and sentinels
    // =========================================================================
    /// A single character that matches no lexical rule.
    Invalid,
    /// End of input. Returned by the token stream once all tokens are
    /// consumed; lexers never emit it.
    Eof,
}

impl TokenKind {
    /// Returns `true` for tokens the parser skips over (whitespace,
    /// comments and commas). Trivia still ends up in the syntax tree.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma
        )
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::SquareBracketClose => Some("]"),
            TokenKind::SquareBracketOpen => Some("["),

            TokenKind::Whitespace
            | TokenKind::Comment
            | TokenKind::Comma
            | TokenKind::Enum
            | TokenKind::Implements
            | TokenKind::Import
            | TokenKind::Input
            | TokenKind::Interface
            | TokenKind::Scalar
            | TokenKind::Schema
            | TokenKind::Type
            | TokenKind::Union
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Identifier
            | TokenKind::StringLiteral
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::DocName
            | TokenKind::DocValue
            | TokenKind::DocText
            | TokenKind::Invalid
            | TokenKind::Eof => None,
        }
    }

    /// Returns the reserved word for keyword kinds.
    pub fn as_keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Enum => Some("enum"),
            TokenKind::Implements => Some("implements"),
            TokenKind::Import => Some("import"),
            TokenKind::Input => Some("input"),
            TokenKind::Interface => Some("interface"),
            TokenKind::Scalar => Some("scalar"),
            TokenKind::Schema => Some("schema"),
            TokenKind::Type => Some("type"),
            TokenKind::Union => Some("union"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),

            TokenKind::Whitespace
            | TokenKind::Comment
            | TokenKind::Comma
            | TokenKind::Ampersand
            | TokenKind::At
            | TokenKind::Bang
            | TokenKind::Colon
            | TokenKind::CurlyBraceClose
            | TokenKind::CurlyBraceOpen
            | TokenKind::Equals
            | TokenKind::ParenClose
            | TokenKind::ParenOpen
            | TokenKind::Pipe
            | TokenKind::SquareBracketClose
            | TokenKind::SquareBracketOpen
            | TokenKind::Identifier
            | TokenKind::StringLiteral
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::DocName
            | TokenKind::DocValue
            | TokenKind::DocText
            | TokenKind::Invalid
            | TokenKind::Eof => None,
        }
    }

    /// Returns `true` if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        self.as_keyword_str().is_some()
    }

    /// Returns `true` for the keywords that introduce a top-level
    /// definition.
    pub fn is_definition_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Enum
                | TokenKind::Import
                | TokenKind::Input
                | TokenKind::Interface
                | TokenKind::Scalar
                | TokenKind::Schema
                | TokenKind::Type
                | TokenKind::Union
        )
    }

    /// Returns `true` if this token can be read as a GraphQL name:
    /// an identifier or any keyword.
    pub fn is_name_like(&self) -> bool {
        matches!(self, TokenKind::Identifier) || self.is_keyword()
    }

    /// Returns `true` if this token can start a value.
    pub fn is_value_start(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Identifier
                | TokenKind::SquareBracketOpen
                | TokenKind::CurlyBraceOpen
        )
    }

    /// Returns a human-readable description for error messages.
    pub fn display_name(&self) -> &'static str {
        if let Some(punctuator) = self.as_punctuator_str() {
            return punctuator;
        }
        if let Some(keyword) = self.as_keyword_str() {
            return keyword;
        }
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Comma => ",",
            TokenKind::Identifier => "name",
            TokenKind::StringLiteral => "string",
            TokenKind::IntLiteral => "integer",
            TokenKind::FloatLiteral => "float",
            TokenKind::DocName => "tag name",
            TokenKind::DocValue => "tag value",
            TokenKind::DocText => "text",
            TokenKind::Invalid => "invalid character",
            TokenKind::Eof => "end of input",
            _ => "token",
        }
    }
}
