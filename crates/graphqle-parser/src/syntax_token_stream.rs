//! Token cursor and event recorder shared by the IDL and doc-comment
//! parsers.

use crate::event::Event;
use crate::syntax::build_tree;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::TokenSource;
use crate::ByteSpan;
use crate::Marker;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseResult;
use smallvec::SmallVec;

/// Token stream over a fully lexed input, with a marker builder that records
/// tree structure as a flat list of [`Event`]s.
///
/// The stream owns every token the lexer produced, trivia included, but the
/// cursor only moves over significant (non-trivia) tokens. Trivia is put back
/// in place by [`finish()`](Self::finish) when the tree is built.
///
/// Once all significant tokens are consumed, [`current()`](Self::current)
/// reports [`TokenKind::Eof`].
///
/// # Recursion guard
///
/// [`enter_rule()`](Self::enter_rule) / [`exit_rule()`](Self::exit_rule)
/// track the active `(rule, position)` pairs. Re-entering a rule at the same
/// position without consuming input, or nesting deeper than
/// [`MAX_RULE_DEPTH`](Self::MAX_RULE_DEPTH), makes `enter_rule()` return
/// `false` so the rule reports "no match" instead of looping or overflowing
/// the stack.
pub struct SyntaxTokenStream<'src> {
    tokens: Vec<Token<'src>>,

    /// Indices into `tokens` of the significant tokens, in order.
    significant: Vec<usize>,

    /// Cursor into `significant`.
    pos: usize,

    /// The span the finished tree's root covers.
    root_span: ByteSpan,

    pub(crate) events: Vec<Event>,

    /// Event positions of the markers that are still open, innermost last.
    pub(crate) open_markers: SmallVec<[usize; 16]>,

    active_rules: SmallVec<[(&'static str, usize); 32]>,

    errors: Vec<ParseError>,
}

impl<'src> SyntaxTokenStream<'src> {
    /// Maximum number of simultaneously active guarded rules.
    ///
    /// Bounds the parser's stack use on inputs like `[[[[[...`. 64 levels is
    /// far beyond any realistic schema while staying safe in debug builds.
    pub const MAX_RULE_DEPTH: usize = 64;

    /// Creates a stream over all tokens of `token_source`. The finished
    /// tree's root covers `[0, source.len())`.
    pub fn new(source: &'src str, token_source: impl TokenSource<'src>) -> Self {
        Self::with_root_span(
            ByteSpan::from_offsets(0, source.len()),
            token_source,
        )
    }

    /// Creates a stream whose finished tree's root covers `root_span`, for
    /// parsing a sub-range of a larger buffer.
    pub fn with_root_span(
        root_span: ByteSpan,
        token_source: impl TokenSource<'src>,
    ) -> Self {
        let tokens: Vec<Token<'src>> = token_source.collect();
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_trivia())
            .map(|(idx, _)| idx)
            .collect();
        Self {
            tokens,
            significant,
            pos: 0,
            root_span,
            events: Vec::new(),
            open_markers: SmallVec::new(),
            active_rules: SmallVec::new(),
            errors: Vec::new(),
        }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// The kind of the current significant token, or [`TokenKind::Eof`].
    pub fn current(&self) -> TokenKind {
        self.nth(0)
    }

    /// The current significant token, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token<'src>> {
        self.nth_token(0)
    }

    /// The kind of the significant token `n` positions ahead.
    pub fn nth(&self, n: usize) -> TokenKind {
        self.nth_token(n).map_or(TokenKind::Eof, |token| token.kind)
    }

    /// The significant token `n` positions ahead.
    pub fn nth_token(&self, n: usize) -> Option<&Token<'src>> {
        self.significant
            .get(self.pos + n)
            .map(|idx| &self.tokens[*idx])
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current())
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.significant.len()
    }

    /// Index of the current significant token. Strictly increases as the
    /// parser makes progress.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The span of the current token, or an empty span at the end of the
    /// input.
    pub fn current_span(&self) -> ByteSpan {
        self.current_token()
            .map_or(ByteSpan::empty_at(self.root_span.end), |token| token.span)
    }

    /// Consumes the current significant token into the innermost open node.
    ///
    /// `Invalid` tokens and unterminated strings are reported as
    /// [`ParseErrorKind::LexerError`] as they are consumed. Does nothing at
    /// end of input.
    pub fn advance(&mut self) {
        let Some(token) = self.current_token().copied() else {
            return;
        };
        self.report_lexer_error(&token);
        self.events.push(Event::Token);
        self.pos += 1;
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes a token of `kind`, or records an "expected" error and
    /// consumes nothing.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_expected(&[kind.display_name()]);
        false
    }

    fn report_lexer_error(&mut self, token: &Token<'src>) {
        if token.kind == TokenKind::Invalid {
            self.errors.push(ParseError::new(
                format!("unexpected character `{}`", token.text),
                token.span,
                ParseErrorKind::LexerError,
            ));
        } else if token.is_unterminated_string() {
            let mut error = ParseError::new(
                "unterminated string literal",
                token.span,
                ParseErrorKind::LexerError,
            );
            if token.text.starts_with("\"\"\"") {
                error.add_help("add closing `\"\"\"`");
            } else {
                error.add_help(
                    "add closing `\"`, or use a block string (triple quotes) \
                     for multi-line strings",
                );
            }
            self.errors.push(error);
        }
    }

    // =========================================================================
    // Markers
    // =========================================================================

    /// Opens a node at the current position.
    pub fn mark(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Tombstone);
        self.open_markers.push(pos);
        Marker::new(pos)
    }

    /// Number of markers currently open.
    pub fn open_marker_count(&self) -> usize {
        self.open_markers.len()
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Registers `rule` as active at the current position.
    ///
    /// Returns `false` (and registers nothing) if `rule` is already active at
    /// this position, or if [`MAX_RULE_DEPTH`](Self::MAX_RULE_DEPTH) rules
    /// are already active. The depth case also records a
    /// [`ParseErrorKind::NestingTooDeep`] error. Every `true` must be paired
    /// with an [`exit_rule()`](Self::exit_rule).
    pub fn enter_rule(&mut self, rule: &'static str) -> bool {
        let pos = self.pos;
        if self
            .active_rules
            .iter()
            .any(|(active, active_pos)| *active == rule && *active_pos == pos)
        {
            return false;
        }
        if self.active_rules.len() >= Self::MAX_RULE_DEPTH {
            self.errors.push(ParseError::new(
                "maximum nesting depth exceeded",
                self.current_span(),
                ParseErrorKind::NestingTooDeep,
            ));
            return false;
        }
        self.active_rules.push((rule, pos));
        true
    }

    /// Unregisters the most recently entered rule.
    pub fn exit_rule(&mut self) {
        let popped = self.active_rules.pop();
        debug_assert!(popped.is_some(), "exit_rule() without enter_rule()");
    }

    /// Number of rules currently active.
    pub fn rule_depth(&self) -> usize {
        self.active_rules.len()
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Records an error at the current token.
    pub fn error(&mut self, message: impl Into<String>, kind: ParseErrorKind) {
        let span = self.current_span();
        self.errors.push(ParseError::new(message, span, kind));
    }

    /// Records a fully built error.
    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Records "expected X, found Y" at the current token, or "expected X"
    /// at the end of input.
    pub fn error_expected(&mut self, expected: &[&str]) {
        let expected_list = format_expected(expected);
        let expected_vec = expected.iter().map(|e| e.to_string()).collect();
        let error = match self.current_token() {
            None => ParseError::new(
                format!("expected {expected_list}, found end of input"),
                self.current_span(),
                ParseErrorKind::UnexpectedEof {
                    expected: expected_vec,
                },
            ),
            Some(token) => ParseError::new(
                format!("expected {expected_list}, found `{}`", token.text),
                token.span,
                ParseErrorKind::UnexpectedToken {
                    expected: expected_vec,
                    found: token.text.to_string(),
                },
            ),
        };
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // =========================================================================
    // Finishing
    // =========================================================================

    /// Builds the tree from the recorded events.
    pub fn finish(self) -> ParseResult<'src> {
        debug_assert!(
            self.open_markers.is_empty(),
            "finish() called with {} open marker(s)",
            self.open_markers.len(),
        );
        let tree = build_tree(&self.tokens, &self.events, self.root_span);
        ParseResult::new(tree, self.tokens, self.errors)
    }
}

/// Formats `["a", "b", "c"]` as "`a`, `b` or `c`".
fn format_expected(expected: &[&str]) -> String {
    let quoted: Vec<String> = expected.iter().map(|e| format!("`{e}`")).collect();
    match quoted.as_slice() {
        [] => "token".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
