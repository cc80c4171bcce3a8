//! Recursive-descent parser for the GraphQL Endpoint IDL.

use crate::syntax::NodeKind;
use crate::token::TokenKind;
use crate::token_source::StrIdlTokenSource;
use crate::ByteSpan;
use crate::CompletedMarker;
use crate::Marker;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseResult;
use crate::SyntaxTokenStream;
use smallvec::SmallVec;

// =============================================================================
// Delimiter tracking for error recovery
// =============================================================================

/// Context in which a delimiter was opened, for error messages.
#[derive(Clone, Copy, Debug)]
enum DelimiterContext {
    /// `schema { ... }`
    SchemaDefinition,
    /// `type Foo { ... }` and `interface Foo { ... }`
    FieldsDefinition,
    /// `input Foo { ... }`
    InputObjectDefinition,
    /// `enum Foo { ... }`
    EnumDefinition,
    /// `field(arg: Type)`
    ArgumentsDefinition,
    /// `@Annotation(arg: value)`
    AnnotationArguments,
    /// `[Type]`
    ListType,
    /// `[value, ...]`
    ListValue,
    /// `{ field: value }`
    ObjectValue,
}

impl DelimiterContext {
    /// Returns a human-readable description of this context.
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SchemaDefinition => "schema definition",
            DelimiterContext::FieldsDefinition => "fields definition",
            DelimiterContext::InputObjectDefinition => "input object definition",
            DelimiterContext::EnumDefinition => "enum definition",
            DelimiterContext::ArgumentsDefinition => "arguments definition",
            DelimiterContext::AnnotationArguments => "annotation arguments",
            DelimiterContext::ListType => "list type",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }

    /// The opening and closing token kinds.
    fn delimiters(&self) -> (TokenKind, TokenKind) {
        match self {
            DelimiterContext::SchemaDefinition
            | DelimiterContext::FieldsDefinition
            | DelimiterContext::InputObjectDefinition
            | DelimiterContext::EnumDefinition
            | DelimiterContext::ObjectValue => {
                (TokenKind::CurlyBraceOpen, TokenKind::CurlyBraceClose)
            },
            DelimiterContext::ArgumentsDefinition
            | DelimiterContext::AnnotationArguments => {
                (TokenKind::ParenOpen, TokenKind::ParenClose)
            },
            DelimiterContext::ListType | DelimiterContext::ListValue => {
                (TokenKind::SquareBracketOpen, TokenKind::SquareBracketClose)
            },
        }
    }
}

/// Tracks an open delimiter for error recovery.
#[derive(Clone, Copy, Debug)]
struct OpenDelimiter {
    /// Where the delimiter was opened.
    span: ByteSpan,
    context: DelimiterContext,
}

/// A definition alternative. Returns the marker unused when the current
/// token does not start this alternative.
type DefinitionRule<'src> =
    fn(&mut IdlParser<'src>, Marker) -> Result<CompletedMarker, Marker>;

/// A member rule inside a delimited block. Returns `true` if it consumed
/// input.
type MemberRule<'src> = fn(&mut IdlParser<'src>) -> bool;

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive-descent parser for GraphQL Endpoint IDL documents.
///
/// The parser never fails: malformed input produces `Error` nodes and
/// `malformed` nodes inside a complete tree, plus [`ParseError`]s.
///
/// # Usage
///
/// ```
/// use graphqle_parser::syntax::NodeKind;
/// use graphqle_parser::IdlParser;
///
/// let source = "type Query { hello: String }";
/// let result = IdlParser::new(source).parse_document();
///
/// assert!(result.is_ok());
/// let definition = result.tree().child_nodes().next().unwrap();
/// assert_eq!(definition.kind, NodeKind::ObjectTypeDefinition);
/// ```
///
/// # Error recovery
///
/// - Definitions pin on their keyword, fields and input values on their
///   name, annotations on `@`: once pinned, a failure produces a
///   `malformed` node covering what was consumed, and parsing continues.
/// - At the top level, tokens that start no definition are grouped into a
///   single `Error` node up to the next definition start.
/// - Inside a delimited block, a token that starts no member becomes a
///   single-token `Error` node.
/// - A definition keyword that looks like the start of a definition (e.g.
///   `type Foo`) ends any open block, so a missing `}` does not swallow the
///   rest of the document.
pub struct IdlParser<'src> {
    stream: SyntaxTokenStream<'src>,

    /// Stack of open delimiters for error recovery.
    ///
    /// Uses SmallVec to avoid heap allocation for typical nesting depths.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,
}

impl<'src> IdlParser<'src> {
    /// Ordered choice over definition kinds: the first alternative whose
    /// keyword matches wins.
    const DEFINITION_ALTERNATIVES: [DefinitionRule<'src>; 8] = [
        Self::schema_definition,
        Self::object_type_definition,
        Self::interface_type_definition,
        Self::input_object_type_definition,
        Self::enum_type_definition,
        Self::union_type_definition,
        Self::scalar_type_definition,
        Self::import_declaration,
    ];

    /// Creates a new parser over `source`.
    pub fn new(source: &'src str) -> Self {
        Self::from_stream(SyntaxTokenStream::new(
            source,
            StrIdlTokenSource::new(source),
        ))
    }

    /// Creates a parser over an already configured token stream.
    pub fn from_stream(stream: SyntaxTokenStream<'src>) -> Self {
        Self {
            stream,
            delimiter_stack: SmallVec::new(),
        }
    }

    /// Parses a whole document.
    pub fn parse_document(mut self) -> ParseResult<'src> {
        self.document();
        self.stream.finish()
    }

    // =========================================================================
    // Lookahead helpers
    // =========================================================================

    /// Checks if the current keyword looks like the start of a definition by
    /// peeking at the next tokens.
    ///
    /// This avoids false recovery points like an enum value named `input`
    /// followed by `}`. Inside a block the name must also be followed by
    /// something only a definition has, so `enum Kind { type input }` keeps
    /// both values.
    fn at_definition_keyword_start(&self) -> bool {
        if !self.keyword_starts_definition(0) {
            return false;
        }
        match self.stream.current() {
            TokenKind::Schema | TokenKind::Import => true,
            _ => self.delimiter_stack.is_empty() || self.continues_definition_header(2),
        }
    }

    /// Returns `true` if the token `n` ahead is a definition keyword followed
    /// by what that definition needs next.
    fn keyword_starts_definition(&self, n: usize) -> bool {
        let next = self.stream.nth(n + 1);
        match self.stream.nth(n) {
            TokenKind::Type
            | TokenKind::Interface
            | TokenKind::Input
            | TokenKind::Enum
            | TokenKind::Union
            | TokenKind::Scalar => next.is_name_like(),
            TokenKind::Schema => next == TokenKind::CurlyBraceOpen,
            TokenKind::Import => next == TokenKind::StringLiteral,
            _ => false,
        }
    }

    /// Whether the token `n` ahead can follow the name of a definition:
    /// its body, `=`, `implements`, an annotation, the end of input or the
    /// next definition.
    fn continues_definition_header(&self, n: usize) -> bool {
        match self.stream.nth(n) {
            TokenKind::CurlyBraceOpen
            | TokenKind::Equals
            | TokenKind::Implements
            | TokenKind::At
            | TokenKind::Eof => true,
            _ => self.keyword_starts_definition(n),
        }
    }

    /// Top-level recovery point: a definition keyword start, a description
    /// before a definition keyword, or an annotation.
    fn at_definition_start(&self) -> bool {
        if self.at_definition_keyword_start() {
            return true;
        }
        let next = self.stream.nth(1);
        match self.stream.current() {
            TokenKind::StringLiteral => {
                next.is_definition_keyword() || next == TokenKind::At
            },
            TokenKind::At => next.is_name_like(),
            _ => false,
        }
    }

    /// Names may reuse keywords, except a definition keyword that looks
    /// like the start of the next definition.
    fn at_name(&self) -> bool {
        self.stream.current().is_name_like() && !self.at_definition_keyword_start()
    }

    /// Returns `true` if the current token closes a delimiter that is open
    /// further out.
    fn at_enclosing_closer(&self) -> bool {
        let current = self.stream.current();
        self.delimiter_stack
            .iter()
            .any(|open| open.context.delimiters().1 == current)
    }

    // =========================================================================
    // Recursion guard and error helpers
    // =========================================================================

    /// Runs `rule` inside the stream's recursion guard. Returns `false`
    /// without running it if the guard trips.
    fn guarded(&mut self, rule: &'static str, f: impl FnOnce(&mut Self) -> bool) -> bool {
        if !self.stream.enter_rule(rule) {
            return false;
        }
        let matched = f(self);
        self.stream.exit_rule();
        matched
    }

    /// Wraps the current token in an `Error` node.
    ///
    /// `Invalid` tokens are reported by the stream when consumed, and a token
    /// that already has an error (e.g. a nesting limit) gets no second one.
    fn error_token(&mut self, expected: &str) {
        let m = self.stream.mark();
        if !self.stream.at(TokenKind::Invalid) && !self.reported_at_current() {
            self.stream.error_expected(&[expected]);
        }
        self.stream.advance();
        m.complete(&mut self.stream, NodeKind::Error);
    }

    /// Returns `true` if the most recent error is at or after the current
    /// token.
    fn reported_at_current(&self) -> bool {
        let current = self.stream.current_span().start;
        self.stream
            .errors()
            .last()
            .is_some_and(|error| error.span().start >= current)
    }

    fn report_unclosed(&mut self, open: OpenDelimiter) {
        let (open_kind, _) = open.context.delimiters();
        let delimiter = open_kind.display_name();
        let mut error = ParseError::new(
            format!("unclosed `{delimiter}` in {}", open.context.description()),
            self.stream.current_span(),
            ParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        error.add_note_with_span(format!("`{delimiter}` opened here"), open.span);
        self.stream.push_error(error);
    }

    /// Consumes the closing delimiter of `open`, or reports why it is
    /// missing.
    fn close_delimiter(&mut self, open: OpenDelimiter) -> bool {
        let (_, close) = open.context.delimiters();
        if self.stream.eat(close) {
            return true;
        }
        if self.stream.at_end() {
            self.report_unclosed(open);
        } else {
            self.stream.error_expected(&[close.display_name()]);
        }
        false
    }

    /// Parses `open member* close`, the shape shared by every block.
    ///
    /// Returns `true` if the block was closed.
    fn delimited(
        &mut self,
        context: DelimiterContext,
        member: MemberRule<'src>,
        expected_member: &str,
    ) -> bool {
        let (open_kind, close) = context.delimiters();
        let open = OpenDelimiter {
            span: self.stream.current_span(),
            context,
        };
        if !self.stream.expect(open_kind) {
            return false;
        }

        self.delimiter_stack.push(open);
        let closed = loop {
            if self.stream.eat(close) {
                break true;
            }
            if self.stream.at_end() {
                self.report_unclosed(open);
                break false;
            }
            if self.at_definition_keyword_start() || self.at_enclosing_closer() {
                self.stream.error_expected(&[close.display_name()]);
                break false;
            }
            let before = self.stream.position();
            member(self);
            if self.stream.position() == before {
                self.error_token(expected_member);
            }
        };
        self.delimiter_stack.pop();
        closed
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    fn document(&mut self) {
        let m = self.stream.mark();
        while !self.stream.at_end() {
            let before = self.stream.position();
            self.definition();
            // An empty match is a failure: skip to the next definition.
            if self.stream.position() == before {
                self.recover_to_next_definition();
            }
        }
        m.complete(&mut self.stream, NodeKind::Document);
    }

    /// Groups tokens that start no definition into one `Error` node.
    fn recover_to_next_definition(&mut self) {
        let m = self.stream.mark();
        if !self.stream.at(TokenKind::Invalid) {
            self.stream.error_expected(&["definition"]);
        }
        self.stream.advance();
        while !self.stream.at_end() && !self.at_definition_start() {
            self.stream.advance();
        }
        m.complete(&mut self.stream, NodeKind::Error);
    }

    /// `Description? Annotation* (SchemaDefinition | ... | ImportDeclaration)`
    ///
    /// Returns `true` if input was consumed.
    fn definition(&mut self) -> bool {
        self.guarded("definition", |p| {
            let m = p.stream.mark();
            let has_description = p.description();
            let has_annotations = p.annotations();

            let mut m = m;
            for alternative in Self::DEFINITION_ALTERNATIVES {
                match alternative(p, m) {
                    Ok(_) => return true,
                    Err(unused) => m = unused,
                }
            }

            if has_description || has_annotations {
                p.stream.error_expected(&["definition"]);
                m.complete(&mut p.stream, NodeKind::Error);
                true
            } else {
                m.abandon(&mut p.stream);
                false
            }
        })
    }

    /// `'import' String`
    fn import_declaration(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Import) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.stream.expect(TokenKind::StringLiteral);
        Ok(m.complete_pinned(&mut self.stream, NodeKind::ImportDeclaration, ok))
    }

    /// `'schema' '{' OperationTypeDefinition* '}'`
    fn schema_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Schema) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.delimited(
            DelimiterContext::SchemaDefinition,
            Self::operation_type_definition,
            "operation type",
        );
        Ok(m.complete_pinned(&mut self.stream, NodeKind::SchemaDefinition, ok))
    }

    /// `('query' | 'mutation' | 'subscription') ':' NamedType`
    ///
    /// The operation names are not keywords; any other name is parsed the
    /// same way and reported as an invalid operation type.
    fn operation_type_definition(&mut self) -> bool {
        let Some(token) = self.stream.current_token().copied() else {
            return false;
        };
        if !self.at_name() {
            return false;
        }
        let m = self.stream.mark();
        let valid_name = matches!(token.text, "query" | "mutation" | "subscription");
        if !valid_name {
            let mut error = ParseError::new(
                format!("unknown operation type `{}`", token.text),
                token.span,
                ParseErrorKind::InvalidOperationType {
                    name: token.text.to_string(),
                },
            );
            error.add_help("expected `query`, `mutation` or `subscription`");
            self.stream.push_error(error);
        }
        self.stream.advance();
        let ok = self.stream.expect(TokenKind::Colon) && self.named_type();
        m.complete_pinned(
            &mut self.stream,
            NodeKind::OperationTypeDefinition,
            ok && valid_name,
        );
        true
    }

    /// `'type' TypeName ImplementsInterfaces? FieldsDefinition`
    fn object_type_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Type) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name() && self.implements_interfaces() && self.fields_definition();
        Ok(m.complete_pinned(&mut self.stream, NodeKind::ObjectTypeDefinition, ok))
    }

    /// `'interface' TypeName ImplementsInterfaces? FieldsDefinition`
    fn interface_type_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Interface) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name() && self.implements_interfaces() && self.fields_definition();
        Ok(m.complete_pinned(&mut self.stream, NodeKind::InterfaceTypeDefinition, ok))
    }

    /// `'input' TypeName '{' InputValueDefinition* '}'`
    fn input_object_type_definition(
        &mut self,
        m: Marker,
    ) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Input) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name()
            && self.delimited(
                DelimiterContext::InputObjectDefinition,
                Self::input_value_definition,
                "input field",
            );
        Ok(m.complete_pinned(&mut self.stream, NodeKind::InputObjectTypeDefinition, ok))
    }

    /// `'enum' TypeName '{' EnumValueDefinition* '}'`
    fn enum_type_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Enum) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name()
            && self.delimited(
                DelimiterContext::EnumDefinition,
                Self::enum_value_definition,
                "enum value",
            );
        Ok(m.complete_pinned(&mut self.stream, NodeKind::EnumTypeDefinition, ok))
    }

    /// `'union' TypeName Annotation* '=' UnionMembers`
    fn union_type_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Union) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name() && {
            self.annotations();
            self.stream.expect(TokenKind::Equals) && self.union_members()
        };
        Ok(m.complete_pinned(&mut self.stream, NodeKind::UnionTypeDefinition, ok))
    }

    /// `'|'? NamedType ('|' NamedType)*`
    fn union_members(&mut self) -> bool {
        let m = self.stream.mark();
        self.stream.eat(TokenKind::Pipe);
        let mut ok = self.named_type();
        while ok && self.stream.eat(TokenKind::Pipe) {
            ok = self.named_type();
        }
        m.complete_pinned(&mut self.stream, NodeKind::UnionMembers, ok);
        ok
    }

    /// `'scalar' TypeName Annotation*`
    fn scalar_type_definition(&mut self, m: Marker) -> Result<CompletedMarker, Marker> {
        if !self.stream.at(TokenKind::Scalar) {
            return Err(m);
        }
        self.stream.advance();
        let ok = self.type_name();
        if ok {
            self.annotations();
        }
        Ok(m.complete_pinned(&mut self.stream, NodeKind::ScalarTypeDefinition, ok))
    }

    // =========================================================================
    // Definition parts
    // =========================================================================

    /// The name being defined, wrapped in a `TypeName` node.
    fn type_name(&mut self) -> bool {
        if !self.at_name() {
            self.stream.error_expected(&["name"]);
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        m.complete(&mut self.stream, NodeKind::TypeName);
        true
    }

    /// A string literal before a definition or member. Returns `true` if
    /// one was consumed.
    fn description(&mut self) -> bool {
        if !self.stream.at(TokenKind::StringLiteral) {
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        m.complete(&mut self.stream, NodeKind::Description);
        true
    }

    /// `'implements' '&'? NamedType ('&'? NamedType)*`
    ///
    /// Absent clauses succeed.
    fn implements_interfaces(&mut self) -> bool {
        if !self.stream.at(TokenKind::Implements) {
            return true;
        }
        let m = self.stream.mark();
        self.stream.advance();
        self.stream.eat(TokenKind::Ampersand);
        let mut ok = self.named_type();
        while ok && (self.stream.at(TokenKind::Ampersand) || self.at_name()) {
            self.stream.eat(TokenKind::Ampersand);
            ok = self.named_type();
        }
        m.complete_pinned(&mut self.stream, NodeKind::ImplementsInterfaces, ok);
        ok
    }

    /// `'{' FieldDefinition* '}'`
    fn fields_definition(&mut self) -> bool {
        if !self.stream.at(TokenKind::CurlyBraceOpen) {
            self.stream.error_expected(&["{"]);
            return false;
        }
        let m = self.stream.mark();
        let ok = self.delimited(
            DelimiterContext::FieldsDefinition,
            Self::field_definition,
            "field",
        );
        m.complete_pinned(&mut self.stream, NodeKind::FieldsDefinition, ok);
        ok
    }

    /// Parses `Description? Annotation*` and returns the marker opened
    /// before them, plus whether anything was consumed.
    fn member_prefix(&mut self) -> (Marker, bool) {
        let m = self.stream.mark();
        let has_description = self.description();
        let has_annotations = self.annotations();
        (m, has_description || has_annotations)
    }

    /// Completes a member whose prefix was parsed but whose name is
    /// missing. Returns whether anything was consumed.
    fn finish_nameless_member(&mut self, m: Marker, has_prefix: bool, kind: NodeKind) -> bool {
        if has_prefix {
            self.stream.error_expected(&["name"]);
            m.complete_pinned(&mut self.stream, kind, false);
            true
        } else {
            m.abandon(&mut self.stream);
            false
        }
    }

    /// `Description? Annotation* Identifier ArgumentsDefinition? ':' Type`
    fn field_definition(&mut self) -> bool {
        let (m, has_prefix) = self.member_prefix();
        if !self.at_name() {
            return self.finish_nameless_member(m, has_prefix, NodeKind::FieldDefinition);
        }
        self.stream.advance();

        let mut ok = true;
        if self.stream.at(TokenKind::ParenOpen) {
            ok = self.arguments_definition();
        }
        let ok = ok && self.stream.expect(TokenKind::Colon) && self.type_ref();
        m.complete_pinned(&mut self.stream, NodeKind::FieldDefinition, ok);
        true
    }

    /// `'(' InputValueDefinition* ')'`
    fn arguments_definition(&mut self) -> bool {
        let m = self.stream.mark();
        let ok = self.delimited(
            DelimiterContext::ArgumentsDefinition,
            Self::input_value_definition,
            "argument",
        );
        m.complete_pinned(&mut self.stream, NodeKind::ArgumentsDefinition, ok);
        ok
    }

    /// `Description? Annotation* Identifier ':' Type DefaultValue?`
    fn input_value_definition(&mut self) -> bool {
        let (m, has_prefix) = self.member_prefix();
        if !self.at_name() {
            return self.finish_nameless_member(m, has_prefix, NodeKind::InputValueDefinition);
        }
        self.stream.advance();

        let mut ok = self.stream.expect(TokenKind::Colon) && self.type_ref();
        if ok && self.stream.at(TokenKind::Equals) {
            ok = self.default_value();
        }
        m.complete_pinned(&mut self.stream, NodeKind::InputValueDefinition, ok);
        true
    }

    /// `Description? Annotation* EnumValueName`
    ///
    /// Enum values may be any name except `true`, `false` and `null`.
    fn enum_value_definition(&mut self) -> bool {
        let (m, has_prefix) = self.member_prefix();
        if !self.at_name() {
            return self.finish_nameless_member(m, has_prefix, NodeKind::EnumValueDefinition);
        }

        let reserved = matches!(
            self.stream.current(),
            TokenKind::True | TokenKind::False | TokenKind::Null
        );
        if reserved {
            self.stream.error_expected(&["enum value name"]);
        }
        self.stream.advance();
        m.complete_pinned(&mut self.stream, NodeKind::EnumValueDefinition, !reserved);
        true
    }

    /// `'=' Value`
    fn default_value(&mut self) -> bool {
        let m = self.stream.mark();
        self.stream.advance();
        let ok = self.expect_value();
        m.complete_pinned(&mut self.stream, NodeKind::DefaultValue, ok);
        ok
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// `(NamedType | ListType) '!'?`
    fn type_ref(&mut self) -> bool {
        let matched = self.guarded("type", |p| {
            let m = p.stream.mark();
            let inner = if p.stream.at(TokenKind::SquareBracketOpen) {
                p.list_type()
            } else if p.at_name() {
                p.named_type()
            } else {
                m.abandon(&mut p.stream);
                return false;
            };

            if p.stream.at(TokenKind::Bang) {
                p.stream.advance();
                m.complete_pinned(&mut p.stream, NodeKind::NonNullType, inner);
            } else {
                m.abandon(&mut p.stream);
            }
            inner
        });
        if !matched && self.stream.rule_depth() < SyntaxTokenStream::MAX_RULE_DEPTH {
            self.report_missing_type();
        }
        matched
    }

    /// Records "expected type" unless a nested rule already reported why
    /// the type is incomplete.
    fn report_missing_type(&mut self) {
        if !self.reported_at_current() {
            self.stream.error_expected(&["type"]);
        }
    }

    /// `'[' Type ']'`
    fn list_type(&mut self) -> bool {
        let m = self.stream.mark();
        let open = OpenDelimiter {
            span: self.stream.current_span(),
            context: DelimiterContext::ListType,
        };
        self.stream.advance();
        self.delimiter_stack.push(open);
        let inner = self.type_ref();
        // After a failed item type, still take a `]` that is right there.
        let closed = if inner {
            self.close_delimiter(open)
        } else {
            self.stream.eat(TokenKind::SquareBracketClose)
        };
        self.delimiter_stack.pop();
        let ok = inner && closed;
        m.complete_pinned(&mut self.stream, NodeKind::ListType, ok);
        ok
    }

    /// A type name reference, wrapped in a `NamedType` node.
    fn named_type(&mut self) -> bool {
        if !self.at_name() {
            self.stream.error_expected(&["name"]);
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        m.complete(&mut self.stream, NodeKind::NamedType);
        true
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    /// `Annotation*`. Returns `true` if any annotation was consumed.
    fn annotations(&mut self) -> bool {
        let mut any = false;
        while self.stream.at(TokenKind::At) {
            self.annotation();
            any = true;
        }
        any
    }

    /// `'@' Identifier AnnotationArguments?`
    fn annotation(&mut self) {
        let m = self.stream.mark();
        self.stream.advance();
        let mut ok = if self.at_name() {
            self.stream.advance();
            true
        } else {
            self.stream.error_expected(&["annotation name"]);
            false
        };
        if ok && self.stream.at(TokenKind::ParenOpen) {
            let args = self.stream.mark();
            ok = self.delimited(
                DelimiterContext::AnnotationArguments,
                Self::annotation_argument,
                "annotation argument",
            );
            args.complete_pinned(&mut self.stream, NodeKind::AnnotationArguments, ok);
        }
        m.complete_pinned(&mut self.stream, NodeKind::Annotation, ok);
    }

    /// `Identifier ':' Value`
    fn annotation_argument(&mut self) -> bool {
        if !self.at_name() {
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        let ok = self.stream.expect(TokenKind::Colon) && self.expect_value();
        m.complete_pinned(&mut self.stream, NodeKind::AnnotationArgument, ok);
        true
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value, or records "expected value".
    fn expect_value(&mut self) -> bool {
        if self.value() {
            return true;
        }
        if self.stream.rule_depth() < SyntaxTokenStream::MAX_RULE_DEPTH {
            self.stream.error_expected(&["value"]);
        }
        false
    }

    /// `String | Int | Float | 'true' | 'false' | 'null' | EnumValue
    ///  | ListValue | ObjectValue`
    ///
    /// Returns `true` if a value was consumed.
    fn value(&mut self) -> bool {
        let matched = self.guarded("value", |p| {
            let kind = match p.stream.current() {
                TokenKind::StringLiteral => NodeKind::StringValue,
                TokenKind::IntLiteral => NodeKind::IntValue,
                TokenKind::FloatLiteral => NodeKind::FloatValue,
                TokenKind::True | TokenKind::False => NodeKind::BooleanValue,
                TokenKind::Null => NodeKind::NullValue,
                TokenKind::SquareBracketOpen => {
                    p.list_value();
                    return true;
                },
                TokenKind::CurlyBraceOpen => {
                    p.object_value();
                    return true;
                },
                _ if p.at_name() => NodeKind::EnumValue,
                _ => return false,
            };
            let m = p.stream.mark();
            p.stream.advance();
            m.complete(&mut p.stream, kind);
            true
        });
        if !matched
            && self.stream.rule_depth() >= SyntaxTokenStream::MAX_RULE_DEPTH
            && self.stream.at_any(&[TokenKind::SquareBracketOpen, TokenKind::CurlyBraceOpen])
        {
            self.skip_nested_group();
            return true;
        }
        matched
    }

    /// Wraps a `[...]` or `{...}` group that starts at the current token,
    /// up to its matching closer, in a single `Error` node.
    ///
    /// Used once the nesting limit is hit so that the rest of the subtree
    /// costs no further errors.
    fn skip_nested_group(&mut self) {
        let m = self.stream.mark();
        let mut depth = 0usize;
        while !self.stream.at_end() {
            match self.stream.current() {
                TokenKind::SquareBracketOpen | TokenKind::CurlyBraceOpen => depth += 1,
                TokenKind::SquareBracketClose | TokenKind::CurlyBraceClose => {
                    depth = depth.saturating_sub(1);
                },
                _ => {},
            }
            self.stream.advance();
            if depth == 0 {
                break;
            }
        }
        m.complete(&mut self.stream, NodeKind::Error);
    }

    /// `'[' Value* ']'`
    fn list_value(&mut self) {
        let m = self.stream.mark();
        let ok = self.delimited(DelimiterContext::ListValue, Self::value, "value");
        m.complete_pinned(&mut self.stream, NodeKind::ListValue, ok);
    }

    /// `'{' ObjectField* '}'`
    fn object_value(&mut self) {
        let m = self.stream.mark();
        let ok = self.delimited(DelimiterContext::ObjectValue, Self::object_field, "object field");
        m.complete_pinned(&mut self.stream, NodeKind::ObjectValue, ok);
    }

    /// `Identifier ':' Value`
    fn object_field(&mut self) -> bool {
        if !self.at_name() {
            return false;
        }
        let m = self.stream.mark();
        self.stream.advance();
        let ok = self.stream.expect(TokenKind::Colon) && self.expect_value();
        m.complete_pinned(&mut self.stream, NodeKind::ObjectField, ok);
        true
    }
}

/// Parses a GraphQL Endpoint IDL document.
///
/// Never fails: the returned tree covers all of `text`, and malformed input
/// is reported in [`ParseResult::errors`].
pub fn parse(text: &str) -> ParseResult<'_> {
    IdlParser::new(text).parse_document()
}
