//! Tests for `IdlParser` on well-formed input.

use crate::syntax::NodeKind;
use crate::tests::utils::assert_lossless;
use crate::tests::utils::find_node;
use crate::tests::utils::node_kinds;
use crate::tests::utils::top_level_kinds;
use crate::token_source::StrIdlTokenSource;
use crate::ByteSpan;
use crate::IdlParser;
use crate::ParseResult;
use crate::SyntaxTokenStream;

/// Parses `source` and asserts that it produced no errors.
fn parse_ok(source: &str) -> ParseResult<'_> {
    let result = crate::parse(source);
    assert!(
        result.is_ok(),
        "unexpected errors:\n{}",
        result.format_errors(source, None),
    );
    assert_lossless(source, &result);
    result
}

// =============================================================================
// Documents
// =============================================================================

/// Verifies that an empty document is a bare `Document` root.
#[test]
fn test_empty_document() {
    let result = parse_ok("");

    assert_eq!(result.tree().kind, NodeKind::Document);
    assert!(result.tree().children.is_empty());
}

/// Verifies that a document of only trivia has no child nodes but keeps the
/// trivia.
#[test]
fn test_trivia_only_document() {
    let source = "  # nothing to see here\n,\n";
    let result = parse_ok(source);

    assert!(top_level_kinds(result.tree()).is_empty());
    assert_eq!(result.tree().children.len(), 5);
}

/// Verifies that every definition kind is recognized at the top level, in
/// source order.
#[test]
fn test_all_definition_kinds() {
    let source = r#"
        import "common.graphqle"
        schema { query: Query }
        type Query { a: Int }
        interface Node { id: ID! }
        input Filter { name: String }
        enum Color { RED }
        union Pet = Cat | Dog
        scalar Date
    "#;
    let result = parse_ok(source);

    assert_eq!(
        top_level_kinds(result.tree()),
        vec![
            NodeKind::ImportDeclaration,
            NodeKind::SchemaDefinition,
            NodeKind::ObjectTypeDefinition,
            NodeKind::InterfaceTypeDefinition,
            NodeKind::InputObjectTypeDefinition,
            NodeKind::EnumTypeDefinition,
            NodeKind::UnionTypeDefinition,
            NodeKind::ScalarTypeDefinition,
        ],
    );
}

/// Verifies that `from_stream()` parses a sub-range with absolute offsets.
#[test]
fn test_parse_sub_range() {
    let source = "### scalar Date ###";
    let span = ByteSpan::new(4, 15);
    let stream =
        SyntaxTokenStream::with_root_span(span, StrIdlTokenSource::with_range(source, span));
    let result = IdlParser::from_stream(stream).parse_document();

    assert!(result.is_ok());
    assert_eq!(result.tree().span, span);
    assert_eq!(
        find_node(result.tree(), NodeKind::TypeName).text(source),
        "Date",
    );
}

// =============================================================================
// Type definitions
// =============================================================================

/// Verifies the shape of a simple object type.
#[test]
fn test_object_type() {
    let result = parse_ok("type Query { hello: String }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::TypeName,
            NodeKind::FieldsDefinition,
            NodeKind::FieldDefinition,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies `implements` with and without `&` separators.
#[test]
fn test_implements_interfaces() {
    let result = parse_ok("interface Node implements A & B C { id: ID! }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::InterfaceTypeDefinition,
            NodeKind::TypeName,
            NodeKind::ImplementsInterfaces,
            NodeKind::NamedType,
            NodeKind::NamedType,
            NodeKind::NamedType,
            NodeKind::FieldsDefinition,
            NodeKind::FieldDefinition,
            NodeKind::NonNullType,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies that input object fields sit directly under the definition.
#[test]
fn test_input_object_type() {
    let result = parse_ok("input I { a: [Int!]! }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::InputObjectTypeDefinition,
            NodeKind::TypeName,
            NodeKind::InputValueDefinition,
            NodeKind::NonNullType,
            NodeKind::ListType,
            NodeKind::NonNullType,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies enum values, including prefix annotations and a keyword used
/// as a value.
#[test]
fn test_enum_type() {
    let result = parse_ok("enum Kind { RED @Deprecated GREEN input }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::EnumTypeDefinition,
            NodeKind::TypeName,
            NodeKind::EnumValueDefinition,
            NodeKind::EnumValueDefinition,
            NodeKind::Annotation,
            NodeKind::EnumValueDefinition,
        ],
    );
}

/// Verifies union members with a leading `|` and annotations after the
/// name.
#[test]
fn test_union_type() {
    let result = parse_ok("union U @Tag = | A | B");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::UnionTypeDefinition,
            NodeKind::TypeName,
            NodeKind::Annotation,
            NodeKind::UnionMembers,
            NodeKind::NamedType,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies a scalar with an annotation after its name.
#[test]
fn test_scalar_type() {
    let result = parse_ok(r#"scalar Date @Format(pattern: "yyyy-MM-dd")"#);

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::ScalarTypeDefinition,
            NodeKind::TypeName,
            NodeKind::Annotation,
            NodeKind::AnnotationArguments,
            NodeKind::AnnotationArgument,
            NodeKind::StringValue,
        ],
    );
}

/// Verifies that a description and prefix annotations belong to the
/// definition node.
#[test]
fn test_definition_prefix() {
    let result = parse_ok("\"\"\"Docs.\"\"\" @Internal type T { f: Int }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::Description,
            NodeKind::Annotation,
            NodeKind::TypeName,
            NodeKind::FieldsDefinition,
            NodeKind::FieldDefinition,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies descriptions and annotations on fields.
#[test]
fn test_field_prefix() {
    let result = parse_ok("type T { \"The f.\" @Deprecated f: Int }");
    let field = find_node(result.tree(), NodeKind::FieldDefinition);

    assert_eq!(
        field.child_nodes().map(|node| node.kind).collect::<Vec<_>>(),
        vec![NodeKind::Description, NodeKind::Annotation, NodeKind::NamedType],
    );
}

/// Verifies the schema definition and its operation types.
#[test]
fn test_schema_definition() {
    let result = parse_ok("schema { query: Query mutation: Mutation subscription: Events }");

    assert_eq!(
        node_kinds(result.tree()),
        vec![
            NodeKind::SchemaDefinition,
            NodeKind::OperationTypeDefinition,
            NodeKind::NamedType,
            NodeKind::OperationTypeDefinition,
            NodeKind::NamedType,
            NodeKind::OperationTypeDefinition,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies import declarations.
#[test]
fn test_import_declaration() {
    let source = r#"import "types/common.graphqle""#;
    let result = parse_ok(source);
    let import = find_node(result.tree(), NodeKind::ImportDeclaration);

    assert_eq!(import.text(source), source);
    assert!(import.child_nodes().next().is_none());
}

// =============================================================================
// Fields, arguments and values
// =============================================================================

/// Verifies arguments with default values of every shape.
#[test]
fn test_arguments_and_default_values() {
    let source = r#"type Q {
        users(
            first: Int = 10,
            filter: Filter = { active: true, tags: ["a", B] },
        ): [User]
    }"#;
    let result = parse_ok(source);
    let field = find_node(result.tree(), NodeKind::FieldDefinition);

    assert_eq!(
        node_kinds(field),
        vec![
            NodeKind::ArgumentsDefinition,
            NodeKind::InputValueDefinition,
            NodeKind::NamedType,
            NodeKind::DefaultValue,
            NodeKind::IntValue,
            NodeKind::InputValueDefinition,
            NodeKind::NamedType,
            NodeKind::DefaultValue,
            NodeKind::ObjectValue,
            NodeKind::ObjectField,
            NodeKind::BooleanValue,
            NodeKind::ObjectField,
            NodeKind::ListValue,
            NodeKind::StringValue,
            NodeKind::EnumValue,
            NodeKind::ListType,
            NodeKind::NamedType,
        ],
    );
}

/// Verifies every scalar value kind inside annotation arguments.
#[test]
fn test_value_kinds() {
    let result = parse_ok("scalar S @A(a: -1.5e3, b: null, c: RED, d: [], e: {}, f: 7)");
    let arguments = find_node(result.tree(), NodeKind::AnnotationArguments);
    let value_kinds: Vec<NodeKind> = arguments
        .child_nodes()
        .filter_map(|argument| argument.child_nodes().next())
        .map(|value| value.kind)
        .collect();

    assert_eq!(
        value_kinds,
        vec![
            NodeKind::FloatValue,
            NodeKind::NullValue,
            NodeKind::EnumValue,
            NodeKind::ListValue,
            NodeKind::ObjectValue,
            NodeKind::IntValue,
        ],
    );
}

/// Verifies that keywords are accepted wherever a name is expected.
#[test]
fn test_keywords_as_names() {
    let source = "type type { input: String enum(type: Int): Boolean }";
    let result = parse_ok(source);

    assert_eq!(find_node(result.tree(), NodeKind::TypeName).text(source), "type");
    assert_eq!(
        result
            .tree()
            .descendants()
            .filter(|node| node.kind == NodeKind::FieldDefinition)
            .count(),
        2,
    );
}

/// Verifies that commas and comments between members are trivia.
#[test]
fn test_commas_and_comments_are_trivia() {
    let source = "type T {\n  # the a\n  a: Int,\n  b: Int,\n}\n";
    let result = parse_ok(source);
    let fields = find_node(result.tree(), NodeKind::FieldsDefinition);

    assert_eq!(fields.children_of_kind(NodeKind::FieldDefinition).count(), 2);
}
