//! Tests for `Document`, `Definition` and `ImportDeclaration`.

use crate::ast::tests::ast_test_utils::nth_definition;
use crate::ast::tests::ast_test_utils::parse_ok;
use crate::ast::Definition;
use crate::ast::Document;
use crate::syntax::NodeKind;

/// Verifies that definitions are returned in source order with the right
/// variants.
#[test]
fn test_definitions_in_order() {
    let source = r#"
import "common.graphqle"
schema { query: Query }
type Query { a: A }
interface Node { id: ID! }
input Filter { q: String }
enum Color { RED }
union Thing = A | B
scalar Date
"#;
    let result = parse_ok(source);
    let document = Document::cast(result.tree()).unwrap();
    let names: Vec<&str> = document
        .definitions()
        .map(|definition| match definition {
            Definition::Import(_) => "import",
            Definition::Schema(_) => "schema",
            Definition::ObjectType(_) => "type",
            Definition::InterfaceType(_) => "interface",
            Definition::InputObjectType(_) => "input",
            Definition::EnumType(_) => "enum",
            Definition::UnionType(_) => "union",
            Definition::ScalarType(_) => "scalar",
        })
        .collect();

    assert_eq!(
        names,
        vec!["import", "schema", "type", "interface", "input", "enum", "union", "scalar"],
    );
}

/// Verifies the shared `Definition` getters.
#[test]
fn test_definition_common_getters() {
    let source = "\"The root.\" @Internal type Query { a: A }\nschema { query: Query }";
    let result = parse_ok(source);

    let query = nth_definition(result.tree(), 0);
    assert_eq!(query.name(), Some("Query"));
    assert_eq!(
        query.description().map(|d| d.literal().unwrap()),
        Some("\"The root.\""),
    );
    assert_eq!(query.annotations().count(), 1);
    assert_eq!(query.syntax().kind, NodeKind::ObjectTypeDefinition);
    assert_eq!(query.to_source(source), "\"The root.\" @Internal type Query { a: A }");

    let schema = nth_definition(result.tree(), 1);
    assert_eq!(schema.name(), None);
    assert!(schema.description().is_none());
}

/// Verifies that `Definition::cast` rejects non-definition nodes.
#[test]
fn test_definition_cast_rejects_other_kinds() {
    let result = parse_ok("scalar Date");
    assert!(Definition::cast(result.tree()).is_none());
    assert!(!Definition::can_cast(NodeKind::FieldDefinition));
    assert!(Definition::can_cast(NodeKind::ImportDeclaration));
}

/// Verifies the import path getters.
#[test]
fn test_import_path() {
    let result = parse_ok(r#"import "types/user.graphqle""#);
    let Definition::Import(import) = nth_definition(result.tree(), 0) else {
        panic!("expected an import");
    };

    assert_eq!(import.path_literal(), Ok("\"types/user.graphqle\""));
    assert_eq!(import.path(), Ok("types/user.graphqle"));
}

/// Verifies that top-level `Error` nodes are reported separately from
/// definitions.
#[test]
fn test_error_nodes_are_not_definitions() {
    let source = "} } scalar Date";
    let result = crate::parse(source);
    let document = Document::cast(result.tree()).unwrap();

    assert_eq!(document.definitions().count(), 1);
    let errors: Vec<_> = document.error_nodes().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_source(source), "} }");
}

/// Verifies that `comments()` finds comments at every depth.
#[test]
fn test_document_comments() {
    let source = "# top\ntype A {\n  # inner\n  f: B # trailing\n}\n";
    let result = parse_ok(source);
    let document = Document::cast(result.tree()).unwrap();
    let texts: Vec<&str> = document.comments().map(|c| c.text()).collect();

    assert_eq!(texts, vec!["# top", "# inner", "# trailing"]);
}
