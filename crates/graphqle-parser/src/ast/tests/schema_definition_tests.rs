//! Tests for `SchemaDefinition` and `OperationTypeDefinition`.

use crate::ast::tests::ast_test_utils::nth_definition;
use crate::ast::tests::ast_test_utils::parse_ok;
use crate::ast::Definition;

/// Verifies operation type lookup by operation name.
#[test]
fn test_operation_types() {
    let result = parse_ok("schema { query: Q mutation: M }");
    let Definition::Schema(schema) = nth_definition(result.tree(), 0) else {
        panic!("expected a schema definition");
    };

    let operations: Vec<&str> = schema
        .operation_types()
        .map(|op| op.operation().unwrap())
        .collect();
    assert_eq!(operations, vec!["query", "mutation"]);

    let mutation = schema.operation_type("mutation").unwrap();
    assert_eq!(mutation.named_type().unwrap().name(), Ok("M"));
    assert!(schema.operation_type("subscription").is_none());
}

/// Verifies that an unknown operation name is kept in a malformed node.
#[test]
fn test_invalid_operation_type_is_malformed() {
    let result = crate::parse("schema { fetch: Q }");
    let Definition::Schema(schema) = nth_definition(result.tree(), 0) else {
        panic!("expected a schema definition");
    };
    let operation = schema.operation_types().next().unwrap();

    assert!(operation.is_malformed());
    assert_eq!(operation.operation(), Ok("fetch"));
    assert_eq!(operation.named_type().unwrap().name(), Ok("Q"));
}
