//! Tests for `Annotation` and `AnnotationArgument`.

use crate::ast::tests::ast_test_utils::nth_definition;
use crate::ast::tests::ast_test_utils::parse_ok;
use crate::ast::Value;

/// Verifies an annotation without arguments.
#[test]
fn test_annotation_without_arguments() {
    let result = parse_ok("@Internal scalar X");
    let annotation = nth_definition(result.tree(), 0).annotations().next().unwrap();

    assert_eq!(annotation.name(), Ok("Internal"));
    assert!(annotation.argument_list().is_none());
    assert_eq!(annotation.arguments().count(), 0);
    assert!(annotation.argument("anything").is_none());
}

/// Verifies argument names and lookup by name.
#[test]
fn test_annotation_arguments() {
    let source = "@Http(method: GET, path: \"/users\") type Q { a: A }";
    let result = parse_ok(source);
    let annotation = nth_definition(result.tree(), 0).annotations().next().unwrap();

    let names: Vec<&str> = annotation
        .arguments()
        .map(|argument| argument.name().unwrap())
        .collect();
    assert_eq!(names, vec!["method", "path"]);
    assert!(matches!(annotation.argument("method"), Some(Value::Enum(_))));
    assert_eq!(annotation.to_source(source), "@Http(method: GET, path: \"/users\")");
}

/// Verifies that an annotation missing its name is malformed.
#[test]
fn test_annotation_missing_name() {
    let result = crate::parse("@ scalar X");
    assert!(result.has_errors());
    let annotation = nth_definition(result.tree(), 0).annotations().next().unwrap();

    assert!(annotation.is_malformed());
    assert!(annotation.name().is_err());
}
