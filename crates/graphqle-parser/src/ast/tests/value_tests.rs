//! Tests for `Value` and the value wrappers.

use crate::ast::tests::ast_test_utils::nth_definition;
use crate::ast::tests::ast_test_utils::parse_ok;
use crate::ast::Annotation;
use crate::ast::Definition;
use crate::ast::Value;
use crate::syntax::SyntaxNode;

/// The first annotation of the first definition.
fn first_annotation<'a, 'src>(tree: &'a SyntaxNode<'src>) -> Annotation<'a, 'src> {
    nth_definition(tree, 0)
        .annotations()
        .next()
        .expect("no annotation")
}

/// Verifies each scalar value kind.
#[test]
fn test_scalar_values() {
    let source = r#"@A(s: "hi", i: -3, f: 1.5e2, t: true, n: null, e: RED) scalar X"#;
    let result = parse_ok(source);
    let annotation = first_annotation(result.tree());

    let Some(Value::String(s)) = annotation.argument("s") else {
        panic!("expected a string");
    };
    assert_eq!(s.literal(), Ok("\"hi\""));

    let Some(Value::Int(i)) = annotation.argument("i") else {
        panic!("expected an int");
    };
    assert_eq!(i.as_i64(), Some(-3));

    let Some(Value::Float(f)) = annotation.argument("f") else {
        panic!("expected a float");
    };
    assert_eq!(f.as_f64(), Some(150.0));

    let Some(Value::Boolean(t)) = annotation.argument("t") else {
        panic!("expected a boolean");
    };
    assert_eq!(t.value(), Ok(true));

    assert!(matches!(annotation.argument("n"), Some(Value::Null(_))));

    let Some(Value::Enum(e)) = annotation.argument("e") else {
        panic!("expected an enum value");
    };
    assert_eq!(e.name(), Ok("RED"));
}

/// Verifies list and object values, including nesting.
#[test]
fn test_compound_values() {
    let source = r#"@A(list: [1, [2]], obj: { name: "x", nested: { ok: false } }) scalar X"#;
    let result = parse_ok(source);
    let annotation = first_annotation(result.tree());

    let Some(Value::List(list)) = annotation.argument("list") else {
        panic!("expected a list");
    };
    let items: Vec<_> = list.values().collect();
    assert_eq!(items.len(), 2);
    assert!(matches!(items[1], Value::List(_)));

    let Some(Value::Object(object)) = annotation.argument("obj") else {
        panic!("expected an object");
    };
    let names: Vec<&str> = object.fields().map(|f| f.name().unwrap()).collect();
    assert_eq!(names, vec!["name", "nested"]);

    let nested = object.fields().nth(1).unwrap().value().unwrap();
    assert_eq!(nested.to_source(source), "{ ok: false }");
}

/// Verifies that an out-of-range integer has no `i64` value but keeps its
/// literal text.
#[test]
fn test_int_out_of_range() {
    let result = parse_ok("@A(big: 99999999999999999999) scalar X");
    let annotation = first_annotation(result.tree());
    let Some(Value::Int(big)) = annotation.argument("big") else {
        panic!("expected an int");
    };

    assert_eq!(big.as_i64(), None);
    assert_eq!(big.literal(), Ok("99999999999999999999"));
}

/// Verifies that `Value::cast` only accepts value kinds.
#[test]
fn test_value_cast() {
    let result = parse_ok("scalar X");
    let definition = nth_definition(result.tree(), 0);

    assert!(Value::cast(definition.syntax()).is_none());
    assert!(matches!(definition, Definition::ScalarType(_)));
}
