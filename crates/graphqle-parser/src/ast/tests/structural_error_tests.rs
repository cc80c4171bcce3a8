//! Tests for required getters on hand-built trees that lack the child.

use crate::ast::FieldDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::StructuralError;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxElement;
use crate::syntax::SyntaxNode;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;

/// Verifies that a field node without a type reports which child is
/// missing.
#[test]
fn test_missing_type_ref() {
    let name = Token::new(TokenKind::Identifier, "id", ByteSpan::new(0, 2));
    let node = SyntaxNode::new(
        NodeKind::FieldDefinition,
        ByteSpan::new(0, 2),
        false,
        vec![SyntaxElement::Token(name)],
    );
    let field = FieldDefinition::cast(&node).unwrap();

    assert_eq!(field.name(), Ok("id"));
    assert_eq!(
        field.type_ref(),
        Err(StructuralError::new(
            NodeKind::FieldDefinition,
            "type",
            ByteSpan::new(0, 2),
        )),
    );
}

/// Verifies that an empty object type node reports its missing name and
/// body, and yields no fields.
#[test]
fn test_empty_object_type() {
    let node = SyntaxNode::new(
        NodeKind::ObjectTypeDefinition,
        ByteSpan::new(5, 5),
        false,
        Vec::new(),
    );
    let object = ObjectTypeDefinition::cast(&node).unwrap();

    let error = object.name().unwrap_err();
    assert_eq!(error.parent, NodeKind::ObjectTypeDefinition);
    assert_eq!(error.missing, "type name");
    assert_eq!(error.to_string(), "ObjectTypeDefinition node at 5..5 has no type name");

    assert!(object.fields_definition().is_err());
    assert_eq!(object.fields().count(), 0);
}

/// Verifies that `cast` refuses nodes of another kind.
#[test]
fn test_cast_kind_mismatch() {
    let node = SyntaxNode::new(NodeKind::Tag, ByteSpan::new(0, 0), false, Vec::new());
    assert!(FieldDefinition::cast(&node).is_none());
}
