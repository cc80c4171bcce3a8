//! Typed, zero-copy views over the generic syntax tree.
//!
//! Every wrapper is a `Copy` handle around a borrowed
//! [`SyntaxNode`](crate::syntax::SyntaxNode). Wrappers do not own or copy
//! anything: names and literals are returned as slices of the source text.
//!
//! All wrappers implement [`AstNode`] via `#[inherent] impl AstNode`, giving
//! each both inherent methods (no trait import needed) and a trait bound for
//! generic utilities.
//!
//! Getters come in two flavors:
//!
//! - **Required** children (e.g. a field's type) return
//!   `Result<_, StructuralError>`. The parser always produces them for
//!   well-formed input; an `Err` means the node is malformed or the tree was
//!   assembled by hand without the child.
//! - **Optional** children (e.g. a description) return `Option<_>`, and
//!   repeated children return iterators.

/// Declares a wrapper struct for a single [`NodeKind`](crate::syntax::NodeKind)
/// and implements [`AstNode`] for it. `Name => Kind` wraps a kind whose name
/// differs from the wrapper's.
macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident) => {
        ast_node!($(#[$meta])* $name => $name);
    };
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $name<'a, 'src> {
            pub(crate) syntax: &'a $crate::syntax::SyntaxNode<'src>,
        }

        #[::inherent::inherent]
        impl<'a, 'src> $crate::ast::AstNode<'a, 'src> for $name<'a, 'src> {
            pub fn can_cast(kind: $crate::syntax::NodeKind) -> bool {
                kind == $crate::syntax::NodeKind::$kind
            }

            pub fn cast(node: &'a $crate::syntax::SyntaxNode<'src>) -> Option<Self> {
                Self::can_cast(node.kind).then_some(Self { syntax: node })
            }

            pub fn syntax(&self) -> &'a $crate::syntax::SyntaxNode<'src> {
                self.syntax
            }

            pub fn span(&self) -> $crate::ByteSpan {
                self.syntax.span
            }

            pub fn is_malformed(&self) -> bool {
                self.syntax.malformed
            }

            pub fn to_source<'s>(&self, source: &'s str) -> &'s str {
                self.syntax.text(source)
            }
        }
    };
}

mod annotation;
mod any_node;
mod ast_node;
mod doc_comment;
mod document;
mod field_definition;
mod schema_definition;
mod structural_error;
mod support;
mod type_definition;
mod type_ref;
mod value;

pub use annotation::Annotation;
pub use annotation::AnnotationArgument;
pub use annotation::AnnotationArguments;
pub use any_node::AnyNode;
pub use ast_node::AstNode;
pub use doc_comment::Comment;
pub use doc_comment::DocComment;
pub use doc_comment::Tag;
pub use document::Definition;
pub use document::Document;
pub use document::ErrorNode;
pub use document::ImportDeclaration;
pub use field_definition::ArgumentsDefinition;
pub use field_definition::DefaultValue;
pub use field_definition::FieldDefinition;
pub use field_definition::FieldsDefinition;
pub use field_definition::InputValueDefinition;
pub use schema_definition::OperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use structural_error::StructuralError;
pub use type_definition::Description;
pub use type_definition::EnumTypeDefinition;
pub use type_definition::EnumValueDefinition;
pub use type_definition::ImplementsInterfaces;
pub use type_definition::InputObjectTypeDefinition;
pub use type_definition::InterfaceTypeDefinition;
pub use type_definition::ObjectTypeDefinition;
pub use type_definition::ScalarTypeDefinition;
pub use type_definition::TypeName;
pub use type_definition::UnionMembers;
pub use type_definition::UnionTypeDefinition;
pub use type_ref::ListType;
pub use type_ref::NamedType;
pub use type_ref::NonNullType;
pub use type_ref::TypeRef;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;

#[cfg(test)]
mod tests;
