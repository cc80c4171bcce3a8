/// The kind of a [`SyntaxNode`](crate::syntax::SyntaxNode).
///
/// A closed enumeration covering the IDL grammar, the doc-comment grammar
/// and error recovery. Typed wrappers in [`ast`](crate::ast) dispatch on
/// this with a single exhaustive `match`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum NodeKind {
    // =========================================================================
    // Document and definitions
    // =========================================================================
    Document,
    ImportDeclaration,
    SchemaDefinition,
    OperationTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    InputObjectTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    UnionTypeDefinition,
    UnionMembers,
    ScalarTypeDefinition,

    // =========================================================================
    // Definition parts
    // =========================================================================
    ImplementsInterfaces,
    /// The name being defined by a type definition.
    TypeName,
    /// A string literal preceding a definition, field or value.
    Description,
    FieldsDefinition,
    FieldDefinition,
    ArgumentsDefinition,
    InputValueDefinition,
    DefaultValue,

    // =========================================================================
    // Type references
    // =========================================================================
    NamedType,
    ListType,
    NonNullType,

    // =========================================================================
    // Annotations
    // =========================================================================
    /// `@Name(arg: value)` metadata attached to a definition.
    Annotation,
    AnnotationArguments,
    AnnotationArgument,

    // =========================================================================
    // Values
    // =========================================================================
    StringValue,
    IntValue,
    FloatValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    // =========================================================================
    // Doc comments
    // =========================================================================
    DocComment,
    /// `@name value` inside a doc comment.
    Tag,

    // =========================================================================
    // Recovery
    // =========================================================================
    /// Tokens that matched no rule.
    Error,
}

impl NodeKind {
    /// Returns `true` for the kinds that can appear directly under a
    /// [`NodeKind::Document`] as a definition.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            NodeKind::ImportDeclaration
                | NodeKind::SchemaDefinition
                | NodeKind::ObjectTypeDefinition
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::InputObjectTypeDefinition
                | NodeKind::EnumTypeDefinition
                | NodeKind::UnionTypeDefinition
                | NodeKind::ScalarTypeDefinition
        )
    }

    /// Returns `true` for the value kinds.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            NodeKind::StringValue
                | NodeKind::IntValue
                | NodeKind::FloatValue
                | NodeKind::BooleanValue
                | NodeKind::NullValue
                | NodeKind::EnumValue
                | NodeKind::ListValue
                | NodeKind::ObjectValue
        )
    }

    /// Returns `true` for the type reference kinds.
    pub fn is_type_ref(&self) -> bool {
        matches!(
            self,
            NodeKind::NamedType | NodeKind::ListType | NodeKind::NonNullType
        )
    }
}
