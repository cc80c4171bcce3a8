use crate::ast::*;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;

/// A typed view of any node.
///
/// [`from_syntax()`](Self::from_syntax) dispatches on every [`NodeKind`] in
/// one exhaustive `match`, so adding a node kind without a wrapper does not
/// compile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnyNode<'a, 'src> {
    Document(Document<'a, 'src>),
    ImportDeclaration(ImportDeclaration<'a, 'src>),
    SchemaDefinition(SchemaDefinition<'a, 'src>),
    OperationTypeDefinition(OperationTypeDefinition<'a, 'src>),
    ObjectTypeDefinition(ObjectTypeDefinition<'a, 'src>),
    InterfaceTypeDefinition(InterfaceTypeDefinition<'a, 'src>),
    InputObjectTypeDefinition(InputObjectTypeDefinition<'a, 'src>),
    EnumTypeDefinition(EnumTypeDefinition<'a, 'src>),
    EnumValueDefinition(EnumValueDefinition<'a, 'src>),
    UnionTypeDefinition(UnionTypeDefinition<'a, 'src>),
    UnionMembers(UnionMembers<'a, 'src>),
    ScalarTypeDefinition(ScalarTypeDefinition<'a, 'src>),
    ImplementsInterfaces(ImplementsInterfaces<'a, 'src>),
    TypeName(TypeName<'a, 'src>),
    Description(Description<'a, 'src>),
    FieldsDefinition(FieldsDefinition<'a, 'src>),
    FieldDefinition(FieldDefinition<'a, 'src>),
    ArgumentsDefinition(ArgumentsDefinition<'a, 'src>),
    InputValueDefinition(InputValueDefinition<'a, 'src>),
    DefaultValue(DefaultValue<'a, 'src>),
    NamedType(NamedType<'a, 'src>),
    ListType(ListType<'a, 'src>),
    NonNullType(NonNullType<'a, 'src>),
    Annotation(Annotation<'a, 'src>),
    AnnotationArguments(AnnotationArguments<'a, 'src>),
    AnnotationArgument(AnnotationArgument<'a, 'src>),
    StringValue(StringValue<'a, 'src>),
    IntValue(IntValue<'a, 'src>),
    FloatValue(FloatValue<'a, 'src>),
    BooleanValue(BooleanValue<'a, 'src>),
    NullValue(NullValue<'a, 'src>),
    EnumValue(EnumValue<'a, 'src>),
    ListValue(ListValue<'a, 'src>),
    ObjectValue(ObjectValue<'a, 'src>),
    ObjectField(ObjectField<'a, 'src>),
    DocComment(DocComment<'a, 'src>),
    Tag(Tag<'a, 'src>),
    Error(ErrorNode<'a, 'src>),
}

impl<'a, 'src> AnyNode<'a, 'src> {
    pub fn from_syntax(syntax: &'a SyntaxNode<'src>) -> Self {
        match syntax.kind {
            NodeKind::Document => Self::Document(Document { syntax }),
            NodeKind::ImportDeclaration => {
                Self::ImportDeclaration(ImportDeclaration { syntax })
            },
            NodeKind::SchemaDefinition => Self::SchemaDefinition(SchemaDefinition { syntax }),
            NodeKind::OperationTypeDefinition => {
                Self::OperationTypeDefinition(OperationTypeDefinition { syntax })
            },
            NodeKind::ObjectTypeDefinition => {
                Self::ObjectTypeDefinition(ObjectTypeDefinition { syntax })
            },
            NodeKind::InterfaceTypeDefinition => {
                Self::InterfaceTypeDefinition(InterfaceTypeDefinition { syntax })
            },
            NodeKind::InputObjectTypeDefinition => {
                Self::InputObjectTypeDefinition(InputObjectTypeDefinition { syntax })
            },
            NodeKind::EnumTypeDefinition => {
                Self::EnumTypeDefinition(EnumTypeDefinition { syntax })
            },
            NodeKind::EnumValueDefinition => {
                Self::EnumValueDefinition(EnumValueDefinition { syntax })
            },
            NodeKind::UnionTypeDefinition => {
                Self::UnionTypeDefinition(UnionTypeDefinition { syntax })
            },
            NodeKind::UnionMembers => Self::UnionMembers(UnionMembers { syntax }),
            NodeKind::ScalarTypeDefinition => {
                Self::ScalarTypeDefinition(ScalarTypeDefinition { syntax })
            },
            NodeKind::ImplementsInterfaces => {
                Self::ImplementsInterfaces(ImplementsInterfaces { syntax })
            },
            NodeKind::TypeName => Self::TypeName(TypeName { syntax }),
            NodeKind::Description => Self::Description(Description { syntax }),
            NodeKind::FieldsDefinition => Self::FieldsDefinition(FieldsDefinition { syntax }),
            NodeKind::FieldDefinition => Self::FieldDefinition(FieldDefinition { syntax }),
            NodeKind::ArgumentsDefinition => {
                Self::ArgumentsDefinition(ArgumentsDefinition { syntax })
            },
            NodeKind::InputValueDefinition => {
                Self::InputValueDefinition(InputValueDefinition { syntax })
            },
            NodeKind::DefaultValue => Self::DefaultValue(DefaultValue { syntax }),
            NodeKind::NamedType => Self::NamedType(NamedType { syntax }),
            NodeKind::ListType => Self::ListType(ListType { syntax }),
            NodeKind::NonNullType => Self::NonNullType(NonNullType { syntax }),
            NodeKind::Annotation => Self::Annotation(Annotation { syntax }),
            NodeKind::AnnotationArguments => {
                Self::AnnotationArguments(AnnotationArguments { syntax })
            },
            NodeKind::AnnotationArgument => {
                Self::AnnotationArgument(AnnotationArgument { syntax })
            },
            NodeKind::StringValue => Self::StringValue(StringValue { syntax }),
            NodeKind::IntValue => Self::IntValue(IntValue { syntax }),
            NodeKind::FloatValue => Self::FloatValue(FloatValue { syntax }),
            NodeKind::BooleanValue => Self::BooleanValue(BooleanValue { syntax }),
            NodeKind::NullValue => Self::NullValue(NullValue { syntax }),
            NodeKind::EnumValue => Self::EnumValue(EnumValue { syntax }),
            NodeKind::ListValue => Self::ListValue(ListValue { syntax }),
            NodeKind::ObjectValue => Self::ObjectValue(ObjectValue { syntax }),
            NodeKind::ObjectField => Self::ObjectField(ObjectField { syntax }),
            NodeKind::DocComment => Self::DocComment(DocComment { syntax }),
            NodeKind::Tag => Self::Tag(Tag { syntax }),
            NodeKind::Error => Self::Error(ErrorNode { syntax }),
        }
    }

    /// The wrapped syntax node.
    pub fn syntax(&self) -> &'a SyntaxNode<'src> {
        match self {
            Self::Document(node) => node.syntax,
            Self::ImportDeclaration(node) => node.syntax,
            Self::SchemaDefinition(node) => node.syntax,
            Self::OperationTypeDefinition(node) => node.syntax,
            Self::ObjectTypeDefinition(node) => node.syntax,
            Self::InterfaceTypeDefinition(node) => node.syntax,
            Self::InputObjectTypeDefinition(node) => node.syntax,
            Self::EnumTypeDefinition(node) => node.syntax,
            Self::EnumValueDefinition(node) => node.syntax,
            Self::UnionTypeDefinition(node) => node.syntax,
            Self::UnionMembers(node) => node.syntax,
            Self::ScalarTypeDefinition(node) => node.syntax,
            Self::ImplementsInterfaces(node) => node.syntax,
            Self::TypeName(node) => node.syntax,
            Self::Description(node) => node.syntax,
            Self::FieldsDefinition(node) => node.syntax,
            Self::FieldDefinition(node) => node.syntax,
            Self::ArgumentsDefinition(node) => node.syntax,
            Self::InputValueDefinition(node) => node.syntax,
            Self::DefaultValue(node) => node.syntax,
            Self::NamedType(node) => node.syntax,
            Self::ListType(node) => node.syntax,
            Self::NonNullType(node) => node.syntax,
            Self::Annotation(node) => node.syntax,
            Self::AnnotationArguments(node) => node.syntax,
            Self::AnnotationArgument(node) => node.syntax,
            Self::StringValue(node) => node.syntax,
            Self::IntValue(node) => node.syntax,
            Self::FloatValue(node) => node.syntax,
            Self::BooleanValue(node) => node.syntax,
            Self::NullValue(node) => node.syntax,
            Self::EnumValue(node) => node.syntax,
            Self::ListValue(node) => node.syntax,
            Self::ObjectValue(node) => node.syntax,
            Self::ObjectField(node) => node.syntax,
            Self::DocComment(node) => node.syntax,
            Self::Tag(node) => node.syntax,
            Self::Error(node) => node.syntax,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.syntax().kind
    }
}
