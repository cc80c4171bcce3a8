use crate::ast::support;
use crate::ast::Annotation;
use crate::ast::AstNode;
use crate::ast::Comment;
use crate::ast::Description;
use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::StructuralError;
use crate::ast::UnionTypeDefinition;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;
use crate::token::TokenKind;
use crate::ByteSpan;
use inherent::inherent;

ast_node!(
    /// The root of a parsed IDL document.
    Document
);

impl<'a, 'src> Document<'a, 'src> {
    /// All well-formed or malformed definitions, in source order. `Error`
    /// nodes are skipped; see [`error_nodes()`](Self::error_nodes).
    pub fn definitions(&self) -> impl Iterator<Item = Definition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    /// The `Error` nodes produced by top-level recovery.
    pub fn error_nodes(&self) -> impl Iterator<Item = ErrorNode<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    /// Every comment in the document, in source order.
    pub fn comments(&self) -> impl Iterator<Item = Comment<'a, 'src>> + use<'a, 'src> {
        self.syntax.tokens().filter_map(Comment::cast)
    }
}

ast_node!(
    /// Tokens the parser could not fit into any rule.
    ErrorNode => Error
);

/// A top-level definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Definition<'a, 'src> {
    Import(ImportDeclaration<'a, 'src>),
    Schema(SchemaDefinition<'a, 'src>),
    ObjectType(ObjectTypeDefinition<'a, 'src>),
    InterfaceType(InterfaceTypeDefinition<'a, 'src>),
    InputObjectType(InputObjectTypeDefinition<'a, 'src>),
    EnumType(EnumTypeDefinition<'a, 'src>),
    UnionType(UnionTypeDefinition<'a, 'src>),
    ScalarType(ScalarTypeDefinition<'a, 'src>),
}

#[inherent]
impl<'a, 'src> AstNode<'a, 'src> for Definition<'a, 'src> {
    pub fn can_cast(kind: NodeKind) -> bool {
        kind.is_definition()
    }

    pub fn cast(node: &'a SyntaxNode<'src>) -> Option<Self> {
        let definition = match node.kind {
            NodeKind::ImportDeclaration => Self::Import(ImportDeclaration { syntax: node }),
            NodeKind::SchemaDefinition => Self::Schema(SchemaDefinition { syntax: node }),
            NodeKind::ObjectTypeDefinition => {
                Self::ObjectType(ObjectTypeDefinition { syntax: node })
            },
            NodeKind::InterfaceTypeDefinition => {
                Self::InterfaceType(InterfaceTypeDefinition { syntax: node })
            },
            NodeKind::InputObjectTypeDefinition => {
                Self::InputObjectType(InputObjectTypeDefinition { syntax: node })
            },
            NodeKind::EnumTypeDefinition => {
                Self::EnumType(EnumTypeDefinition { syntax: node })
            },
            NodeKind::UnionTypeDefinition => {
                Self::UnionType(UnionTypeDefinition { syntax: node })
            },
            NodeKind::ScalarTypeDefinition => {
                Self::ScalarType(ScalarTypeDefinition { syntax: node })
            },
            _ => return None,
        };
        Some(definition)
    }

    pub fn syntax(&self) -> &'a SyntaxNode<'src> {
        match self {
            Self::Import(def) => def.syntax,
            Self::Schema(def) => def.syntax,
            Self::ObjectType(def) => def.syntax,
            Self::InterfaceType(def) => def.syntax,
            Self::InputObjectType(def) => def.syntax,
            Self::EnumType(def) => def.syntax,
            Self::UnionType(def) => def.syntax,
            Self::ScalarType(def) => def.syntax,
        }
    }

    pub fn span(&self) -> ByteSpan {
        self.syntax().span
    }

    pub fn is_malformed(&self) -> bool {
        self.syntax().malformed
    }

    pub fn to_source<'s>(&self, source: &'s str) -> &'s str {
        self.syntax().text(source)
    }
}

impl<'a, 'src> Definition<'a, 'src> {
    /// The defined type's name. `None` for `schema` and `import`, which
    /// define no name, and for definitions whose name is missing.
    pub fn name(&self) -> Option<&'src str> {
        let type_name = support::child::<crate::ast::TypeName>(self.syntax())?;
        type_name.name().ok()
    }

    pub fn description(&self) -> Option<Description<'a, 'src>> {
        support::child(self.syntax())
    }

    /// Annotations written before the definition keyword, plus those a
    /// `scalar` or `union` carries after its name.
    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax())
    }
}

ast_node!(
    /// `import "path"`
    ImportDeclaration
);

impl<'a, 'src> ImportDeclaration<'a, 'src> {
    /// The raw string literal naming the imported file, quotes included.
    pub fn path_literal(&self) -> Result<&'src str, StructuralError> {
        support::token(self.syntax, TokenKind::StringLiteral)
            .map(|token| token.text)
            .ok_or_else(|| support::missing_child(self.syntax, "import path"))
    }

    /// The imported path with its surrounding quotes removed. Escape
    /// sequences are left as written.
    pub fn path(&self) -> Result<&'src str, StructuralError> {
        let literal = self.path_literal()?;
        Ok(literal
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(literal))
    }
}
