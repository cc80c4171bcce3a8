use crate::ast::support;
use crate::ast::AstNode;
use crate::ast::StructuralError;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;
use crate::ByteSpan;
use inherent::inherent;

/// A type reference: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeRef<'a, 'src> {
    Named(NamedType<'a, 'src>),
    List(ListType<'a, 'src>),
    NonNull(NonNullType<'a, 'src>),
}

#[inherent]
impl<'a, 'src> AstNode<'a, 'src> for TypeRef<'a, 'src> {
    pub fn can_cast(kind: NodeKind) -> bool {
        kind.is_type_ref()
    }

    pub fn cast(node: &'a SyntaxNode<'src>) -> Option<Self> {
        match node.kind {
            NodeKind::NamedType => Some(Self::Named(NamedType { syntax: node })),
            NodeKind::ListType => Some(Self::List(ListType { syntax: node })),
            NodeKind::NonNullType => Some(Self::NonNull(NonNullType { syntax: node })),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &'a SyntaxNode<'src> {
        match self {
            Self::Named(ty) => ty.syntax,
            Self::List(ty) => ty.syntax,
            Self::NonNull(ty) => ty.syntax,
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

impl<'a, 'src> TypeRef<'a, 'src> {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The named type at the bottom of any list and non-null wrappers, e.g.
    /// `User` for `[User!]!`.
    pub fn innermost_named_type(&self) -> Result<NamedType<'a, 'src>, StructuralError> {
        let mut current = *self;
        loop {
            current = match current {
                Self::Named(named) => return Ok(named),
                Self::List(list) => list.item_type()?,
                Self::NonNull(non_null) => non_null.inner()?,
            };
        }
    }
}

ast_node!(NamedType);

impl<'src> NamedType<'_, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "type name")
    }
}

ast_node!(
    /// `[Type]`
    ListType
);

impl<'a, 'src> ListType<'a, 'src> {
    pub fn item_type(&self) -> Result<TypeRef<'a, 'src>, StructuralError> {
        support::required(self.syntax, "item type")
    }
}

ast_node!(
    /// `Type!`
    NonNullType
);

impl<'a, 'src> NonNullType<'a, 'src> {
    /// The wrapped type: a named or list type.
    pub fn inner(&self) -> Result<TypeRef<'a, 'src>, StructuralError> {
        support::required(self.syntax, "inner type")
    }
}
