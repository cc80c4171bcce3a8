use crate::ast::support;
use crate::ast::AstNode;
use crate::ast::StructuralError;
use crate::syntax::NodeKind;
use crate::syntax::SyntaxNode;
use crate::ByteSpan;
use inherent::inherent;

/// A constant value, as written in default values and annotation
/// arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Value<'a, 'src> {
    String(StringValue<'a, 'src>),
    Int(IntValue<'a, 'src>),
    Float(FloatValue<'a, 'src>),
    Boolean(BooleanValue<'a, 'src>),
    Null(NullValue<'a, 'src>),
    Enum(EnumValue<'a, 'src>),
    List(ListValue<'a, 'src>),
    Object(ObjectValue<'a, 'src>),
}

#[inherent]
impl<'a, 'src> AstNode<'a, 'src> for Value<'a, 'src> {
    pub fn can_cast(kind: NodeKind) -> bool {
        kind.is_value()
    }

    pub fn cast(node: &'a SyntaxNode<'src>) -> Option<Self> {
        let value = match node.kind {
            NodeKind::StringValue => Self::String(StringValue { syntax: node }),
            NodeKind::IntValue => Self::Int(IntValue { syntax: node }),
            NodeKind::FloatValue => Self::Float(FloatValue { syntax: node }),
            NodeKind::BooleanValue => Self::Boolean(BooleanValue { syntax: node }),
            NodeKind::NullValue => Self::Null(NullValue { syntax: node }),
            NodeKind::EnumValue => Self::Enum(EnumValue { syntax: node }),
            NodeKind::ListValue => Self::List(ListValue { syntax: node }),
            NodeKind::ObjectValue => Self::Object(ObjectValue { syntax: node }),
            _ => return None,
        };
        Some(value)
    }

    pub fn syntax(&self) -> &'a SyntaxNode<'src> {
        match self {
            Self::String(value) => value.syntax,
            Self::Int(value) => value.syntax,
            Self::Float(value) => value.syntax,
            Self::Boolean(value) => value.syntax,
            Self::Null(value) => value.syntax,
            Self::Enum(value) => value.syntax,
            Self::List(value) => value.syntax,
            Self::Object(value) => value.syntax,
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

ast_node!(StringValue);

impl<'src> StringValue<'_, 'src> {
    /// The raw string literal, quotes included.
    pub fn literal(&self) -> Result<&'src str, StructuralError> {
        support::leaf_text(self.syntax, "string literal")
    }
}

ast_node!(IntValue);

impl<'src> IntValue<'_, 'src> {
    pub fn literal(&self) -> Result<&'src str, StructuralError> {
        support::leaf_text(self.syntax, "integer literal")
    }

    /// The value as an `i64`, or `None` if the literal is missing or out of
    /// range.
    pub fn as_i64(&self) -> Option<i64> {
        self.literal().ok()?.parse().ok()
    }
}

ast_node!(FloatValue);

impl<'src> FloatValue<'_, 'src> {
    pub fn literal(&self) -> Result<&'src str, StructuralError> {
        support::leaf_text(self.syntax, "float literal")
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.literal().ok()?.parse().ok()
    }
}

ast_node!(BooleanValue);

impl BooleanValue<'_, '_> {
    pub fn value(&self) -> Result<bool, StructuralError> {
        match support::leaf_text(self.syntax, "boolean literal")? {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(support::missing_child(self.syntax, "boolean literal")),
        }
    }
}

ast_node!(NullValue);

ast_node!(
    /// A bare name in value position.
    EnumValue
);

impl<'src> EnumValue<'_, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "enum value name")
    }
}

ast_node!(
    /// `[value, ...]`
    ListValue
);

impl<'a, 'src> ListValue<'a, 'src> {
    pub fn values(&self) -> impl Iterator<Item = Value<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `{ name: value, ... }`
    ObjectValue
);

impl<'a, 'src> ObjectValue<'a, 'src> {
    pub fn fields(&self) -> impl Iterator<Item = ObjectField<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(ObjectField);

impl<'a, 'src> ObjectField<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "field name")
    }

    pub fn value(&self) -> Result<Value<'a, 'src>, StructuralError> {
        support::required(self.syntax, "value")
    }
}
