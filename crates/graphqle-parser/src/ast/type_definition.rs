use crate::ast::support;
use crate::ast::Annotation;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::NamedType;
use crate::ast::StructuralError;
use crate::token::TokenKind;

/// Getters shared by every named type definition.
macro_rules! named_definition_getters {
    ($name:ident) => {
        impl<'a, 'src> $name<'a, 'src> {
            /// The defined type's name.
            pub fn name(&self) -> Result<&'src str, StructuralError> {
                support::required::<TypeName>(self.syntax, "type name")?.name()
            }

            pub fn description(&self) -> Option<Description<'a, 'src>> {
                support::child(self.syntax)
            }

            pub fn annotations(
                &self,
            ) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
                support::children(self.syntax)
            }
        }
    };
}

ast_node!(
    /// The name introduced by a type definition.
    TypeName
);

impl<'src> TypeName<'_, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "name")
    }
}

ast_node!(
    /// A string literal documenting the definition or member that follows.
    Description
);

impl<'src> Description<'_, 'src> {
    /// The raw string literal, quotes included.
    pub fn literal(&self) -> Result<&'src str, StructuralError> {
        support::token(self.syntax, TokenKind::StringLiteral)
            .map(|token| token.text)
            .ok_or_else(|| support::missing_child(self.syntax, "string"))
    }

    /// Returns `true` for `"""block"""` descriptions.
    pub fn is_block(&self) -> bool {
        self.literal().is_ok_and(|text| text.starts_with("\"\"\""))
    }
}

ast_node!(
    /// `implements A & B`
    ImplementsInterfaces
);

impl<'a, 'src> ImplementsInterfaces<'a, 'src> {
    pub fn interfaces(&self) -> impl Iterator<Item = NamedType<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `type Name implements I { fields }`
    ObjectTypeDefinition
);
named_definition_getters!(ObjectTypeDefinition);

impl<'a, 'src> ObjectTypeDefinition<'a, 'src> {
    pub fn implements_interfaces(&self) -> Option<ImplementsInterfaces<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn fields_definition(&self) -> Result<FieldsDefinition<'a, 'src>, StructuralError> {
        support::required(self.syntax, "fields definition")
    }

    /// The fields, or nothing if the body is missing.
    pub fn fields(&self) -> impl Iterator<Item = FieldDefinition<'a, 'src>> + use<'a, 'src> {
        support::child::<FieldsDefinition>(self.syntax)
            .into_iter()
            .flat_map(|fields| fields.fields())
    }
}

ast_node!(
    /// `interface Name implements I { fields }`
    InterfaceTypeDefinition
);
named_definition_getters!(InterfaceTypeDefinition);

impl<'a, 'src> InterfaceTypeDefinition<'a, 'src> {
    pub fn implements_interfaces(&self) -> Option<ImplementsInterfaces<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn fields_definition(&self) -> Result<FieldsDefinition<'a, 'src>, StructuralError> {
        support::required(self.syntax, "fields definition")
    }

    /// The fields, or nothing if the body is missing.
    pub fn fields(&self) -> impl Iterator<Item = FieldDefinition<'a, 'src>> + use<'a, 'src> {
        support::child::<FieldsDefinition>(self.syntax)
            .into_iter()
            .flat_map(|fields| fields.fields())
    }
}

ast_node!(
    /// `input Name { fields }`
    InputObjectTypeDefinition
);
named_definition_getters!(InputObjectTypeDefinition);

impl<'a, 'src> InputObjectTypeDefinition<'a, 'src> {
    pub fn fields(
        &self,
    ) -> impl Iterator<Item = InputValueDefinition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `enum Name { VALUES }`
    EnumTypeDefinition
);
named_definition_getters!(EnumTypeDefinition);

impl<'a, 'src> EnumTypeDefinition<'a, 'src> {
    pub fn values(&self) -> impl Iterator<Item = EnumValueDefinition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(EnumValueDefinition);

impl<'a, 'src> EnumValueDefinition<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "enum value name")
    }

    pub fn description(&self) -> Option<Description<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `union Name = A | B`
    UnionTypeDefinition
);
named_definition_getters!(UnionTypeDefinition);

impl<'a, 'src> UnionTypeDefinition<'a, 'src> {
    pub fn union_members(&self) -> Result<UnionMembers<'a, 'src>, StructuralError> {
        support::required(self.syntax, "union members")
    }

    /// The member types, or nothing if the member list is missing.
    pub fn members(&self) -> impl Iterator<Item = NamedType<'a, 'src>> + use<'a, 'src> {
        support::child::<UnionMembers>(self.syntax)
            .into_iter()
            .flat_map(|members| members.members())
    }
}

ast_node!(
    /// The `A | B` part of a union definition.
    UnionMembers
);

impl<'a, 'src> UnionMembers<'a, 'src> {
    pub fn members(&self) -> impl Iterator<Item = NamedType<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `scalar Name`
    ScalarTypeDefinition
);
named_definition_getters!(ScalarTypeDefinition);
