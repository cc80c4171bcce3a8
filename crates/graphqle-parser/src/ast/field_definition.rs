use crate::ast::support;
use crate::ast::Annotation;
use crate::ast::Description;
use crate::ast::StructuralError;
use crate::ast::TypeRef;
use crate::ast::Value;

ast_node!(
    /// The braced field list of an object or interface type.
    FieldsDefinition
);

impl<'a, 'src> FieldsDefinition<'a, 'src> {
    pub fn fields(&self) -> impl Iterator<Item = FieldDefinition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `name(args): Type`
    FieldDefinition
);

impl<'a, 'src> FieldDefinition<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "field name")
    }

    pub fn description(&self) -> Option<Description<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    pub fn arguments_definition(&self) -> Option<ArgumentsDefinition<'a, 'src>> {
        support::child(self.syntax)
    }

    /// The field's arguments, or nothing if it takes none.
    pub fn arguments(
        &self,
    ) -> impl Iterator<Item = InputValueDefinition<'a, 'src>> + use<'a, 'src> {
        self.arguments_definition()
            .into_iter()
            .flat_map(|arguments| arguments.arguments())
    }

    pub fn type_ref(&self) -> Result<TypeRef<'a, 'src>, StructuralError> {
        support::required(self.syntax, "type")
    }
}

ast_node!(
    /// `(arg: Type = default, ...)`
    ArgumentsDefinition
);

impl<'a, 'src> ArgumentsDefinition<'a, 'src> {
    pub fn arguments(
        &self,
    ) -> impl Iterator<Item = InputValueDefinition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// An argument or an input object field: `name: Type = default`.
    InputValueDefinition
);

impl<'a, 'src> InputValueDefinition<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "input value name")
    }

    pub fn description(&self) -> Option<Description<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    pub fn type_ref(&self) -> Result<TypeRef<'a, 'src>, StructuralError> {
        support::required(self.syntax, "type")
    }

    pub fn default_value(&self) -> Option<DefaultValue<'a, 'src>> {
        support::child(self.syntax)
    }
}

ast_node!(
    /// `= value`
    DefaultValue
);

impl<'a, 'src> DefaultValue<'a, 'src> {
    pub fn value(&self) -> Result<Value<'a, 'src>, StructuralError> {
        support::required(self.syntax, "value")
    }
}
