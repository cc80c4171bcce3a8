use crate::ast::support;
use crate::ast::Annotation;
use crate::ast::Description;
use crate::ast::NamedType;
use crate::ast::StructuralError;

ast_node!(
    /// `schema { query: Query ... }`
    SchemaDefinition
);

impl<'a, 'src> SchemaDefinition<'a, 'src> {
    pub fn description(&self) -> Option<Description<'a, 'src>> {
        support::child(self.syntax)
    }

    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    pub fn operation_types(
        &self,
    ) -> impl Iterator<Item = OperationTypeDefinition<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }

    /// The operation type bound to `operation`, e.g. `"query"`.
    pub fn operation_type(&self, operation: &str) -> Option<OperationTypeDefinition<'a, 'src>> {
        self.operation_types()
            .find(|op| op.operation().is_ok_and(|name| name == operation))
    }
}

ast_node!(
    /// `query: Query`
    OperationTypeDefinition
);

impl<'a, 'src> OperationTypeDefinition<'a, 'src> {
    /// The operation name as written. For a well-formed node this is one of
    /// `query`, `mutation` or `subscription`.
    pub fn operation(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "operation type")
    }

    pub fn named_type(&self) -> Result<NamedType<'a, 'src>, StructuralError> {
        support::required(self.syntax, "named type")
    }
}
