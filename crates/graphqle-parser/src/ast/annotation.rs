use crate::ast::support;
use crate::ast::StructuralError;
use crate::ast::Value;

ast_node!(
    /// `@Name(arg: value, ...)`
    Annotation
);

impl<'a, 'src> Annotation<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "annotation name")
    }

    pub fn argument_list(&self) -> Option<AnnotationArguments<'a, 'src>> {
        support::child(self.syntax)
    }

    /// The arguments, or nothing if the annotation has no argument list.
    pub fn arguments(
        &self,
    ) -> impl Iterator<Item = AnnotationArgument<'a, 'src>> + use<'a, 'src> {
        self.argument_list()
            .into_iter()
            .flat_map(|arguments| arguments.arguments())
    }

    /// The value of the argument called `name`.
    pub fn argument(&self, name: &str) -> Option<Value<'a, 'src>> {
        self.arguments()
            .find(|argument| argument.name().is_ok_and(|n| n == name))
            .and_then(|argument| argument.value().ok())
    }
}

ast_node!(AnnotationArguments);

impl<'a, 'src> AnnotationArguments<'a, 'src> {
    pub fn arguments(
        &self,
    ) -> impl Iterator<Item = AnnotationArgument<'a, 'src>> + use<'a, 'src> {
        support::children(self.syntax)
    }
}

ast_node!(
    /// `name: value`
    AnnotationArgument
);

impl<'a, 'src> AnnotationArgument<'a, 'src> {
    pub fn name(&self) -> Result<&'src str, StructuralError> {
        support::name(self.syntax, "argument name")
    }

    pub fn value(&self) -> Result<Value<'a, 'src>, StructuralError> {
        support::required(self.syntax, "value")
    }
}
