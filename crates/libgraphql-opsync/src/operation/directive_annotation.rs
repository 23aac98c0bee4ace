use crate::ast;
use crate::Value;
use indexmap::IndexMap;

/// A directive applied to an operation, field, or fragment (e.g.
/// `@include(if: $withFriends)`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub(crate) fn from_ast(ast_annots: &[ast::operation::Directive]) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| Self {
            arguments: ast_annot.arguments.iter().map(|(arg_name, ast_arg)| (
                arg_name.to_string(),
                Value::from_ast(ast_arg),
            )).collect(),
            name: ast_annot.name.to_string(),
        }).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        for value in self.arguments.values() {
            value.variable_names(names);
        }
    }
}
