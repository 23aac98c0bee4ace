use crate::ast;
use crate::types::TypeAnnotation;
use crate::Value;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(input_val: &ast::schema::InputValue) -> Self {
        Parameter {
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            description: input_val.description.to_owned(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    /// A parameter is required when its type is non-null and it declares no
    /// default value. A field selection that omits a required parameter is
    /// invalid.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
