use crate::types::TypeAnnotation;
use crate::Value;

/// A variable declared in an operation's header (e.g. `$first: Int = 10`).
/// Arguments refer to it by name via [`Value::VarRef`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDef {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDef {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            default_value,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
