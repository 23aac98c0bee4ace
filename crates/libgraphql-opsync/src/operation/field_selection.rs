use crate::operation::DirectiveAnnotation;
use crate::operation::Selection;
use crate::FieldKey;
use crate::Value;
use indexmap::IndexMap;

/// A field selected within an operation, along with everything selected
/// beneath it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) comments: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_key: FieldKey,
    pub(crate) name: String,
    pub(crate) selections: Vec<Selection>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Argument name -> value, in the order they are written.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// The `#` comment lines written directly above this field in the source
    /// document (without the leading `#`).
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The schema description of the selected field. Only set on trees
    /// produced by the synthesizer.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn field_key(&self) -> &FieldKey {
        &self.field_key
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's value is returned under in a response: its alias
    /// if it has one, otherwise its name.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}
