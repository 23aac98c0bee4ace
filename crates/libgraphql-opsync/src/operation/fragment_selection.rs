use crate::operation::DirectiveAnnotation;
use crate::operation::Selection;
use crate::FieldKey;

/// An inline fragment (`... on User { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSelection {
    pub(crate) comments: Vec<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_key: FieldKey,
    pub(crate) selections: Vec<Selection>,
    pub(crate) type_condition: Option<String>,
}
impl FragmentSelection {
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn field_key(&self) -> &FieldKey {
        &self.field_key
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
