use crate::FieldKey;
use indexmap::IndexMap;
use std::collections::HashSet;

static ALL_FIELDS: SelectedFields = SelectedFields::Bool(true);

/// Decides which definition wins when an object type and one of the
/// interfaces it implements both declare a field with the same name.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum FieldPrecedence {
    /// The interface's declaration replaces the object's own (keeping the
    /// object's field order).
    #[default]
    InterfaceFields,

    /// The object's own declaration is kept.
    OwnFields,
}

/// A shape restricting which fields get expanded during synthesis.
///
/// `true` selects everything beneath a position and `false` selects nothing.
/// A map selects only the keys it names (and only when their value is not
/// `false`). Beneath a union or interface field the map is keyed by member
/// type name. This deserializes directly from JSON such as
/// `{"id": true, "friends": {"name": true}}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum SelectedFields {
    Bool(bool),
    Fields(IndexMap<String, SelectedFields>),
}
impl SelectedFields {
    /// The sub-shape for the child named `name`, or `None` if that child
    /// should be omitted.
    pub fn child(&self, name: &str) -> Option<&SelectedFields> {
        match self {
            Self::Bool(true) => Some(&ALL_FIELDS),
            Self::Bool(false) => None,
            Self::Fields(fields) => fields.get(name).filter(|sub| sub.is_selected()),
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}
impl Default for SelectedFields {
    fn default() -> Self {
        Self::Bool(true)
    }
}

/// Policy knobs for [`OperationSynthesizer::synthesize()`](crate::synthesis::OperationSynthesizer::synthesize).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// When set, only arguments named here become variables. Entries match
    /// either a bare argument name (`id`) or a field-qualified one
    /// (`user.friends.first`). Fields whose required arguments are excluded
    /// are dropped (except the root field, which always keeps its required
    /// arguments).
    pub argument_allow_list: Option<HashSet<String>>,

    /// How many times a named type may already appear among a selection's
    /// ancestors before expansion stops.
    pub circular_reference_bound: usize,

    pub field_precedence: FieldPrecedence,

    /// Fields nested deeper than this are omitted. The root field sits at
    /// depth 0.
    pub max_depth: Option<usize>,

    /// Name of the synthesized operation. Defaults to the root field's name.
    pub operation_name: Option<String>,

    /// Shape of the selections beneath the root field.
    pub selected_fields: SelectedFields,
}
impl SynthesisOptions {
    pub(crate) fn allows_argument(&self, field_key: &FieldKey, arg_name: &str) -> bool {
        match &self.argument_allow_list {
            None => true,
            Some(allow_list) =>
                allow_list.contains(arg_name)
                    || allow_list.contains(format!("{field_key}.{arg_name}").as_str()),
        }
    }
}
impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            argument_allow_list: None,
            circular_reference_bound: 1,
            field_precedence: FieldPrecedence::default(),
            max_depth: None,
            operation_name: None,
            selected_fields: SelectedFields::default(),
        }
    }
}
