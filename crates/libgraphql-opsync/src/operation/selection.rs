use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FragmentSelection;
use crate::FieldKey;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(FieldSelection),
    Fragment(FragmentSelection),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_fragment(&self) -> Option<&FragmentSelection> {
        if let Self::Fragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }

    pub fn comments(&self) -> &[String] {
        match self {
            Self::Field(field) => field.comments(),
            Self::Fragment(fragment) => fragment.comments(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Field(field) => field.directives(),
            Self::Fragment(fragment) => fragment.directives(),
        }
    }

    pub fn field_key(&self) -> &FieldKey {
        match self {
            Self::Field(field) => field.field_key(),
            Self::Fragment(fragment) => fragment.field_key(),
        }
    }

    pub fn selections(&self) -> &[Selection] {
        match self {
            Self::Field(field) => field.selections(),
            Self::Fragment(fragment) => fragment.selections(),
        }
    }

    /// A copy of this selection (alias, arguments, directives, comments and
    /// all) with its children replaced by `selections`.
    pub(crate) fn with_selections(&self, selections: Vec<Selection>) -> Selection {
        match self {
            Self::Field(field) => Self::Field(FieldSelection {
                alias: field.alias.clone(),
                arguments: field.arguments.clone(),
                comments: field.comments.clone(),
                description: field.description.clone(),
                directives: field.directives.clone(),
                field_key: field.field_key.clone(),
                name: field.name.clone(),
                selections,
            }),
            Self::Fragment(fragment) => Self::Fragment(FragmentSelection {
                comments: fragment.comments.clone(),
                directives: fragment.directives.clone(),
                field_key: fragment.field_key.clone(),
                selections,
                type_condition: fragment.type_condition.clone(),
            }),
        }
    }

    /// Appends the name of every variable referenced by an argument or
    /// directive on this selection or anything beneath it.
    pub fn variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Self::Field(field) = self {
            for value in field.arguments.values() {
                value.variable_names(names);
            }
        }
        for directive in self.directives() {
            directive.variable_names(names);
        }
        for child in self.selections() {
            child.variable_names(names);
        }
    }

    /// Visit this selection and everything beneath it, parents before
    /// children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Selection)) {
        visit(self);
        for child in self.selections() {
            child.walk(visit);
        }
    }
}
