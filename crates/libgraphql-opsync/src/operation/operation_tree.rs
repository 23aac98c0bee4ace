use crate::file_reader;
use crate::operation::operation_parser::OperationParser;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::OperationKind;
use crate::operation::OperationParseError;
use crate::operation::Selection;
use crate::operation::VariableDef;
use crate::FieldKey;
use indexmap::IndexSet;
use std::path::Path;
use std::sync::Arc;

/// A single GraphQL operation: its header (kind, name, variables, directives)
/// and the tree of selections beneath it.
///
/// Trees are produced either by the
/// [`OperationSynthesizer`](crate::synthesis::OperationSynthesizer) (the
/// "remote" shape of an operation) or by parsing saved operation text with
/// [`OperationTree::from_str()`] (the "local" shape).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationTree {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) leading_comments: Vec<String>,
    pub(crate) name: Option<String>,
    pub(crate) operation_kind: OperationKind,
    pub(crate) selections: Vec<Selection>,
    pub(crate) variables: Vec<VariableDef>,
}
impl OperationTree {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// Every [`FieldKey`] in this tree, parents before children.
    pub fn field_keys(&self) -> Vec<&FieldKey> {
        let mut keys = vec![];
        for selection in &self.selections {
            selection.walk(&mut |selection| keys.push(selection.field_key()));
        }
        keys
    }

    pub fn find(&self, field_key: &FieldKey) -> Option<&Selection> {
        let mut found = None;
        for selection in &self.selections {
            selection.walk(&mut |selection| {
                if found.is_none() && selection.field_key() == field_key {
                    found = Some(selection);
                }
            });
        }
        found
    }

    /// Read a file containing exactly one operation and parse it into an
    /// [`OperationTree`].
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, OperationParseError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| OperationParseError::OperationFileReadError(Arc::new(err)))?;
        OperationParser::new(content.as_str(), Some(file_path)).parse()
    }

    /// Parse text containing exactly one operation into an [`OperationTree`].
    ///
    /// Inline fragments are supported; named fragment spreads and fragment
    /// definitions are not. `#` comment lines directly above the operation or
    /// any selection are kept so that printing the tree preserves them.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: impl AsRef<str>) -> Result<Self, OperationParseError> {
        OperationParser::new(content.as_ref(), None).parse()
    }

    /// The `#` comment lines directly above the operation in its source text.
    pub fn leading_comments(&self) -> &[String] {
        &self.leading_comments
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// Names of all variables referenced by arguments or directives anywhere
    /// in this operation, in first-reference order.
    pub fn referenced_variable_names(&self) -> IndexSet<&str> {
        let mut names = vec![];
        for directive in &self.directives {
            directive.variable_names(&mut names);
        }
        for selection in &self.selections {
            selection.variable_names(&mut names);
        }
        names.into_iter().collect()
    }

    /// The fields selected directly on the operation's root type.
    pub fn root_fields(&self) -> impl Iterator<Item = &FieldSelection> {
        self.selections.iter().filter_map(Selection::as_field)
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDef> {
        self.variables.iter().find(|var_def| var_def.name() == name)
    }

    pub fn variables(&self) -> &[VariableDef] {
        &self.variables
    }
}
