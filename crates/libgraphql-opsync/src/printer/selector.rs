use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::FieldKey;
use std::collections::HashSet;

/// Prunes an [`OperationTree`] down to a set of [`FieldKey`]s.
///
/// A selection survives only if its own key is in the set, so keeping
/// `user.name` means keeping `user` as well. A composite whose children are
/// all dropped is dropped too. Variable definitions that nothing references
/// any more are dropped as well.
#[derive(Clone, Debug)]
pub struct OperationSelector {
    keys: HashSet<FieldKey>,
}
impl OperationSelector {
    pub fn new<K: Into<FieldKey>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn select(&self, tree: &OperationTree) -> OperationTree {
        let selections = tree.selections()
            .iter()
            .filter_map(|selection| self.select_selection(selection))
            .collect::<Vec<_>>();

        let mut selected = OperationTree {
            directives: tree.directives.clone(),
            leading_comments: tree.leading_comments.clone(),
            name: tree.name.clone(),
            operation_kind: tree.operation_kind,
            selections,
            variables: vec![],
        };

        let referenced = selected.referenced_variable_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<HashSet<_>>();
        selected.variables = tree.variables()
            .iter()
            .filter(|var_def| referenced.contains(var_def.name()))
            .cloned()
            .collect();

        tracing::debug!(
            num_keys = self.keys.len(),
            num_variables = selected.variables.len(),
            "selected operation subset",
        );
        selected
    }

    fn select_selection(&self, selection: &Selection) -> Option<Selection> {
        if !self.keys.contains(selection.field_key()) {
            return None;
        }
        if selection.selections().is_empty() {
            return Some(selection.clone());
        }

        let children = selection.selections()
            .iter()
            .filter_map(|child| self.select_selection(child))
            .collect::<Vec<_>>();
        if children.is_empty() {
            return None;
        }

        Some(selection.with_selections(children))
    }
}

impl OperationTree {
    /// Prune this tree down to the selections named by `keys` (see
    /// [`OperationSelector`]).
    pub fn select_subset<K: Into<FieldKey>>(&self, keys: impl IntoIterator<Item = K>) -> OperationTree {
        OperationSelector::new(keys).select(self)
    }
}
