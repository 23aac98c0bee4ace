use crate::operation::FieldSelection;
use crate::operation::FragmentSelection;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::operation::VariableDef;
use crate::reconcile::variable_reconciler::VariableReconciler;
use crate::reconcile::ConflictRemap;
use crate::reconcile::ReconcileError;

type Result<T> = std::result::Result<T, ReconcileError>;

/// The outcome of [`reconcile()`]: the merged tree plus every variable that
/// had to be renamed to avoid clashing with the document's other root fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reconciliation {
    pub(crate) remaps: Vec<ConflictRemap>,
    pub(crate) tree: OperationTree,
}
impl Reconciliation {
    pub fn into_tree(self) -> OperationTree {
        self.tree
    }

    pub fn remaps(&self) -> &[ConflictRemap] {
        &self.remaps
    }

    pub fn tree(&self) -> &OperationTree {
        &self.tree
    }
}

/// Merge a saved, possibly hand-edited operation (`local`) with a freshly
/// synthesized operation for the same root field (`remote`).
///
/// Only the local root field named like the remote root field is updated.
/// Within it, the remote tree decides *what* is selected while the local tree
/// keeps its aliases, directives, comments and ordering:
///
/// * matched selections keep their local order,
/// * selections the schema no longer offers are dropped,
/// * selections new to the schema are appended in their synthesized shape.
///
/// Every other local root field is carried over untouched, along with the
/// variables it references. Remote variables whose names those fields already
/// use are renamed (see [`ConflictRemap`]).
pub fn reconcile(local: &OperationTree, remote: &OperationTree) -> Result<Reconciliation> {
    if local.operation_kind() != remote.operation_kind() {
        return Err(ReconcileError::OperationKindMismatch {
            local: local.operation_kind(),
            remote: remote.operation_kind(),
        });
    }

    let remote_root = remote.root_fields().next().ok_or(ReconcileError::RemoteHasNoRootField)?;
    let Some((target_idx, local_root)) = local.selections()
        .iter()
        .enumerate()
        .find_map(|(idx, selection)| match selection {
            Selection::Field(field) if field.name() == remote_root.name() => Some((idx, field)),
            _ => None,
        }) else {
        return Err(ReconcileError::NoLocalMatch {
            root_field_name: remote_root.name().to_string(),
        });
    };

    let siblings = local.selections()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != target_idx)
        .map(|(_, selection)| selection)
        .collect::<Vec<_>>();

    let mut merged_root = merge_field(local_root, remote_root);
    let variables = VariableReconciler::new(local, remote, &siblings, &merged_root).reconcile();
    for remap in &variables.remaps {
        let num_renamed = rename_argument_variable(&mut merged_root, remap);
        tracing::debug!(
            remap = %remap,
            num_renamed,
            "renamed variable that clashed with a sibling root field",
        );
    }

    // The updated field leads; siblings follow in their original order.
    let mut selections = Vec::with_capacity(local.selections().len());
    selections.push(Selection::Field(merged_root));
    selections.extend(siblings.into_iter().cloned());

    Ok(Reconciliation {
        remaps: variables.remaps,
        tree: OperationTree {
            directives: local.directives.clone(),
            leading_comments: local.leading_comments.clone(),
            name: local.name.clone(),
            operation_kind: local.operation_kind,
            selections,
            variables: variables.variables,
        },
    })
}

/// Like [`reconcile()`], but discards the list of renamed variables.
pub fn reconcile_tree(local: &OperationTree, remote: &OperationTree) -> Result<OperationTree> {
    reconcile(local, remote).map(Reconciliation::into_tree)
}

/// Reconcile `local` against each of `remotes` in turn, one per root field.
///
/// Every [`reconcile()`] step moves its field to the front, so afterwards the
/// root selections and variables that `local` already had are put back in
/// their original order. Variables introduced along the way follow them in
/// the order they were produced.
pub fn reconcile_all<'a>(
    local: &OperationTree,
    remotes: impl IntoIterator<Item = &'a OperationTree>,
) -> Result<Reconciliation> {
    let mut remaps = vec![];
    let mut tree = local.clone();
    for remote in remotes {
        let reconciliation = reconcile(&tree, remote)?;
        remaps.extend(reconciliation.remaps);
        tree = reconciliation.tree;
    }

    tree.selections.sort_by_key(|selection: &Selection| {
        local.selections()
            .iter()
            .position(|local_selection| local_selection.field_key() == selection.field_key())
            .unwrap_or(usize::MAX)
    });
    tree.variables.sort_by_key(|var_def: &VariableDef| {
        local.variables()
            .iter()
            .position(|local_var_def| local_var_def.name() == var_def.name())
            .unwrap_or(usize::MAX)
    });

    Ok(Reconciliation {
        remaps,
        tree,
    })
}

fn merge_field(local: &FieldSelection, remote: &FieldSelection) -> FieldSelection {
    FieldSelection {
        alias: local.alias.clone().or_else(|| remote.alias.clone()),
        arguments: remote.arguments.clone(),
        comments: local.comments.clone(),
        description: remote.description.clone(),
        directives: local.directives.clone(),
        field_key: remote.field_key.clone(),
        name: remote.name.clone(),
        selections: merge_selections(&local.selections, &remote.selections),
    }
}

fn merge_fragment(local: &FragmentSelection, remote: &FragmentSelection) -> FragmentSelection {
    FragmentSelection {
        comments: local.comments.clone(),
        directives: local.directives.clone(),
        field_key: remote.field_key.clone(),
        selections: merge_selections(&local.selections, &remote.selections),
        type_condition: remote.type_condition.clone(),
    }
}

fn merge_selections(local: &[Selection], remote: &[Selection]) -> Vec<Selection> {
    let mut remote_matched = vec![false; remote.len()];
    let mut merged = Vec::with_capacity(remote.len());

    for local_selection in local {
        let counterpart = remote.iter().enumerate().find_map(|(idx, remote_selection)| {
            match (local_selection, remote_selection) {
                (Selection::Field(local_field), Selection::Field(remote_field))
                    if local_field.name == remote_field.name =>
                    Some((idx, Selection::Field(merge_field(local_field, remote_field)))),

                (Selection::Fragment(local_frag), Selection::Fragment(remote_frag))
                    if local_frag.type_condition == remote_frag.type_condition =>
                    Some((idx, Selection::Fragment(merge_fragment(local_frag, remote_frag)))),

                _ => None,
            }
        });

        match counterpart {
            Some((idx, merged_selection)) => {
                remote_matched[idx] = true;
                merged.push(merged_selection);
            },
            None => tracing::trace!(
                field_key = local_selection.field_key().as_str(),
                "dropping selection that is no longer offered by the schema",
            ),
        }
    }

    for (remote_selection, matched) in remote.iter().zip(remote_matched) {
        if !matched {
            tracing::trace!(
                field_key = remote_selection.field_key().as_str(),
                "adding selection newly offered by the schema",
            );
            merged.push(remote_selection.clone());
        }
    }

    merged
}

fn rename_argument_variable(field: &mut FieldSelection, remap: &ConflictRemap) -> usize {
    let mut num_renamed: usize = field.arguments
        .values_mut()
        .map(|value| value.rename_variable(remap.old_name(), remap.new_name()))
        .sum();

    for child in &mut field.selections {
        num_renamed += rename_in_selection(child, remap);
    }
    num_renamed
}

fn rename_in_selection(selection: &mut Selection, remap: &ConflictRemap) -> usize {
    match selection {
        Selection::Field(field) => rename_argument_variable(field, remap),
        Selection::Fragment(fragment) => fragment.selections
            .iter_mut()
            .map(|child| rename_in_selection(child, remap))
            .sum(),
    }
}
