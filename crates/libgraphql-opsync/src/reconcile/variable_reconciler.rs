use crate::operation::FieldSelection;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::operation::VariableDef;
use crate::reconcile::ConflictRemap;
use indexmap::IndexSet;
use std::collections::HashSet;

pub(super) struct ReconciledVariables {
    pub remaps: Vec<ConflictRemap>,
    pub variables: Vec<VariableDef>,
}

/// Computes the variable definitions of a reconciled operation.
///
/// The result is, in order:
///
/// 1. the remote operation's variables, renamed where they clash with a
///    variable used by one of the local document's other root fields,
/// 2. local variables still referenced by directives that survived the merge,
/// 3. variables used by the other root fields, in local order.
pub(super) struct VariableReconciler<'a> {
    local: &'a OperationTree,
    merged_root: &'a FieldSelection,
    remote: &'a OperationTree,
    sibling_var_names: IndexSet<&'a str>,
}
impl<'a> VariableReconciler<'a> {
    pub fn new(
        local: &'a OperationTree,
        remote: &'a OperationTree,
        siblings: &[&'a Selection],
        merged_root: &'a FieldSelection,
    ) -> Self {
        let mut names = vec![];
        for sibling in siblings {
            sibling.variable_names(&mut names);
        }

        Self {
            local,
            merged_root,
            remote,
            sibling_var_names: names.into_iter().collect(),
        }
    }

    pub fn reconcile(self) -> ReconciledVariables {
        let mut remaps = vec![];
        let mut variables: Vec<VariableDef> = vec![];

        let mut taken: HashSet<&str> = self.sibling_var_names.iter().copied().collect();
        taken.extend(self.remote.variables().iter().map(|var_def| var_def.name()));
        let prefix = self.remote.name().unwrap_or(self.merged_root.name());

        for remote_var in self.remote.variables() {
            let mut name = remote_var.name().to_string();
            if self.sibling_var_names.contains(name.as_str()) {
                name = unique_name(
                    format!("{prefix}{}", capitalize(remote_var.name())),
                    |candidate| {
                        taken.contains(candidate)
                            || variables.iter().any(|var_def| var_def.name() == candidate)
                    },
                );
                remaps.push(ConflictRemap {
                    new_name: name.clone(),
                    old_name: remote_var.name().to_string(),
                });
            }

            // A default the user gave the (non-shared) local variable wins over
            // the synthesized one.
            let default_value = self.local
                .variable(name.as_str())
                .filter(|local_var| !self.sibling_var_names.contains(local_var.name()))
                .and_then(|local_var| local_var.default_value())
                .or(remote_var.default_value())
                .cloned();

            variables.push(VariableDef {
                default_value,
                name,
                type_annotation: remote_var.type_annotation().clone(),
            });
        }

        for name in self.directive_var_names() {
            if variables.iter().any(|var_def| var_def.name() == name)
                || self.sibling_var_names.contains(name) {
                continue;
            }
            if let Some(local_var) = self.local.variable(name) {
                variables.push(local_var.clone());
            }
        }

        for local_var in self.local.variables() {
            if self.sibling_var_names.contains(local_var.name())
                && !variables.iter().any(|var_def| var_def.name() == local_var.name()) {
                variables.push(local_var.clone());
            }
        }

        ReconciledVariables {
            remaps,
            variables,
        }
    }

    /// Variables referenced by the local operation's directives or by local
    /// directives carried into the merged root field.
    fn directive_var_names(&self) -> IndexSet<&'a str> {
        let mut names = vec![];
        for directive in self.local.directives() {
            directive.variable_names(&mut names);
        }
        for directive in self.merged_root.directives() {
            directive.variable_names(&mut names);
        }
        for child in self.merged_root.selections() {
            child.walk(&mut |selection| {
                for directive in selection.directives() {
                    directive.variable_names(&mut names);
                }
            });
        }
        names.into_iter().collect()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The first of `base`, `base2`, `base3`, ... that is not `is_taken`.
fn unique_name(base: String, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = base.clone();
    let mut suffix = 2;
    while is_taken(candidate.as_str()) {
        candidate = format!("{base}{suffix}");
        suffix += 1;
    }
    candidate
}
