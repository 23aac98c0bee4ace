use crate::operation::VariableDef;
use crate::synthesis::SynthesisOptions;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Marks how much per-call state existed before a subtree was synthesized so
/// that the subtree's variables and response paths can be discarded if the
/// subtree itself is.
#[derive(Clone, Copy, Debug)]
pub(super) struct Checkpoint {
    num_path_signatures: usize,
    num_variables: usize,
}

/// Everything that must be remembered across one synthesis call. A fresh
/// context is created per call.
#[derive(Debug)]
pub(super) struct SynthesisContext<'opts> {
    ancestor_types: Vec<String>,
    pub(super) options: &'opts SynthesisOptions,
    path_signatures: IndexMap<String, String>,
    variables: Vec<VariableDef>,
}
impl<'opts> SynthesisContext<'opts> {
    pub fn ancestor_count(&self, type_name: &str) -> usize {
        self.ancestor_types
            .iter()
            .filter(|ancestor| ancestor.as_str() == type_name)
            .count()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            num_path_signatures: self.path_signatures.len(),
            num_variables: self.variables.len(),
        }
    }

    /// Records that `response_path` returns a value of type `signature`.
    /// Returns `false` if the path was already claimed with a different
    /// signature (in which case nothing is recorded).
    pub fn claim_response_path(&mut self, response_path: &str, signature: &str) -> bool {
        match self.path_signatures.get(response_path) {
            Some(existing) => existing == signature,
            None => {
                self.path_signatures.insert(response_path.to_string(), signature.to_string());
                true
            },
        }
    }

    pub fn into_variables(self) -> Vec<VariableDef> {
        self.variables
    }

    pub fn new(options: &'opts SynthesisOptions, root_type_name: &str) -> Self {
        Self {
            ancestor_types: vec![root_type_name.to_string()],
            options,
            path_signatures: IndexMap::new(),
            variables: vec![],
        }
    }

    pub fn pop_ancestor(&mut self) {
        self.ancestor_types.pop();
    }

    pub fn push_ancestor(&mut self, type_name: &str) {
        self.ancestor_types.push(type_name.to_string());
    }

    /// Declares a variable named `base_name` (or `base_name2`, `base_name3`,
    /// ... if that is taken) and returns the name that was used.
    pub fn register_variable(
        &mut self,
        base_name: String,
        type_annotation: &TypeAnnotation,
        default_value: Option<&Value>,
    ) -> String {
        let mut name = base_name.clone();
        let mut suffix = 2;
        while self.variables.iter().any(|var_def| var_def.name() == name) {
            name = format!("{base_name}{suffix}");
            suffix += 1;
        }

        self.variables.push(VariableDef::new(
            name.as_str(),
            type_annotation.clone(),
            default_value.cloned(),
        ));
        name
    }

    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.path_signatures.truncate(checkpoint.num_path_signatures);
        self.variables.truncate(checkpoint.num_variables);
    }
}
