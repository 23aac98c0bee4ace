mod directive_annotation;
mod field_selection;
mod fragment_selection;
mod operation_kind;
mod operation_parser;
mod operation_tree;
mod selection;
mod variable_def;

pub use directive_annotation::DirectiveAnnotation;
pub use field_selection::FieldSelection;
pub use fragment_selection::FragmentSelection;
pub use operation_kind::OperationKind;
pub use operation_parser::OperationParseError;
pub use operation_tree::OperationTree;
pub use selection::Selection;
pub use variable_def::VariableDef;

#[cfg(test)]
mod tests;
