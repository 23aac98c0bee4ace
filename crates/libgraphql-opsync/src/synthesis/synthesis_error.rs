use crate::operation::OperationKind;
use crate::FieldKey;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error(
        "`{field_key}` has type `{type_name}`, which is an {kind} and cannot \
        be selected"
    )]
    InvalidOutputType {
        field_key: FieldKey,
        kind: &'static str,
        type_name: String,
    },

    #[error("The schema does not define a {operation} root type")]
    NoRootOperationType {
        operation: OperationKind,
    },

    #[error("Type `{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("`{referenced_by}` refers to undefined type `{type_name}`")]
    UnknownType {
        referenced_by: FieldKey,
        type_name: String,
    },
}
