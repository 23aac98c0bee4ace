use crate::operation::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReconcileError {
    /// The local document selects nothing named like the remote operation's
    /// root field. Callers typically fall back to the remote tree as-is.
    #[error("The local operation does not select `{root_field_name}`")]
    NoLocalMatch {
        root_field_name: String,
    },

    #[error("Cannot reconcile a local {local} with a remote {remote}")]
    OperationKindMismatch {
        local: OperationKind,
        remote: OperationKind,
    },

    #[error("The remote operation has no root field")]
    RemoteHasNoRootField,
}
