mod conflict_remap;
mod reconcile_error;
mod reconciler;
mod variable_reconciler;

pub use conflict_remap::ConflictRemap;
pub use reconcile_error::ReconcileError;
pub use reconciler::reconcile;
pub use reconciler::reconcile_all;
pub use reconciler::reconcile_tree;
pub use reconciler::Reconciliation;
