//! Synthesize complete GraphQL operations from a schema and keep hand-edited
//! operation documents in sync with that schema as it evolves.
//!
//! The four entry points are:
//!
//! * [`OperationSynthesizer::synthesize()`](synthesis::OperationSynthesizer::synthesize)
//!   builds a full [`OperationTree`](operation::OperationTree) for one root
//!   field of a [`TypeGraph`](schema::TypeGraph).
//! * [`reconcile()`](reconcile::reconcile) merges a saved (local) tree with a
//!   freshly synthesized (remote) tree of the same operation;
//!   [`reconcile_all()`](reconcile::reconcile_all) does so for several root
//!   fields of one document.
//! * [`OperationTree::select_subset()`](operation::OperationTree::select_subset)
//!   prunes a tree down to a set of [`FieldKey`]s.
//! * [`OperationPrinter::print()`](printer::OperationPrinter::print) renders a
//!   tree back to operation text.

pub mod ast;
mod field_key;
pub mod file_reader;
pub mod loc;
mod named_ref;
pub mod operation;
pub mod printer;
pub mod reconcile;
pub mod schema;
pub mod synthesis;
pub mod types;
mod value;

pub use field_key::FieldKey;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;

#[cfg(test)]
mod test;
