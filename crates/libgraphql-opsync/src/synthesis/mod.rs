mod operation_synthesizer;
mod synthesis_context;
mod synthesis_error;
mod synthesis_options;

pub use operation_synthesizer::OperationSynthesizer;
pub use synthesis_error::SynthesisError;
pub use synthesis_options::FieldPrecedence;
pub use synthesis_options::SelectedFields;
pub use synthesis_options::SynthesisOptions;
