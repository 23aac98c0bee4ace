mod operation_printer;
mod selector;

pub use operation_printer::OperationPrinter;
pub use operation_printer::PrintOptions;
pub use selector::OperationSelector;

#[cfg(test)]
mod tests;
