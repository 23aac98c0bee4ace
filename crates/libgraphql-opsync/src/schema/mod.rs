mod type_graph;
mod type_graph_builder;

pub use type_graph::TypeGraph;
pub use type_graph_builder::TypeGraphBuilder;
pub use type_graph_builder::TypeGraphBuildError;

#[cfg(test)]
mod tests;
