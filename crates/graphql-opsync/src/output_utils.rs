use libgraphql_opsync::operation::OperationTree;
use libgraphql_opsync::printer::OperationPrinter;
use libgraphql_opsync::printer::PrintOptions;

pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

pub(crate) fn print_tree(tree: &OperationTree, include_descriptions: bool) -> String {
    OperationPrinter::new(PrintOptions {
        include_descriptions,
        ..Default::default()
    }).print(tree)
}

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
