use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_opsync::operation::OperationTree;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct KeysCmd {
    #[arg(
        help="Path to a file containing exactly one operation.",
        name="FILE",
    )]
    file_path: PathBuf,

    #[arg(
        help="Print the keys as a JSON array.",
        long,
    )]
    json: bool,
}

#[inherent::inherent]
impl RunnableCommand for KeysCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let tree = match OperationTree::from_file(&self.file_path) {
            Ok(tree) => tree,
            Err(err) => return CommandResult::from_error(err.into()),
        };

        let keys = tree.field_keys();
        if self.json {
            return match output_utils::to_json(&keys) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::from_error(err),
            };
        }

        let mut out = String::new();
        for key in keys {
            out.push_str(key.as_str());
            out.push('\n');
        }
        CommandResult::stdout(format_args!("{out}"))
    }
}
