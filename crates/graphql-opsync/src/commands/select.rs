use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_opsync::operation::OperationTree;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SelectCmd {
    #[arg(
        help="Field keys to keep. A nested key needs its ancestors listed too.",
        long,
        required=true,
        value_delimiter=',',
    )]
    fields: Vec<String>,

    #[arg(
        help="Path to a file containing exactly one operation.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for SelectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let tree = match OperationTree::from_file(&self.file_path) {
            Ok(tree) => tree,
            Err(err) => return CommandResult::from_error(err.into()),
        };

        let selected = tree.select_subset(self.fields.iter().map(String::as_str));
        if selected.selections().is_empty() {
            log::warn!("None of the requested field keys are selected in {:#?}.", self.file_path);
        }
        CommandResult::stdout(format_args!("{}", output_utils::print_tree(&selected, false)))
    }
}
