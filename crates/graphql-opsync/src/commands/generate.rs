use crate::commands::OperationKindArg;
use crate::commands::SchemaArgs;
use crate::commands::SynthesisArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_opsync::operation::OperationTree;
use libgraphql_opsync::synthesis::OperationSynthesizer;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Name of the root field to generate an operation for.",
        name="ROOT_FIELD",
    )]
    root_field: String,

    #[arg(
        default_value="query",
        help="Kind of operation to generate.",
        long,
        short='k',
        value_enum,
    )]
    kind: OperationKindArg,

    #[arg(
        help="Print the operation tree as JSON instead of operation text.",
        long,
    )]
    json: bool,

    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Only keep these field keys in the generated operation. A \
             nested key needs its ancestors listed too.",
        long,
        value_delimiter=',',
    )]
    select: Vec<String>,

    #[command(flatten)]
    synthesis: SynthesisArgs,

    #[arg(
        help="Print schema descriptions as comments above fields.",
        long,
    )]
    with_descriptions: bool,
}
impl GenerateCmd {
    fn generate(&self) -> anyhow::Result<OperationTree> {
        let type_graph = self.schema.load_type_graph()?;
        let options = self.synthesis.to_options()?;
        let tree = OperationSynthesizer::new(&type_graph).synthesize(
            self.kind.into(),
            self.root_field.as_str(),
            &options,
        )?;

        if self.select.is_empty() {
            Ok(tree)
        } else {
            log::debug!("Selecting {} field keys.", self.select.len());
            Ok(tree.select_subset(self.select.iter().map(String::as_str)))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let tree = match self.generate() {
            Ok(tree) => tree,
            Err(err) => return CommandResult::from_error(err),
        };

        if self.json {
            match output_utils::to_json(&tree) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::from_error(err),
            }
        } else {
            CommandResult::stdout(format_args!(
                "{}",
                output_utils::print_tree(&tree, self.with_descriptions),
            ))
        }
    }
}
