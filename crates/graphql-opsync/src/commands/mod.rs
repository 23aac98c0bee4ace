mod generate;
mod keys;
mod select;
mod sync;

use crate::Cli;
use crate::CommandResult;
use anyhow::Context;
use generate::GenerateCmd;
use keys::KeysCmd;
use libgraphql_opsync::operation::OperationKind;
use libgraphql_opsync::schema::TypeGraph;
use libgraphql_opsync::schema::TypeGraphBuilder;
use libgraphql_opsync::synthesis::FieldPrecedence;
use libgraphql_opsync::synthesis::SelectedFields;
use libgraphql_opsync::synthesis::SynthesisOptions;
use select::SelectCmd;
use std::path::PathBuf;
use sync::SyncCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-opsync")]
pub(crate) enum CommandEnum {
    /// Print a complete operation for one root field of a schema.
    Generate(Box<GenerateCmd>),

    /// Print the field key of every selection in an operation file.
    Keys(Box<KeysCmd>),

    /// Prune an operation file down to a set of field keys.
    Select(Box<SelectCmd>),

    /// Bring saved operation files up to date with a schema.
    Sync(Box<SyncCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Keys(cmd) => cmd.run(cli).await,
            Self::Select(cmd) => cmd.run(cli).await,
            Self::Sync(cmd) => cmd.run(cli).await,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OperationKindArg {
    Mutation,
    Query,
    Subscription,
}
impl From<OperationKindArg> for OperationKind {
    fn from(value: OperationKindArg) -> Self {
        match value {
            OperationKindArg::Mutation => OperationKind::Mutation,
            OperationKindArg::Query => OperationKind::Query,
            OperationKindArg::Subscription => OperationKind::Subscription,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum FieldPrecedenceArg {
    /// An interface's declaration of a field replaces the object's own.
    Interface,

    /// An object's own declaration of a field is kept.
    Own,
}

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Paths to one or more schema files. Type extensions may be \
             spread across files.",
        long="schema",
        required=true,
        short='s',
    )]
    schema_paths: Vec<PathBuf>,
}
impl SchemaArgs {
    pub(crate) fn load_type_graph(&self) -> anyhow::Result<TypeGraph> {
        let mut builder = TypeGraphBuilder::new();
        for schema_path in &self.schema_paths {
            log::debug!("Loading schema file {schema_path:#?}...");
            builder = builder.load_file(schema_path)?;
        }
        let type_graph = builder.build()
            .context("Failed to build a type graph from the schema")?;
        log::debug!("Loaded {} types.", type_graph.types().len());
        Ok(type_graph)
    }
}

/// Flags controlling how operations are synthesized.
#[derive(Debug, clap::Args)]
pub(crate) struct SynthesisArgs {
    #[arg(
        help="Only bind these arguments to variables. Each entry is a bare \
             argument name (`first`) or a field-qualified one \
             (`user.friends.first`). By default every argument is bound.",
        long,
        value_delimiter=',',
    )]
    allow_args: Option<Vec<String>>,

    #[arg(
        default_value_t=1,
        help="How many times a type may already appear among a field's \
             ancestors before expansion stops.",
        long,
    )]
    circular_reference_bound: usize,

    #[arg(
        default_value="interface",
        help="Which declaration wins when an object and one of its \
             interfaces both declare a field.",
        long,
        value_enum,
    )]
    field_precedence: FieldPrecedenceArg,

    #[arg(
        help="Omit fields nested deeper than this. The root field is at \
             depth 0.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Name of the generated operation. Defaults to the root field's \
             name.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="JSON shape restricting the expanded fields beneath the root \
             field, e.g. '{\"id\": true, \"friends\": {\"name\": true}}'.",
        long,
    )]
    selected_fields: Option<String>,
}
impl SynthesisArgs {
    pub(crate) fn to_options(&self) -> anyhow::Result<SynthesisOptions> {
        let selected_fields = match &self.selected_fields {
            Some(json) => serde_json::from_str::<SelectedFields>(json)
                .context("`--selected-fields` is not a valid field shape")?,
            None => SelectedFields::default(),
        };

        Ok(SynthesisOptions {
            argument_allow_list: self.allow_args
                .as_ref()
                .map(|names| names.iter().cloned().collect()),
            circular_reference_bound: self.circular_reference_bound,
            field_precedence: match self.field_precedence {
                FieldPrecedenceArg::Interface => FieldPrecedence::InterfaceFields,
                FieldPrecedenceArg::Own => FieldPrecedence::OwnFields,
            },
            max_depth: self.max_depth,
            operation_name: self.operation_name.clone(),
            selected_fields,
        })
    }
}
