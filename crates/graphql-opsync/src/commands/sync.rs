use crate::commands::SchemaArgs;
use crate::commands::SynthesisArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_opsync::file_reader;
use libgraphql_opsync::operation::OperationTree;
use libgraphql_opsync::reconcile::reconcile;
use libgraphql_opsync::reconcile::reconcile_all;
use libgraphql_opsync::reconcile::ReconcileError;
use libgraphql_opsync::schema::TypeGraph;
use libgraphql_opsync::synthesis::OperationSynthesizer;
use libgraphql_opsync::synthesis::SynthesisOptions;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, clap::Args)]
pub(crate) struct SyncCmd {
    #[arg(
        help="Only reconcile this root field. By default every root field \
             selected by a file is reconciled in turn.",
        long,
    )]
    field: Option<String>,

    #[arg(
        help="Paths to one or more operation files to bring up to date.",
        name="FILE_PATHS",
        required=true,
    )]
    file_paths: Vec<PathBuf>,

    #[command(flatten)]
    schema: SchemaArgs,

    #[command(flatten)]
    synthesis: SynthesisArgs,

    #[arg(
        help="Print schema descriptions as comments above fields that have no \
             comments of their own.",
        long,
    )]
    with_descriptions: bool,

    #[arg(
        help="Write the reconciled operations back to their files instead of \
             printing them.",
        long,
        short='w',
    )]
    write: bool,
}

/// Everything the blocking per-file task needs.
#[derive(Debug)]
struct FileSyncer {
    field: Option<String>,
    include_descriptions: bool,
    options: SynthesisOptions,
    type_graph: TypeGraph,
    write: bool,
}

#[derive(Debug)]
struct SyncOutcome {
    num_remaps: usize,
    text: String,
    written: Option<bool>,
}

impl FileSyncer {
    fn sync_file(&self, file_path: &Path) -> anyhow::Result<SyncOutcome> {
        let local = OperationTree::from_file(file_path)?;
        let synthesizer = OperationSynthesizer::new(&self.type_graph);

        let root_field_names = match &self.field {
            Some(field) => vec![field.to_string()],
            None => local.root_fields().map(|field| field.name().to_string()).collect(),
        };
        let remotes = root_field_names
            .iter()
            .map(|root_field_name| synthesizer
                .synthesize(local.operation_kind(), root_field_name.as_str(), &self.options)
                .with_context(|| format!("Failed to synthesize `{root_field_name}`")))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let reconciled = match (&self.field, remotes.as_slice()) {
            (Some(_), [remote]) => reconcile(&local, remote),
            _ => reconcile_all(&local, &remotes),
        };
        let (tree, num_remaps) = match reconciled {
            Ok(reconciliation) => {
                for remap in reconciliation.remaps() {
                    log::info!("{file_path:#?}: renamed variable {remap}.");
                }
                let num_remaps = reconciliation.remaps().len();
                (reconciliation.into_tree(), num_remaps)
            },

            Err(ReconcileError::NoLocalMatch { root_field_name }) => {
                log::warn!(
                    "{file_path:#?} does not select `{root_field_name}`; \
                    replacing it with a freshly generated operation.",
                );
                let Some(remote) = remotes.into_iter().next() else {
                    anyhow::bail!("No operation was generated for {file_path:#?}");
                };
                (remote, 0)
            },

            Err(err) => return Err(err.into()),
        };

        let text = output_utils::print_tree(&tree, self.include_descriptions);
        let written = if self.write {
            Some(file_reader::write_content_if_changed(file_path, text.as_str())?)
        } else {
            None
        };

        Ok(SyncOutcome {
            num_remaps,
            text,
            written,
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for SyncCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let syncer = match self.syncer() {
            Ok(syncer) => Arc::new(syncer),
            Err(err) => return CommandResult::from_error(err),
        };

        log::debug!("Syncing {} operation files...", self.file_paths.len());
        let mut join_set = JoinSet::new();
        for (idx, file_path) in self.file_paths.iter().cloned().enumerate() {
            let syncer = Arc::clone(&syncer);
            join_set.spawn_blocking(move || (idx, syncer.sync_file(&file_path)));
        }

        let mut outcomes = (0..self.file_paths.len()).map(|_| None).collect::<Vec<_>>();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, outcome)) => outcomes[idx] = Some(outcome),
                Err(err) => log::error!("A sync task did not complete: {err}"),
            }
        }

        let mut stdout = String::new();
        let mut stderr = vec![];
        let print_headers = self.file_paths.len() > 1;
        for (file_path, outcome) in self.file_paths.iter().zip(outcomes) {
            match outcome {
                Some(Ok(outcome)) => match outcome.written {
                    Some(true) => stdout.push_str(&format!(
                        "{} {} (updated, {} variables renamed)\n",
                        output_utils::GREEN_CHECK,
                        file_path.display(),
                        outcome.num_remaps,
                    )),
                    Some(false) => stdout.push_str(&format!(
                        "{} {} (unchanged)\n",
                        output_utils::GREEN_CHECK,
                        file_path.display(),
                    )),
                    None => {
                        if print_headers {
                            stdout.push_str(&format!("# {}\n", file_path.display()));
                        }
                        stdout.push_str(outcome.text.as_str());
                    },
                },

                Some(Err(err)) => stderr.push(format!(
                    "{} {}: {err:#}",
                    output_utils::RED_X,
                    file_path.display(),
                )),

                None => stderr.push(format!(
                    "{} {}: sync task did not complete",
                    output_utils::RED_X,
                    file_path.display(),
                )),
            }
        }

        CommandResult {
            exit_code: if stderr.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: Some(stderr.join("\n")).filter(|stderr| !stderr.is_empty()),
            stdout: Some(stdout).filter(|stdout| !stdout.is_empty()),
        }
    }
}
impl SyncCmd {
    fn syncer(&self) -> anyhow::Result<FileSyncer> {
        Ok(FileSyncer {
            field: self.field.clone(),
            include_descriptions: self.with_descriptions,
            options: self.synthesis.to_options()?,
            type_graph: self.schema.load_type_graph()?,
            write: self.write,
        })
    }
}
