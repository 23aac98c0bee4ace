use crate::operation::OperationKind;
use crate::operation::OperationTree;
use crate::reconcile::reconcile_tree;
use crate::schema::TypeGraph;
use crate::synthesis::OperationSynthesizer;
use crate::synthesis::SynthesisOptions;
use crate::test::sync_snapshot_tests::utils;
use crate::test::sync_snapshot_tests::SyncSnapshotTestCase;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub test_name: String,
}
impl SnapshotTestResult {
    pub fn passed(&self) -> bool {
        self.error_message.is_none()
    }
}

#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(SnapshotTestResult::passed)
    }

    pub fn failure_report(&self) -> String {
        let failures = self.results.iter().filter(|r| !r.passed()).collect::<Vec<_>>();
        let failures_text = failures
            .iter()
            .map(|r| format!(
                "❌ {}\n   File: {}\n   {}",
                r.test_name,
                r.file_path.display(),
                r.error_message.as_deref().unwrap_or_default(),
            ))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "{} of {} snapshot tests failed:\n\n{failures_text}",
            failures.len(),
            self.results.len(),
        )
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed()).count();
        let emoji = if failed == 0 { "✅" } else { "❌" };
        format!(
            "{emoji} SYNC SNAPSHOT SUMMARY\nTotal tests: {total}\nPassed: {}\nFailed: {failed}",
            total - failed,
        )
    }
}

/// Run every fixture under `fixtures_dir`.
pub fn run_sync_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SyncSnapshotTestCase::discover_all(fixtures_dir);
    SnapshotTestResults {
        results: test_cases.par_iter().map(run_sync_test).collect(),
    }
}

fn run_sync_test(test_case: &SyncSnapshotTestCase) -> SnapshotTestResult {
    let error_message = check_sync_test(test_case).err();
    SnapshotTestResult {
        error_message,
        file_path: test_case.expected_path.clone(),
        test_name: test_case.name.clone(),
    }
}

fn check_sync_test(test_case: &SyncSnapshotTestCase) -> Result<(), String> {
    let type_graph = TypeGraph::builder()
        .load_file(&test_case.schema_path)
        .and_then(|builder| builder.build())
        .map_err(|err| format!("Invalid schema: {err}"))?;
    let expected = fs::read_to_string(&test_case.expected_path)
        .map_err(|err| format!("Unreadable expected.graphql: {err}"))?;

    let local = match &test_case.local_path {
        Some(local_path) => Some(
            OperationTree::from_file(local_path)
                .map_err(|err| format!("Invalid local.graphql: {err}"))?,
        ),
        None => None,
    };

    let root_field = test_case.root_field
        .clone()
        .or_else(|| local.as_ref()?.root_fields().next().map(|f| f.name().to_string()))
        .ok_or("No root field: add root_field.txt or local.graphql")?;
    let operation_kind = local.as_ref()
        .map(OperationTree::operation_kind)
        .unwrap_or(OperationKind::Query);

    let remote = OperationSynthesizer::new(&type_graph)
        .synthesize(operation_kind, root_field.as_str(), &SynthesisOptions::default())
        .map_err(|err| format!("Synthesis failed: {err}"))?;

    let actual = match &local {
        Some(local) => reconcile_tree(local, &remote)
            .map_err(|err| format!("Reconcile failed: {err}"))?
            .to_string(),
        None => remote.to_string(),
    };
    compare("output", &expected, &actual)?;

    if local.is_some() {
        let reparsed = OperationTree::from_str(actual.as_str())
            .map_err(|err| format!("Output does not reparse: {err}"))?;
        let again = reconcile_tree(&reparsed, &remote)
            .map_err(|err| format!("Second reconcile failed: {err}"))?
            .to_string();
        compare("second reconcile", &actual, &again)?;
    }

    Ok(())
}

fn compare(what: &str, expected: &str, actual: &str) -> Result<(), String> {
    match utils::first_difference(expected, actual) {
        None if expected == actual => Ok(()),
        None => Err(format!("{what} differs only in trailing newlines\nGot:\n{actual}")),
        Some((line_num, expected_line, actual_line)) => Err(format!(
            "{what} differs at line {line_num}\n   Expected: {expected_line}\n   Got:      {actual_line}\n\nFull output:\n{actual}",
        )),
    }
}
