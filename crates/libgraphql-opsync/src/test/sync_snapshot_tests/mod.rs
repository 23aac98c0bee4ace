//! Fixture-driven tests for the synthesize/reconcile pipeline.
//!
//! Every directory under `fixtures/` is one case:
//!
//! * `schema.graphqls`: the schema to synthesize against.
//! * `local.graphql` (optional): a saved operation document to reconcile.
//!   Without it, the case checks plain synthesis.
//! * `root_field.txt` (optional when `local.graphql` exists): the root field
//!   to synthesize. Defaults to the first root field of `local.graphql`.
//! * `expected.graphql`: the exact printed output.
//!
//! Reconcile cases are additionally checked for idempotence: reconciling the
//! expected output again must reproduce it byte for byte.

mod sync_snapshot_test_case;
mod test_runner;
mod utils;

pub use sync_snapshot_test_case::SyncSnapshotTestCase;

#[test]
fn verify_sync_snapshot_tests() {
    let results = test_runner::run_sync_tests(utils::get_fixtures_dir());

    if !results.all_passed() {
        eprintln!("{}", results.failure_report());
    }
    println!("{}", results.summary());

    assert!(
        results.all_passed(),
        "Sync snapshot tests failed:\n{}",
        results.failure_report(),
    );
}
