use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/sync_snapshot_tests/fixtures")
    })
}

/// The first line at which `expected` and `actual` differ (1-based), along
/// with both versions of that line.
pub fn first_difference(expected: &str, actual: &str) -> Option<(usize, String, String)> {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line_num = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (expected_line, actual_line) if expected_line != actual_line => return Some((
                line_num,
                expected_line.unwrap_or("<end of file>").to_string(),
                actual_line.unwrap_or("<end of file>").to_string(),
            )),
            _ => line_num += 1,
        }
    }
}
