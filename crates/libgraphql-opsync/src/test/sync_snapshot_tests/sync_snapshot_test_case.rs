use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// One fixture directory.
#[derive(Clone, Debug)]
pub struct SyncSnapshotTestCase {
    pub expected_path: PathBuf,
    pub local_path: Option<PathBuf>,
    pub name: String,
    pub root_field: Option<String>,
    pub schema_path: PathBuf,
}

impl SyncSnapshotTestCase {
    /// Discovers every case directory under `fixtures_dir`, sorted by name.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return vec![];
        };

        let mut cases = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    return None;
                }
                Self::from_dir(&path)
            })
            .collect::<Vec<_>>();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    fn from_dir(dir: &Path) -> Option<Self> {
        let name = dir.file_name()?.to_str()?.to_string();
        let schema_path = dir.join("schema.graphqls");
        let expected_path = dir.join("expected.graphql");
        if !schema_path.is_file() || !expected_path.is_file() {
            eprintln!(
                "ERROR: Fixture `{name}` needs both schema.graphqls and expected.graphql",
            );
            return None;
        }

        let local_path = Some(dir.join("local.graphql")).filter(|path| path.is_file());
        let root_field = fs::read_to_string(dir.join("root_field.txt"))
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|root_field| !root_field.is_empty());

        Some(Self {
            expected_path,
            local_path,
            name,
            root_field,
            schema_path,
        })
    }
}
