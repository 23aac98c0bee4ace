/// Records that a variable from a freshly synthesized operation was renamed
/// while being merged into a document whose other root fields already use
/// that name.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ConflictRemap {
    pub(crate) new_name: String,
    pub(crate) old_name: String,
}
impl ConflictRemap {
    pub fn new_name(&self) -> &str {
        self.new_name.as_str()
    }

    pub fn old_name(&self) -> &str {
        self.old_name.as_str()
    }
}
impl std::fmt::Display for ConflictRemap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${} -> ${}", self.old_name, self.new_name)
    }
}
