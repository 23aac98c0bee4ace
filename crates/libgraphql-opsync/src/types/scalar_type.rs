/// A custom scalar defined within some [`TypeGraph`](crate::schema::TypeGraph).
/// The built-in scalars are represented directly by
/// [`GraphQLType`](crate::types::GraphQLType) variants.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
