/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined within
/// some [`TypeGraph`](crate::schema::TypeGraph).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The names of this enum's values in definition order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
