use crate::schema::TypeGraph;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`TypeGraph`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// The order matches the order of members in the union's definition.
    /// Members added from type extensions follow the original members.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// Member types that resolve within `type_graph`, in definition order.
    pub fn member_types<'graph>(
        &self,
        type_graph: &'graph TypeGraph,
    ) -> Vec<&'graph GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(type_graph).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
