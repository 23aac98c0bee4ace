use crate::operation::OperationKind;
use crate::schema::TypeGraphBuilder;
use crate::schema::TypeGraphBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// A read-only view over a parsed schema: every named type (built-in scalars
/// included) keyed by name, plus the names of the root operation types.
///
/// Types are kept in definition order (built-in scalars first), so traversals
/// over the graph and anything synthesized from it are deterministic.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeGraph {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl TypeGraph {
    pub fn builder() -> TypeGraphBuilder {
        TypeGraphBuilder::new()
    }

    /// All [`ObjectType`]s that declare they implement the interface named
    /// `interface_name`, in definition order.
    pub fn implementing_types(&self, interface_name: &str) -> Vec<&ObjectType> {
        self.types
            .values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj_type| obj_type.implements_interface(interface_name))
            .collect()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Convenience wrapper around [`TypeGraphBuilder::from_str()`] followed by
    /// [`TypeGraphBuilder::build()`].
    pub fn parse(content: impl AsRef<str>) -> Result<Self, TypeGraphBuildError> {
        TypeGraphBuilder::from_str(content)?.build()
    }

    /// The root [`ObjectType`] for the given kind of operation, if the schema
    /// defines one.
    pub fn root_type(&self, operation_kind: &OperationKind) -> Option<&ObjectType> {
        self.root_type_name(operation_kind)
            .and_then(|type_name| self.types.get(type_name))
            .and_then(|type_| type_.as_object())
    }

    pub fn root_type_name(&self, operation_kind: &OperationKind) -> Option<&str> {
        match operation_kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
