use crate::named_ref::DerefByNameError;
use crate::schema::TypeGraph;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    /// Resolve the named type against a [`TypeGraph`]. Operation documents
    /// parsed from text are not bound to any schema, so this can fail.
    pub fn graphql_type<'graph>(
        &self,
        type_graph: &'graph TypeGraph,
    ) -> Result<&'graph GraphQLType, DerefByNameError> {
        self.type_ref.deref(type_graph)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Two named type annotations are equivalent if they name the same type
    /// with the same nullability.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
