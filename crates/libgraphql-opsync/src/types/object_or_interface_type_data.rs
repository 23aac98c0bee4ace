use crate::schema::TypeGraph;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;
use inherent::inherent;

pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces<'graph>(&self, type_graph: &'graph TypeGraph) -> Vec<&'graph InterfaceType>;
    fn name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    /// Interfaces that are named but not defined in the [`TypeGraph`] (or
    /// that name a non-interface type) are skipped.
    pub fn interfaces<'graph>(
        &self,
        type_graph: &'graph TypeGraph,
    ) -> Vec<&'graph InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(type_graph).ok())
            .filter_map(|type_| type_.as_interface())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
