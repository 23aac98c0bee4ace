use crate::schema::TypeGraph;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an interface type defined within some [`TypeGraph`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The description of this [`InterfaceType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in definition order. Fields added by type extensions
    /// follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces<'graph>(
        &self,
        type_graph: &'graph TypeGraph,
    ) -> Vec<&'graph InterfaceType> {
        self.0.interfaces(type_graph)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
