use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::TypeGraph;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

const BUILTIN_SCALARS: [(&str, GraphQLType); 5] = [
    ("Boolean", GraphQLType::Bool),
    ("Float", GraphQLType::Float),
    ("ID", GraphQLType::ID),
    ("Int", GraphQLType::Int),
    ("String", GraphQLType::String),
];

#[derive(Clone, Debug, PartialEq)]
struct RootTypeDef {
    def_location: loc::FilePosition,
    type_name: String,
}

/// Accumulates schema definitions from one or more SDL documents and
/// assembles them into a [`TypeGraph`].
///
/// Type extensions are buffered until [`TypeGraphBuilder::build()`] so that an
/// extension may appear before (or in a different file than) the definition it
/// extends.
#[derive(Debug)]
pub struct TypeGraphBuilder {
    mutation_type: Option<RootTypeDef>,
    query_type: Option<RootTypeDef>,
    schema_def_location: Option<loc::FilePosition>,
    subscription_type: Option<RootTypeDef>,
    type_def_locations: IndexMap<String, loc::FilePosition>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}
impl TypeGraphBuilder {
    pub fn build(mut self) -> Result<TypeGraph> {
        for (file_path, ext) in std::mem::take(&mut self.type_extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type = match self.query_type.take() {
            Some(root_def) => self.resolve_root_type(OperationKind::Query, root_def)?,
            None if self.is_object_type("Query") => "Query".to_string(),
            None => return Err(TypeGraphBuildError::NoQueryOperationTypeDefined),
        };

        let mutation_type = match self.mutation_type.take() {
            Some(root_def) =>
                Some(self.resolve_root_type(OperationKind::Mutation, root_def)?),
            None if self.is_object_type("Mutation") => Some("Mutation".to_string()),
            None => None,
        };

        let subscription_type = match self.subscription_type.take() {
            Some(root_def) =>
                Some(self.resolve_root_type(OperationKind::Subscription, root_def)?),
            None if self.is_object_type("Subscription") => Some("Subscription".to_string()),
            None => None,
        };

        tracing::debug!(
            num_types = self.types.len(),
            query_type = query_type.as_str(),
            "built type graph",
        );

        Ok(TypeGraph {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: impl AsRef<str>) -> Result<Self> {
        Self::new().load_str(None, content)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| TypeGraphBuildError::SchemaFileReadError(Arc::new(err)))?;
        self.load_str(Some(file_path), content)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content.as_ref())
            .map_err(|err| TypeGraphBuildError::ParseError {
                file_path: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for (name, builtin) in BUILTIN_SCALARS {
            types.insert(name.to_string(), builtin);
        }

        Self {
            mutation_type: None,
            query_type: None,
            schema_def_location: None,
            subscription_type: None,
            type_def_locations: IndexMap::new(),
            type_extensions: vec![],
            types,
        }
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position, extension_kind) = match &ext {
            TypeExtension::Enum(e) => (e.name.clone(), e.position, "enum"),
            TypeExtension::InputObject(e) => (e.name.clone(), e.position, "input object"),
            TypeExtension::Interface(e) => (e.name.clone(), e.position, "interface"),
            TypeExtension::Object(e) => (e.name.clone(), e.position, "object"),
            TypeExtension::Scalar(e) => (e.name.clone(), e.position, "scalar"),
            TypeExtension::Union(e) => (e.name.clone(), e.position, "union"),
        };
        let location = loc::FilePosition::from_pos(file_path, position);

        let Some(type_) = self.types.get_mut(type_name.as_str()) else {
            return Err(TypeGraphBuildError::ExtensionOfUndefinedType {
                location,
                type_name,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(e)) =>
                enum_type.values.extend(e.values.into_iter().map(|v| v.name)),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(e)) => {
                for input_val in &e.fields {
                    inputobj_type.fields.insert(
                        input_val.name.to_string(),
                        InputField::from_ast(input_val),
                    );
                }
            },

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(e)) =>
                data.fields.extend(fields_from_ast(&e.fields)),

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(e)) => {
                data.fields.extend(fields_from_ast(&e.fields));
                data.interfaces.extend(
                    e.implements_interfaces.iter().map(NamedGraphQLTypeRef::new),
                );
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(e)) => {
                for member_name in e.types {
                    let member_ref = NamedGraphQLTypeRef::new(&member_name);
                    union_type.members.insert(member_name, member_ref);
                }
            },

            (type_, _) => return Err(TypeGraphBuildError::ExtensionKindMismatch {
                defined_kind: type_.kind_name(),
                extension_kind,
                location,
                type_name,
            }),
        }

        tracing::trace!(type_name = type_name.as_str(), "applied type extension");
        Ok(())
    }

    fn insert_type(
        &mut self,
        location: loc::FilePosition,
        type_: GraphQLType,
    ) -> Result<()> {
        let type_name = type_.name().to_string();

        // Some schemas (notably introspection dumps) re-declare the built-in
        // scalars. Those declarations carry nothing we need.
        if BUILTIN_SCALARS.iter().any(|(name, _)| *name == type_name)
            && matches!(type_, GraphQLType::Scalar(_)) {
            tracing::trace!(
                type_name = type_name.as_str(),
                "ignoring redefinition of built-in scalar",
            );
            return Ok(());
        }

        if let Some(existing_location) = self.type_def_locations.get(type_name.as_str()) {
            return Err(TypeGraphBuildError::DuplicateTypeDefinition {
                location1: existing_location.clone(),
                location2: location,
                type_name,
            });
        }

        self.type_def_locations.insert(type_name.clone(), location);
        self.types.insert(type_name, type_);
        Ok(())
    }

    fn is_object_type(&self, type_name: &str) -> bool {
        matches!(self.types.get(type_name), Some(GraphQLType::Object(_)))
    }

    fn resolve_root_type(
        &self,
        operation: OperationKind,
        root_def: RootTypeDef,
    ) -> Result<String> {
        if self.is_object_type(root_def.type_name.as_str()) {
            Ok(root_def.type_name)
        } else {
            Err(TypeGraphBuildError::UndefinedRootOperationType {
                location: root_def.def_location,
                operation,
                type_name: root_def.type_name,
            })
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.map(|p| p.to_path_buf()), type_ext));
                Ok(())
            },
            // Directive definitions have no bearing on what can be selected.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::FilePosition::from_pos(file_path, schema_def.position);
        if let Some(existing_location) = &self.schema_def_location {
            return Err(TypeGraphBuildError::DuplicateSchemaDefinition {
                location1: existing_location.clone(),
                location2: location,
            });
        }

        let root_def = |type_name: String| RootTypeDef {
            def_location: location.clone(),
            type_name,
        };
        self.query_type = schema_def.query.map(root_def);
        self.mutation_type = schema_def.mutation.map(root_def);
        self.subscription_type = schema_def.subscription.map(root_def);
        self.schema_def_location = Some(location);

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::Enum(EnumType {
                    description: def.description,
                    name: def.name,
                    values: def.values.into_iter().map(|v| v.name).collect(),
                }),
            ),

            TypeDefinition::InputObject(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::InputObject(InputObjectType {
                    fields: def.fields.iter().map(|input_val| (
                        input_val.name.to_string(),
                        InputField::from_ast(input_val),
                    )).collect(),
                    description: def.description,
                    name: def.name,
                }),
            ),

            TypeDefinition::Interface(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    fields: fields_from_ast(&def.fields).collect(),
                    description: def.description,
                    interfaces: vec![],
                    name: def.name,
                })),
            ),

            TypeDefinition::Object(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    fields: fields_from_ast(&def.fields).collect(),
                    description: def.description,
                    interfaces: def.implements_interfaces
                        .iter()
                        .map(NamedGraphQLTypeRef::new)
                        .collect(),
                    name: def.name,
                })),
            ),

            TypeDefinition::Scalar(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::Scalar(ScalarType {
                    description: def.description,
                    name: def.name,
                }),
            ),

            TypeDefinition::Union(def) => self.insert_type(
                loc::FilePosition::from_pos(file_path, def.position),
                GraphQLType::Union(UnionType {
                    description: def.description,
                    members: def.types
                        .into_iter()
                        .map(|member_name| {
                            let member_ref = NamedGraphQLTypeRef::new(&member_name);
                            (member_name, member_ref)
                        })
                        .collect(),
                    name: def.name,
                }),
            ),
        }
    }
}
impl Default for TypeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn fields_from_ast(
    ast_fields: &[ast::schema::Field],
) -> impl Iterator<Item = (String, Field)> + '_ {
    ast_fields.iter().map(|ast_field| (
        ast_field.name.to_string(),
        Field {
            description: ast_field.description.to_owned(),
            name: ast_field.name.to_string(),
            parameters: ast_field.arguments
                .iter()
                .map(|input_val| (input_val.name.to_string(), Parameter::from_ast(input_val)))
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        },
    ))
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeGraphBuildError {
    #[error("Multiple definitions of `{type_name}` ({location1} and {location2})")]
    DuplicateTypeDefinition {
        location1: loc::FilePosition,
        location2: loc::FilePosition,
        type_name: String,
    },

    #[error("Multiple `schema` definitions ({location1} and {location2})")]
    DuplicateSchemaDefinition {
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error(
        "Attempted to extend `{type_name}` ({defined_kind}) with an \
        {extension_kind} extension at {location}"
    )]
    ExtensionKindMismatch {
        defined_kind: &'static str,
        extension_kind: &'static str,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("Extension of undefined type `{type_name}` at {location}")]
    ExtensionOfUndefinedType {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error("No query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema{}: {err}", file_path.as_ref().map(|p| format!(" in {p:?}")).unwrap_or_default())]
    ParseError {
        file_path: Option<PathBuf>,
        err: String,
    },

    #[error("Failed to load schema file: {0}")]
    SchemaFileReadError(Arc<file_reader::ReadContentError>),

    #[error("The {operation} root type `{type_name}` at {location} is not a defined object type")]
    UndefinedRootOperationType {
        location: loc::FilePosition,
        operation: OperationKind,
        type_name: String,
    },
}
