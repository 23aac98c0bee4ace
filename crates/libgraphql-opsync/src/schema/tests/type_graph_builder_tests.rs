use crate::operation::OperationKind;
use crate::schema::TypeGraph;
use crate::schema::TypeGraphBuilder;
use crate::schema::TypeGraphBuildError;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let type_graph = TypeGraphBuilder::new().build();
        assert_eq!(type_graph, Err(TypeGraphBuildError::NoQueryOperationTypeDefined));
    }

    #[test]
    fn builtin_scalars_precede_defined_types() -> Result<()> {
        let type_graph = TypeGraph::parse("type Query { a: Int }")?;

        assert_eq!(
            type_graph.types().keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String", "Query"],
        );
        assert_eq!(type_graph.lookup_type("Int"), Some(&GraphQLType::Int));
        assert_eq!(type_graph.root_type_name(&OperationKind::Query), Some("Query"));
        assert_eq!(type_graph.root_type_name(&OperationKind::Mutation), None);
        assert!(type_graph.root_type(&OperationKind::Subscription).is_none());

        Ok(())
    }

    #[test]
    fn redefined_builtin_scalars_are_ignored() -> Result<()> {
        let type_graph = TypeGraph::parse(concat!(
            "scalar String\n",
            "scalar DateTime\n",
            "type Query { now: DateTime }\n",
        ))?;

        assert_eq!(type_graph.lookup_type("String"), Some(&GraphQLType::String));
        assert_eq!(type_graph.lookup_type("DateTime").map(|t| t.kind_name()), Some("scalar"));

        Ok(())
    }

    #[test]
    fn fields_parameters_and_descriptions_are_captured() -> Result<()> {
        let type_graph = TypeGraph::parse(r#"
            type Query {
                "Look up a single user"
                user(id: ID!, locale: String = "en"): User
            }

            type User {
                id: ID!
                tags: [String!]
            }
        "#)?;

        let query_type = type_graph.root_type(&OperationKind::Query).unwrap();
        let user_field = query_type.fields().get("user").unwrap();
        assert_eq!(user_field.description(), Some("Look up a single user"));
        assert_eq!(user_field.type_annotation().to_string(), "User");

        let params = user_field.parameters();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["id", "locale"]);
        assert!(params["id"].is_required());
        assert!(!params["locale"].is_required());
        assert_eq!(params["locale"].default_value().and_then(|v| v.as_str()), Some("en"));

        let user_type = type_graph.lookup_type("User").unwrap().as_object().unwrap();
        assert_eq!(user_type.fields()["tags"].type_annotation().to_string(), "[String!]");

        Ok(())
    }
}

mod root_types {
    use super::*;

    #[test]
    fn schema_block_overrides_default_root_names() -> Result<()> {
        let type_graph = TypeGraph::parse(concat!(
            "schema { query: RootQuery, mutation: RootMutation }\n",
            "type RootQuery { a: Int }\n",
            "type RootMutation { b: Int }\n",
            "type Subscription { c: Int }\n",
        ))?;

        assert_eq!(type_graph.root_type_name(&OperationKind::Query), Some("RootQuery"));
        assert_eq!(type_graph.root_type_name(&OperationKind::Mutation), Some("RootMutation"));
        assert_eq!(type_graph.root_type_name(&OperationKind::Subscription), Some("Subscription"));

        Ok(())
    }

    #[test]
    fn schema_block_naming_undefined_type_errors() {
        let result = TypeGraph::parse(concat!(
            "schema { query: Missing }\n",
            "type Query { a: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::UndefinedRootOperationType {
                operation: OperationKind::Query,
                ref type_name,
                ..
            }) if type_name == "Missing",
        ));
    }

    #[test]
    fn duplicate_schema_blocks_error() {
        let result = TypeGraph::parse(concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { a: Int }\n",
        ));

        assert!(matches!(result, Err(TypeGraphBuildError::DuplicateSchemaDefinition { .. })));
    }
}

mod definitions {
    use super::*;

    #[test]
    fn duplicate_type_definitions_error() {
        let result = TypeGraph::parse(concat!(
            "type Query { a: Int }\n",
            "type User { id: ID }\n",
            "type User { id: ID }\n",
        ));

        match result {
            Err(TypeGraphBuildError::DuplicateTypeDefinition {
                location1,
                location2,
                type_name,
            }) => {
                assert_eq!(type_name, "User");
                assert_eq!(location1.line, 2);
                assert_eq!(location2.line, 3);
            },
            other => panic!("Expected DuplicateTypeDefinition, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_schema_errors() {
        let result = TypeGraph::parse("type Query {");
        assert!(matches!(
            result,
            Err(TypeGraphBuildError::ParseError { file_path: None, .. }),
        ));
    }

    #[test]
    fn schema_may_span_multiple_strs() -> Result<()> {
        let type_graph = TypeGraphBuilder::new()
            .load_str(None, "type Query { user: User }")?
            .load_str(None, "type User { id: ID! }")?
            .build()?;

        assert!(type_graph.lookup_type("User").is_some());
        Ok(())
    }

    #[test]
    fn implementing_types_follow_definition_order() -> Result<()> {
        let type_graph = TypeGraph::parse(concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type Post implements Node { id: ID! }\n",
            "type Tag { id: ID! }\n",
            "type User implements Node { id: ID! }\n",
        ))?;

        assert_eq!(
            type_graph.implementing_types("Node")
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>(),
            vec!["Post", "User"],
        );
        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_apply_regardless_of_order() -> Result<()> {
        let type_graph = TypeGraph::parse(concat!(
            "extend type User implements Node { name: String }\n",
            "extend union SearchResult = Post\n",
            "extend enum Role { ADMIN }\n",
            "type Query { search: [SearchResult] }\n",
            "interface Node { id: ID! }\n",
            "type User { id: ID! }\n",
            "type Post { id: ID! }\n",
            "union SearchResult = User\n",
            "enum Role { MEMBER }\n",
        ))?;

        let user_type = type_graph.lookup_type("User").unwrap().as_object().unwrap();
        assert_eq!(user_type.fields().keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert!(user_type.implements_interface("Node"));

        let search_result = type_graph.lookup_type("SearchResult").unwrap().as_union().unwrap();
        assert_eq!(search_result.member_type_names(), vec!["User", "Post"]);

        match type_graph.lookup_type("Role") {
            Some(GraphQLType::Enum(role)) => assert_eq!(role.values(), &["MEMBER", "ADMIN"]),
            other => panic!("Expected enum type, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_errors() {
        let result = TypeGraph::parse(concat!(
            "type Query { a: Int }\n",
            "extend type Missing { b: Int }\n",
        ));

        match result {
            Err(TypeGraphBuildError::ExtensionOfUndefinedType { location, type_name }) => {
                assert_eq!(type_name, "Missing");
                assert_eq!(location.line, 2);
            },
            other => panic!("Expected ExtensionOfUndefinedType, got {other:?}"),
        }
    }

    #[test]
    fn extension_kind_mismatch_errors() {
        let result = TypeGraph::parse(concat!(
            "type Query { a: Int }\n",
            "enum Role { MEMBER }\n",
            "extend type Role { b: Int }\n",
        ));

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::ExtensionKindMismatch {
                defined_kind: "enum",
                extension_kind: "object",
                ..
            }),
        ));
    }
}
