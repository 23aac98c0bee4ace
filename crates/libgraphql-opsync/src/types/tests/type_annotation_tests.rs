use crate::ast;
use crate::schema::TypeGraph;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::DerefByNameError;

fn parse_var_type(type_str: &str) -> TypeAnnotation {
    let doc = ast::operation::parse(format!("query($v: {type_str}) {{ a }}").as_str())
        .expect("valid operation");
    let Some(ast::operation::Definition::Operation(
        ast::operation::OperationDefinition::Query(query),
    )) = doc.definitions.first() else {
        panic!("expected a query");
    };
    TypeAnnotation::from_ast_type(&query.variable_definitions[0].var_type)
}

#[test]
fn displays_in_sdl_syntax() {
    for type_str in ["Int", "Int!", "[Int]", "[Int!]", "[[String!]]!"] {
        assert_eq!(parse_var_type(type_str).to_string(), type_str);
    }
}

#[test]
fn identifier_fragment_spells_out_wrappers() {
    assert_eq!(parse_var_type("Int").to_identifier_fragment(), "Int");
    assert_eq!(parse_var_type("[Int!]").to_identifier_fragment(), "ListOfIntNonNull");
    assert_eq!(
        parse_var_type("[[User]!]!").to_identifier_fragment(),
        "ListOfListOfUserNonNullNonNull",
    );
}

#[test]
fn innermost_type_name_strips_all_wrappers() {
    let annot = parse_var_type("[[User!]]!");
    assert_eq!(annot.innermost_type_name(), "User");
    assert!(!annot.nullable());
    assert!(annot.as_list_annotation().is_some());
    assert!(!annot.innermost_named_type_annotation().nullable());
}

#[test]
fn equivalence_compares_nullability_at_every_level() {
    assert!(parse_var_type("[Int!]").is_equivalent_to(&parse_var_type("[Int!]")));
    assert!(!parse_var_type("[Int!]").is_equivalent_to(&parse_var_type("[Int]")));
    assert!(!parse_var_type("[Int]").is_equivalent_to(&parse_var_type("[Int]!")));
    assert!(!parse_var_type("Int").is_equivalent_to(&parse_var_type("[Int]")));
    assert!(!parse_var_type("Int").is_equivalent_to(&parse_var_type("Float")));
}

#[test]
fn named_types_resolve_against_a_type_graph() {
    let type_graph = TypeGraph::parse("type Query { me: User } type User { id: ID! }").unwrap();

    let user = parse_var_type("[User!]");
    let resolved = user.innermost_named_type_annotation().graphql_type(&type_graph);
    assert!(matches!(resolved, Ok(GraphQLType::Object(obj)) if obj.name() == "User"));

    let int = parse_var_type("Int");
    assert_eq!(
        int.innermost_named_type_annotation().graphql_type(&type_graph),
        Ok(&GraphQLType::Int),
    );

    let missing = parse_var_type("Account");
    assert_eq!(
        missing.innermost_named_type_annotation().graphql_type(&type_graph),
        Err(DerefByNameError::DanglingReference("Account".to_string())),
    );
}
