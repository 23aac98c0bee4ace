use crate::operation::OperationKind;
use crate::operation::OperationParseError;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::FieldKey;
use crate::Value;

type Result<T> = std::result::Result<T, OperationParseError>;

#[test]
fn parses_header_and_variables() -> Result<()> {
    let tree = OperationTree::from_str(r#"
        query GetUser($id: ID!, $first: Int = 10) @live {
          user(id: $id) {
            name
          }
        }
    "#)?;

    assert_eq!(tree.operation_kind(), OperationKind::Query);
    assert_eq!(tree.name(), Some("GetUser"));
    assert_eq!(tree.directives().len(), 1);
    assert_eq!(tree.directives()[0].name(), "live");

    let var_names = tree.variables().iter().map(|v| v.name()).collect::<Vec<_>>();
    assert_eq!(var_names, vec!["id", "first"]);
    assert_eq!(tree.variables()[0].type_annotation().to_string(), "ID!");
    assert_eq!(tree.variables()[1].default_value(), Some(&Value::Int(10)));

    Ok(())
}

#[test]
fn anonymous_shorthand_is_a_query() -> Result<()> {
    let tree = OperationTree::from_str("{ viewer { id } }")?;
    assert_eq!(tree.operation_kind(), OperationKind::Query);
    assert_eq!(tree.name(), None);
    assert_eq!(tree.root_fields().map(|f| f.name()).collect::<Vec<_>>(), vec!["viewer"]);
    Ok(())
}

#[test]
fn field_keys_use_names_not_aliases() -> Result<()> {
    let tree = OperationTree::from_str(r#"
        mutation {
          me: user(id: 1) {
            handle: name
            ... on Admin {
              level
            }
          }
        }
    "#)?;

    assert_eq!(tree.operation_kind(), OperationKind::Mutation);
    assert_eq!(
        tree.field_keys().iter().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["user", "user.name", "user.[Admin]", "user.[Admin].level"],
    );

    let user = tree.root_fields().next().unwrap();
    assert_eq!(user.alias(), Some("me"));
    assert_eq!(user.response_name(), "me");
    assert_eq!(user.arguments().get("id"), Some(&Value::Int(1)));

    match tree.find(&FieldKey::from("user.[Admin]")) {
        Some(Selection::Fragment(fragment)) => {
            assert_eq!(fragment.type_condition(), Some("Admin"));
        },
        other => panic!("Expected a fragment, got {other:?}"),
    }

    Ok(())
}

#[test]
fn comment_blocks_attach_to_the_following_node() -> Result<()> {
    let tree = OperationTree::from_str(concat!(
        "# Fetches the viewer\n",
        "#\n",
        "#   indented\n",
        "query Viewer {\n",
        "  viewer {\n",
        "    # primary key\n",
        "    id\n",
        "\n",
        "    # not attached: blank line below\n",
        "\n",
        "    name\n",
        "  }\n",
        "}\n",
    ))?;

    assert_eq!(tree.leading_comments(), &["Fetches the viewer", "", "  indented"]);

    let viewer = tree.root_fields().next().unwrap();
    assert!(viewer.comments().is_empty());
    assert_eq!(viewer.selections()[0].comments(), &["primary key"]);
    assert!(viewer.selections()[1].comments().is_empty());

    Ok(())
}

#[test]
fn nodes_sharing_a_line_do_not_inherit_its_comment_block() -> Result<()> {
    let tree = OperationTree::from_str(concat!(
        "# Fetches a user\n",
        "query GetUser($id: ID!) { user(id: $id) { id name } }\n",
    ))?;

    assert_eq!(tree.leading_comments(), &["Fetches a user"]);

    let user = tree.root_fields().next().unwrap();
    assert!(user.comments().is_empty());
    assert!(user.selections().iter().all(|selection| selection.comments().is_empty()));
    assert_eq!(tree.to_string().matches("# Fetches a user").count(), 1);

    Ok(())
}

#[test]
fn tree_without_comments_has_none() -> Result<()> {
    let tree = OperationTree::from_str("query { a }")?;
    assert!(tree.leading_comments().is_empty());
    Ok(())
}

mod errors {
    use super::*;

    #[test]
    fn empty_document_is_a_parse_error() {
        assert!(matches!(
            OperationTree::from_str(""),
            Err(OperationParseError::ParseError { file_path: None, .. }),
        ));
    }

    #[test]
    fn multiple_operations_error() {
        assert_eq!(
            OperationTree::from_str("query A { a } query B { b }"),
            Err(OperationParseError::MultipleOperations { num_operations_found: 2 }),
        );
    }

    #[test]
    fn fragment_definitions_error() {
        assert_eq!(
            OperationTree::from_str("query A { a } fragment F on Query { a }"),
            Err(OperationParseError::FragmentDefinitionsNotSupported),
        );
    }

    #[test]
    fn named_fragment_spreads_error() {
        match OperationTree::from_str("query A {\n  ...F\n}") {
            Err(OperationParseError::NamedFragmentSpreadNotSupported {
                fragment_name,
                location,
            }) => {
                assert_eq!(fragment_name, "F");
                assert_eq!(location.line, 2);
            },
            other => panic!("Expected NamedFragmentSpreadNotSupported, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_variable_names_error() {
        assert!(matches!(
            OperationTree::from_str("query A($a: Int, $a: String) { a }"),
            Err(OperationParseError::DuplicateVariableName { ref variable_name, .. })
                if variable_name == "a",
        ));
    }

    #[test]
    fn missing_file_errors() {
        assert!(matches!(
            OperationTree::from_file("/definitely/not/a/real/file.graphql"),
            Err(OperationParseError::OperationFileReadError(_)),
        ));
    }
}
