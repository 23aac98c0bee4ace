use crate::operation::OperationKind;
use crate::operation::OperationParseError;
use crate::operation::OperationTree;
use crate::printer::OperationPrinter;
use crate::printer::PrintOptions;
use crate::reconcile::reconcile_tree;
use crate::schema::TypeGraph;
use crate::synthesis::OperationSynthesizer;
use crate::synthesis::SynthesisOptions;

type Result<T> = std::result::Result<T, OperationParseError>;

fn assert_reprints(content: &str) -> Result<()> {
    let tree = OperationTree::from_str(content)?;
    assert_eq!(OperationPrinter::default().print(&tree), content);
    Ok(())
}

#[test]
fn canonical_text_prints_unchanged() -> Result<()> {
    assert_reprints(concat!(
        "query GetUser($id: ID!, $first: Int = 10) @live {\n",
        "  me: user(id: $id) {\n",
        "    handle: name\n",
        "    friends(first: $first) @connection(key: \"friends\") {\n",
        "      id\n",
        "    }\n",
        "    ... on Admin {\n",
        "      level\n",
        "    }\n",
        "    ... @skip(if: true) {\n",
        "      secret\n",
        "    }\n",
        "  }\n",
        "}\n",
    ))
}

#[test]
fn anonymous_operations_with_variables_keep_a_space() -> Result<()> {
    assert_reprints(concat!(
        "subscription ($id: ID!) {\n",
        "  userChanged(id: $id) {\n",
        "    id\n",
        "  }\n",
        "}\n",
    ))
}

#[test]
fn shorthand_queries_print_with_keyword() -> Result<()> {
    let tree = OperationTree::from_str("{ viewer { id } }")?;
    assert_eq!(tree.to_string(), concat!(
        "query {\n",
        "  viewer {\n",
        "    id\n",
        "  }\n",
        "}\n",
    ));
    Ok(())
}

#[test]
fn argument_values_are_normalized() -> Result<()> {
    let tree = OperationTree::from_str(r#"
        query {
          search(text: "say \"hi\"", tags: [A, B], filter: {min: 1.5, max: 2.0, none: null}, exact: false)
        }
    "#)?;
    // Input object fields come back from the parser sorted by name.
    assert_eq!(tree.to_string(), concat!(
        "query {\n",
        "  search(text: \"say \\\"hi\\\"\", tags: [A, B], ",
        "filter: {max: 2.0, min: 1.5, none: null}, exact: false)\n",
        "}\n",
    ));
    Ok(())
}

#[test]
fn comment_blocks_are_reprinted() -> Result<()> {
    assert_reprints(concat!(
        "# Loads the profile page.\n",
        "#\n",
        "# Keep in sync with ProfileHeader.\n",
        "query Profile {\n",
        "  viewer {\n",
        "    # Shown in the header\n",
        "    name\n",
        "    # Only for admins\n",
        "    ... on Admin {\n",
        "      level\n",
        "    }\n",
        "  }\n",
        "}\n",
    ))
}

#[test]
fn indent_is_configurable() -> Result<()> {
    let tree = OperationTree::from_str("query Q { a { b } }")?;
    let printer = OperationPrinter::new(PrintOptions {
        indent: "\t".to_string(),
        ..Default::default()
    });
    assert_eq!(printer.print(&tree), "query Q {\n\ta {\n\t\tb\n\t}\n}\n");
    Ok(())
}

mod descriptions {
    use super::*;

    const SCHEMA: &str = r#"
        type Query {
            "The current user"
            viewer: User
        }
        type User {
            """
            Unique
            and stable
            """
            id: ID!
        }
    "#;

    fn synthesized() -> OperationTree {
        let type_graph = TypeGraph::parse(SCHEMA).unwrap();
        OperationSynthesizer::new(&type_graph)
            .synthesize(OperationKind::Query, "viewer", &SynthesisOptions::default())
            .unwrap()
    }

    #[test]
    fn descriptions_are_omitted_by_default() {
        assert_eq!(synthesized().to_string(), concat!(
            "query viewer {\n",
            "  viewer {\n",
            "    id\n",
            "  }\n",
            "}\n",
        ));
    }

    #[test]
    fn descriptions_print_as_comments_when_requested() {
        let printer = OperationPrinter::new(PrintOptions {
            include_descriptions: true,
            ..Default::default()
        });
        assert_eq!(printer.print(&synthesized()), concat!(
            "query viewer {\n",
            "  # The current user\n",
            "  viewer {\n",
            "    # Unique\n",
            "    # and stable\n",
            "    id\n",
            "  }\n",
            "}\n",
        ));
    }

    #[test]
    fn source_comments_take_precedence_over_descriptions() -> Result<()> {
        let local = OperationTree::from_str(concat!(
            "query viewer {\n",
            "  # Who is looking\n",
            "  viewer {\n",
            "    id\n",
            "  }\n",
            "}\n",
        ))?;
        let merged = reconcile_tree(&local, &synthesized()).unwrap();

        let printer = OperationPrinter::new(PrintOptions {
            include_descriptions: true,
            ..Default::default()
        });
        assert_eq!(printer.print(&merged), concat!(
            "query viewer {\n",
            "  # Who is looking\n",
            "  viewer {\n",
            "    # Unique\n",
            "    # and stable\n",
            "    id\n",
            "  }\n",
            "}\n",
        ));
        Ok(())
    }
}
