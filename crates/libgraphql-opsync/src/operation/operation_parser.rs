use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FragmentSelection;
use crate::operation::OperationKind;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::operation::VariableDef;
use crate::types::TypeAnnotation;
use crate::FieldKey;
use crate::Value;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationParseError>;

struct OperationHeader<'ast> {
    directives: &'ast [ast::operation::Directive],
    kind: OperationKind,
    name: Option<&'ast String>,
    pos: ast::AstPos,
    selection_set: &'ast ast::operation::SelectionSet,
    variables: &'ast [ast::operation::VariableDefinition],
}

/// Turns operation text into an [`OperationTree`], computing a
/// [`FieldKey`] for every selection and attaching the `#` comment block that
/// sits directly above each one.
pub(super) struct OperationParser<'src> {
    content: &'src str,
    file_path: Option<&'src Path>,
    source_lines: Vec<&'src str>,
}
impl<'src> OperationParser<'src> {
    pub fn new(content: &'src str, file_path: Option<&'src Path>) -> Self {
        Self {
            content,
            file_path,
            source_lines: content.lines().collect(),
        }
    }

    pub fn parse(self) -> Result<OperationTree> {
        let ast_doc = ast::operation::parse(self.content)
            .map_err(|err| OperationParseError::ParseError {
                file_path: self.file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        let mut op_defs = vec![];
        for def in &ast_doc.definitions {
            match def {
                ast::operation::Definition::Operation(op_def) => op_defs.push(op_def),
                ast::operation::Definition::Fragment(_) =>
                    return Err(OperationParseError::FragmentDefinitionsNotSupported),
            }
        }

        let op_def = match op_defs.as_slice() {
            [] => return Err(OperationParseError::NoOperations),
            [op_def] => *op_def,
            _ => return Err(OperationParseError::MultipleOperations {
                num_operations_found: op_defs.len(),
            }),
        };

        let header = Self::header_from_ast(op_def);

        let mut variables: Vec<VariableDef> = vec![];
        for ast_var_def in header.variables {
            if variables.iter().any(|var_def| var_def.name == ast_var_def.name) {
                return Err(OperationParseError::DuplicateVariableName {
                    location: self.file_position(ast_var_def.position),
                    variable_name: ast_var_def.name.to_string(),
                });
            }

            variables.push(VariableDef {
                default_value: ast_var_def.default_value.as_ref().map(Value::from_ast),
                name: ast_var_def.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(&ast_var_def.var_type),
            });
        }

        Ok(OperationTree {
            directives: DirectiveAnnotation::from_ast(header.directives),
            leading_comments: self.comments_above(header.pos),
            name: header.name.cloned(),
            operation_kind: header.kind,
            selections: self.selections_from_ast(None, header.selection_set)?,
            variables,
        })
    }

    /// The contiguous block of `#` lines ending on the line directly above
    /// `pos`, in source order, with the `#` (and one following space)
    /// stripped.
    ///
    /// A node that shares its line with an earlier token has no block of its
    /// own; any comment above that line belongs to the earlier token.
    fn comments_above(&self, pos: ast::AstPos) -> Vec<String> {
        let mut comments = vec![];
        let starts_line = pos.line.checked_sub(1)
            .and_then(|idx| self.source_lines.get(idx))
            .is_some_and(|line| line
                .chars()
                .take(pos.column.saturating_sub(1))
                .all(char::is_whitespace));
        if !starts_line {
            return comments;
        }

        // `pos.line` is 1-based, so the line above sits at index `line - 2`.
        let mut line_idx = pos.line.checked_sub(2);
        while let Some(idx) = line_idx {
            let Some(comment) = self.source_lines
                .get(idx)
                .and_then(|line| line.trim().strip_prefix('#')) else {
                break;
            };
            comments.push(comment.strip_prefix(' ').unwrap_or(comment).to_string());
            line_idx = idx.checked_sub(1);
        }
        comments.reverse();
        comments
    }

    fn file_position(&self, pos: ast::AstPos) -> loc::FilePosition {
        loc::FilePosition::from_pos(self.file_path, pos)
    }

    fn header_from_ast(op_def: &ast::operation::OperationDefinition) -> OperationHeader<'_> {
        use ast::operation::OperationDefinition;
        match op_def {
            OperationDefinition::SelectionSet(selection_set) => OperationHeader {
                directives: &[],
                kind: OperationKind::Query,
                name: None,
                pos: selection_set.span.0,
                selection_set,
                variables: &[],
            },

            OperationDefinition::Query(ast::operation::Query {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
                ..
            }) => OperationHeader {
                directives,
                kind: OperationKind::Query,
                name: name.as_ref(),
                pos: *position,
                selection_set,
                variables: variable_definitions,
            },

            OperationDefinition::Mutation(ast::operation::Mutation {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
                ..
            }) => OperationHeader {
                directives,
                kind: OperationKind::Mutation,
                name: name.as_ref(),
                pos: *position,
                selection_set,
                variables: variable_definitions,
            },

            OperationDefinition::Subscription(ast::operation::Subscription {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
                ..
            }) => OperationHeader {
                directives,
                kind: OperationKind::Subscription,
                name: name.as_ref(),
                pos: *position,
                selection_set,
                variables: variable_definitions,
            },
        }
    }

    fn selections_from_ast(
        &self,
        parent_key: Option<&FieldKey>,
        selection_set: &ast::operation::SelectionSet,
    ) -> Result<Vec<Selection>> {
        let mut selections = Vec::with_capacity(selection_set.items.len());
        for ast_selection in &selection_set.items {
            selections.push(match ast_selection {
                ast::operation::Selection::Field(ast_field) => {
                    let field_key = FieldKey::for_field(parent_key, ast_field.name.as_str());
                    Selection::Field(FieldSelection {
                        alias: ast_field.alias.clone(),
                        arguments: ast_field.arguments.iter().map(|(arg_name, ast_value)| (
                            arg_name.to_string(),
                            Value::from_ast(ast_value),
                        )).collect(),
                        comments: self.comments_above(ast_field.position),
                        description: None,
                        directives: DirectiveAnnotation::from_ast(&ast_field.directives),
                        selections: self.selections_from_ast(
                            Some(&field_key),
                            &ast_field.selection_set,
                        )?,
                        field_key,
                        name: ast_field.name.to_string(),
                    })
                },

                ast::operation::Selection::InlineFragment(ast_fragment) => {
                    let type_condition = ast_fragment.type_condition.as_ref().map(
                        |ast::operation::TypeCondition::On(type_name)| type_name.to_string(),
                    );
                    let field_key = FieldKey::for_fragment(parent_key, type_condition.as_deref());
                    Selection::Fragment(FragmentSelection {
                        comments: self.comments_above(ast_fragment.position),
                        directives: DirectiveAnnotation::from_ast(&ast_fragment.directives),
                        selections: self.selections_from_ast(
                            Some(&field_key),
                            &ast_fragment.selection_set,
                        )?,
                        field_key,
                        type_condition,
                    })
                },

                ast::operation::Selection::FragmentSpread(ast_spread) =>
                    return Err(OperationParseError::NamedFragmentSpreadNotSupported {
                        fragment_name: ast_spread.fragment_name.to_string(),
                        location: self.file_position(ast_spread.position),
                    }),
            });
        }
        Ok(selections)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationParseError {
    #[error("Variable `${variable_name}` is defined more than once (at {location})")]
    DuplicateVariableName {
        location: loc::FilePosition,
        variable_name: String,
    },

    #[error("Fragment definitions are not supported in operation documents")]
    FragmentDefinitionsNotSupported,

    #[error("Expected exactly one operation, found {num_operations_found}")]
    MultipleOperations {
        num_operations_found: usize,
    },

    #[error(
        "Named fragment spread `...{fragment_name}` at {location} is not \
        supported; use an inline fragment instead"
    )]
    NamedFragmentSpreadNotSupported {
        fragment_name: String,
        location: loc::FilePosition,
    },

    #[error("No operations found in document")]
    NoOperations,

    #[error("Failed to read operation file: {0}")]
    OperationFileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing operation{}: {err}", file_path.as_ref().map(|p| format!(" in {p:?}")).unwrap_or_default())]
    ParseError {
        file_path: Option<PathBuf>,
        err: String,
    },
}
