use crate::operation::FieldSelection;
use crate::operation::FragmentSelection;
use crate::operation::OperationKind;
use crate::operation::OperationTree;
use crate::operation::Selection;
use crate::schema::TypeGraph;
use crate::synthesis::synthesis_context::SynthesisContext;
use crate::synthesis::FieldPrecedence;
use crate::synthesis::SelectedFields;
use crate::synthesis::SynthesisError;
use crate::synthesis::SynthesisOptions;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::FieldKey;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Where a selection sits: the key of its parent and the response path its
/// parent's value is returned under. Fragments contribute to the former but
/// not the latter.
#[derive(Clone, Copy)]
struct ParentPath<'a> {
    field_key: Option<&'a FieldKey>,
    response_path: Option<&'a str>,
}
impl ParentPath<'_> {
    fn response_path_for(&self, response_name: &str) -> String {
        match self.response_path {
            Some(parent) => format!("{parent}.{response_name}"),
            None => response_name.to_string(),
        }
    }
}

/// Builds complete [`OperationTree`]s for the root fields of a [`TypeGraph`].
///
/// Every selectable field beneath the root field is expanded, subject to the
/// depth limit, circular-reference bound, argument allow-list and
/// selected-field shape carried by [`SynthesisOptions`]. Every argument that
/// survives the allow-list is bound to a freshly declared variable.
#[derive(Clone, Copy, Debug)]
pub struct OperationSynthesizer<'graph> {
    type_graph: &'graph TypeGraph,
}
impl<'graph> OperationSynthesizer<'graph> {
    pub fn new(type_graph: &'graph TypeGraph) -> Self {
        Self { type_graph }
    }

    pub fn synthesize(
        &self,
        operation_kind: OperationKind,
        root_field_name: &str,
        options: &SynthesisOptions,
    ) -> Result<OperationTree> {
        let root_type = self.type_graph.root_type(&operation_kind).ok_or(
            SynthesisError::NoRootOperationType {
                operation: operation_kind,
            },
        )?;

        let root_field = root_type.fields().get(root_field_name).ok_or_else(
            || SynthesisError::UnknownField {
                field_name: root_field_name.to_string(),
                type_name: root_type.name().to_string(),
            },
        )?;

        tracing::debug!(
            operation = %operation_kind,
            root_field = root_field_name,
            "synthesizing operation",
        );

        let mut ctx = SynthesisContext::new(options, root_type.name());
        let root_selection = self.synthesize_field(
            &mut ctx,
            ParentPath {
                field_key: None,
                response_path: None,
            },
            root_field,
            &options.selected_fields,
            0,
        )?;

        Ok(OperationTree {
            directives: vec![],
            leading_comments: vec![],
            name: Some(
                options.operation_name
                    .clone()
                    .unwrap_or_else(|| root_field_name.to_string()),
            ),
            operation_kind,
            selections: root_selection.into_iter().map(Selection::Field).collect(),
            variables: ctx.into_variables(),
        })
    }

    /// The single leaf a truncated (or otherwise empty) composite selection
    /// falls back to: `id` when the type has a selectable `id` leaf, else
    /// `__typename`.
    fn identifier_leaf(&self, type_: &GraphQLType, parent_key: &FieldKey) -> FieldSelection {
        let id_field = type_.as_object()
            .and_then(|obj_type| obj_type.fields().get("id"))
            .filter(|field| field.parameters().values().all(|param| !param.is_required()))
            .filter(|field| {
                self.type_graph
                    .lookup_type(field.type_annotation().innermost_type_name())
                    .is_some_and(|type_| type_.is_leaf())
            });

        let (name, description) = match id_field {
            Some(field) => (field.name(), field.description().map(|d| d.to_string())),
            None => ("__typename", None),
        };

        FieldSelection {
            alias: None,
            arguments: IndexMap::new(),
            comments: vec![],
            description,
            directives: vec![],
            field_key: FieldKey::for_field(Some(parent_key), name),
            name: name.to_string(),
            selections: vec![],
        }
    }

    /// An object's own fields merged with the fields of the interfaces it
    /// implements, per `precedence`. The object's field order is kept;
    /// interface-only fields follow it.
    fn merged_fields<'a>(
        &'a self,
        obj_type: &'a ObjectType,
        precedence: FieldPrecedence,
    ) -> IndexMap<&'a str, &'a Field> {
        let mut fields: IndexMap<&str, &Field> = obj_type.fields()
            .iter()
            .map(|(name, field)| (name.as_str(), field))
            .collect();

        for iface in obj_type.interfaces(self.type_graph) {
            for (name, field) in iface.fields() {
                match precedence {
                    FieldPrecedence::InterfaceFields => {
                        fields.insert(name.as_str(), field);
                    },
                    FieldPrecedence::OwnFields => {
                        fields.entry(name.as_str()).or_insert(field);
                    },
                }
            }
        }

        fields
    }

    fn synthesize_field(
        &self,
        ctx: &mut SynthesisContext<'_>,
        parent: ParentPath<'_>,
        field: &Field,
        selected: &SelectedFields,
        depth: usize,
    ) -> Result<Option<FieldSelection>> {
        let is_root = depth == 0;
        if ctx.options.max_depth.is_some_and(|max_depth| depth > max_depth) {
            return Ok(None);
        }

        let field_key = FieldKey::for_field(parent.field_key, field.name());
        let checkpoint = ctx.checkpoint();

        let mut arguments = IndexMap::new();
        for param in field.parameters().values() {
            if !is_root && !ctx.options.allows_argument(&field_key, param.name()) {
                if param.is_required() {
                    tracing::trace!(
                        field_key = field_key.as_str(),
                        argument = param.name(),
                        "dropping field whose required argument is not allowed",
                    );
                    ctx.rollback(checkpoint);
                    return Ok(None);
                }
                continue;
            }

            if is_root
                && !param.is_required()
                && !ctx.options.allows_argument(&field_key, param.name()) {
                continue;
            }

            let base_name = if is_root {
                param.name().to_string()
            } else {
                format!("{}_{}", param.name(), field_key.to_variable_suffix())
            };
            let var_name = ctx.register_variable(
                base_name,
                param.type_annotation(),
                param.default_value(),
            );
            arguments.insert(param.name().to_string(), Value::VarRef(var_name));
        }

        let type_annotation = field.type_annotation();
        let signature = type_annotation.to_string();
        let mut alias = None;
        let mut response_path = parent.response_path_for(field.name());
        if !ctx.claim_response_path(response_path.as_str(), signature.as_str()) {
            let aliased_name = format!(
                "{}_{}",
                field.name(),
                type_annotation.to_identifier_fragment(),
            );
            tracing::trace!(
                field_key = field_key.as_str(),
                alias = aliased_name.as_str(),
                "aliasing field whose response path is taken by another type",
            );
            response_path = parent.response_path_for(aliased_name.as_str());
            ctx.claim_response_path(response_path.as_str(), signature.as_str());
            alias = Some(aliased_name);
        }

        let type_name = type_annotation.innermost_type_name();
        let type_ = self.type_graph.lookup_type(type_name).ok_or_else(
            || SynthesisError::UnknownType {
                referenced_by: field_key.clone(),
                type_name: type_name.to_string(),
            },
        )?;

        let selections = match type_ {
            GraphQLType::InputObject(_) => return Err(SynthesisError::InvalidOutputType {
                field_key,
                kind: type_.kind_name(),
                type_name: type_name.to_string(),
            }),

            _ if type_.is_leaf() => vec![],

            _ => {
                let path = ParentPath {
                    field_key: Some(&field_key),
                    response_path: Some(response_path.as_str()),
                };
                let children = if ctx.ancestor_count(type_name) > ctx.options.circular_reference_bound {
                    tracing::trace!(
                        field_key = field_key.as_str(),
                        type_name,
                        "circular reference bound reached",
                    );
                    match type_ {
                        GraphQLType::Object(_) =>
                            vec![Selection::Field(self.identifier_leaf(type_, &field_key))],
                        _ => {
                            ctx.rollback(checkpoint);
                            return Ok(None);
                        },
                    }
                } else {
                    ctx.push_ancestor(type_name);
                    let children = self.synthesize_children(ctx, path, type_, selected, depth + 1);
                    ctx.pop_ancestor();
                    children?
                };

                if children.is_empty() {
                    if !is_root {
                        tracing::trace!(
                            field_key = field_key.as_str(),
                            "dropping composite field with nothing selected beneath it",
                        );
                        ctx.rollback(checkpoint);
                        return Ok(None);
                    }
                    vec![Selection::Field(self.identifier_leaf(type_, &field_key))]
                } else {
                    children
                }
            },
        };

        Ok(Some(FieldSelection {
            alias,
            arguments,
            comments: vec![],
            description: field.description().map(|d| d.to_string()),
            directives: vec![],
            field_key,
            name: field.name().to_string(),
            selections,
        }))
    }

    fn synthesize_children(
        &self,
        ctx: &mut SynthesisContext<'_>,
        path: ParentPath<'_>,
        type_: &GraphQLType,
        selected: &SelectedFields,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        match type_ {
            GraphQLType::Interface(iface_type) => {
                let implementors = self.type_graph.implementing_types(iface_type.name());
                self.synthesize_fragments(ctx, path, implementors, selected, depth)
            },

            GraphQLType::Object(obj_type) =>
                self.synthesize_object_fields(ctx, path, obj_type, selected, depth),

            GraphQLType::Union(union_type) => {
                let members = union_type.member_types(self.type_graph)
                    .into_iter()
                    .filter_map(|member| member.as_object())
                    .collect();
                self.synthesize_fragments(ctx, path, members, selected, depth)
            },

            _ => Ok(vec![]),
        }
    }

    /// One inline fragment per member type of a union (or implementor of an
    /// interface). Members past the circular-reference bound, and members
    /// that end up with nothing selected, are left out.
    fn synthesize_fragments(
        &self,
        ctx: &mut SynthesisContext<'_>,
        path: ParentPath<'_>,
        members: Vec<&ObjectType>,
        selected: &SelectedFields,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        let mut fragments = vec![];
        for member in members {
            let member_name = member.name();
            if ctx.ancestor_count(member_name) > ctx.options.circular_reference_bound {
                tracing::trace!(
                    member = member_name,
                    "skipping fragment past the circular reference bound",
                );
                continue;
            }
            let Some(member_selected) = selected.child(member_name) else {
                continue;
            };

            let fragment_key = FieldKey::for_fragment(path.field_key, Some(member_name));
            let fragment_path = ParentPath {
                field_key: Some(&fragment_key),
                response_path: path.response_path,
            };

            let checkpoint = ctx.checkpoint();
            ctx.push_ancestor(member_name);
            let children = self.synthesize_object_fields(
                ctx,
                fragment_path,
                member,
                member_selected,
                depth,
            );
            ctx.pop_ancestor();
            let children = children?;

            if children.is_empty() {
                ctx.rollback(checkpoint);
                continue;
            }

            fragments.push(Selection::Fragment(FragmentSelection {
                comments: vec![],
                directives: vec![],
                field_key: fragment_key,
                selections: children,
                type_condition: Some(member_name.to_string()),
            }));
        }
        Ok(fragments)
    }

    fn synthesize_object_fields(
        &self,
        ctx: &mut SynthesisContext<'_>,
        path: ParentPath<'_>,
        obj_type: &ObjectType,
        selected: &SelectedFields,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        let mut selections = vec![];
        for (name, field) in self.merged_fields(obj_type, ctx.options.field_precedence) {
            let Some(field_selected) = selected.child(name) else {
                continue;
            };
            if let Some(field_selection) =
                self.synthesize_field(ctx, path, field, field_selected, depth)? {
                selections.push(Selection::Field(field_selection));
            }
        }
        Ok(selections)
    }
}
