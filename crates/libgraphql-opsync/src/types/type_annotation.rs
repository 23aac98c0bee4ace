use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`VariableDef`](crate::operation::VariableDef).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_ast_type_impl(
                        inner,
                        true,
                    )),
                    nullable,
                }),

            ast::operation::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(name),
                }),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// The name of the underlying named type once all list and non-null
    /// wrappers are stripped away.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Check if two type annotations are definitionally equal (same list/named
    /// structure, same nullability at each level, same innermost type name).
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// Render this annotation as a string that is usable as part of a GraphQL
    /// name: `[Int!]` becomes `ListOfIntNonNull`.
    pub fn to_identifier_fragment(&self) -> String {
        let (inner, nullable) = match self {
            Self::List(list_annot) => (
                format!("ListOf{}", list_annot.inner_type_annotation().to_identifier_fragment()),
                list_annot.nullable(),
            ),
            Self::Named(named_annot) => (
                named_annot.graphql_type_name().to_string(),
                named_annot.nullable(),
            ),
        };
        if nullable {
            inner
        } else {
            format!("{inner}NonNull")
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
